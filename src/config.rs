use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Canvas geometry and placement constants for the keyword cloud.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloudConfig {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub min_font_size: f64,
    pub max_font_size: f64,
    /// Minimum gap kept between two keyword boxes.
    pub margin: f64,
    pub max_attempts: usize,
    pub spiral_angle_step: f64,
    pub spiral_base_radius: f64,
    pub spiral_radius_step: f64,
    /// Squashes the spiral vertically to match the wide canvas.
    pub spiral_vertical_scale: f64,
    pub glyph_width_factor: f64,
    pub line_height_factor: f64,
    /// How many top-ranked keywords callers feed into the layout.
    pub top_n: usize,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            width: 500.0,
            height: 280.0,
            padding: 20.0,
            min_font_size: 12.0,
            max_font_size: 32.0,
            margin: 20.0,
            max_attempts: 200,
            spiral_angle_step: 0.5,
            spiral_base_radius: 60.0,
            spiral_radius_step: 4.0,
            spiral_vertical_scale: 0.7,
            glyph_width_factor: 0.7,
            line_height_factor: 1.5,
            top_n: 8,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Degrees of rotation per pixel dragged.
    pub drag_sensitivity: f64,
    /// Degrees of rotation per wheel delta unit.
    pub wheel_sensitivity: f64,
    pub radius: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            drag_sensitivity: 0.5,
            wheel_sensitivity: 0.1,
            radius: 450.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 500.0,
            height: 280.0,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub theme: Theme,
    pub cloud: CloudConfig,
    pub carousel: CarouselConfig,
    pub render: RenderConfig,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct ThemeVariables {
    font_family: Option<String>,
    font_weight: Option<u16>,
    background: Option<String>,
    palette: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct CloudConfigFile {
    width: Option<f64>,
    height: Option<f64>,
    padding: Option<f64>,
    min_font_size: Option<f64>,
    max_font_size: Option<f64>,
    margin: Option<f64>,
    max_attempts: Option<usize>,
    spiral_angle_step: Option<f64>,
    spiral_base_radius: Option<f64>,
    spiral_radius_step: Option<f64>,
    spiral_vertical_scale: Option<f64>,
    glyph_width_factor: Option<f64>,
    line_height_factor: Option<f64>,
    top_n: Option<usize>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct CarouselConfigFile {
    drag_sensitivity: Option<f64>,
    wheel_sensitivity: Option<f64>,
    radius: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    theme: Option<String>,
    theme_variables: Option<ThemeVariables>,
    cloud: Option<CloudConfigFile>,
    carousel: Option<CarouselConfigFile>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents)
}

/// Parses a JSON (or JSON5) config document over the defaults.
pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let parsed: ConfigFile = json5::from_str(contents)?;

    if let Some(theme_name) = parsed.theme.as_deref() {
        config.theme = Theme::by_name(theme_name)
            .ok_or_else(|| anyhow::anyhow!("Unknown theme: {theme_name}"))?;
    }

    if let Some(vars) = parsed.theme_variables {
        if let Some(v) = vars.font_family {
            config.theme.font_family = v;
        }
        if let Some(v) = vars.font_weight {
            config.theme.font_weight = v;
        }
        if let Some(v) = vars.background {
            config.theme.background = v;
        }
        if let Some(v) = vars.palette {
            config.theme.palette = v;
        }
    }

    if let Some(cloud) = parsed.cloud {
        let c = &mut config.cloud;
        if let Some(v) = cloud.width {
            c.width = v;
        }
        if let Some(v) = cloud.height {
            c.height = v;
        }
        if let Some(v) = cloud.padding {
            c.padding = v;
        }
        if let Some(v) = cloud.min_font_size {
            c.min_font_size = v;
        }
        if let Some(v) = cloud.max_font_size {
            c.max_font_size = v;
        }
        if let Some(v) = cloud.margin {
            c.margin = v;
        }
        if let Some(v) = cloud.max_attempts {
            c.max_attempts = v;
        }
        if let Some(v) = cloud.spiral_angle_step {
            c.spiral_angle_step = v;
        }
        if let Some(v) = cloud.spiral_base_radius {
            c.spiral_base_radius = v;
        }
        if let Some(v) = cloud.spiral_radius_step {
            c.spiral_radius_step = v;
        }
        if let Some(v) = cloud.spiral_vertical_scale {
            c.spiral_vertical_scale = v;
        }
        if let Some(v) = cloud.glyph_width_factor {
            c.glyph_width_factor = v;
        }
        if let Some(v) = cloud.line_height_factor {
            c.line_height_factor = v;
        }
        if let Some(v) = cloud.top_n {
            c.top_n = v;
        }
    }

    if let Some(carousel) = parsed.carousel {
        if let Some(v) = carousel.drag_sensitivity {
            config.carousel.drag_sensitivity = v;
        }
        if let Some(v) = carousel.wheel_sensitivity {
            config.carousel.wheel_sensitivity = v;
        }
        if let Some(v) = carousel.radius {
            config.carousel.radius = v;
        }
    }

    config.render.width = config.cloud.width as f32;
    config.render.height = config.cloud.height as f32;
    Ok(config)
}
