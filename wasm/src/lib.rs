use keyword_cloud::{LayoutDump, RenderOptions, Theme, layout_with_options, render_with_options};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CloudRenderOptions {
    theme: Option<String>,
    width: Option<f64>,
    height: Option<f64>,
    top_n: Option<usize>,
    font_family: Option<String>,
}

fn build_render_options(options: CloudRenderOptions) -> Result<RenderOptions, String> {
    let mut render_options = RenderOptions::default();
    if let Some(name) = options.theme.as_deref() {
        render_options.theme = Theme::by_name(name).ok_or_else(|| format!("Unknown theme: {name}"))?;
    }
    if let Some(font_family) = options.font_family {
        render_options.theme.font_family = font_family;
    }
    if let Some(width) = options.width {
        render_options.cloud.width = width;
    }
    if let Some(height) = options.height {
        render_options.cloud.height = height;
    }
    if let Some(top_n) = options.top_n {
        render_options.cloud.top_n = top_n;
    }
    Ok(render_options)
}

fn parse_options(options_json: Option<String>) -> Result<RenderOptions, String> {
    let options = match options_json {
        Some(raw_options) => serde_json::from_str::<CloudRenderOptions>(&raw_options)
            .map_err(|error| error.to_string())?,
        None => CloudRenderOptions::default(),
    };
    build_render_options(options)
}

fn layout_json(keywords: &str, options_json: Option<String>) -> Result<String, String> {
    let options = parse_options(options_json)?;
    let layout = layout_with_options(keywords, &options).map_err(|error| error.to_string())?;
    serde_json::to_string(&LayoutDump::from_layout(&layout, &options.cloud))
        .map_err(|error| error.to_string())
}

/// Returns the placements as JSON (`{ width, height, keywords, dropped }`).
#[wasm_bindgen]
pub fn layout_keywords(keywords: &str, options_json: Option<String>) -> Result<String, JsValue> {
    layout_json(keywords, options_json).map_err(|error| JsValue::from_str(&error))
}

#[wasm_bindgen]
pub fn render_keyword_cloud_svg(keywords: &str, options_json: Option<String>) -> Result<String, JsValue> {
    let options = parse_options(options_json).map_err(|error| JsValue::from_str(&error))?;
    render_with_options(keywords, options).map_err(|error| JsValue::from_str(&error.to_string()))
}
