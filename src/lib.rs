pub mod carousel;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod ir;
pub mod layout;
pub mod layout_dump;
#[cfg(feature = "cli")]
pub mod logging;
pub mod render;
pub mod theme;

#[cfg(feature = "cli")]
pub use cli::run;
pub use carousel::{Carousel, Selection, shortest_rotation};
pub use config::{CarouselConfig, CloudConfig, Config, load_config, parse_config};
pub use ir::{KeywordStat, parse_keywords, rank_keywords, related_keywords, summarize};
pub use layout::{CloudLayout, PlacedKeyword, compute_layout, layout};
pub use layout_dump::LayoutDump;
pub use render::render_svg;
pub use theme::Theme;

/// Everything needed to go from raw keyword input to output in one call.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub theme: Theme,
    pub cloud: CloudConfig,
}

impl RenderOptions {
    pub fn light() -> Self {
        Self::default()
    }

    pub fn dark() -> Self {
        Self {
            theme: Theme::dark(),
            cloud: CloudConfig::default(),
        }
    }
}

/// Parses, ranks to `cloud.top_n` and lays out `input`.
pub fn layout_with_options(input: &str, options: &RenderOptions) -> anyhow::Result<CloudLayout> {
    let stats = parse_keywords(input)?;
    let ranked = rank_keywords(&stats, options.cloud.top_n);
    Ok(compute_layout(&ranked, &options.cloud))
}

pub fn render_with_options(input: &str, options: RenderOptions) -> anyhow::Result<String> {
    let layout = layout_with_options(input, &options)?;
    Ok(render_svg(&layout, &options.theme))
}
