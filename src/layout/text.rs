use crate::config::CloudConfig;

/// Font size interpolated linearly between the configured bounds by
/// `count / max_count`.
pub fn font_size_for(count: u64, max_count: u64, config: &CloudConfig) -> f64 {
    let max_count = max_count.max(1) as f64;
    let ratio = count as f64 / max_count;
    config.min_font_size + (config.max_font_size - config.min_font_size) * ratio
}

/// Glyph-metric estimate of the rendered box; no font is consulted.
///
/// Width counts characters, so a Hangul syllable weighs the same as a Latin
/// letter.
pub fn estimate_box(text: &str, font_size: f64, config: &CloudConfig) -> (f64, f64) {
    let chars = text.chars().count() as f64;
    let width = chars * font_size * config.glyph_width_factor;
    let height = font_size * config.line_height_factor;
    (width, height)
}
