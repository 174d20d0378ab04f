//! Keyword cloud placement.
//!
//! The engine is a greedy, order-dependent heuristic: the top keyword sits in
//! the middle of the canvas and every later keyword walks an outward spiral
//! until its box fits inside the padded canvas without crowding any box placed
//! before it. Keywords that exhaust the attempt budget are dropped. It does not
//! promise an optimal or even complete packing; dense inputs just come back
//! sparser.

mod geometry;
mod spiral;
mod text;

pub use geometry::Rect;
pub use text::{estimate_box, font_size_for};

use crate::config::CloudConfig;
use crate::ir::KeywordStat;
use serde::Serialize;
use spiral::Spiral;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedKeyword {
    pub keyword: KeywordStat,
    pub x: f64,
    pub y: f64,
    pub font_size: f64,
}

impl PlacedKeyword {
    /// The estimated box this placement was accepted with.
    pub fn bounds(&self, config: &CloudConfig) -> Rect {
        let (width, height) = estimate_box(&self.keyword.keyword, self.font_size, config);
        Rect::new(self.x, self.y, width, height)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CloudLayout {
    pub placed: Vec<PlacedKeyword>,
    /// Inputs that found no position, in input order.
    pub dropped: Vec<KeywordStat>,
    pub width: f64,
    pub height: f64,
}

/// Lays out `keywords` with the default canvas.
pub fn layout(keywords: &[KeywordStat]) -> Vec<PlacedKeyword> {
    compute_layout(keywords, &CloudConfig::default()).placed
}

pub fn compute_layout(keywords: &[KeywordStat], config: &CloudConfig) -> CloudLayout {
    let max_count = keywords
        .iter()
        .map(|stat| stat.count)
        .max()
        .unwrap_or(0)
        .max(1);
    let center_x = config.width / 2.0;
    let center_y = config.height / 2.0;

    let mut placed: Vec<PlacedKeyword> = Vec::with_capacity(keywords.len());
    let mut occupied: Vec<Rect> = Vec::with_capacity(keywords.len());
    let mut dropped = Vec::new();

    for (rank, stat) in keywords.iter().enumerate() {
        let font_size = font_size_for(stat.count, max_count, config);
        let (width, height) = estimate_box(&stat.keyword, font_size, config);

        let slot = if rank == 0 {
            let candidate = Rect::centered_at(center_x, center_y, width, height);
            in_canvas(&candidate, config).then_some(candidate)
        } else {
            Spiral::new(center_x, center_y, config)
                .map(|(px, py)| Rect::new(px - width / 2.0, py - height / 2.0, width, height))
                .find(|candidate| {
                    in_canvas(candidate, config)
                        && !occupied
                            .iter()
                            .any(|other| candidate.overlaps_with_margin(other, config.margin))
                })
        };

        match slot {
            Some(rect) => {
                tracing::trace!(
                    keyword = %stat.keyword,
                    rank,
                    x = rect.x,
                    y = rect.y,
                    font_size,
                    "placed keyword"
                );
                occupied.push(rect);
                placed.push(PlacedKeyword {
                    keyword: stat.clone(),
                    x: rect.x,
                    y: rect.y,
                    font_size,
                });
            }
            None => {
                tracing::debug!(
                    keyword = %stat.keyword,
                    rank,
                    width,
                    height,
                    attempts = config.max_attempts,
                    "no free slot for keyword, dropping"
                );
                dropped.push(stat.clone());
            }
        }
    }

    CloudLayout {
        placed,
        dropped,
        width: config.width,
        height: config.height,
    }
}

fn in_canvas(rect: &Rect, config: &CloudConfig) -> bool {
    rect.within(
        config.padding,
        config.padding,
        config.width - config.padding,
        config.height - config.padding,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(keyword: &str, count: u64) -> KeywordStat {
        KeywordStat::new(keyword, count)
    }

    fn dashboard_keywords() -> Vec<KeywordStat> {
        vec![
            stat("랜섬웨어", 120),
            stat("해킹", 96),
            stat("개인정보", 75),
            stat("피싱", 61),
            stat("CVE", 44),
            stat("악성코드", 30),
            stat("DDoS", 18),
            stat("제로데이", 9),
        ]
    }

    fn assert_invariants(layout: &CloudLayout, config: &CloudConfig) {
        for (i, a) in layout.placed.iter().enumerate() {
            let ra = a.bounds(config);
            assert!(
                ra.within(
                    config.padding,
                    config.padding,
                    config.width - config.padding,
                    config.height - config.padding
                ),
                "{} escapes the canvas: {:?}",
                a.keyword.keyword,
                ra
            );
            for b in layout.placed.iter().skip(i + 1) {
                let rb = b.bounds(config);
                assert!(
                    !ra.overlaps_with_margin(&rb, config.margin),
                    "{} and {} overlap",
                    a.keyword.keyword,
                    b.keyword.keyword
                );
            }
        }
    }

    #[test]
    fn empty_input_yields_empty_layout() {
        assert!(layout(&[]).is_empty());
        let result = compute_layout(&[], &CloudConfig::default());
        assert!(result.dropped.is_empty());
        assert_eq!(result.width, 500.0);
        assert_eq!(result.height, 280.0);
    }

    #[test]
    fn single_keyword_is_centered() {
        let placed = layout(&[stat("x", 5)]);
        assert_eq!(placed.len(), 1);
        let entry = &placed[0];
        assert_eq!(entry.font_size, 32.0);
        let box_width = 1.0 * 32.0 * 0.7;
        let box_height = 32.0 * 1.5;
        assert!((entry.x - (250.0 - box_width / 2.0)).abs() < 1e-9);
        assert!((entry.y - (140.0 - box_height / 2.0)).abs() < 1e-9);
    }

    #[test]
    fn zero_counts_use_minimum_font() {
        let placed = layout(&[stat("a", 0), stat("b", 0)]);
        assert_eq!(placed.len(), 2);
        assert!(placed.iter().all(|entry| entry.font_size == 12.0));
    }

    #[test]
    fn second_keyword_takes_first_free_spiral_point() {
        let placed = layout(&[stat("a", 0), stat("b", 0)]);
        // First spiral point (310, 140) already clears the centered box.
        let (w, h) = (12.0 * 0.7, 12.0 * 1.5);
        assert!((placed[1].x - (310.0 - w / 2.0)).abs() < 1e-9);
        assert!((placed[1].y - (140.0 - h / 2.0)).abs() < 1e-9);
    }

    #[test]
    fn layout_is_deterministic() {
        let keywords = dashboard_keywords();
        assert_eq!(layout(&keywords), layout(&keywords));
    }

    #[test]
    fn placements_never_overlap_or_escape() {
        let config = CloudConfig::default();
        let result = compute_layout(&dashboard_keywords(), &config);
        assert!(result.placed.len() >= 2);
        assert_eq!(result.placed.len() + result.dropped.len(), 8);
        assert_invariants(&result, &config);
    }

    #[test]
    fn output_keeps_input_order() {
        let keywords = dashboard_keywords();
        let placed = layout(&keywords);
        let mut cursor = keywords.iter();
        for entry in &placed {
            assert!(cursor.any(|k| *k == entry.keyword), "order broken at {:?}", entry.keyword);
        }
    }

    #[test]
    fn higher_counts_never_render_smaller() {
        let placed = layout(&dashboard_keywords());
        for a in &placed {
            for b in &placed {
                if a.keyword.count > b.keyword.count {
                    assert!(a.font_size >= b.font_size);
                }
            }
        }
    }

    #[test]
    fn oversized_keywords_degrade_gracefully() {
        let config = CloudConfig::default();
        let long = "a".repeat(30);
        let keywords: Vec<KeywordStat> = (0..8).map(|_| stat(&long, 100)).collect();
        let result = compute_layout(&keywords, &config);
        // 30 chars at 32px is 672px wide against 460px of usable width.
        assert!(result.placed.is_empty());
        assert_eq!(result.dropped.len(), 8);
        assert_invariants(&result, &config);
    }

    #[test]
    fn oversized_leader_is_dropped_but_followers_still_place() {
        let long = "a".repeat(30);
        let result = compute_layout(&[stat(&long, 100), stat("b", 50)], &CloudConfig::default());
        assert_eq!(result.dropped, vec![stat(&long, 100)]);
        assert_eq!(result.placed.len(), 1);
        let follower = &result.placed[0];
        assert_eq!(follower.keyword, stat("b", 50));
        assert_eq!(follower.font_size, 22.0);
        // First spiral point (310, 140) minus half of the 15.4 x 33 box.
        assert!((follower.x - 302.3).abs() < 1e-9);
        assert!((follower.y - 123.5).abs() < 1e-9);
    }

    #[test]
    fn crowded_input_drops_instead_of_overlapping() {
        let config = CloudConfig::default();
        let keywords: Vec<KeywordStat> = (0..30)
            .map(|i| stat(&format!("keyword{i}"), 100 - i))
            .collect();
        let result = compute_layout(&keywords, &config);
        assert!(!result.dropped.is_empty());
        assert!(!result.placed.is_empty());
        assert_invariants(&result, &config);
    }

    #[test]
    fn duplicates_are_placed_independently() {
        let placed = layout(&[stat("a", 3), stat("a", 3)]);
        assert_eq!(placed.len(), 2);
        assert_ne!((placed[0].x, placed[0].y), (placed[1].x, placed[1].y));
    }

    #[test]
    fn larger_canvas_fits_everything() {
        let config = CloudConfig {
            width: 1600.0,
            height: 900.0,
            ..CloudConfig::default()
        };
        let result = compute_layout(&dashboard_keywords(), &config);
        assert!(result.dropped.is_empty());
        assert_invariants(&result, &config);
    }
}
