use std::path::Path;

use keyword_cloud::{
    CloudConfig, CloudLayout, LayoutDump, RenderOptions, Theme, compute_layout, parse_keywords,
    rank_keywords, render_svg, render_with_options,
};

fn assert_valid_svg(svg: &str, fixture: &str) {
    assert!(svg.contains("<svg"), "{fixture}: missing <svg tag");
    assert!(svg.contains("</svg>"), "{fixture}: missing </svg tag");
}

fn assert_layout_invariants(layout: &CloudLayout, config: &CloudConfig, fixture: &str) {
    let boxes: Vec<_> = layout.placed.iter().map(|entry| entry.bounds(config)).collect();
    for (i, a) in boxes.iter().enumerate() {
        assert!(
            a.within(
                config.padding,
                config.padding,
                config.width - config.padding,
                config.height - config.padding
            ),
            "{fixture}: box {i} leaves the canvas"
        );
        for (j, b) in boxes.iter().enumerate().skip(i + 1) {
            assert!(
                !a.overlaps_with_margin(b, config.margin),
                "{fixture}: boxes {i} and {j} overlap"
            );
        }
    }
}

fn layout_fixture(path: &Path, config: &CloudConfig) -> CloudLayout {
    let input = std::fs::read_to_string(path).expect("fixture read failed");
    let stats = parse_keywords(&input).expect("parse failed");
    let ranked = rank_keywords(&stats, config.top_n);
    compute_layout(&ranked, config)
}

#[test]
fn render_all_fixtures() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures");
    let config = CloudConfig::default();

    // Keep this list explicit so new fixtures must be added intentionally.
    let candidates = ["popular_keywords.json", "keywords.txt", "oversized.txt"];

    for rel in candidates {
        let path = root.join(rel);
        assert!(path.exists(), "fixture missing: {}", rel);
        let layout = layout_fixture(&path, &config);
        assert!(layout.placed.len() <= config.top_n, "{rel}: more than top_n placed");
        assert_layout_invariants(&layout, &config, rel);
        let svg = render_svg(&layout, &Theme::light());
        assert_valid_svg(&svg, rel);
    }
}

#[test]
fn dashboard_fixture_places_leader_in_center() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/popular_keywords.json");
    let config = CloudConfig::default();
    let layout = layout_fixture(&path, &config);

    let leader = &layout.placed[0];
    assert_eq!(leader.keyword.keyword, "랜섬웨어");
    assert_eq!(leader.font_size, 32.0);
    let bounds = leader.bounds(&config);
    assert!((bounds.x + bounds.width / 2.0 - 250.0).abs() < 1e-9);
    assert!((bounds.y + bounds.height / 2.0 - 140.0).abs() < 1e-9);
    assert_eq!(layout.placed.len() + layout.dropped.len(), 8);
}

#[test]
fn oversized_fixture_degrades_without_error() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/oversized.txt");
    let config = CloudConfig::default();
    let layout = layout_fixture(&path, &config);
    assert!(layout.placed.is_empty());
    assert_eq!(layout.dropped.len(), 8);
    assert_eq!(layout.dropped[0].keyword, "a".repeat(30));
}

#[test]
fn layout_is_reproducible_across_runs() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/popular_keywords.json");
    let config = CloudConfig::default();
    let first = layout_fixture(&path, &config);
    let second = layout_fixture(&path, &config);
    assert_eq!(first, second);
    let a = serde_json::to_string(&LayoutDump::from_layout(&first, &config)).unwrap();
    let b = serde_json::to_string(&LayoutDump::from_layout(&second, &config)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn render_with_options_handles_text_input() {
    let svg = render_with_options("피싱,5\n해킹,9\n", RenderOptions::dark()).unwrap();
    assert_valid_svg(&svg, "inline");
    assert!(svg.contains("해킹"));
    assert!(svg.contains(&Theme::dark().background));
    assert!(render_with_options("not a keyword line", RenderOptions::light()).is_err());
}
