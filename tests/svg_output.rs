//! SVG output tests for the full pipeline
//!
//! SVG text is compared structurally: element counts, classes and key
//! attributes rather than full documents, since coordinates carry
//! floating point noise.

use std::fs;
use std::path::Path;

use cordiform::{
    render, render_with_config, BoundingBox, Color, ProgressState, RenderConfig, ShadowStyle,
    StyleConfig, SvgConfig, TextLabels,
};

fn count(svg: &str, needle: &str) -> usize {
    svg.matches(needle).count()
}

#[test]
fn zero_progress_renders_outline_and_tracks() {
    let svg = render(300.0, 300.0, ProgressState::default());
    assert_eq!(count(&svg, "<path class=\"cf-outline\""), 1);
    assert_eq!(count(&svg, "class=\"cf-line\""), 2);
    assert_eq!(count(&svg, "class=\"cf-arc\""), 3);
    assert_eq!(count(&svg, "<circle"), 0);
    assert_eq!(count(&svg, "<filter"), 0);
}

#[test]
fn full_progress_renders_foregrounds_and_seam() {
    let svg = render(300.0, 300.0, ProgressState::new(100, 100, 100));
    assert_eq!(count(&svg, "class=\"cf-line\""), 4);
    assert_eq!(count(&svg, "class=\"cf-arc\""), 6);
    assert_eq!(count(&svg, "<circle class=\"cf-seam\""), 1);
    // Only the bottom rounding arc is rendered without anti-aliasing
    assert_eq!(count(&svg, "shape-rendering=\"crispEdges\""), 2);
}

#[test]
fn default_colours_appear_in_output() {
    let svg = render(300.0, 300.0, ProgressState::new(50, 50, 50));
    assert!(svg.contains("stroke=\"#ff6f91\""));
    assert!(svg.contains("stroke=\"#ff9671\""));
    assert!(svg.contains("stroke=\"#845ec2\""));
    assert!(svg.contains("stroke=\"#888888\""));
}

#[test]
fn shadow_adds_filter() {
    let style = StyleConfig::default().with_shadow(ShadowStyle {
        radius: 6.0,
        dx: 1.0,
        dy: 2.0,
        color: Color::argb(0x80, 0, 0, 0),
    });
    let config = RenderConfig::new().with_style(style);
    let svg = render_with_config(
        &BoundingBox::new(300.0, 300.0),
        &ProgressState::default(),
        &config,
    );
    assert!(svg.contains("<feDropShadow dx=\"1\" dy=\"2\" stdDeviation=\"3\""));
    assert!(svg.contains("flood-opacity=\"0.5\""));
    assert!(svg.contains("filter=\"url(#cf-shadow-0)\""));
}

#[test]
fn labels_render_as_text_paths() {
    let style = StyleConfig::default().with_labels(TextLabels {
        left_inner: Some("Sleep".into()),
        right_inner: Some("Move".into()),
        bottom_inner: Some("Focus".into()),
        left_outer: Some("8h".into()),
        right_outer: Some("10k".into()),
        bottom_outer: Some("<4h>".into()),
    });
    let config = RenderConfig::new().with_style(style);
    let svg = render_with_config(
        &BoundingBox::new(300.0, 300.0),
        &ProgressState::default(),
        &config,
    );
    assert_eq!(count(&svg, "<textPath"), 6);
    assert_eq!(count(&svg, "text-anchor=\"middle\""), 3);
    assert_eq!(count(&svg, "text-anchor=\"end\""), 1);
    assert_eq!(count(&svg, "text-anchor=\"start\""), 2);
    assert!(svg.contains("&lt;4h&gt;"));
    // Default outer text size applies once any outer label is set
    assert_eq!(count(&svg, "font-size=\"10\""), 3);
}

#[test]
fn non_finite_style_values_render_empty() {
    let style = StyleConfig::from_str("[shadow]\nradius = 4\ndx = nan\n").unwrap();
    let config = RenderConfig::new().with_style(style);
    let svg = render_with_config(
        &BoundingBox::new(300.0, 300.0),
        &ProgressState::new(50, 50, 50),
        &config,
    );
    assert!(!svg.contains("NaN"));
    assert_eq!(count(&svg, "<path"), 0);

    let svg = render_with_config(
        &BoundingBox::new(f64::INFINITY, 300.0),
        &ProgressState::default(),
        &RenderConfig::new(),
    );
    assert!(!svg.contains("inf"));
    assert_eq!(count(&svg, "<path"), 0);
}

#[test]
fn custom_class_prefix_and_background() {
    let svg_config = SvgConfig::default()
        .with_class_prefix("heart-")
        .with_background(Color::WHITE)
        .with_pretty_print(false);
    let config = RenderConfig::new().with_svg(svg_config);
    let svg = render_with_config(
        &BoundingBox::new(120.0, 100.0),
        &ProgressState::new(10, 10, 10),
        &config,
    );
    assert!(svg.contains("class=\"heart-background\""));
    assert!(svg.contains("class=\"heart-outline\""));
    assert!(!svg.contains("cf-"));
    assert!(!svg.contains('\n'));
}

#[test]
fn unprefixed_classes() {
    let config = RenderConfig::new().with_svg(SvgConfig::default().without_class_prefix());
    let svg = render_with_config(
        &BoundingBox::new(120.0, 100.0),
        &ProgressState::new(10, 10, 10),
        &config,
    );
    assert!(svg.contains("class=\"outline\""));
    assert!(svg.contains("class=\"arc\""));
    assert!(!svg.contains("cf-"));
}

#[test]
fn demo_style_renders() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/default.toml");
    let source = fs::read_to_string(path).unwrap();
    let style = StyleConfig::from_str(&source).unwrap();
    let config = RenderConfig::new().with_style(style);
    let svg = render_with_config(
        &BoundingBox::new(320.0, 300.0),
        &ProgressState::new(80, 45, 60),
        &config,
    );
    assert_eq!(count(&svg, "<textPath"), 6);
    assert_eq!(count(&svg, "<filter"), 1);
    assert!(svg.contains("fill=\"#ffffff\""));
}
