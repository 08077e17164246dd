//! Style loading from TOML files and error reporting

use std::fs;
use std::path::PathBuf;

use cordiform::{compute_geometry, BoundingBox, Color, ConfigError, StyleConfig};

fn temp_file(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("cordiform-{}-{}", std::process::id(), name));
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn partial_file_keeps_defaults() {
    let path = temp_file(
        "partial.toml",
        "[colors]\nright_arc = \"#0f0\"\n\n[stroke]\nwidth = 14\n",
    );
    let style = StyleConfig::from_file(&path).unwrap();
    fs::remove_file(&path).ok();

    let defaults = StyleConfig::default();
    assert_eq!(style.right_arc_color, Color::rgb(0, 0xff, 0));
    assert_eq!(style.left_arc_color, defaults.left_arc_color);
    assert_eq!(style.bottom_line_color, defaults.bottom_line_color);
    assert_eq!(style.stroke_width, 14.0);
    assert_eq!(style.shadow, defaults.shadow);
}

#[test]
fn missing_file_is_io_error() {
    let path = std::env::temp_dir().join("cordiform-does-not-exist.toml");
    let err = StyleConfig::from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
    assert!(err.span().is_none());
}

#[test]
fn syntax_error_has_span_and_report() {
    let source = "[stroke]\nwidth = = 3\n";
    let err = StyleConfig::from_str(source).unwrap_err();
    assert!(matches!(err, ConfigError::Toml { .. }));
    assert!(err.span().is_some());

    let report = err.format(source, "broken.toml");
    assert!(report.contains("broken.toml"));
}

#[test]
fn wrong_type_is_rejected() {
    let err = StyleConfig::from_str("[stroke]\nwidth = \"wide\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::Toml { .. }));
}

#[test]
fn invalid_shadow_colour_names_its_key() {
    let source = "[shadow]\nradius = 2\ncolor = \"blurple\"\n";
    let err = StyleConfig::from_str(source).unwrap_err();
    match err {
        ConfigError::InvalidColor { ref key, ref value, .. } => {
            assert_eq!(key, "shadow.color");
            assert_eq!(value, "blurple");
        }
        ref other => panic!("unexpected error: {other:?}"),
    }
    let report = err.format(source, "style.toml");
    assert!(report.contains("blurple"));
}

#[test]
fn negative_values_are_clamped_not_rejected() {
    let style = StyleConfig::from_str("[stroke]\nwidth = -4\n\n[shadow]\nradius = -2\n").unwrap();
    let g = compute_geometry(&BoundingBox::new(300.0, 300.0), &style).unwrap();
    assert_eq!(g.stroke_width, g.side_length / 6.0);
    assert_eq!(g.drawable.width, 300.0);
}

#[test]
fn outer_labels_reserve_text_band() {
    let plain = StyleConfig::from_str("").unwrap();
    let labelled = StyleConfig::from_str("[labels]\nleft_outer = \"8h\"\n").unwrap();
    let bounds = BoundingBox::new(300.0, 300.0);

    let g_plain = compute_geometry(&bounds, &plain).unwrap();
    let g_labelled = compute_geometry(&bounds, &labelled).unwrap();
    let band = 10.0 * 1.171875;
    assert!((g_plain.drawable.width - g_labelled.drawable.width - 2.0 * band).abs() < 1e-9);
}
