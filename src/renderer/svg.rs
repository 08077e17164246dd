//! SVG generation from draw commands

use std::fmt::Write;

use crate::color::Color;
use crate::layout::ShapePath;
use crate::progress::{DrawCommand, LineCap, LineJoin, Shadow, Stroke, TextAlign};

use super::path::{arc_d, to_svg_d};
use super::SvgConfig;

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    defs: Vec<String>,
    elements: Vec<String>,
    next_id: usize,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            defs: vec![],
            elements: vec![],
            next_id: 0,
        }
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    fn indent_str(&self) -> &str {
        if self.config.pretty_print {
            "  "
        } else {
            ""
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    fn fresh_id(&mut self, kind: &str) -> String {
        let id = format!("{}{}-{}", self.prefix(), kind, self.next_id);
        self.next_id += 1;
        id
    }

    /// Add a drop shadow filter and return its id
    pub fn add_shadow_filter(&mut self, shadow: &Shadow) -> String {
        let id = self.fresh_id("shadow");
        // feDropShadow's deviation is half the blur radius
        self.defs.push(format!(
            r#"<filter id="{}" x="-50%" y="-50%" width="200%" height="200%"><feDropShadow dx="{}" dy="{}" stdDeviation="{}" flood-color="{}" flood-opacity="{}"/></filter>"#,
            id,
            num(shadow.dx),
            num(shadow.dy),
            num(shadow.radius / 2.0),
            shadow.color.to_rgb_hex(),
            num(shadow.color.opacity())
        ));
        id
    }

    /// Add a rectangle covering the canvas
    pub fn add_background(&mut self, width: f64, height: f64, color: Color) {
        let prefix = self.prefix();
        self.elements.push(format!(
            r#"{}<rect class="{}background" x="0" y="0" width="{}" height="{}"{}/>"#,
            self.indent_str(),
            prefix,
            num(width),
            num(height),
            fill_attrs(color)
        ));
    }

    /// Add a stroked path element
    pub fn add_stroked_path(&mut self, class: &str, d: &str, stroke: &Stroke, filter: Option<&str>) {
        let prefix = self.prefix();
        let filter_attr = filter
            .map(|id| format!(r#" filter="url(#{})""#, id))
            .unwrap_or_default();
        self.elements.push(format!(
            r#"{}<path class="{}{}" d="{}" fill="none"{}{}/>"#,
            self.indent_str(),
            prefix,
            class,
            d,
            stroke_attrs(stroke),
            filter_attr
        ));
    }

    /// Add a filled circle element
    pub fn add_circle(&mut self, class: &str, cx: f64, cy: f64, r: f64, color: Color) {
        let prefix = self.prefix();
        self.elements.push(format!(
            r#"{}<circle class="{}{}" cx="{}" cy="{}" r="{}"{}/>"#,
            self.indent_str(),
            prefix,
            class,
            num(cx),
            num(cy),
            num(r),
            fill_attrs(color)
        ));
    }

    /// Add text laid out along a path
    ///
    /// The path goes into `<defs>`; the text's start offset is resolved
    /// from the path length and alignment.
    pub fn add_text_on_path(
        &mut self,
        text: &str,
        path: &ShapePath,
        h_offset: f64,
        v_offset: f64,
        font_size: f64,
        color: Color,
        align: TextAlign,
    ) {
        let path_id = self.fresh_id("text-path");
        self.defs.push(format!(
            r#"<path id="{}" d="{}"/>"#,
            path_id,
            to_svg_d(path)
        ));

        let length = path.length();
        let (anchor, start) = match align {
            TextAlign::Left => ("start", h_offset),
            TextAlign::Center => ("middle", length / 2.0 + h_offset),
            TextAlign::Right => ("end", length + h_offset),
        };

        let prefix = self.prefix();
        self.elements.push(format!(
            r##"{}<text class="{}label" font-size="{}" dy="{}" text-anchor="{}"{}><textPath href="#{}" startOffset="{}">{}</textPath></text>"##,
            self.indent_str(),
            prefix,
            num(font_size),
            num(v_offset),
            anchor,
            fill_attrs(color),
            path_id,
            num(start),
            escape_xml(text)
        ));
    }

    /// Build the final SVG string
    pub fn build(self, width: f64, height: f64) -> String {
        let nl = self.newline();
        let mut svg = String::new();

        // XML declaration for standalone
        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        let _ = write!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = num(width),
            h = num(height)
        );
        svg.push_str(nl);

        if !self.defs.is_empty() {
            svg.push_str(self.indent_str());
            svg.push_str("<defs>");
            svg.push_str(nl);
            for def in &self.defs {
                svg.push_str(self.indent_str());
                svg.push_str(self.indent_str());
                svg.push_str(def);
                svg.push_str(nl);
            }
            svg.push_str(self.indent_str());
            svg.push_str("</defs>");
            svg.push_str(nl);
        }

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");
        svg.push_str(nl);

        svg
    }
}

/// Render a draw-command list to an SVG document of the given size
pub fn render_svg(commands: &[DrawCommand], width: f64, height: f64, config: &SvgConfig) -> String {
    let mut builder = SvgBuilder::new(config.clone());

    if let Some(background) = config.background {
        builder.add_background(width, height, background);
    }

    for command in commands {
        render_command(command, &mut builder);
    }

    builder.build(width, height)
}

fn render_command(command: &DrawCommand, builder: &mut SvgBuilder) {
    match command {
        DrawCommand::Path {
            path,
            stroke,
            shadow,
        } => {
            let filter = shadow.as_ref().map(|s| builder.add_shadow_filter(s));
            builder.add_stroked_path("outline", &to_svg_d(path), stroke, filter.as_deref());
        }
        DrawCommand::Line { from, to, stroke } => {
            let d = to_svg_d(&ShapePath::new().move_to(*from).line_to(*to));
            builder.add_stroked_path("line", &d, stroke, None);
        }
        DrawCommand::Arc {
            oval,
            start_angle,
            sweep_angle,
            stroke,
        } => {
            let d = arc_d(*oval, *start_angle, *sweep_angle);
            builder.add_stroked_path("arc", &d, stroke, None);
        }
        DrawCommand::FilledCircle {
            center,
            radius,
            color,
        } => builder.add_circle("seam", center.x, center.y, *radius, *color),
        DrawCommand::TextOnPath {
            text,
            path,
            h_offset,
            v_offset,
            font_size,
            color,
            align,
        } => builder.add_text_on_path(text, path, *h_offset, *v_offset, *font_size, *color, *align),
    }
}

fn stroke_attrs(stroke: &Stroke) -> String {
    let cap = match stroke.cap {
        LineCap::Butt => "butt",
        LineCap::Round => "round",
    };
    let join = match stroke.join {
        LineJoin::Miter => "miter",
        LineJoin::Round => "round",
    };
    let mut attrs = format!(
        r#" stroke="{}" stroke-width="{}" stroke-linecap="{}" stroke-linejoin="{}""#,
        stroke.color.to_rgb_hex(),
        num(stroke.width),
        cap,
        join
    );
    if !stroke.color.is_opaque() {
        let _ = write!(attrs, r#" stroke-opacity="{}""#, num(stroke.color.opacity()));
    }
    if !stroke.anti_alias {
        attrs.push_str(r#" shape-rendering="crispEdges""#);
    }
    attrs
}

fn fill_attrs(color: Color) -> String {
    let mut attrs = format!(r#" fill="{}""#, color.to_rgb_hex());
    if !color.is_opaque() {
        let _ = write!(attrs, r#" fill-opacity="{}""#, num(color.opacity()));
    }
    attrs
}

/// Format a number with at most two decimals and no trailing zeros
fn num(value: f64) -> String {
    let s = format!("{:.2}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    match s {
        "-0" | "" => "0".to_string(),
        _ => s.to_string(),
    }
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Point, Rect};

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a < b"), "a &lt; b");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml("<tag>"), "&lt;tag&gt;");
    }

    #[test]
    fn test_num_trims() {
        assert_eq!(num(10.0), "10");
        assert_eq!(num(2.5), "2.5");
        assert_eq!(num(1.234), "1.23");
        assert_eq!(num(-0.001), "0");
        assert_eq!(num(100.0), "100");
    }

    #[test]
    fn test_empty_document() {
        let svg = render_svg(&[], 100.0, 50.0, &SvgConfig::default());
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains(r#"viewBox="0 0 100 50""#));
        assert!(!svg.contains("<defs>"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_not_standalone() {
        let config = SvgConfig::default()
            .with_standalone(false)
            .with_pretty_print(false);
        let svg = render_svg(&[], 10.0, 10.0, &config);
        assert!(svg.starts_with("<svg"));
        assert!(!svg.contains('\n'));
    }

    #[test]
    fn test_line_stroke_attributes() {
        let stroke = Stroke::round(4.0, Color::argb(0x80, 0xff, 0, 0)).with_join(LineJoin::Round);
        let commands = vec![DrawCommand::Line {
            from: Point::new(0.0, 0.0),
            to: Point::new(10.0, 0.0),
            stroke,
        }];
        let svg = render_svg(&commands, 20.0, 20.0, &SvgConfig::default());
        assert!(svg.contains(r#"class="cf-line""#));
        assert!(svg.contains(r#"d="M0.00 0.00 L10.00 0.00""#));
        assert!(svg.contains(r##"stroke="#ff0000""##));
        assert!(svg.contains(r#"stroke-linecap="round""#));
        assert!(svg.contains(r#"stroke-linejoin="round""#));
        assert!(svg.contains("stroke-opacity="));
    }

    #[test]
    fn test_aliased_arc_is_crisp() {
        let stroke = Stroke::round(2.0, Color::BLACK).with_anti_alias(false);
        let commands = vec![DrawCommand::Arc {
            oval: Rect::centered(Point::new(10.0, 10.0), 5.0),
            start_angle: 45.0,
            sweep_angle: 90.0,
            stroke,
        }];
        let svg = render_svg(&commands, 20.0, 20.0, &SvgConfig::default());
        assert!(svg.contains(r#"shape-rendering="crispEdges""#));
    }

    #[test]
    fn test_shadow_filter_is_referenced() {
        let commands = vec![DrawCommand::Path {
            path: ShapePath::new()
                .move_to(Point::new(0.0, 0.0))
                .line_to(Point::new(5.0, 5.0)),
            stroke: Stroke::round(1.0, Color::GRAY).with_cap(LineCap::Butt),
            shadow: Some(Shadow {
                radius: 4.0,
                dx: 1.0,
                dy: 2.0,
                color: Color::GRAY,
            }),
        }];
        let svg = render_svg(&commands, 20.0, 20.0, &SvgConfig::default());
        assert!(svg.contains(r#"<filter id="cf-shadow-0""#));
        assert!(svg.contains(r#"stdDeviation="2""#));
        assert!(svg.contains(r#"filter="url(#cf-shadow-0)""#));
        assert!(svg.contains(r#"stroke-linecap="butt""#));
    }

    #[test]
    fn test_text_on_path_alignment() {
        let path = ShapePath::new()
            .move_to(Point::new(0.0, 0.0))
            .line_to(Point::new(100.0, 0.0));
        let text = |align| DrawCommand::TextOnPath {
            text: "A&B".to_string(),
            path: path.clone(),
            h_offset: 1.0,
            v_offset: 3.0,
            font_size: 12.0,
            color: Color::BLACK,
            align,
        };
        let commands = vec![
            text(TextAlign::Left),
            text(TextAlign::Center),
            text(TextAlign::Right),
        ];
        let svg = render_svg(&commands, 120.0, 20.0, &SvgConfig::default());
        assert!(svg.contains(r#"<path id="cf-text-path-0" d="M0.00 0.00 L100.00 0.00"/>"#));
        assert!(svg.contains(r##"text-anchor="start" fill="#000000"><textPath href="#cf-text-path-0" startOffset="1">A&amp;B</textPath>"##));
        assert!(svg.contains(r#"text-anchor="middle""#));
        assert!(svg.contains(r#"startOffset="51""#));
        assert!(svg.contains(r#"text-anchor="end""#));
        assert!(svg.contains(r#"startOffset="101""#));
        assert!(svg.contains(r#"dy="3""#));
    }

    #[test]
    fn test_background_comes_first() {
        let commands = vec![DrawCommand::FilledCircle {
            center: Point::new(5.0, 5.0),
            radius: 2.0,
            color: Color::BLACK,
        }];
        let config = SvgConfig::default().with_background(Color::WHITE);
        let svg = render_svg(&commands, 10.0, 10.0, &config);
        let bg = svg.find("cf-background").unwrap();
        let circle = svg.find("cf-seam").unwrap();
        assert!(bg < circle);
    }
}
