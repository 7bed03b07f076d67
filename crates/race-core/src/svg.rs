// File: crates/race-core/src/svg.rs
// Summary: Append-only SVG document builder; assembled in memory, serialized once.

use std::fmt::Write as _;

/// Ordered list of serialized SVG elements. Elements are only ever appended,
/// in emission order; later elements overlay earlier ones on the canvas.
#[derive(Debug)]
pub struct SvgDocument {
    width: i32,
    height: i32,
    elements: Vec<String>,
}

impl SvgDocument {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height, elements: Vec::new() }
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: &str, width: f64) {
        self.elements.push(format!(
            r#"<line x1="{x1:.1}" y1="{y1:.1}" x2="{x2:.1}" y2="{y2:.1}" stroke="{stroke}" stroke-width="{width:.1}"/>"#
        ));
    }

    pub fn text(
        &mut self,
        x: f64,
        y: f64,
        content: &str,
        size: f64,
        weight: &str,
        anchor: &str,
        fill: &str,
    ) {
        let escaped = escape(content);
        self.elements.push(format!(
            r#"<text x="{x:.1}" y="{y:.1}" font-size="{size:.0}" font-weight="{weight}" text-anchor="{anchor}" fill="{fill}">{escaped}</text>"#
        ));
    }

    /// Connected path of straight segments through `points` (one `M` command
    /// followed by `L` commands).
    pub fn polyline(&mut self, points: &[(f64, f64)], stroke: &str, width: f64) {
        let mut d = String::new();
        for (i, &(x, y)) in points.iter().enumerate() {
            let cmd = if i == 0 { 'M' } else { 'L' };
            let _ = write!(d, "{cmd} {x:.1} {y:.1} ");
        }
        self.elements.push(format!(
            r#"<path d="{}" stroke="{stroke}" stroke-width="{width:.1}" fill="none"/>"#,
            d.trim_end()
        ));
    }

    /// Serialize the whole document. Consumes the builder; nothing can be
    /// appended after this point.
    pub fn build(self) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="Inter, sans-serif">"#,
            w = self.width,
            h = self.height
        );
        svg.push('\n');
        for el in &self.elements {
            svg.push_str("  ");
            svg.push_str(el);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
