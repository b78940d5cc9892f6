//! PDF content stream builder.
//!
//! Collects graphics and text operators and serializes them to content
//! stream bytes. Every shape the report draws reduces to the small operator
//! set here: filled rectangles, stroked lines, cubic Bezier paths for
//! circles and rounded corners, and positioned text runs.

use crate::encoding;
use crate::error::{Error, Result};
use std::io::Write;

/// Bezier approximation constant for quarter circles, 4/3 * (sqrt(2) - 1).
const BEZIER_K: f32 = 0.552_284_8;

/// An RGB color with components in 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red component
    pub r: f32,
    /// Green component
    pub g: f32,
    /// Blue component
    pub b: f32,
}

impl Color {
    /// Create a color from components in 0.0..=1.0.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// Operations that can be added to a content stream.
#[derive(Debug, Clone)]
pub enum ContentStreamOp {
    /// Begin text object (BT)
    BeginText,
    /// End text object (ET)
    EndText,
    /// Set font and size (Tf)
    SetFont(String, f32),
    /// Set text matrix (Tm)
    SetTextMatrix(f32, f32, f32, f32, f32, f32),
    /// Show text (Tj); the string is encoded at write time
    ShowText(String),
    /// Set fill color RGB (rg)
    SetFillColorRGB(f32, f32, f32),
    /// Set stroke color RGB (RG)
    SetStrokeColorRGB(f32, f32, f32),
    /// Set line width (w)
    SetLineWidth(f32),
    /// Move to (m)
    MoveTo(f32, f32),
    /// Line to (l)
    LineTo(f32, f32),
    /// Curve to (c)
    CurveTo(f32, f32, f32, f32, f32, f32),
    /// Rectangle (re)
    Rectangle(f32, f32, f32, f32),
    /// Close path (h)
    ClosePath,
    /// Stroke (S)
    Stroke,
    /// Fill (f)
    Fill,
}

/// Builder for PDF content streams.
#[derive(Debug, Default)]
pub struct ContentStreamBuilder {
    /// Operations in the stream
    operations: Vec<ContentStreamOp>,
    /// Last font set, to skip redundant Tf operators
    current_font: Option<(String, f32)>,
}

impl ContentStreamBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a raw operation.
    pub fn op(&mut self, op: ContentStreamOp) -> &mut Self {
        self.operations.push(op);
        self
    }

    /// Set the current font by resource name, skipping redundant changes.
    ///
    /// Font selection persists across text objects within one stream, so a
    /// repeated Tf with identical arguments is dropped.
    pub fn set_font(&mut self, name: &str, size: f32) -> &mut Self {
        let key = (name.to_string(), size);
        if self.current_font.as_ref() != Some(&key) {
            self.current_font = Some(key);
            self.op(ContentStreamOp::SetFont(name.to_string(), size));
        }
        self
    }

    /// Set the fill color.
    pub fn fill_color(&mut self, color: Color) -> &mut Self {
        self.op(ContentStreamOp::SetFillColorRGB(color.r, color.g, color.b))
    }

    /// Set the stroke color.
    pub fn stroke_color(&mut self, color: Color) -> &mut Self {
        self.op(ContentStreamOp::SetStrokeColorRGB(color.r, color.g, color.b))
    }

    /// Set the stroke line width.
    pub fn line_width(&mut self, width: f32) -> &mut Self {
        self.op(ContentStreamOp::SetLineWidth(width))
    }

    /// Show one text run at an absolute position.
    ///
    /// Emits a self-contained BT..ET block: font selection, a text matrix
    /// placing the baseline at `(x, y)`, and the string itself. The string
    /// is raw Unicode; encoding happens during serialization.
    pub fn text(&mut self, text: &str, font: &str, size: f32, x: f32, y: f32) -> &mut Self {
        self.op(ContentStreamOp::BeginText);
        self.set_font(font, size);
        self.op(ContentStreamOp::SetTextMatrix(1.0, 0.0, 0.0, 1.0, x, y));
        self.op(ContentStreamOp::ShowText(text.to_string()));
        self.op(ContentStreamOp::EndText)
    }

    /// Append a rectangle subpath.
    pub fn rect(&mut self, x: f32, y: f32, width: f32, height: f32) -> &mut Self {
        self.op(ContentStreamOp::Rectangle(x, y, width, height))
    }

    /// Fill the current path.
    pub fn fill(&mut self) -> &mut Self {
        self.op(ContentStreamOp::Fill)
    }

    /// Stroke the current path.
    pub fn stroke(&mut self) -> &mut Self {
        self.op(ContentStreamOp::Stroke)
    }

    /// Append a straight line subpath from one point to another.
    pub fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> &mut Self {
        self.op(ContentStreamOp::MoveTo(x1, y1));
        self.op(ContentStreamOp::LineTo(x2, y2))
    }

    /// Append a circle subpath approximated by four cubic Beziers.
    pub fn circle(&mut self, cx: f32, cy: f32, radius: f32) -> &mut Self {
        let c = radius * BEZIER_K;

        self.op(ContentStreamOp::MoveTo(cx + radius, cy));
        self.op(ContentStreamOp::CurveTo(cx + radius, cy + c, cx + c, cy + radius, cx, cy + radius));
        self.op(ContentStreamOp::CurveTo(cx - c, cy + radius, cx - radius, cy + c, cx - radius, cy));
        self.op(ContentStreamOp::CurveTo(cx - radius, cy - c, cx - c, cy - radius, cx, cy - radius));
        self.op(ContentStreamOp::CurveTo(cx + c, cy - radius, cx + radius, cy - c, cx + radius, cy));
        self.op(ContentStreamOp::ClosePath)
    }

    /// Append a rounded rectangle subpath.
    ///
    /// The corner radius is clamped to half the shorter side, so oversized
    /// radii degrade to a capsule instead of a self-intersecting path.
    pub fn rounded_rect(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        radius: f32,
    ) -> &mut Self {
        let r = radius.min(width / 2.0).min(height / 2.0);
        let k = r * BEZIER_K;

        self.op(ContentStreamOp::MoveTo(x + r, y));
        self.op(ContentStreamOp::LineTo(x + width - r, y));
        self.op(ContentStreamOp::CurveTo(x + width - r + k, y, x + width, y + k, x + width, y + r));
        self.op(ContentStreamOp::LineTo(x + width, y + height - r));
        self.op(ContentStreamOp::CurveTo(
            x + width,
            y + height - r + k,
            x + width - k,
            y + height,
            x + width - r,
            y + height,
        ));
        self.op(ContentStreamOp::LineTo(x + r, y + height));
        self.op(ContentStreamOp::CurveTo(x + r - k, y + height, x, y + height - k, x, y + height - r));
        self.op(ContentStreamOp::LineTo(x, y + r));
        self.op(ContentStreamOp::CurveTo(x, y + r - k, x + r - k, y, x + r, y));
        self.op(ContentStreamOp::ClosePath)
    }

    /// Serialize the collected operations into content stream bytes.
    ///
    /// Fails if text object delimiters are unbalanced; such a stream would
    /// render differently across viewers, so it is rejected outright.
    pub fn build(&self) -> Result<Vec<u8>> {
        let mut depth: i32 = 0;
        for op in &self.operations {
            match op {
                ContentStreamOp::BeginText => {
                    depth += 1;
                    if depth > 1 {
                        return Err(Error::Invariant("nested BT without ET".to_string()));
                    }
                },
                ContentStreamOp::EndText => {
                    depth -= 1;
                    if depth < 0 {
                        return Err(Error::Invariant("ET without matching BT".to_string()));
                    }
                },
                _ => {},
            }
        }
        if depth != 0 {
            return Err(Error::Invariant(format!("{} unclosed text block(s)", depth)));
        }

        let mut buf = Vec::new();
        for op in &self.operations {
            self.write_op(&mut buf, op)?;
            writeln!(buf)?;
        }
        Ok(buf)
    }

    /// Write a single operation to the buffer.
    fn write_op<W: Write>(&self, w: &mut W, op: &ContentStreamOp) -> std::io::Result<()> {
        match op {
            ContentStreamOp::BeginText => write!(w, "BT"),
            ContentStreamOp::EndText => write!(w, "ET"),
            ContentStreamOp::SetFont(name, size) => write!(w, "/{} {} Tf", name, size),
            ContentStreamOp::SetTextMatrix(a, b, c, d, e, f) => {
                write!(w, "{} {} {} {} {} {} Tm", a, b, c, d, e, f)
            },
            ContentStreamOp::ShowText(text) => {
                write!(w, "({}) Tj", encoding::encode(text))
            },
            ContentStreamOp::SetFillColorRGB(r, g, b) => write!(w, "{} {} {} rg", r, g, b),
            ContentStreamOp::SetStrokeColorRGB(r, g, b) => write!(w, "{} {} {} RG", r, g, b),
            ContentStreamOp::SetLineWidth(width) => write!(w, "{} w", width),
            ContentStreamOp::MoveTo(x, y) => write!(w, "{} {} m", x, y),
            ContentStreamOp::LineTo(x, y) => write!(w, "{} {} l", x, y),
            ContentStreamOp::CurveTo(x1, y1, x2, y2, x3, y3) => {
                write!(w, "{} {} {} {} {} {} c", x1, y1, x2, y2, x3, y3)
            },
            ContentStreamOp::Rectangle(x, y, w_val, h) => {
                write!(w, "{} {} {} {} re", x, y, w_val, h)
            },
            ContentStreamOp::ClosePath => write!(w, "h"),
            ContentStreamOp::Stroke => write!(w, "S"),
            ContentStreamOp::Fill => write!(w, "f"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_str(builder: &ContentStreamBuilder) -> String {
        String::from_utf8_lossy(&builder.build().unwrap()).to_string()
    }

    #[test]
    fn test_text_run() {
        let mut b = ContentStreamBuilder::new();
        b.text("Hello, World!", "F1", 12.0, 72.0, 720.0);
        let content = build_str(&b);
        assert!(content.contains("BT"));
        assert!(content.contains("/F1 12 Tf"));
        assert!(content.contains("1 0 0 1 72 720 Tm"));
        assert!(content.contains("(Hello, World!) Tj"));
        assert!(content.contains("ET"));
    }

    #[test]
    fn test_text_encodes_accents() {
        let mut b = ContentStreamBuilder::new();
        b.text("caf\u{e9}", "F1", 10.0, 50.0, 700.0);
        assert!(build_str(&b).contains("(caf\\351) Tj"));
    }

    #[test]
    fn test_font_deduplication() {
        let mut b = ContentStreamBuilder::new();
        b.text("one", "F1", 10.0, 50.0, 700.0);
        b.text("two", "F1", 10.0, 50.0, 686.0);
        b.text("three", "F2", 10.0, 50.0, 672.0);
        let content = build_str(&b);
        assert_eq!(content.matches("/F1 10 Tf").count(), 1);
        assert_eq!(content.matches("/F2 10 Tf").count(), 1);
    }

    #[test]
    fn test_filled_rect() {
        let mut b = ContentStreamBuilder::new();
        b.fill_color(Color::rgb(1.0, 0.0, 0.0)).rect(10.0, 20.0, 100.0, 50.0).fill();
        let content = build_str(&b);
        assert!(content.contains("1 0 0 rg"));
        assert!(content.contains("10 20 100 50 re"));
        assert!(content.contains("\nf\n"));
    }

    #[test]
    fn test_circle_is_four_curves() {
        let mut b = ContentStreamBuilder::new();
        b.circle(100.0, 100.0, 50.0).fill();
        let content = build_str(&b);
        assert_eq!(content.matches(" c\n").count(), 4);
        assert!(content.contains("150 100 m"));
        assert!(content.contains("h\n"));
    }

    #[test]
    fn test_rounded_rect_clamps_radius() {
        let mut b = ContentStreamBuilder::new();
        // Radius larger than half the height must clamp to 10
        b.rounded_rect(0.0, 0.0, 100.0, 20.0, 50.0);
        let content = build_str(&b);
        assert!(content.contains("10 0 m"));
        assert_eq!(content.matches(" c\n").count(), 4);
    }

    #[test]
    fn test_line() {
        let mut b = ContentStreamBuilder::new();
        b.stroke_color(Color::rgb(0.8, 0.8, 0.8)).line_width(0.5).line(50.0, 760.0, 545.0, 760.0).stroke();
        let content = build_str(&b);
        assert!(content.contains("0.8 0.8 0.8 RG"));
        assert!(content.contains("0.5 w"));
        assert!(content.contains("50 760 m"));
        assert!(content.contains("545 760 l"));
        assert!(content.contains("\nS\n"));
    }

    #[test]
    fn test_unbalanced_text_block_rejected() {
        let mut b = ContentStreamBuilder::new();
        b.op(ContentStreamOp::BeginText);
        assert!(matches!(b.build(), Err(Error::Invariant(_))));

        let mut b = ContentStreamBuilder::new();
        b.op(ContentStreamOp::EndText);
        assert!(matches!(b.build(), Err(Error::Invariant(_))));
    }

    #[test]
    fn test_empty_stream_builds() {
        let b = ContentStreamBuilder::new();
        assert!(b.build().unwrap().is_empty());
    }
}
