//! Page content stream operators.

use super::font_manager::encode_win_ansi;
use crate::error::Result;
use crate::layout::Color;
use std::io::Write;

/// Control point offset for a four-curve circle, 4/3 * (sqrt(2) - 1).
const KAPPA: f32 = 0.552_284_8;

/// One content stream operator with its operands.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentStreamOp {
    BeginText,
    EndText,
    /// Font resource name and size (`Tf`)
    SetFont(String, f32),
    /// Text origin, written as an unscaled `Tm`
    TextOrigin(f32, f32),
    /// Unencoded text (`Tj`)
    ShowText(String),
    FillColor(Color),
    StrokeColor(Color),
    LineWidth(f32),
    MoveTo(f32, f32),
    LineTo(f32, f32),
    CurveTo([f32; 6]),
    Rectangle(f32, f32, f32, f32),
    ClosePath,
    Stroke,
    Fill,
    FillStroke,
}

impl ContentStreamOp {
    fn write_to<W: Write>(&self, w: &mut W) -> std::io::Result<()> {
        match self {
            ContentStreamOp::BeginText => w.write_all(b"BT"),
            ContentStreamOp::EndText => w.write_all(b"ET"),
            ContentStreamOp::SetFont(name, size) => write!(w, "/{} {} Tf", name, size),
            ContentStreamOp::TextOrigin(x, y) => write!(w, "1 0 0 1 {} {} Tm", x, y),
            ContentStreamOp::ShowText(text) => {
                w.write_all(b"(")?;
                for byte in encode_win_ansi(text) {
                    if matches!(byte, b'(' | b')' | b'\\') {
                        w.write_all(b"\\")?;
                    }
                    w.write_all(&[byte])?;
                }
                w.write_all(b") Tj")
            },
            ContentStreamOp::FillColor(c) => write!(w, "{} {} {} rg", c.r, c.g, c.b),
            ContentStreamOp::StrokeColor(c) => write!(w, "{} {} {} RG", c.r, c.g, c.b),
            ContentStreamOp::LineWidth(width) => write!(w, "{} w", width),
            ContentStreamOp::MoveTo(x, y) => write!(w, "{} {} m", x, y),
            ContentStreamOp::LineTo(x, y) => write!(w, "{} {} l", x, y),
            ContentStreamOp::CurveTo([x1, y1, x2, y2, x3, y3]) => {
                write!(w, "{} {} {} {} {} {} c", x1, y1, x2, y2, x3, y3)
            },
            ContentStreamOp::Rectangle(x, y, width, height) => {
                write!(w, "{} {} {} {} re", x, y, width, height)
            },
            ContentStreamOp::ClosePath => w.write_all(b"h"),
            ContentStreamOp::Stroke => w.write_all(b"S"),
            ContentStreamOp::Fill => w.write_all(b"f"),
            ContentStreamOp::FillStroke => w.write_all(b"B"),
        }
    }
}

/// Accumulates operators for one page.
///
/// Text runs share a `BT`/`ET` pair until `end_text` closes it, and a
/// `Tf` is only emitted when the font or size changes.
#[derive(Debug, Default)]
pub struct ContentStreamBuilder {
    operations: Vec<ContentStreamOp>,
    font: Option<(String, f32)>,
    in_text: bool,
}

impl ContentStreamBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, op: ContentStreamOp) -> &mut Self {
        self.operations.push(op);
        self
    }

    pub fn operations(&self) -> &[ContentStreamOp] {
        &self.operations
    }

    pub fn begin_text(&mut self) -> &mut Self {
        if !self.in_text {
            self.in_text = true;
            self.push(ContentStreamOp::BeginText);
        }
        self
    }

    pub fn end_text(&mut self) -> &mut Self {
        if self.in_text {
            self.in_text = false;
            self.push(ContentStreamOp::EndText);
        }
        self
    }

    pub fn set_font(&mut self, name: &str, size: f32) -> &mut Self {
        let unchanged = self
            .font
            .as_ref()
            .is_some_and(|(current, current_size)| current == name && *current_size == size);
        if !unchanged {
            self.font = Some((name.to_string(), size));
            self.push(ContentStreamOp::SetFont(name.to_string(), size));
        }
        self
    }

    /// Show `text` with its baseline origin at (x, y), opening a text object if needed.
    pub fn text(&mut self, text: &str, x: f32, y: f32) -> &mut Self {
        self.begin_text()
            .push(ContentStreamOp::TextOrigin(x, y))
            .push(ContentStreamOp::ShowText(text.to_string()))
    }

    pub fn fill_color(&mut self, color: Color) -> &mut Self {
        self.push(ContentStreamOp::FillColor(color))
    }

    pub fn stroke_color(&mut self, color: Color) -> &mut Self {
        self.push(ContentStreamOp::StrokeColor(color))
    }

    pub fn set_line_width(&mut self, width: f32) -> &mut Self {
        self.push(ContentStreamOp::LineWidth(width))
    }

    pub fn move_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.push(ContentStreamOp::MoveTo(x, y))
    }

    pub fn line_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.push(ContentStreamOp::LineTo(x, y))
    }

    pub fn rect(&mut self, x: f32, y: f32, width: f32, height: f32) -> &mut Self {
        self.push(ContentStreamOp::Rectangle(x, y, width, height))
    }

    pub fn stroke(&mut self) -> &mut Self {
        self.push(ContentStreamOp::Stroke)
    }

    pub fn fill(&mut self) -> &mut Self {
        self.push(ContentStreamOp::Fill)
    }

    pub fn fill_stroke(&mut self) -> &mut Self {
        self.push(ContentStreamOp::FillStroke)
    }

    /// Closed circle path made of four cubic curves, starting at the rightmost point.
    pub fn circle(&mut self, cx: f32, cy: f32, r: f32) -> &mut Self {
        let k = r * KAPPA;
        self.move_to(cx + r, cy)
            .push(ContentStreamOp::CurveTo([cx + r, cy + k, cx + k, cy + r, cx, cy + r]))
            .push(ContentStreamOp::CurveTo([cx - k, cy + r, cx - r, cy + k, cx - r, cy]))
            .push(ContentStreamOp::CurveTo([cx - r, cy - k, cx - k, cy - r, cx, cy - r]))
            .push(ContentStreamOp::CurveTo([cx + k, cy - r, cx + r, cy - k, cx + r, cy]))
            .push(ContentStreamOp::ClosePath)
    }

    /// Stream bytes, one operator per line.
    pub fn build(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        for op in &self.operations {
            op.write_to(&mut buf)?;
            buf.push(b'\n');
        }
        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(builder: &ContentStreamBuilder) -> String {
        String::from_utf8_lossy(&builder.build().unwrap()).to_string()
    }

    #[test]
    fn test_text_run() {
        let mut builder = ContentStreamBuilder::new();
        builder
            .begin_text()
            .set_font("F1", 12.0)
            .text("Patient Snapshot", 48.0, 720.0)
            .end_text();

        assert_eq!(
            render(&builder),
            "BT\n/F1 12 Tf\n1 0 0 1 48 720 Tm\n(Patient Snapshot) Tj\nET\n"
        );
    }

    #[test]
    fn test_text_escaping() {
        let mut builder = ContentStreamBuilder::new();
        builder.text("Lap (sleeve) \\ band", 0.0, 0.0).end_text();
        assert!(render(&builder).contains("(Lap \\(sleeve\\) \\\\ band) Tj"));
    }

    #[test]
    fn test_bullet_encoded_as_win_ansi() {
        let mut builder = ContentStreamBuilder::new();
        builder.text("•", 0.0, 0.0).end_text();
        let bytes = builder.build().unwrap();
        assert!(bytes.windows(4).any(|w| w == [b'(', 0x95, b')', b' ']));
    }

    #[test]
    fn test_font_only_emitted_on_change() {
        let mut builder = ContentStreamBuilder::new();
        builder
            .set_font("F2", 16.0)
            .set_font("F2", 16.0)
            .set_font("F1", 16.0)
            .set_font("F1", 11.0);
        let fonts = builder
            .operations()
            .iter()
            .filter(|op| matches!(op, ContentStreamOp::SetFont(..)))
            .count();
        assert_eq!(fonts, 3);
    }

    #[test]
    fn test_consecutive_runs_share_text_object() {
        let mut builder = ContentStreamBuilder::new();
        builder.text("a", 0.0, 10.0).text("b", 0.0, 20.0).end_text();
        builder.move_to(0.0, 0.0);
        builder.text("c", 0.0, 30.0).end_text();
        let content = render(&builder);
        assert_eq!(content.matches("BT").count(), 2);
        assert_eq!(content.matches("ET").count(), 2);
    }

    #[test]
    fn test_path_operator_leaves_text_object_open() {
        let mut builder = ContentStreamBuilder::new();
        builder.text("a", 0.0, 10.0);
        builder.move_to(0.0, 0.0);
        builder.text("b", 0.0, 20.0).end_text();
        let content = render(&builder);
        assert_eq!(content.matches("BT").count(), 1);
        assert_eq!(content.matches("ET").count(), 1);
    }

    #[test]
    fn test_path_operations() {
        let mut builder = ContentStreamBuilder::new();
        builder
            .stroke_color(Color::black())
            .set_line_width(1.0)
            .move_to(0.0, 0.0)
            .line_to(100.0, 100.0)
            .stroke();

        let content = render(&builder);
        assert!(content.contains("0 0 0 RG"));
        assert!(content.contains("1 w"));
        assert!(content.contains("0 0 m"));
        assert!(content.contains("100 100 l"));
        assert!(content.ends_with("S\n"));
    }

    #[test]
    fn test_circle_is_four_curves() {
        let mut builder = ContentStreamBuilder::new();
        builder.circle(10.0, 10.0, 3.0).fill();
        let ops = builder.operations();
        let curves = ops
            .iter()
            .filter(|op| matches!(op, ContentStreamOp::CurveTo(..)))
            .count();
        assert_eq!(curves, 4);
        assert_eq!(ops.first(), Some(&ContentStreamOp::MoveTo(13.0, 10.0)));
        assert_eq!(ops.last(), Some(&ContentStreamOp::Fill));
    }

    #[test]
    fn test_unbalanced_text_calls() {
        let mut builder = ContentStreamBuilder::new();
        builder.begin_text().begin_text().end_text().end_text();
        assert_eq!(builder.operations(), &[ContentStreamOp::BeginText, ContentStreamOp::EndText]);
    }
}
