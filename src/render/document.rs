//! In-memory rendered document: pages of recorded draw instructions.
//!
//! Renderers never touch PDF syntax. They append [`DrawOp`]s to the current
//! [`Page`]; the finished [`Document`] is serialized once through
//! [`PdfWriter`].

use crate::error::Result;
use crate::geometry::{Point, Rect};
use crate::layout::Color;
use crate::writer::{FontVariant, PdfWriter, PdfWriterConfig};

/// One draw instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// A single run of text with its baseline at (x, y).
    Text {
        text: String,
        x: f32,
        y: f32,
        size: f32,
        font: FontVariant,
        color: Color,
    },
    /// A straight line.
    Line {
        start: Point,
        end: Point,
        thickness: f32,
        color: Color,
    },
    /// A rectangle, filled and/or outlined.
    Rect {
        rect: Rect,
        fill: Option<Color>,
        border: Option<(Color, f32)>,
    },
    /// A filled circle.
    Circle {
        center: Point,
        radius: f32,
        color: Color,
    },
}

impl DrawOp {
    /// Lowest y coordinate the instruction touches.
    pub fn lowest_y(&self) -> f32 {
        match self {
            DrawOp::Text { y, .. } => *y,
            DrawOp::Line { start, end, .. } => start.y.min(end.y),
            DrawOp::Rect { rect, .. } => rect.bottom(),
            DrawOp::Circle { center, radius, .. } => center.y - radius,
        }
    }

    /// Text content, if this is a text run.
    pub fn text(&self) -> Option<&str> {
        match self {
            DrawOp::Text { text, .. } => Some(text),
            _ => None,
        }
    }
}

/// A fixed-size page.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Width in points
    pub width: f32,
    /// Height in points
    pub height: f32,
    ops: Vec<DrawOp>,
}

impl Page {
    /// Create an empty page.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    /// Append an instruction.
    pub fn push(&mut self, op: DrawOp) {
        self.ops.push(op);
    }

    /// Instructions in drawing order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Text runs on this page, in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(DrawOp::text)
    }
}

/// A multi-page document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pages: Vec<Page>,
}

impl Document {
    /// Create an empty document (no pages).
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fresh page and return it.
    pub fn add_page(&mut self, width: f32, height: f32) -> &mut Page {
        self.pages.push(Page::new(width, height));
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    /// All pages.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Number of pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// The page currently being drawn on.
    pub fn last_page_mut(&mut self) -> Option<&mut Page> {
        self.pages.last_mut()
    }

    /// Every text run in the document, in page order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.pages.iter().flat_map(Page::texts)
    }

    /// Serialize to PDF bytes.
    pub fn to_pdf(&self, config: PdfWriterConfig) -> Result<Vec<u8>> {
        let mut writer = PdfWriter::with_config(config);
        for page in &self.pages {
            let mut builder = writer.add_page(page.width, page.height);
            for op in &page.ops {
                match op {
                    DrawOp::Text {
                        text,
                        x,
                        y,
                        size,
                        font,
                        color,
                    } => {
                        builder.draw_text(text, *x, *y, *font, *size, *color);
                    },
                    DrawOp::Line {
                        start,
                        end,
                        thickness,
                        color,
                    } => {
                        builder.draw_line(start.x, start.y, end.x, end.y, *thickness, *color);
                    },
                    DrawOp::Rect { rect, fill, border } => {
                        builder.draw_rect(rect.x, rect.y, rect.width, rect.height, *fill, *border);
                    },
                    DrawOp::Circle {
                        center,
                        radius,
                        color,
                    } => {
                        builder.draw_circle(center.x, center.y, *radius, *color);
                    },
                }
            }
            builder.finish();
        }
        log::debug!("Serializing document with {} pages", self.pages.len());
        writer.finish()
    }
}
