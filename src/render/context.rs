//! Render context: page/cursor model and the primitive drawing surface.
//!
//! A [`RenderContext`] owns the document being built and the vertical write
//! cursor. Every primitive draws on the current page at the cursor and moves
//! the cursor down; callers must not assume it is restored afterwards.
//! Coordinates follow PDF conventions, so "down" means a smaller y.

use super::document::{DrawOp, Document};
use crate::config::ExportConfig;
use crate::geometry::{Point, Rect};
use crate::layout::{palette, wrap_text, Color};
use crate::writer::{FontManager, FontVariant};

/// Gap added under a single text line.
const LINE_GAP: f32 = 6.0;
/// Gap added under each line of wrapped text.
const WRAPPED_LINE_GAP: f32 = 4.0;
/// Horizontal offset of a key/value value column.
const VALUE_INDENT: f32 = 110.0;
/// Horizontal offset of bullet text.
const BULLET_INDENT: f32 = 14.0;

/// Font size, variant and color of a text run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Font size in points
    pub size: f32,
    /// Font variant
    pub font: FontVariant,
    /// Explicit color; `None` uses the primitive's default
    pub color: Option<Color>,
}

impl TextStyle {
    /// Regular text at `size`.
    pub fn regular(size: f32) -> Self {
        Self {
            size,
            font: FontVariant::Regular,
            color: None,
        }
    }

    /// Bold text at `size`.
    pub fn bold(size: f32) -> Self {
        Self {
            size,
            font: FontVariant::Bold,
            color: None,
        }
    }

    /// Set an explicit color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

/// Page/cursor state for one export.
#[derive(Debug)]
pub struct RenderContext {
    document: Document,
    fonts: FontManager,
    width: f32,
    height: f32,
    margin: f32,
    cursor: f32,
}

impl RenderContext {
    /// Start a document with one empty page and the cursor at the top margin.
    pub fn new(config: &ExportConfig) -> Self {
        let mut ctx = Self {
            document: Document::new(),
            fonts: FontManager::new(),
            width: config.page_width,
            height: config.page_height,
            margin: config.margin,
            cursor: 0.0,
        };
        ctx.new_page();
        ctx
    }

    /// Append a fresh page and reset the cursor to `height - margin`.
    pub fn new_page(&mut self) {
        self.document.add_page(self.width, self.height);
        self.cursor = self.height - self.margin;
        log::debug!("Started page {}", self.document.page_count());
    }

    /// Break to a new page when the cursor is below `min_remaining`.
    pub fn ensure_space(&mut self, min_remaining: f32) {
        if self.cursor < min_remaining {
            self.new_page();
        }
    }

    /// Current cursor position (points from the page bottom).
    pub fn cursor(&self) -> f32 {
        self.cursor
    }

    /// Move the cursor to an absolute position.
    pub fn set_cursor(&mut self, y: f32) {
        self.cursor = y;
    }

    /// Move the cursor down by `dy`.
    pub fn advance(&mut self, dy: f32) {
        self.cursor -= dy;
    }

    /// Page margin.
    pub fn margin(&self) -> f32 {
        self.margin
    }

    /// Width between the left and right margins.
    pub fn content_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }

    /// Width of `text` in the given variant and size.
    pub fn text_width(&self, text: &str, font: FontVariant, size: f32) -> f32 {
        self.fonts.text_width(text, font, size)
    }

    /// The document built so far.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Finish rendering and take the document.
    pub fn into_document(self) -> Document {
        self.document
    }

    fn push(&mut self, op: DrawOp) {
        if let Some(page) = self.document.last_page_mut() {
            page.push(op);
        }
    }

    // ---- Positioned primitives (cursor untouched) ----

    /// Draw text at an explicit position on the current page.
    pub fn text_at(&mut self, text: &str, x: f32, y: f32, style: TextStyle) {
        self.push(DrawOp::Text {
            text: text.to_string(),
            x,
            y,
            size: style.size,
            font: style.font,
            color: style.color.unwrap_or(palette::TEXT),
        });
    }

    /// Draw a line on the current page.
    pub fn line(&mut self, start: Point, end: Point, thickness: f32, color: Color) {
        self.push(DrawOp::Line {
            start,
            end,
            thickness,
            color,
        });
    }

    /// Draw a rectangle on the current page.
    pub fn rect(&mut self, rect: Rect, fill: Option<Color>, border: Option<(Color, f32)>) {
        self.push(DrawOp::Rect { rect, fill, border });
    }

    /// Draw a filled circle on the current page.
    pub fn circle(&mut self, center: Point, radius: f32, color: Color) {
        self.push(DrawOp::Circle {
            center,
            radius,
            color,
        });
    }

    // ---- Cursor primitives ----

    /// Draw one line of text at the left margin; the cursor moves down by
    /// `size + 6`.
    pub fn draw_text_line(&mut self, text: &str, style: TextStyle) {
        self.ensure_space(self.margin + style.size);
        let style = TextStyle {
            color: Some(style.color.unwrap_or(palette::TEXT)),
            ..style
        };
        self.text_at(text, self.margin, self.cursor, style);
        self.cursor -= style.size + LINE_GAP;
    }

    /// Draw regular text wrapped to the content width minus `indent`; the
    /// cursor moves down by `size + 4` per line.
    ///
    /// Each line checks for room on its own, so long paragraphs continue on
    /// the next page.
    pub fn draw_wrapped_text(&mut self, text: &str, size: f32, indent: f32, color: Option<Color>) {
        let max_width = self.content_width() - indent;
        let color = color.unwrap_or(palette::BODY);
        let lines = wrap_text(text, max_width, size, self.fonts.font(FontVariant::Regular));
        for line in lines {
            self.ensure_space(self.margin + size);
            self.text_at(
                &line,
                self.margin + indent,
                self.cursor,
                TextStyle::regular(size).with_color(color),
            );
            self.cursor -= size + WRAPPED_LINE_GAP;
        }
    }

    /// Draw a full-width horizontal rule at the cursor.
    pub fn draw_rule(&mut self, thickness: f32, color: Color) {
        let y = self.cursor;
        self.line(
            Point::new(self.margin, y),
            Point::new(self.width - self.margin, y),
            thickness,
            color,
        );
    }

    /// Section heading: 16pt bold title, rule, spacing.
    pub fn draw_section_title(&mut self, title: &str) {
        self.ensure_space(self.margin + 40.0);
        self.text_at(
            title,
            self.margin,
            self.cursor,
            TextStyle::bold(16.0).with_color(palette::SECTION_TITLE),
        );
        self.cursor -= 22.0;
        self.draw_rule(1.0, palette::SECTION_RULE);
        self.cursor -= 14.0;
    }

    /// Bold `Label:` at the margin with the value wrapped in a column to its
    /// right.
    pub fn draw_key_value(&mut self, label: &str, value: &str) {
        self.ensure_space(self.margin + 20.0);
        self.text_at(
            &format!("{}:", label),
            self.margin,
            self.cursor,
            TextStyle::bold(10.5).with_color(palette::LABEL),
        );
        self.draw_wrapped_text(value, 10.5, VALUE_INDENT, None);
    }

    /// Bullet glyph at the margin with the text wrapped beside it.
    pub fn draw_bullet(&mut self, text: &str) {
        self.ensure_space(self.margin + 16.0);
        self.text_at(
            "•",
            self.margin,
            self.cursor,
            TextStyle::bold(11.0).with_color(palette::BULLET),
        );
        self.draw_wrapped_text(text, 11.0, BULLET_INDENT, None);
    }
}
