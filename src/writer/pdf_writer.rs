//! PDF document writer.
//!
//! Object numbering is fixed: catalog, page tree, one font per
//! [`FontVariant`], then a page/content pair per page, then the Info
//! dictionary. The xref table therefore lists objects in write order.

use super::content_stream::ContentStreamBuilder;
use super::font_manager::FontVariant;
use super::object_serializer::ObjectSerializer;
use crate::error::Result;
use crate::layout::Color;
use crate::object::{Dictionary, Object, ObjectRef};
use std::io::Write;

/// Configuration for PDF generation.
#[derive(Debug, Clone)]
pub struct PdfWriterConfig {
    /// PDF version written in the header
    pub version: String,
    /// Info `/Title`
    pub title: Option<String>,
    /// Info `/Subject`
    pub subject: Option<String>,
    /// Info `/Creator`
    pub creator: Option<String>,
    /// Flate-compress page content streams
    pub compress: bool,
}

impl Default for PdfWriterConfig {
    fn default() -> Self {
        Self {
            version: "1.7".to_string(),
            title: None,
            subject: None,
            creator: Some(format!("{} {}", crate::NAME, crate::VERSION)),
            compress: true,
        }
    }
}

impl PdfWriterConfig {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn with_compress(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    fn info(&self) -> Object {
        let entries = [
            ("Title", &self.title),
            ("Subject", &self.subject),
            ("Creator", &self.creator),
        ];
        Object::dict(
            entries
                .into_iter()
                .filter_map(|(key, value)| value.as_deref().map(|v| (key, Object::text(v)))),
        )
    }
}

fn deflate(data: &[u8]) -> std::io::Result<Vec<u8>> {
    use flate2::write::ZlibEncoder;
    use flate2::Compression;

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}

/// Drawing surface for one page of a [`PdfWriter`].
pub struct PageBuilder<'a> {
    content: &'a mut ContentStreamBuilder,
}

impl PageBuilder<'_> {
    /// Draw a single run of text with its baseline starting at (x, y).
    pub fn draw_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        variant: FontVariant,
        font_size: f32,
        color: Color,
    ) -> &mut Self {
        self.content
            .begin_text()
            .set_font(variant.resource_name(), font_size)
            .fill_color(color)
            .text(text, x, y);
        self
    }

    pub fn draw_line(
        &mut self,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        thickness: f32,
        color: Color,
    ) -> &mut Self {
        self.content
            .end_text()
            .set_line_width(thickness)
            .stroke_color(color)
            .move_to(x1, y1)
            .line_to(x2, y2)
            .stroke();
        self
    }

    /// Draw a rectangle, filled and/or outlined. With neither, nothing is drawn.
    pub fn draw_rect(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        fill: Option<Color>,
        border: Option<(Color, f32)>,
    ) -> &mut Self {
        if fill.is_none() && border.is_none() {
            return self;
        }
        let content = self.content.end_text();
        if let Some(fill) = fill {
            content.fill_color(fill);
        }
        if let Some((stroke, thickness)) = border {
            content.set_line_width(thickness).stroke_color(stroke);
        }
        content.rect(x, y, width, height);
        match (fill, border) {
            (Some(_), Some(_)) => content.fill_stroke(),
            (Some(_), None) => content.fill(),
            _ => content.stroke(),
        };
        self
    }

    pub fn draw_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color) -> &mut Self {
        self.content
            .end_text()
            .fill_color(color)
            .circle(cx, cy, radius)
            .fill();
        self
    }

    /// Close any open text object.
    pub fn finish(self) {
        self.content.end_text();
    }
}

struct PageData {
    width: f32,
    height: f32,
    content: ContentStreamBuilder,
}

/// Indirect objects written so far and their byte offsets.
struct Body {
    output: Vec<u8>,
    offsets: Vec<usize>,
    serializer: ObjectSerializer,
}

impl Body {
    fn new(version: &str) -> Result<Self> {
        let mut output = Vec::new();
        writeln!(output, "%PDF-{}", version)?;
        // binary comment so transfer tools treat the file as binary
        output.extend_from_slice(b"%\xE2\xE3\xCF\xD3\n");
        Ok(Self {
            output,
            offsets: Vec::new(),
            serializer: ObjectSerializer::new(),
        })
    }

    /// Append the next object; its number must be `offsets.len() + 1`.
    fn push(&mut self, obj: &Object) -> Result<ObjectRef> {
        let id = self.offsets.len() as u32 + 1;
        self.offsets.push(self.output.len());
        let bytes = self.serializer.serialize_indirect(id, 0, obj)?;
        self.output.extend_from_slice(&bytes);
        Ok(ObjectRef::new(id, 0))
    }

    fn finish(mut self, root: ObjectRef, info: ObjectRef) -> Result<Vec<u8>> {
        let size = self.offsets.len() + 1;
        let xref_start = self.output.len();
        let out = &mut self.output;
        writeln!(out, "xref\n0 {}", size)?;
        writeln!(out, "0000000000 65535 f ")?;
        for offset in &self.offsets {
            writeln!(out, "{:010} 00000 n ", offset)?;
        }
        let trailer = Object::dict([
            ("Size", Object::from(size as i64)),
            ("Root", Object::from(root)),
            ("Info", Object::from(info)),
        ]);
        writeln!(out, "trailer")?;
        out.extend_from_slice(&self.serializer.serialize(&trailer)?);
        write!(out, "\nstartxref\n{}\n%%EOF", xref_start)?;
        Ok(self.output)
    }
}

/// Collects pages and writes them out as a complete PDF file.
pub struct PdfWriter {
    config: PdfWriterConfig,
    pages: Vec<PageData>,
}

impl PdfWriter {
    pub fn new() -> Self {
        Self::with_config(PdfWriterConfig::default())
    }

    pub fn with_config(config: PdfWriterConfig) -> Self {
        Self {
            config,
            pages: Vec::new(),
        }
    }

    /// Add a page with the given dimensions and return its drawing surface.
    pub fn add_page(&mut self, width: f32, height: f32) -> PageBuilder<'_> {
        self.pages.push(PageData {
            width,
            height,
            content: ContentStreamBuilder::new(),
        });
        let index = self.pages.len() - 1;
        PageBuilder {
            content: &mut self.pages[index].content,
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn content_stream(&self, page: &PageData) -> Result<Object> {
        let raw = page.content.build()?;
        let mut dict = Dictionary::new();
        let data = if self.config.compress {
            match deflate(&raw) {
                Ok(packed) => {
                    dict.insert("Filter".to_string(), Object::name("FlateDecode"));
                    packed
                },
                Err(e) => {
                    log::warn!("Content stream compression failed, writing raw: {}", e);
                    raw
                },
            }
        } else {
            raw
        };
        Ok(Object::Stream {
            dict,
            data: bytes::Bytes::from(data),
        })
    }

    /// Serialize every page into PDF bytes.
    pub fn finish(self) -> Result<Vec<u8>> {
        let mut body = Body::new(&self.config.version)?;

        let fonts_start = 3;
        let pages_start = fonts_start + FontVariant::ALL.len() as u32;
        let catalog = Object::dict([
            ("Type", Object::name("Catalog")),
            ("Pages", Object::from(ObjectRef::new(2, 0))),
        ]);
        let kids = (0..self.pages.len() as u32)
            .map(|i| Object::from(ObjectRef::new(pages_start + 2 * i, 0)))
            .collect();
        let tree = Object::dict([
            ("Type", Object::name("Pages")),
            ("Kids", Object::Array(kids)),
            ("Count", Object::from(self.pages.len() as i64)),
        ]);
        let root = body.push(&catalog)?;
        let tree_ref = body.push(&tree)?;

        let mut fonts = Dictionary::new();
        for variant in FontVariant::ALL {
            let font = Object::dict([
                ("Type", Object::name("Font")),
                ("Subtype", Object::name("Type1")),
                ("BaseFont", Object::name(variant.base_font())),
                ("Encoding", Object::name("WinAnsiEncoding")),
            ]);
            let font_ref = body.push(&font)?;
            fonts.insert(variant.resource_name().to_string(), Object::from(font_ref));
        }
        let resources = Object::dict([("Font", Object::Dictionary(fonts))]);

        for page in &self.pages {
            let page_id = body.offsets.len() as u32 + 1;
            let page_obj = Object::dict([
                ("Type", Object::name("Page")),
                ("Parent", Object::from(tree_ref)),
                ("MediaBox", Object::media_box(page.width, page.height)),
                ("Contents", Object::from(ObjectRef::new(page_id + 1, 0))),
                ("Resources", resources.clone()),
            ]);
            body.push(&page_obj)?;
            body.push(&self.content_stream(page)?)?;
        }

        let info = body.push(&self.config.info())?;
        body.finish(root, info)
    }
}

impl Default for PdfWriter {
    fn default() -> Self {
        Self::new()
    }
}
