//! PDF output.
//!
//! A rendered [`Document`](crate::render::Document) is replayed onto
//! [`PageBuilder`]s, which record operators in a [`ContentStreamBuilder`].
//! [`PdfWriter`] then lays out the object graph (catalog, page tree,
//! Helvetica fonts, pages, Info) and serializes it through
//! [`ObjectSerializer`].
//!
//! ```
//! use clinic_export::layout::Color;
//! use clinic_export::writer::{FontVariant, PdfWriter};
//!
//! let mut writer = PdfWriter::new();
//! let mut page = writer.add_page(612.0, 792.0);
//! page.draw_text("Hello", 48.0, 744.0, FontVariant::Bold, 20.0, Color::black());
//! page.finish();
//! let bytes = writer.finish().unwrap();
//! assert!(bytes.starts_with(b"%PDF-1.7"));
//! ```

mod content_stream;
mod font_manager;
mod object_serializer;
mod pdf_writer;

pub use content_stream::{ContentStreamBuilder, ContentStreamOp};
pub use font_manager::{
    encode_win_ansi, win_ansi_byte, FontInfo, FontManager, FontMetrics, FontVariant,
};
pub use object_serializer::ObjectSerializer;
pub use pdf_writer::{PageBuilder, PdfWriter, PdfWriterConfig};
