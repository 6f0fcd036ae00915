//! Page layout and section rendering.
//!
//! Rendering is synchronous and single-owner: one [`RenderContext`] per
//! export holds the pages and the write cursor, and every renderer receives
//! it by mutable reference.

pub mod chart;
pub mod context;
pub mod document;
pub mod format;
pub mod sections;

pub use chart::{bmi_series, draw_bmi_chart, BmiAxis, BmiReading, ChartOptions};
pub use context::{RenderContext, TextStyle};
pub use document::{Document, DrawOp, Page};
pub use format::{format_date, format_day, FieldDisplay, NOT_RECORDED};
pub use sections::{
    render_section, render_title_block, SectionData, SectionId, SectionOptions, SectionRenderer,
};
