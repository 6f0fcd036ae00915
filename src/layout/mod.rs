//! Text layout helpers: colors and word wrapping.

pub mod color;
mod wrap;

pub use color::{palette, Color};
pub use wrap::wrap_text;
