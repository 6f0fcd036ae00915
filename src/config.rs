//! Configuration for patient exports.

use chrono::NaiveDate;

/// Page width in points (US Letter).
pub const DEFAULT_PAGE_WIDTH: f32 = 612.0;

/// Page height in points (US Letter).
pub const DEFAULT_PAGE_HEIGHT: f32 = 792.0;

/// Symmetric page margin in points.
pub const DEFAULT_MARGIN: f32 = 48.0;

/// Export configuration.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Page width in points.
    pub page_width: f32,

    /// Page height in points.
    pub page_height: f32,

    /// Margin applied to all four page edges.
    pub margin: f32,

    /// Product name drawn at the top of the first page.
    pub product_name: String,

    /// Subtitle drawn under the product name.
    pub subtitle: String,

    /// Suffix appended to the sanitized patient name to form the file name.
    pub file_suffix: String,

    /// Flate-compress page content streams.
    pub compress: bool,

    /// Date printed on the "Generated" line. `None` means today (UTC).
    pub generated_on: Option<NaiveDate>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self {
            page_width: DEFAULT_PAGE_WIDTH,
            page_height: DEFAULT_PAGE_HEIGHT,
            margin: DEFAULT_MARGIN,
            product_name: "AI Clinic".to_string(),
            subtitle: "Patient Care Export".to_string(),
            file_suffix: "-export.pdf".to_string(),
            compress: true,
            generated_on: None,
        }
    }

    /// Set the product name shown in the title block.
    pub fn with_product_name(mut self, name: impl Into<String>) -> Self {
        self.product_name = name.into();
        self
    }

    /// Set the subtitle shown in the title block.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    /// Enable or disable content stream compression.
    pub fn with_compress(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    /// Pin the "Generated" date instead of using today's date.
    pub fn with_generated_on(mut self, date: NaiveDate) -> Self {
        self.generated_on = Some(date);
        self
    }

    /// Resolve the "Generated" date.
    pub fn generated_date(&self) -> NaiveDate {
        self.generated_on
            .unwrap_or_else(|| chrono::Utc::now().date_naive())
    }
}
