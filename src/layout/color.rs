//! RGB colors and the fixed export palette.

/// RGB color with channels in 0.0 - 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel (0.0 - 1.0)
    pub r: f32,
    /// Green channel (0.0 - 1.0)
    pub g: f32,
    /// Blue channel (0.0 - 1.0)
    pub b: f32,
}

impl Color {
    /// Create a new color.
    ///
    /// # Examples
    ///
    /// ```
    /// use clinic_export::layout::Color;
    ///
    /// let muted = Color::new(0.35, 0.38, 0.42);
    /// assert_eq!(muted.g, 0.38);
    /// ```
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create a black color.
    pub const fn black() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Create a white color.
    pub const fn white() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }
}

/// Colors used by the export renderers, grouped by role.
pub mod palette {
    use super::Color;

    /// Default text line color.
    pub const TEXT: Color = Color::new(0.1, 0.1, 0.12);
    /// Default wrapped paragraph color.
    pub const BODY: Color = Color::new(0.18, 0.2, 0.22);
    /// Detail lines and chart date labels.
    pub const MUTED: Color = Color::new(0.35, 0.38, 0.42);

    /// Product name in the title block.
    pub const BRAND: Color = Color::new(0.08, 0.15, 0.3);
    /// Subtitle in the title block.
    pub const SUBTITLE: Color = Color::new(0.25, 0.3, 0.35);
    /// Divider under the title block.
    pub const TITLE_RULE: Color = Color::new(0.75, 0.77, 0.8);

    /// Section headings.
    pub const SECTION_TITLE: Color = Color::new(0.05, 0.1, 0.2);
    /// Rule under section headings.
    pub const SECTION_RULE: Color = Color::new(0.82, 0.84, 0.86);
    /// Background subgroup headings.
    pub const SUBHEADING: Color = Color::new(0.1, 0.2, 0.3);
    /// Key/value labels.
    pub const LABEL: Color = Color::new(0.15, 0.2, 0.25);
    /// Bullet glyphs.
    pub const BULLET: Color = Color::new(0.2, 0.25, 0.3);

    /// Chart titles.
    pub const CHART_TITLE: Color = Color::new(0.08, 0.16, 0.3);
    /// Chart box border.
    pub const CHART_BORDER: Color = Color::new(0.85, 0.86, 0.88);
    /// Chart box fill.
    pub const CHART_FILL: Color = Color::new(0.98, 0.985, 0.99);
    /// Empty chart message.
    pub const CHART_EMPTY: Color = Color::new(0.4, 0.45, 0.5);
    /// Healthy BMI band.
    pub const HEALTHY_BAND: Color = Color::new(0.88, 0.96, 0.9);
    /// "Healthy range" label.
    pub const HEALTHY_LABEL: Color = Color::new(0.2, 0.55, 0.3);
    /// Chart axes.
    pub const AXIS: Color = Color::new(0.7, 0.72, 0.74);
    /// "BMI" axis label.
    pub const AXIS_LABEL: Color = Color::new(0.3, 0.32, 0.35);
    /// Trend line segments.
    pub const SERIES_LINE: Color = Color::new(0.15, 0.4, 0.8);
    /// Point markers.
    pub const SERIES_POINT: Color = Color::new(0.1, 0.3, 0.7);
}
