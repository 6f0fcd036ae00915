//! Font management for PDF generation.
//!
//! Exports are drawn with the Base-14 Helvetica family, so no font program is
//! embedded. This module carries the standard Helvetica and Helvetica-Bold
//! advance widths used for line wrapping and alignment, and the WinAnsi
//! encoding that page text is written in.

use std::collections::HashMap;

/// Width used for characters missing from the metrics table (1/1000 em).
const DEFAULT_CHAR_WIDTH: f32 = 500.0;

/// Font variant used by a text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontVariant {
    /// Helvetica
    #[default]
    Regular,
    /// Helvetica-Bold
    Bold,
}

impl FontVariant {
    /// All variants, in resource order.
    pub const ALL: [FontVariant; 2] = [FontVariant::Regular, FontVariant::Bold];

    /// Base-14 font name.
    pub fn base_font(self) -> &'static str {
        match self {
            FontVariant::Regular => "Helvetica",
            FontVariant::Bold => "Helvetica-Bold",
        }
    }

    /// Name of the font in page resource dictionaries.
    pub fn resource_name(self) -> &'static str {
        match self {
            FontVariant::Regular => "F1",
            FontVariant::Bold => "F2",
        }
    }
}

/// Text measurement.
pub trait FontMetrics {
    /// Calculate the width of text in points.
    fn text_width(&self, text: &str, font_size: f32) -> f32;
}

/// Information about a font.
#[derive(Debug, Clone)]
pub struct FontInfo {
    /// Font name (e.g., "Helvetica-Bold")
    pub name: String,
    /// Character widths in 1/1000 of font size
    widths: HashMap<char, f32>,
}

impl FontInfo {
    /// Create the metrics for a Base-14 Helvetica variant.
    fn base14(variant: FontVariant) -> Self {
        Self {
            name: variant.base_font().to_string(),
            widths: helvetica_widths(variant),
        }
    }

    /// Get the width of a single character in font units (1/1000 of em).
    ///
    /// Characters WinAnsi cannot encode are drawn as `?` and measured as such.
    pub fn char_width(&self, ch: char) -> f32 {
        let ch = if win_ansi_byte(ch).is_some() { ch } else { '?' };
        self.widths.get(&ch).copied().unwrap_or(DEFAULT_CHAR_WIDTH)
    }
}

impl FontMetrics for FontInfo {
    fn text_width(&self, text: &str, font_size: f32) -> f32 {
        let width_units: f32 = text.chars().map(|c| self.char_width(c)).sum();
        width_units * font_size / 1000.0
    }
}

/// Font manager for PDF generation.
///
/// Holds metrics for the two fonts an export uses.
#[derive(Debug, Clone)]
pub struct FontManager {
    regular: FontInfo,
    bold: FontInfo,
}

impl FontManager {
    /// Create a font manager with Helvetica and Helvetica-Bold.
    pub fn new() -> Self {
        Self {
            regular: FontInfo::base14(FontVariant::Regular),
            bold: FontInfo::base14(FontVariant::Bold),
        }
    }

    /// Get the metrics for a variant.
    pub fn font(&self, variant: FontVariant) -> &FontInfo {
        match variant {
            FontVariant::Regular => &self.regular,
            FontVariant::Bold => &self.bold,
        }
    }

    /// Calculate text width in points.
    pub fn text_width(&self, text: &str, variant: FontVariant, font_size: f32) -> f32 {
        self.font(variant).text_width(text, font_size)
    }
}

impl Default for FontManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a character to its WinAnsiEncoding byte.
pub fn win_ansi_byte(ch: char) -> Option<u8> {
    match ch {
        ' '..='~' => Some(ch as u8),
        '\u{A0}'..='\u{FF}' => Some(ch as u32 as u8),
        '€' => Some(0x80),
        '‚' => Some(0x82),
        '„' => Some(0x84),
        '…' => Some(0x85),
        '‘' => Some(0x91),
        '’' => Some(0x92),
        '“' => Some(0x93),
        '”' => Some(0x94),
        '•' => Some(0x95),
        '–' => Some(0x96),
        '—' => Some(0x97),
        '™' => Some(0x99),
        _ => None,
    }
}

/// Encode text as WinAnsi bytes.
///
/// Tabs and line breaks become spaces; anything else outside the encoding
/// becomes `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| match ch {
            '\t' | '\n' | '\r' => b' ',
            _ => win_ansi_byte(ch).unwrap_or(b'?'),
        })
        .collect()
}

/// Standard PostScript advance widths for Helvetica, in units of 1/1000 em.
fn helvetica_widths(variant: FontVariant) -> HashMap<char, f32> {
    let bold = variant == FontVariant::Bold;
    let mut widths = HashMap::new();

    // Whitespace and punctuation
    let punctuation: [(char, f32); 34] = [
        (' ', 278.0),
        ('.', 278.0),
        (',', 278.0),
        ('-', 333.0),
        (':', if bold { 333.0 } else { 278.0 }),
        (';', if bold { 333.0 } else { 278.0 }),
        ('!', 333.0),
        ('?', if bold { 611.0 } else { 556.0 }),
        ('\'', if bold { 238.0 } else { 191.0 }),
        ('"', if bold { 474.0 } else { 355.0 }),
        ('(', 333.0),
        (')', 333.0),
        ('[', 333.0),
        (']', 333.0),
        ('{', if bold { 389.0 } else { 334.0 }),
        ('}', if bold { 389.0 } else { 334.0 }),
        ('/', 278.0),
        ('\\', 278.0),
        ('@', if bold { 975.0 } else { 1015.0 }),
        ('#', 556.0),
        ('$', 556.0),
        ('%', 889.0),
        ('^', if bold { 584.0 } else { 469.0 }),
        ('&', 722.0),
        ('*', 389.0),
        ('+', 584.0),
        ('=', 584.0),
        ('<', 584.0),
        ('>', 584.0),
        ('|', if bold { 280.0 } else { 260.0 }),
        ('`', 333.0),
        ('~', 584.0),
        ('_', 556.0),
        ('•', 350.0),
    ];
    widths.extend(punctuation);

    for digit in '0'..='9' {
        widths.insert(digit, 556.0);
    }

    let uppercase: [f32; 26] = if bold {
        [
            722.0, 722.0, 722.0, 722.0, 667.0, 611.0, 778.0, 722.0, 278.0, 556.0, 722.0, 611.0,
            833.0, 722.0, 778.0, 667.0, 778.0, 722.0, 667.0, 611.0, 722.0, 667.0, 944.0, 667.0,
            667.0, 611.0,
        ]
    } else {
        [
            667.0, 667.0, 722.0, 722.0, 667.0, 611.0, 778.0, 722.0, 278.0, 500.0, 667.0, 556.0,
            833.0, 722.0, 778.0, 667.0, 778.0, 722.0, 667.0, 611.0, 722.0, 667.0, 944.0, 667.0,
            667.0, 611.0,
        ]
    };
    widths.extend(('A'..='Z').zip(uppercase));

    let lowercase: [f32; 26] = if bold {
        [
            556.0, 611.0, 556.0, 611.0, 556.0, 333.0, 611.0, 611.0, 278.0, 278.0, 556.0, 278.0,
            889.0, 611.0, 611.0, 611.0, 611.0, 389.0, 556.0, 333.0, 611.0, 556.0, 778.0, 556.0,
            556.0, 500.0,
        ]
    } else {
        [
            556.0, 556.0, 500.0, 556.0, 556.0, 278.0, 556.0, 556.0, 222.0, 222.0, 500.0, 222.0,
            833.0, 556.0, 556.0, 556.0, 556.0, 333.0, 500.0, 278.0, 556.0, 500.0, 722.0, 500.0,
            500.0, 500.0,
        ]
    };
    widths.extend(('a'..='z').zip(lowercase));

    widths
}
