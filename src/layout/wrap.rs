//! Greedy word wrapping.

use crate::writer::FontMetrics;

/// Wrap text to fit within a given width.
///
/// Words are separated by runs of whitespace and packed greedily: each word is
/// tried on the current line and, if the trial line is wider than
/// `max_width`, the current line is closed and the word starts the next one.
/// A word wider than `max_width` on its own occupies a line by itself and is
/// never broken. Empty or whitespace-only input yields exactly one empty line.
///
/// # Examples
///
/// ```
/// use clinic_export::layout::wrap_text;
/// use clinic_export::writer::{FontManager, FontVariant};
///
/// let fonts = FontManager::new();
/// let metrics = fonts.font(FontVariant::Regular);
/// assert_eq!(wrap_text("   ", 100.0, 11.0, metrics), vec![String::new()]);
/// ```
pub fn wrap_text(
    text: &str,
    max_width: f32,
    font_size: f32,
    metrics: &dyn FontMetrics,
) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current_line = String::new();

    for word in text.split_whitespace() {
        let test_line = if current_line.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current_line, word)
        };

        let width = metrics.text_width(&test_line, font_size);

        if width <= max_width || current_line.is_empty() {
            current_line = test_line;
        } else {
            lines.push(current_line);
            current_line = word.to_string();
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::{FontManager, FontVariant};

    /// Every character is 1pt wide at size 1.
    struct FixedWidth;

    impl FontMetrics for FixedWidth {
        fn text_width(&self, text: &str, font_size: f32) -> f32 {
            text.chars().count() as f32 * font_size
        }
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        assert_eq!(wrap_text("", 50.0, 1.0, &FixedWidth), vec![""]);
        assert_eq!(wrap_text(" \t\n ", 50.0, 1.0, &FixedWidth), vec![""]);
    }

    #[test]
    fn test_greedy_packing() {
        let lines = wrap_text("aaa bbb ccc ddd", 7.0, 1.0, &FixedWidth);
        assert_eq!(lines, vec!["aaa bbb", "ccc ddd"]);
    }

    #[test]
    fn test_exact_fit_stays_on_line() {
        let lines = wrap_text("abc def", 7.0, 1.0, &FixedWidth);
        assert_eq!(lines, vec!["abc def"]);
    }

    #[test]
    fn test_long_word_not_broken() {
        let lines = wrap_text("a sleeve-gastrectomy b", 5.0, 1.0, &FixedWidth);
        assert_eq!(lines, vec!["a", "sleeve-gastrectomy", "b"]);
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        let lines = wrap_text("  Patient\t\tSnapshot \n", 100.0, 1.0, &FixedWidth);
        assert_eq!(lines, vec!["Patient Snapshot"]);
    }

    #[test]
    fn test_lines_fit_with_real_metrics() {
        let fonts = FontManager::new();
        let metrics = fonts.font(FontVariant::Regular);
        let text = "Highlights of chronic conditions, current therapies, allergies, and lifestyle notes.";
        let lines = wrap_text(text, 200.0, 10.5, metrics);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(metrics.text_width(line, 10.5) <= 200.0);
        }
        assert_eq!(lines.join(" "), text);
    }
}
