//! Download file names.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref DISALLOWED: Regex = Regex::new(r"[^a-zA-Z0-9\-_ ]").expect("valid regex");
    static ref SEPARATORS: Regex = Regex::new(r"[\s-]+").expect("valid regex");
}

/// Keep ASCII letters, digits, `-`, `_` and spaces, then collapse runs of
/// spaces and hyphens into a single `-`. The result never starts or ends
/// with `-`.
pub fn sanitize_file_name(name: &str) -> String {
    let kept = DISALLOWED.replace_all(name, "");
    let joined = SEPARATORS.replace_all(kept.trim(), "-");
    joined.trim_matches('-').to_string()
}

/// File name for a patient export, e.g. "Jane-Doe-export.pdf".
pub fn export_file_name(stem: &str, suffix: &str) -> String {
    let stem = sanitize_file_name(stem);
    let stem = if stem.is_empty() { "patient" } else { stem.as_str() };
    format!("{}{}", stem, suffix)
}
