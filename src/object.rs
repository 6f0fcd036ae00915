//! PDF object model for the writer.
//!
//! Only the object kinds an export emits are modelled. Dictionaries are
//! ordered maps so serialized output is deterministic.

use std::collections::BTreeMap;

/// Dictionary entries keyed by name (without the leading `/`).
pub type Dictionary = BTreeMap<String, Object>;

/// A PDF object.
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    Integer(i64),
    Real(f64),
    /// String bytes, already in the target encoding
    String(Vec<u8>),
    /// Name without the leading `/`
    Name(String),
    Array(Vec<Object>),
    Dictionary(Dictionary),
    /// Stream dictionary and (possibly filtered) data
    Stream { dict: Dictionary, data: bytes::Bytes },
    Reference(ObjectRef),
}

/// Reference to an indirect object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectRef {
    /// Object number
    pub id: u32,
    /// Generation number
    pub gen: u16,
}

impl ObjectRef {
    pub fn new(id: u32, gen: u16) -> Self {
        Self { id, gen }
    }
}

impl std::fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} R", self.id, self.gen)
    }
}

impl From<ObjectRef> for Object {
    fn from(r: ObjectRef) -> Self {
        Object::Reference(r)
    }
}

impl From<i64> for Object {
    fn from(i: i64) -> Self {
        Object::Integer(i)
    }
}

impl Object {
    /// A name object.
    pub fn name(name: &str) -> Self {
        Object::Name(name.to_string())
    }

    /// A text string for document-level fields such as the Info dictionary.
    ///
    /// ASCII text is stored as-is; anything else is UTF-16BE with a byte
    /// order mark, which readers decode independently of page fonts.
    pub fn text(text: &str) -> Self {
        if text.is_ascii() {
            return Object::String(text.as_bytes().to_vec());
        }
        let mut bytes = vec![0xFE, 0xFF];
        for unit in text.encode_utf16() {
            bytes.extend_from_slice(&unit.to_be_bytes());
        }
        Object::String(bytes)
    }

    /// A dictionary built from `(key, value)` pairs.
    pub fn dict<'a>(entries: impl IntoIterator<Item = (&'a str, Object)>) -> Self {
        Object::Dictionary(
            entries
                .into_iter()
                .map(|(key, value)| (key.to_string(), value))
                .collect(),
        )
    }

    /// A `[llx lly urx ury]` box anchored at the origin.
    pub fn media_box(width: f32, height: f32) -> Self {
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(width as f64),
            Object::Real(height as f64),
        ])
    }

    /// Dictionary of a dictionary or stream object.
    pub fn as_dict(&self) -> Option<&Dictionary> {
        match self {
            Object::Dictionary(d) => Some(d),
            Object::Stream { dict, .. } => Some(dict),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_ref_display() {
        assert_eq!(ObjectRef::new(12, 0).to_string(), "12 0 R");
    }

    #[test]
    fn test_dict_keeps_keys_sorted() {
        let dict = Object::dict([("Type", Object::name("Page")), ("Contents", Object::from(4))]);
        let keys: Vec<_> = dict.as_dict().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["Contents", "Type"]);
    }

    #[test]
    fn test_ascii_text_kept_verbatim() {
        assert_eq!(Object::text("AI Clinic"), Object::String(b"AI Clinic".to_vec()));
    }

    #[test]
    fn test_non_ascii_text_is_utf16_with_bom() {
        assert_eq!(
            Object::text("O’B"),
            Object::String(vec![0xFE, 0xFF, 0x00, b'O', 0x20, 0x19, 0x00, b'B'])
        );
        let Object::String(bytes) = Object::text("سارة") else {
            panic!("expected a string");
        };
        assert_eq!(&bytes[..4], &[0xFE, 0xFF, 0x06, 0x33]);
        assert_eq!(bytes.len(), 2 + 2 * 4);
    }

    #[test]
    fn test_stream_exposes_dict() {
        let stream = Object::Stream {
            dict: Dictionary::from([("Length".to_string(), Object::Integer(3))]),
            data: bytes::Bytes::from_static(b"abc"),
        };
        assert!(stream.as_dict().is_some_and(|d| d.contains_key("Length")));
        assert!(Object::name("Font").as_dict().is_none());
    }
}
