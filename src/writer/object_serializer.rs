//! Serialization of [`Object`]s to PDF syntax.

use crate::object::{Dictionary, Object};
use std::io::{self, Write};

/// Writes objects in compact PDF syntax.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectSerializer;

impl ObjectSerializer {
    pub fn new() -> Self {
        Self
    }

    /// Serialize a direct object.
    pub fn serialize(&self, obj: &Object) -> io::Result<Vec<u8>> {
        let mut buf = Vec::new();
        write_object(&mut buf, obj)?;
        Ok(buf)
    }

    /// Serialize an indirect object definition (`N G obj ... endobj`).
    pub fn serialize_indirect(&self, id: u32, gen: u16, obj: &Object) -> io::Result<Vec<u8>> {
        let mut buf = Vec::new();
        writeln!(buf, "{} {} obj", id, gen)?;
        write_object(&mut buf, obj)?;
        buf.extend_from_slice(b"\nendobj\n");
        Ok(buf)
    }
}

fn write_object<W: Write>(w: &mut W, obj: &Object) -> io::Result<()> {
    match obj {
        Object::Integer(i) => write!(w, "{}", i),
        Object::Real(r) => write_real(w, *r),
        Object::String(bytes) => write_string(w, bytes),
        Object::Name(name) => write_name(w, name),
        Object::Array(items) => {
            w.write_all(b"[")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    w.write_all(b" ")?;
                }
                write_object(w, item)?;
            }
            w.write_all(b"]")
        },
        Object::Dictionary(dict) => write_dictionary(w, dict),
        Object::Stream { dict, data } => {
            let mut dict = dict.clone();
            dict.entry("Length".to_string())
                .or_insert(Object::Integer(data.len() as i64));
            write_dictionary(w, &dict)?;
            w.write_all(b"\nstream\n")?;
            w.write_all(data)?;
            w.write_all(b"\nendstream")
        },
        Object::Reference(r) => write!(w, "{}", r),
    }
}

/// Integers print without a fraction; other values keep at most 4 decimals.
fn write_real<W: Write>(w: &mut W, value: f64) -> io::Result<()> {
    if value.fract() == 0.0 {
        return write!(w, "{}", value as i64);
    }
    let formatted = format!("{:.4}", value);
    write!(w, "{}", formatted.trim_end_matches('0').trim_end_matches('.'))
}

/// Literal `(...)` string for printable text, hex `<...>` otherwise.
fn write_string<W: Write>(w: &mut W, bytes: &[u8]) -> io::Result<()> {
    if bytes.iter().all(|b| (0x20..=0x7E).contains(b)) {
        w.write_all(b"(")?;
        for &byte in bytes {
            if matches!(byte, b'(' | b')' | b'\\') {
                w.write_all(b"\\")?;
            }
            w.write_all(&[byte])?;
        }
        w.write_all(b")")
    } else {
        w.write_all(b"<")?;
        for byte in bytes {
            write!(w, "{:02X}", byte)?;
        }
        w.write_all(b">")
    }
}

/// `/Name`, with delimiters, `#` and non-printable bytes written as `#XX`.
fn write_name<W: Write>(w: &mut W, name: &str) -> io::Result<()> {
    w.write_all(b"/")?;
    for byte in name.bytes() {
        let delimiter = matches!(
            byte,
            b'(' | b')' | b'<' | b'>' | b'[' | b']' | b'{' | b'}' | b'/' | b'%' | b'#'
        );
        if (b'!'..=b'~').contains(&byte) && !delimiter {
            w.write_all(&[byte])?;
        } else {
            write!(w, "#{:02X}", byte)?;
        }
    }
    Ok(())
}

fn write_dictionary<W: Write>(w: &mut W, dict: &Dictionary) -> io::Result<()> {
    w.write_all(b"<<")?;
    for (key, value) in dict {
        write_name(w, key)?;
        w.write_all(b" ")?;
        write_object(w, value)?;
    }
    w.write_all(b">>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::ObjectRef;

    fn render(obj: &Object) -> String {
        String::from_utf8_lossy(&ObjectSerializer::new().serialize(obj).unwrap()).to_string()
    }

    #[test]
    fn test_numbers() {
        assert_eq!(render(&Object::Integer(-123)), "-123");
        assert_eq!(render(&Object::Real(612.0)), "612");
        assert_eq!(render(&Object::Real(0.5)), "0.5");
        assert_eq!(render(&Object::Real(3.14159)), "3.1416");
    }

    #[test]
    fn test_strings() {
        assert_eq!(render(&Object::text("Hello")), "(Hello)");
        assert_eq!(render(&Object::text("AI Clinic (export)")), "(AI Clinic \\(export\\))");
        assert_eq!(render(&Object::String(b"Caf\xE9".to_vec())), "<436166E9>");
        assert_eq!(render(&Object::text("Café")), "<FEFF00430061006600E9>");
    }

    #[test]
    fn test_names() {
        assert_eq!(render(&Object::name("Type")), "/Type");
        assert_eq!(render(&Object::name("Name With Space")), "/Name#20With#20Space");
        assert_eq!(render(&Object::name("A/B")), "/A#2FB");
    }

    #[test]
    fn test_dictionary() {
        let dict = Object::dict([
            ("Type", Object::name("Page")),
            ("Parent", Object::from(ObjectRef::new(2, 0))),
            ("MediaBox", Object::media_box(612.0, 792.0)),
        ]);
        assert_eq!(render(&dict), "<</MediaBox [0 0 612 792]/Parent 2 0 R/Type /Page>>");
    }

    #[test]
    fn test_indirect() {
        let bytes = ObjectSerializer::new()
            .serialize_indirect(1, 0, &Object::Integer(42))
            .unwrap();
        assert_eq!(bytes, b"1 0 obj\n42\nendobj\n");
    }

    #[test]
    fn test_stream_adds_length() {
        let stream = Object::Stream {
            dict: Dictionary::from([("Filter".to_string(), Object::name("FlateDecode"))]),
            data: bytes::Bytes::from_static(b"stream data"),
        };
        let result = render(&stream);
        assert!(result.starts_with("<</Filter /FlateDecode/Length 11>>"));
        assert!(result.ends_with("\nstream\nstream data\nendstream"));
    }
}
