//! RFC 8785 canonical serializer: `Value` tree → canonical UTF-8 bytes (§4.4).

use crate::error::Result;
use crate::float::format_double;
use crate::options::Options;
use crate::utf16;
use crate::value::Value;

/// Serializes `value` into its RFC 8785 canonical byte sequence.
///
/// Re-validates the tree under `opts` first (defense in depth: a tree built
/// by hand, rather than by [`crate::parser::parse`], could otherwise smuggle
/// a NaN, a duplicate key, or a lone surrogate past the serializer).
pub fn serialize(value: &Value, opts: Options) -> Result<Vec<u8>> {
    let _span = tracing::trace_span!("serialize").entered();
    value.validate(opts)?;
    let mut out = Vec::with_capacity(256);
    write_value(value, &mut out)?;
    Ok(out)
}

fn write_value(v: &Value, out: &mut Vec<u8>) -> Result<()> {
    match v {
        Value::Null => out.extend_from_slice(b"null"),
        Value::Bool(true) => out.extend_from_slice(b"true"),
        Value::Bool(false) => out.extend_from_slice(b"false"),
        Value::Number(n) => write_number(*n, out)?,
        Value::String(s) => write_string(s, out),
        Value::Array(items) => {
            out.push(b'[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                write_value(item, out)?;
            }
            out.push(b']');
        }
        Value::Object(members) => write_object(members, out)?,
    }
    Ok(())
}

fn write_number(n: f64, out: &mut Vec<u8>) -> Result<()> {
    let s = format_double(n)?;
    out.extend_from_slice(s.as_bytes());
    Ok(())
}

/// Sorts members by the UTF-16 code-unit order of their raw (unescaped) key
/// (§4.4), materializing each key's code units once rather than per-comparison.
fn write_object(members: &[(String, Value)], out: &mut Vec<u8>) -> Result<()> {
    let mut ordered: Vec<(&String, Vec<u16>, &Value)> = members
        .iter()
        .map(|(k, v)| (k, utf16::encode(k), v))
        .collect();
    ordered.sort_by(|a, b| utf16::compare(&a.1, &b.1));

    out.push(b'{');
    for (i, (key, _, value)) in ordered.iter().enumerate() {
        if i > 0 {
            out.push(b',');
        }
        write_string(key, out);
        out.push(b':');
        write_value(value, out)?;
    }
    out.push(b'}');
    Ok(())
}

/// Escapes a decoded string per RFC 8785 §3.2.2.2.
fn write_string(s: &str, out: &mut Vec<u8>) {
    out.push(b'"');
    for c in s.chars() {
        match c {
            '"' => out.extend_from_slice(b"\\\""),
            '\\' => out.extend_from_slice(b"\\\\"),
            '\u{8}' => out.extend_from_slice(b"\\b"),
            '\u{9}' => out.extend_from_slice(b"\\t"),
            '\u{A}' => out.extend_from_slice(b"\\n"),
            '\u{C}' => out.extend_from_slice(b"\\f"),
            '\u{D}' => out.extend_from_slice(b"\\r"),
            c if (c as u32) <= 0x1F => {
                out.extend_from_slice(format!("\\u{:04x}", c as u32).as_bytes());
            }
            c => {
                let mut buf = [0u8; 4];
                out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            }
        }
    }
    out.push(b'"');
}
