//! UTF-16 code-unit materialization and ordering for canonical key sort (§4.4).
//!
//! RFC 8785 sorts object members by the UTF-16 code-unit encoding of their
//! (unescaped) keys, which diverges from UTF-8 byte order on supplementary
//! plane scalars: the surrogate pair for U+10000 (`D800 DC00`) sorts before
//! U+E000, while the UTF-8 bytes of the two sort the other way around.

/// Encodes a key once into its UTF-16 code units, for repeated comparisons.
pub(crate) fn encode(key: &str) -> Vec<u16> {
    key.encode_utf16().collect()
}

/// Lexicographic comparison over unsigned 16-bit code units, with the
/// shorter sequence preceding on an equal-length common prefix.
pub(crate) fn compare(a: &[u16], b: &[u16]) -> std::cmp::Ordering {
    a.cmp(b)
}
