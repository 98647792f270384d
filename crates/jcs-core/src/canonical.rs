//! Top-level `canonicalize` and `verify` operations (§4.5).

use crate::error::{Error, ErrorClass, Result};
use crate::options::Options;
use crate::parser::parse;
use crate::serializer::serialize;

/// Parses `bytes` and re-serializes the result into RFC 8785 canonical form.
pub fn canonicalize(bytes: &[u8], opts: Options) -> Result<Vec<u8>> {
    let _span = tracing::trace_span!("canonicalize").entered();
    let value = parse(bytes, opts)?;
    serialize(&value, opts)
}

/// Succeeds iff `bytes` already equals its own canonical form, byte for byte.
///
/// Any insignificant whitespace, non-canonical member order, or trailing
/// content makes this fail with `NOT_CANONICAL`, even if `bytes` parses
/// successfully.
pub fn verify(bytes: &[u8], opts: Options) -> Result<()> {
    let _span = tracing::trace_span!("verify").entered();
    let canonical = canonicalize(bytes, opts)?;
    if canonical == bytes {
        Ok(())
    } else {
        tracing::debug!(class = ErrorClass::NotCanonical.token(), "input bytes are not canonical");
        Err(Error::non_positional(ErrorClass::NotCanonical, "input is not in canonical form"))
    }
}
