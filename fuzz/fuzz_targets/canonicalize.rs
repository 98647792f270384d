//! Fuzz target for RFC 8785 canonicalization.
//!
//! Goals:
//! - No panics on arbitrary bytes
//! - No memory corruption
//! - Idempotence: canonicalize(canonicalize(x)) == canonicalize(x) whenever
//!   `parse` accepts `x` in the first place

#![no_main]
use jcs_core::{canonicalize, parse, serialize, Options};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let opts = Options::default();

    let Ok(value) = parse(data, opts) else {
        return; // malformed or out-of-bounds input, nothing to check
    };

    let canon = serialize(&value, opts).expect("parser output must satisfy serializer invariants");

    // Re-parsing the canonical bytes must succeed and re-canonicalize to the
    // same bytes (idempotence).
    let canon2 = canonicalize(&canon, opts).expect("canonical output must re-canonicalize");
    assert_eq!(canon, canon2, "canonicalization not idempotent");
});
