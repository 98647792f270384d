//! Validates [`jcs_core::format_double`] against a checksum-pinned oracle
//! corpus (§8 "Oracle corpus").
//!
//! The corpus (`tests/vectors/float_oracle.json`) is an array of
//! `{bits_hex, expected}` pairs: `bits_hex` is the big-endian hex encoding of
//! the `f64`'s bit pattern, `expected` is the string an independent
//! ECMAScript `Number.prototype.toString` implementation produces for it.
//! The SHA-256 digest of the fixture file is asserted first, so an
//! accidental edit to the fixture fails loudly instead of silently changing
//! what "passing" means. This seed corpus ships a few hundred vectors; a
//! full tens-of-thousands-vector corpus can be dropped into the same file
//! with no code changes here.

use serde::Deserialize;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

const FIXTURE_SHA256: &str = "370c4c2e40d048f5fb90c416ab590edbb1771e147d18f92b27c9177be9761ced";

#[derive(Debug, Deserialize)]
struct OracleVector {
    bits_hex: String,
    expected: String,
}

fn fixture_path() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/vectors/float_oracle.json")
}

#[test]
fn fixture_checksum_is_pinned() {
    let raw = fs::read(fixture_path()).expect("read float_oracle.json");
    let digest = Sha256::digest(&raw);
    assert_eq!(
        hex::encode(digest),
        FIXTURE_SHA256,
        "float_oracle.json changed; update FIXTURE_SHA256 only if the corpus was intentionally regenerated"
    );
}

#[test]
fn format_double_matches_oracle_corpus() {
    let raw = fs::read_to_string(fixture_path()).expect("read float_oracle.json");
    let vectors: Vec<OracleVector> = serde_json::from_str(&raw).expect("parse float_oracle.json");
    assert!(vectors.len() >= 100, "oracle corpus unexpectedly small");

    for v in &vectors {
        let bits = u64::from_str_radix(&v.bits_hex, 16)
            .unwrap_or_else(|e| panic!("bad bits_hex {:?}: {e}", v.bits_hex));
        let f = f64::from_bits(bits);
        let actual = jcs_core::format_double(f)
            .unwrap_or_else(|e| panic!("format_double({:#018x}) failed: {e}", bits));
        assert_eq!(actual, v.expected, "mismatch for bit pattern {:#018x}", bits);
    }
}
