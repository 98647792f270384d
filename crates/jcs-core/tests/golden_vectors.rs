//! Golden-vector tests driven by the fixtures under `tests/vectors/`.
//!
//! Each fixture is one JSON file with a `description`, an `input` (the raw
//! bytes to feed to [`jcs_core::canonicalize`]), and either an
//! `expected_canonical` string or an `expected_error` class token (optionally
//! paired with an `expected_offset`). One assertion per fixture, per the
//! project's usual golden-vector style.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use jcs_core::{canonicalize, Options};

#[derive(Debug, Deserialize)]
struct GoldenVector {
    #[allow(dead_code)]
    description: String,
    input: String,
    #[serde(default)]
    expected_canonical: Option<String>,
    #[serde(default)]
    expected_error: Option<String>,
    #[serde(default)]
    expected_offset: Option<i64>,
}

fn vectors_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/vectors")
}

fn scenario_vectors() -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = fs::read_dir(vectors_dir())
        .expect("read tests/vectors")
        .filter_map(Result::ok)
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|e| e == "json"))
        .filter(|p| p.file_name().and_then(|n| n.to_str()) != Some("float_oracle.json"))
        .collect();
    files.sort();
    files
}

#[test]
fn golden_vectors() {
    let files = scenario_vectors();
    assert!(!files.is_empty(), "expected fixtures under {}", vectors_dir().display());

    for path in &files {
        let name = path.file_name().unwrap().to_string_lossy();
        let raw = fs::read_to_string(path).unwrap_or_else(|e| panic!("read {name}: {e}"));
        let vector: GoldenVector =
            serde_json::from_str(&raw).unwrap_or_else(|e| panic!("parse {name}: {e}"));

        let result = canonicalize(vector.input.as_bytes(), Options::default());

        match (&vector.expected_canonical, &vector.expected_error) {
            (Some(expected), None) => {
                let out = result.unwrap_or_else(|e| panic!("{name}: expected success, got {e}"));
                let out = String::from_utf8(out).unwrap_or_else(|e| panic!("{name}: {e}"));
                assert_eq!(out, *expected, "{name}: canonical output mismatch");
            }
            (None, Some(expected_class)) => {
                let err = result.err().unwrap_or_else(|| panic!("{name}: expected rejection"));
                assert_eq!(
                    err.class().token(),
                    expected_class,
                    "{name}: error class mismatch ({err})"
                );
                if let Some(expected_offset) = vector.expected_offset {
                    assert_eq!(err.offset(), expected_offset, "{name}: offset mismatch");
                }
            }
            _ => panic!("{name}: fixture must set exactly one of expected_canonical/expected_error"),
        }
    }
}

/// Canonicalizing twice must reproduce the same bytes for every accepted
/// fixture (idempotence, §8 property 2), independent of what the fixture
/// itself asserts.
#[test]
fn accepted_fixtures_are_idempotent() {
    for path in scenario_vectors() {
        let raw = fs::read_to_string(&path).unwrap();
        let vector: GoldenVector = serde_json::from_str(&raw).unwrap();
        if vector.expected_error.is_some() {
            continue;
        }
        let once = canonicalize(vector.input.as_bytes(), Options::default()).unwrap();
        let twice = canonicalize(&once, Options::default()).unwrap();
        assert_eq!(once, twice, "{}: canonicalize not idempotent", path.display());
    }
}
