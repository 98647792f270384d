#![forbid(unsafe_code)]
//! RFC 8785 JSON Canonicalization Scheme: a strict parser, an ECMA-262
//! shortest-round-trip float formatter, and a canonical serializer.
//!
//! The four layers compose into two public operations: [`canonicalize`]
//! (parse, then serialize) and [`verify`] (canonicalize, then byte-compare
//! against the input). Nothing here touches a clock, an environment
//! variable, or the filesystem; [`Options`] is the only configuration
//! surface, and it is a plain value passed by the caller.

mod canonical;
mod error;
mod float;
mod options;
mod parser;
mod serializer;
mod unicode;
mod utf16;
mod value;

pub use canonical::{canonicalize, verify};
pub use error::{Error, ErrorClass, Result, NO_OFFSET};
pub use float::format_double;
pub use options::Options;
pub use parser::parse;
pub use serializer::serialize;
pub use value::Value;
