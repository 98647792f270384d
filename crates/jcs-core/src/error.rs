use thiserror::Error;

/// Sentinel offset used for failures that are not tied to a single source byte
/// (e.g. a whole-input size bound, or an internal invariant violation).
pub const NO_OFFSET: i64 = -1;

/// The closed set of failure classes this crate ever produces.
///
/// New variants are an ABI break: consumers match on this exhaustively to map
/// classes to exit codes, so the set is deliberately closed (§4.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    /// Input bytes are not valid UTF-8.
    InvalidUtf8,
    /// RFC 8259 grammar violation.
    InvalidGrammar,
    /// Two object members share a key after escape decoding.
    DuplicateKey,
    /// An unpaired UTF-16 surrogate, raw or via `\u`.
    LoneSurrogate,
    /// A decoded string contains a Unicode noncharacter.
    Noncharacter,
    /// A number token evaluates to infinity in binary64.
    NumberOverflow,
    /// A number token is lexically negative zero.
    NumberNegZero,
    /// A nonzero number token rounds to binary64 zero.
    NumberUnderflow,
    /// A configured resource bound was exceeded.
    BoundExceeded,
    /// `verify` only: input parses but is not byte-identical to its canonical form.
    NotCanonical,
    /// CLI argument/usage error (unrecognized flag, bad path, multiple inputs).
    CliUsage,
    /// Output I/O failed (write error, broken pipe).
    InternalIo,
    /// Defensive: an invariant the core itself is supposed to guarantee broke.
    InternalError,
}

impl ErrorClass {
    /// The stable ASCII token printed on `stderr` by the CLI collaborator.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::InvalidUtf8 => "INVALID_UTF8",
            Self::InvalidGrammar => "INVALID_GRAMMAR",
            Self::DuplicateKey => "DUPLICATE_KEY",
            Self::LoneSurrogate => "LONE_SURROGATE",
            Self::Noncharacter => "NONCHARACTER",
            Self::NumberOverflow => "NUMBER_OVERFLOW",
            Self::NumberNegZero => "NUMBER_NEGZERO",
            Self::NumberUnderflow => "NUMBER_UNDERFLOW",
            Self::BoundExceeded => "BOUND_EXCEEDED",
            Self::NotCanonical => "NOT_CANONICAL",
            Self::CliUsage => "CLI_USAGE",
            Self::InternalIo => "INTERNAL_IO",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }

    /// The process exit code this class maps to (§4.1): `2` for input-domain
    /// rejections and CLI usage errors, `10` for the two internal classes.
    #[must_use]
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::InternalIo | Self::InternalError => 10,
            _ => 2,
        }
    }
}

impl std::fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

/// A classified failure: a class, a source-byte offset (or [`NO_OFFSET`]), and
/// a human-readable message.
///
/// The message wording is explicitly not stable across versions; only `class`
/// and `offset` are part of the contract (§4.1, §7).
#[derive(Debug, Clone, Error)]
#[error("{class}: {message}")]
pub struct Error {
    class: ErrorClass,
    offset: i64,
    message: String,
}

impl Error {
    /// Builds a new classified error at a given source-byte offset.
    pub fn new(class: ErrorClass, offset: i64, message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::debug!(class = class.token(), offset, %message, "jcs rejection");
        Self { class, offset, message }
    }

    /// Builds a new classified error with no associated source position.
    pub fn non_positional(class: ErrorClass, message: impl Into<String>) -> Self {
        Self::new(class, NO_OFFSET, message)
    }

    /// The failure class.
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        self.class
    }

    /// The zero-based source byte at which the violation was detected, or
    /// [`NO_OFFSET`] for non-positional failures.
    #[must_use]
    pub const fn offset(&self) -> i64 {
        self.offset
    }

    /// The (unstable-wording) human message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
