//! Strict RFC 8259 / RFC 7493 / RFC 3629 JSON parser with resource bounds (§4.3).

mod number;
mod string;

use crate::error::{Error, ErrorClass, Result};
use crate::options::Options;
use crate::unicode::is_noncharacter;
use crate::value::Value;
use std::collections::HashMap;

pub(crate) struct Parser<'a> {
    input: &'a str,
    pos: usize,
    opts: Options,
    depth: usize,
    total_values: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str, opts: Options) -> Self {
        Self { input, pos: 0, opts, depth: 0, total_values: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn peek_at(&self, n: usize) -> Option<char> {
        self.input[self.pos..].chars().nth(n)
    }

    fn advance_char(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn offset(&self) -> i64 {
        self.pos as i64
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(' ' | '\t' | '\n' | '\r')) {
            self.advance_char();
        }
    }

    fn err(&self, class: ErrorClass, at: usize, msg: impl Into<String>) -> Error {
        Error::new(class, at as i64, msg)
    }

    fn enter_value(&mut self) -> Result<()> {
        self.total_values += 1;
        if self.total_values > self.opts.max_values() {
            return Err(self.err(
                ErrorClass::BoundExceeded,
                self.pos,
                "total value count exceeds max_values",
            ));
        }
        Ok(())
    }

    fn parse_value(&mut self) -> Result<Value> {
        self.enter_value()?;
        match self.peek() {
            Some('n') => self.parse_literal("null", Value::Null),
            Some('t') => self.parse_literal("true", Value::Bool(true)),
            Some('f') => self.parse_literal("false", Value::Bool(false)),
            Some('"') => {
                let s = string::parse_string(self)?;
                Ok(Value::String(s))
            }
            Some(c) if c == '-' || c.is_ascii_digit() => number::parse_number(self),
            Some('[') => self.parse_array(),
            Some('{') => self.parse_object(),
            Some(_) => Err(self.err(ErrorClass::InvalidGrammar, self.pos, "unexpected character")),
            None => Err(self.err(ErrorClass::InvalidGrammar, self.pos, "unexpected end of input")),
        }
    }

    fn parse_literal(&mut self, lit: &str, value: Value) -> Result<Value> {
        let start = self.pos;
        if self.input[start..].starts_with(lit) {
            self.pos += lit.len();
            Ok(value)
        } else {
            Err(self.err(ErrorClass::InvalidGrammar, start, format!("expected literal {lit:?}")))
        }
    }

    fn parse_array(&mut self) -> Result<Value> {
        let open_at = self.pos;
        self.advance_char(); // '['
        self.depth += 1;
        if self.depth > self.opts.max_depth() {
            return Err(self.err(ErrorClass::BoundExceeded, open_at, "nesting exceeds max_depth"));
        }
        let mut items = Vec::new();
        self.skip_whitespace();
        if self.peek() == Some(']') {
            self.advance_char();
            self.depth -= 1;
            return Ok(Value::Array(items));
        }
        loop {
            let value = self.parse_value()?;
            items.push(value);
            if items.len() > self.opts.max_array_elements() {
                return Err(self.err(
                    ErrorClass::BoundExceeded,
                    self.pos,
                    "array exceeds max_array_elements",
                ));
            }
            self.skip_whitespace();
            match self.peek() {
                Some(',') => {
                    self.advance_char();
                    self.skip_whitespace();
                }
                Some(']') => {
                    self.advance_char();
                    break;
                }
                Some(_) => {
                    return Err(self.err(
                        ErrorClass::InvalidGrammar,
                        self.pos,
                        "expected ',' or ']'",
                    ))
                }
                None => {
                    return Err(self.err(
                        ErrorClass::InvalidGrammar,
                        self.pos,
                        "unterminated array",
                    ))
                }
            }
        }
        self.depth -= 1;
        Ok(Value::Array(items))
    }

    fn parse_object(&mut self) -> Result<Value> {
        let open_at = self.pos;
        self.advance_char(); // '{'
        self.depth += 1;
        if self.depth > self.opts.max_depth() {
            return Err(self.err(ErrorClass::BoundExceeded, open_at, "nesting exceeds max_depth"));
        }
        let mut members: Vec<(String, Value)> = Vec::new();
        let mut seen: HashMap<String, usize> = HashMap::new();
        self.skip_whitespace();
        if self.peek() == Some('}') {
            self.advance_char();
            self.depth -= 1;
            return Ok(Value::Object(members));
        }
        loop {
            let key_start = self.pos;
            if self.peek() != Some('"') {
                return Err(self.err(ErrorClass::InvalidGrammar, self.pos, "expected string key"));
            }
            let key = string::parse_string(self)?;
            if let Some(&first_at) = seen.get(&key) {
                return Err(self.err(
                    ErrorClass::DuplicateKey,
                    key_start,
                    format!("duplicate object key {key:?} (first occurrence at byte offset {first_at})"),
                ));
            }
            seen.insert(key.clone(), key_start);
            self.skip_whitespace();
            if self.peek() != Some(':') {
                return Err(self.err(ErrorClass::InvalidGrammar, self.pos, "expected ':'"));
            }
            self.advance_char();
            self.skip_whitespace();
            let value = self.parse_value()?;
            members.push((key, value));
            if members.len() > self.opts.max_object_members() {
                return Err(self.err(
                    ErrorClass::BoundExceeded,
                    self.pos,
                    "object exceeds max_object_members",
                ));
            }
            self.skip_whitespace();
            match self.peek() {
                Some(',') => {
                    self.advance_char();
                    self.skip_whitespace();
                }
                Some('}') => {
                    self.advance_char();
                    break;
                }
                Some(_) => {
                    return Err(self.err(
                        ErrorClass::InvalidGrammar,
                        self.pos,
                        "expected ',' or '}'",
                    ))
                }
                None => {
                    return Err(self.err(
                        ErrorClass::InvalidGrammar,
                        self.pos,
                        "unterminated object",
                    ))
                }
            }
        }
        self.depth -= 1;
        Ok(Value::Object(members))
    }
}

/// Pushes a decoded Unicode scalar value onto `out`, rejecting noncharacters.
///
/// `cp` must already be known not to be a surrogate; callers classify
/// surrogate code points as `LONE_SURROGATE` before reaching here.
pub(crate) fn push_scalar(out: &mut String, cp: u32, offset: i64) -> Result<()> {
    if is_noncharacter(cp) {
        return Err(Error::new(
            ErrorClass::Noncharacter,
            offset,
            format!("string contains noncharacter U+{cp:04X}"),
        ));
    }
    let c = char::from_u32(cp)
        .ok_or_else(|| Error::new(ErrorClass::InvalidGrammar, offset, "invalid scalar value"))?;
    out.push(c);
    Ok(())
}

/// Parses `bytes` into a [`Value`] tree under the given resource bounds.
///
/// Enforces, in order (§4.3 "Phase order"): the whole-input size bound, UTF-8
/// validity, strict JSON grammar with running bound counters, and rejection
/// of any trailing content after the root value.
pub fn parse(bytes: &[u8], opts: Options) -> Result<Value> {
    let _span = tracing::trace_span!("parse", input_len = bytes.len()).entered();

    if bytes.len() > opts.max_input_size() {
        return Err(Error::non_positional(
            ErrorClass::BoundExceeded,
            "input size exceeds max_input_size",
        ));
    }

    let input = std::str::from_utf8(bytes).map_err(|e| {
        Error::new(ErrorClass::InvalidUtf8, e.valid_up_to() as i64, "input is not valid UTF-8")
    })?;

    let mut parser = Parser::new(input, opts);
    parser.skip_whitespace();
    let value = parser.parse_value()?;
    parser.skip_whitespace();
    if parser.pos != input.len() {
        return Err(parser.err(
            ErrorClass::InvalidGrammar,
            parser.pos,
            "trailing content after top-level value",
        ));
    }
    Ok(value)
}
