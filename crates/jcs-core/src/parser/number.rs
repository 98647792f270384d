use super::Parser;
use crate::error::{ErrorClass, Result};
use crate::value::Value;

/// Lexes and evaluates an RFC 8259 number token starting at the current
/// position, applying the I-JSON-adjacent rejections of §4.3: lexical
/// negative zero, binary64 overflow, and binary64 underflow.
pub(super) fn parse_number(p: &mut Parser<'_>) -> Result<Value> {
    let start = p.pos;
    let mut any_nonzero = false;
    let negative = p.peek() == Some('-');
    if negative {
        p.advance_char();
    }

    match p.peek() {
        Some('0') => {
            p.advance_char();
        }
        Some(c) if c.is_ascii_digit() => {
            if c != '0' {
                any_nonzero = true;
            }
            p.advance_char();
            while let Some(c) = p.peek() {
                if !c.is_ascii_digit() {
                    break;
                }
                if c != '0' {
                    any_nonzero = true;
                }
                p.advance_char();
            }
        }
        _ => {
            return Err(p.err(ErrorClass::InvalidGrammar, start, "invalid number literal"));
        }
    }

    if p.peek() == Some('.') {
        p.advance_char();
        if !matches!(p.peek(), Some(c) if c.is_ascii_digit()) {
            return Err(p.err(ErrorClass::InvalidGrammar, start, "missing fraction digits"));
        }
        while let Some(c) = p.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            if c != '0' {
                any_nonzero = true;
            }
            p.advance_char();
        }
    }

    if matches!(p.peek(), Some('e' | 'E')) {
        p.advance_char();
        if matches!(p.peek(), Some('+' | '-')) {
            p.advance_char();
        }
        if !matches!(p.peek(), Some(c) if c.is_ascii_digit()) {
            return Err(p.err(ErrorClass::InvalidGrammar, start, "missing exponent digits"));
        }
        while matches!(p.peek(), Some(c) if c.is_ascii_digit()) {
            p.advance_char();
        }
    }

    let end = p.pos;
    let token = &p.input[start..end];
    if token.len() > p.opts.max_number_chars() {
        return Err(p.err(ErrorClass::BoundExceeded, start, "number token exceeds max_number_chars"));
    }

    if negative && !any_nonzero {
        return Err(p.err(ErrorClass::NumberNegZero, start, "lexically negative zero"));
    }

    let value: f64 = token
        .parse()
        .map_err(|_| p.err(ErrorClass::InvalidGrammar, start, "malformed number literal"))?;

    if value.is_infinite() {
        return Err(p.err(ErrorClass::NumberOverflow, start, "number overflows binary64"));
    }
    if value == 0.0 && any_nonzero {
        return Err(p.err(ErrorClass::NumberUnderflow, start, "nonzero number underflows to zero"));
    }

    Ok(Value::Number(value))
}
