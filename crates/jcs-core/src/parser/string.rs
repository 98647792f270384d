use super::{push_scalar, Parser};
use crate::error::{ErrorClass, Result};
use crate::unicode::{combine_surrogates, is_high_surrogate, is_low_surrogate};

/// Decodes a JSON string token starting at the current `"` into its scalar
/// Unicode sequence (§4.3 "Strings"). Used for both string values and object
/// keys; duplicate-key bookkeeping is the caller's job.
pub(super) fn parse_string(p: &mut Parser<'_>) -> Result<String> {
    let quote_at = p.pos;
    p.advance_char(); // opening '"'
    let mut out = String::new();

    loop {
        match p.peek() {
            None => {
                return Err(p.err(ErrorClass::InvalidGrammar, quote_at, "unterminated string"))
            }
            Some('"') => {
                p.advance_char();
                break;
            }
            Some('\\') => decode_escape(p, &mut out)?,
            Some(c) if (c as u32) < 0x20 => {
                return Err(p.err(
                    ErrorClass::InvalidGrammar,
                    p.pos,
                    "unescaped control character in string",
                ))
            }
            Some(c) => {
                let at = p.pos;
                push_scalar(&mut out, c as u32, at as i64)?;
                p.advance_char();
            }
        }
        if out.len() > p.opts.max_string_bytes() {
            return Err(p.err(
                ErrorClass::BoundExceeded,
                p.pos,
                "string exceeds max_string_bytes",
            ));
        }
    }
    Ok(out)
}

fn decode_escape(p: &mut Parser<'_>, out: &mut String) -> Result<()> {
    let esc_at = p.pos;
    p.advance_char(); // '\\'
    match p.peek() {
        Some('"') => {
            out.push('"');
            p.advance_char();
        }
        Some('\\') => {
            out.push('\\');
            p.advance_char();
        }
        Some('/') => {
            out.push('/');
            p.advance_char();
        }
        Some('b') => {
            out.push('\u{0008}');
            p.advance_char();
        }
        Some('f') => {
            out.push('\u{000C}');
            p.advance_char();
        }
        Some('n') => {
            out.push('\n');
            p.advance_char();
        }
        Some('r') => {
            out.push('\r');
            p.advance_char();
        }
        Some('t') => {
            out.push('\t');
            p.advance_char();
        }
        Some('u') => {
            p.advance_char();
            let cp1 = read_hex4(p, esc_at)?;
            decode_u_escape(p, out, cp1, esc_at)?;
        }
        Some(_) => {
            return Err(p.err(ErrorClass::InvalidGrammar, esc_at, "invalid escape sequence"))
        }
        None => {
            return Err(p.err(ErrorClass::InvalidGrammar, esc_at, "unterminated escape sequence"))
        }
    }
    Ok(())
}

fn decode_u_escape(
    p: &mut Parser<'_>,
    out: &mut String,
    cp1: u16,
    first_esc_at: usize,
) -> Result<()> {
    if is_high_surrogate(cp1) {
        if p.peek() == Some('\\') && p.peek_at(1) == Some('u') {
            let second_esc_at = p.pos;
            p.advance_char(); // '\\'
            p.advance_char(); // 'u'
            let cp2 = read_hex4(p, second_esc_at)?;
            if is_low_surrogate(cp2) {
                let scalar = combine_surrogates(cp1, cp2);
                push_scalar(out, scalar, first_esc_at as i64)
            } else {
                Err(p.err(
                    ErrorClass::LoneSurrogate,
                    second_esc_at,
                    "high surrogate not followed by a low surrogate",
                ))
            }
        } else {
            Err(p.err(
                ErrorClass::LoneSurrogate,
                first_esc_at,
                "high surrogate not followed by a low surrogate escape",
            ))
        }
    } else if is_low_surrogate(cp1) {
        Err(p.err(
            ErrorClass::LoneSurrogate,
            first_esc_at,
            "low surrogate not preceded by a high surrogate",
        ))
    } else {
        push_scalar(out, u32::from(cp1), first_esc_at as i64)
    }
}

fn read_hex4(p: &mut Parser<'_>, esc_at: usize) -> Result<u16> {
    let mut value: u16 = 0;
    for _ in 0..4 {
        let c = p.peek().ok_or_else(|| {
            p.err(ErrorClass::InvalidGrammar, esc_at, "incomplete \\u escape")
        })?;
        let digit = c
            .to_digit(16)
            .ok_or_else(|| p.err(ErrorClass::InvalidGrammar, esc_at, "invalid hex digit in \\u escape"))?;
        value = value * 16 + digit as u16;
        p.advance_char();
    }
    Ok(value)
}
