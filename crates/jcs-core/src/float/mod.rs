//! ECMA-262 §6.1.6.1.20 `Number::toString` formatting for IEEE 754 binary64.

mod dragon;
mod pow10;

use crate::error::{Error, ErrorClass, Result};

/// Formats an `f64` the way ECMAScript's `Number::toString(10)` would.
///
/// NaN and infinities are rejected with a classified error (the caller's
/// contract is "this value is unrepresentable", not any particular message
/// text); `-0.0` collapses to `"0"` per ECMA step 2; every other finite value
/// is rendered via the shortest round-trip decimal (§4.2).
pub fn format_double(f: f64) -> Result<String> {
    let _span = tracing::trace_span!("format_double").entered();
    if f.is_nan() {
        return Err(Error::non_positional(ErrorClass::NumberOverflow, "NaN is not representable"));
    }
    if f.is_infinite() {
        return Err(Error::non_positional(
            ErrorClass::NumberOverflow,
            "infinity is not representable",
        ));
    }
    if f == 0.0 {
        // Covers both +0.0 and -0.0 (IEEE equality treats them as equal).
        return Ok("0".to_string());
    }

    let negative = f.is_sign_negative();
    let abs = f.abs();
    let (digits, n) = dragon::shortest_digits(abs);
    let mut out = String::with_capacity(digits.len() + 8);
    if negative {
        out.push('-');
    }
    render(&digits, n, &mut out);
    Ok(out)
}

fn push_digits(out: &mut String, digits: &[u8]) {
    for &d in digits {
        out.push((b'0' + d) as char);
    }
}

/// Implements ECMA-262 steps 7-10 given the shortest digit string and its
/// decimal exponent `n` (`value = 0.d1d2..dk * 10^n`).
fn render(digits: &[u8], n: i32, out: &mut String) {
    let k = digits.len() as i32;

    if k <= n && n <= 21 {
        // Step 7: integer, possibly padded with trailing zeros.
        push_digits(out, digits);
        for _ in 0..(n - k) {
            out.push('0');
        }
    } else if 0 < n && n <= 21 {
        // Step 8: decimal point falls inside the digit string.
        push_digits(out, &digits[..n as usize]);
        out.push('.');
        push_digits(out, &digits[n as usize..]);
    } else if -6 < n && n <= 0 {
        // Step 9: value in (0, 1), leading zeros after the point.
        out.push_str("0.");
        for _ in 0..(-n) {
            out.push('0');
        }
        push_digits(out, digits);
    } else {
        // Step 10: exponential notation.
        out.push((b'0' + digits[0]) as char);
        if k > 1 {
            out.push('.');
            push_digits(out, &digits[1..]);
        }
        out.push('e');
        let exp = n - 1;
        if exp >= 0 {
            out.push('+');
        } else {
            out.push('-');
        }
        out.push_str(&exp.unsigned_abs().to_string());
    }
}
