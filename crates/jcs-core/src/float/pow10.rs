use num_bigint::BigUint;
use once_cell::sync::Lazy;

/// Number of entries precomputed eagerly; covers the decimal exponents that
/// arise in practice for binary64 (roughly ±324..309) with margin, per §4.2's
/// "indexable up to about ±350 decimal exponent" note. This is immutable
/// precomputed data, not mutable process-wide state (§5, §9).
const TABLE_LEN: usize = 380;

static POW10: Lazy<Vec<BigUint>> = Lazy::new(|| {
    let mut table = Vec::with_capacity(TABLE_LEN);
    let mut cur = BigUint::from(1u32);
    let ten = BigUint::from(10u32);
    for _ in 0..TABLE_LEN {
        table.push(cur.clone());
        cur *= &ten;
    }
    table
});

/// Returns `10^exp` as an exact arbitrary-precision integer.
#[must_use]
pub fn pow10(exp: u32) -> BigUint {
    match POW10.get(exp as usize) {
        Some(v) => v.clone(),
        None => BigUint::from(10u32).pow(exp),
    }
}

/// Returns `2^exp` as an exact arbitrary-precision integer via a single shift,
/// never an iterated doubling loop (§9 "Big-integer shifting").
#[must_use]
pub fn pow2(exp: u32) -> BigUint {
    BigUint::from(1u32) << (exp as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pow10_matches_repeated_multiplication() {
        assert_eq!(pow10(0), BigUint::from(1u32));
        assert_eq!(pow10(1), BigUint::from(10u32));
        assert_eq!(pow10(6), BigUint::from(1_000_000u32));
        assert_eq!(pow10(400), BigUint::from(10u32).pow(400));
    }

    #[test]
    fn pow2_matches_shift() {
        assert_eq!(pow2(0), BigUint::from(1u32));
        assert_eq!(pow2(10), BigUint::from(1024u32));
    }
}
