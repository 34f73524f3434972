use num_bigint::BigInt;
use num_traits::{One, Signed};

/// Compute 2^p as an exact arbitrary-precision integer.
pub fn pow2(p: u32) -> BigInt {
    BigInt::one() << p
}

/// Canonical representative of x modulo m, in the range [0, m).
/// m must be positive.
pub fn mod_reduce(x: &BigInt, m: &BigInt) -> BigInt {
    let r = x % m;
    if r.is_negative() { r + m } else { r }
}

/// Parity test that is also correct for negative integers.
pub fn is_odd(x: &BigInt) -> bool {
    mod_reduce(x, &BigInt::from(2)) == BigInt::one()
}
