use num_bigint::BigInt;

/// Round numer/denom to `digits` decimal places, half away from zero,
/// rendered with exactly `digits` digits after the point.
///
/// Both operands must be non-negative with denom > 0. The division is
/// carried out over scaled integers, so the result stays exact no matter
/// how large the operands are.
pub fn round_ratio(numer: &BigInt, denom: &BigInt, digits: u32) -> String {
    let scale = BigInt::from(10).pow(digits);
    let q: BigInt = (numer * &scale * 2 + denom) / (denom * 2);
    if digits == 0 {
        return q.to_string();
    }
    let whole = &q / &scale;
    let frac = &q % &scale;
    format!("{}.{:0width$}", whole, frac, width = digits as usize)
}
