use modmath::pow2;
use num_bigint::BigInt;
use num_traits::{Signed, Zero};

use crate::error::ParamError;

/// Generator family tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Lcg,
    Mcg,
}

/// Raw user inputs before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawInputs {
    /// Starting state X0
    pub seed: BigInt,
    /// Multiplier constant K
    pub k: BigInt,
    /// Additive increment; MCG has no increment concept
    pub increment: Option<BigInt>,
    /// Modulus exponent P (m = 2^P)
    pub precision: u32,
}

/// Canonical generator parameters. Immutable once constructed;
/// modulus = 2^precision and 0 <= seed < modulus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorParameters {
    pub family: Family,
    pub multiplier: BigInt,
    /// Zero for MCG
    pub increment: BigInt,
    pub modulus: BigInt,
    pub seed: BigInt,
}

/// Build canonical parameters from raw inputs.
///
/// The multiplier is constructed so it lands in the testable parameter
/// space: a = 1 + 4K for LCG, a = 8K + 3 for MCG. All arithmetic is exact;
/// the modulus is built by shifting, never by floating-point exponentiation.
pub fn normalize(family: Family, raw: &RawInputs) -> Result<GeneratorParameters, ParamError> {
    if raw.precision < 2 {
        return Err(ParamError::InvalidPrecision {
            precision: raw.precision,
        });
    }
    let modulus = pow2(raw.precision);
    if raw.seed.is_negative() || raw.seed >= modulus {
        return Err(ParamError::SeedOutOfRange {
            seed: raw.seed.clone(),
            precision: raw.precision,
        });
    }
    let multiplier = match family {
        Family::Lcg => &raw.k * 4 + 1,
        Family::Mcg => &raw.k * 8 + 3,
    };
    let increment = match family {
        Family::Lcg => raw.increment.clone().unwrap_or_else(BigInt::zero),
        Family::Mcg => BigInt::zero(),
    };
    Ok(GeneratorParameters {
        family,
        multiplier,
        increment,
        modulus,
        seed: raw.seed.clone(),
    })
}
