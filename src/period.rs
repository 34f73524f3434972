use modmath::{is_odd, mod_reduce};
use num_bigint::BigInt;

use crate::params::{Family, GeneratorParameters};

/// Named full-period sufficiency conditions, two per family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// LCG: gcd(c, 2^P) = 1, i.e. the increment is odd
    IncrementOdd,
    /// LCG: a = 1 (mod 4)
    MultiplierMod4,
    /// MCG: a = 3 (mod 8)
    MultiplierMod8,
    /// MCG: seed coprime with 2^P, i.e. odd
    SeedOdd,
}

impl Condition {
    /// Stable identifier used in reports.
    pub fn name(&self) -> &'static str {
        match self {
            Condition::IncrementOdd => "increment_odd",
            Condition::MultiplierMod4 => "multiplier_mod4",
            Condition::MultiplierMod8 => "multiplier_mod8",
            Condition::SeedOdd => "seed_odd",
        }
    }

    /// Requirement phrase used in verdict explanations.
    pub fn requirement(&self) -> &'static str {
        match self {
            Condition::IncrementOdd => "an odd increment",
            Condition::MultiplierMod4 => "a multiplier with a = 1 (mod 4)",
            Condition::MultiplierMod8 => "a multiplier with a = 3 (mod 8)",
            Condition::SeedOdd => "an odd seed",
        }
    }
}

/// Outcome of the period-condition check. An unsatisfied condition is a
/// normal, fully described result, never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodVerdict {
    pub satisfied: bool,
    pub explanation: String,
    /// Every failed condition, duplicate-free, in a fixed order
    pub failed: Vec<Condition>,
}

/// Evaluate the family's two sufficiency conditions.
///
/// The conditions are re-verified from the parameter values themselves; the
/// checker does not assume the parameters came out of `normalize`.
/// Congruences are taken on the canonical representative, so negative
/// multipliers and increments are classified correctly.
pub fn check(params: &GeneratorParameters) -> PeriodVerdict {
    let mut failed = Vec::new();
    match params.family {
        Family::Lcg => {
            if !is_odd(&params.increment) {
                failed.push(Condition::IncrementOdd);
            }
            if mod_reduce(&params.multiplier, &BigInt::from(4)) != BigInt::from(1) {
                failed.push(Condition::MultiplierMod4);
            }
        }
        Family::Mcg => {
            if mod_reduce(&params.multiplier, &BigInt::from(8)) != BigInt::from(3) {
                failed.push(Condition::MultiplierMod8);
            }
            if !is_odd(&params.seed) {
                failed.push(Condition::SeedOdd);
            }
        }
    }

    let satisfied = failed.is_empty();
    let explanation = if satisfied {
        match params.family {
            Family::Lcg => {
                "Hull-Dobell conditions hold for m = 2^P: the increment is odd and a = 1 (mod 4)"
                    .to_string()
            }
            Family::Mcg => {
                "maximal period m/4 conditions hold: a = 3 (mod 8) and the seed is odd".to_string()
            }
        }
    } else {
        let wanted: Vec<&str> = failed.iter().map(|c| c.requirement()).collect();
        format!("adjust parameters: use {}", wanted.join(" and "))
    };

    PeriodVerdict {
        satisfied,
        explanation,
        failed,
    }
}
