use modmath::{mod_reduce, round_ratio};
use num_bigint::BigInt;

use crate::error::ParamError;
use crate::params::{Family, GeneratorParameters};

/// One transition of the recurrence. Step i (1-indexed) records the move
/// from state i-1 to state i; state 0 is the seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceStep {
    pub index: usize,
    pub previous_state: BigInt,
    pub next_state: BigInt,
    /// next_state / (modulus - 1), rounded and rendered once; display and
    /// export both reuse this exact text
    pub uniform: String,
    /// The formula instance applied at this step, operands in decimal
    pub operation: String,
}

/// Ordered sequence of steps produced by one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    pub steps: Vec<SequenceStep>,
}

/// Walk the family recurrence `step_count` times from the seed.
///
/// States, multiplier, increment and modulus stay in exact integers
/// throughout; only the uniform value is a rounded rendering, taken from
/// the same integers the recurrence used.
pub fn generate(
    params: &GeneratorParameters,
    step_count: u32,
    decimals: u32,
) -> Result<Trace, ParamError> {
    if step_count < 1 {
        return Err(ParamError::InvalidStepCount { count: step_count });
    }

    let denominator = &params.modulus - 1;
    let mut steps = Vec::with_capacity(step_count as usize);
    let mut state = params.seed.clone();

    for index in 1..=step_count as usize {
        let (next, operation) = match params.family {
            Family::Lcg => {
                let raw = &params.multiplier * &state + &params.increment;
                let operation = format!(
                    "({} · {} + {}) mod {}",
                    params.multiplier, state, params.increment, params.modulus
                );
                (mod_reduce(&raw, &params.modulus), operation)
            }
            Family::Mcg => {
                let raw = &params.multiplier * &state;
                let operation = format!(
                    "({} · {}) mod {}",
                    params.multiplier, state, params.modulus
                );
                (mod_reduce(&raw, &params.modulus), operation)
            }
        };
        let uniform = round_ratio(&next, &denominator, decimals);
        steps.push(SequenceStep {
            index,
            previous_state: state,
            next_state: next.clone(),
            uniform,
            operation,
        });
        state = next;
    }

    Ok(Trace { steps })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{normalize, RawInputs};
    use crate::period::check;
    use num_traits::ToPrimitive;

    fn raw(seed: i64, k: i64, increment: Option<i64>, precision: u32) -> RawInputs {
        RawInputs {
            seed: BigInt::from(seed),
            k: BigInt::from(k),
            increment: increment.map(BigInt::from),
            precision,
        }
    }

    #[test]
    fn test_lcg_reference_trace() {
        // seed 7, a = 1 (K = 0), c = 5, m = 16
        let params = normalize(Family::Lcg, &raw(7, 0, Some(5), 4)).unwrap();
        assert!(check(&params).satisfied);

        let trace = generate(&params, 3, 4).unwrap();
        let states: Vec<i64> = trace
            .steps
            .iter()
            .map(|s| s.next_state.to_i64().unwrap())
            .collect();
        assert_eq!(states, vec![12, 1, 6]);

        let uniforms: Vec<&str> = trace.steps.iter().map(|s| s.uniform.as_str()).collect();
        assert_eq!(uniforms, vec!["0.8000", "0.0667", "0.4000"]);

        assert_eq!(trace.steps[0].operation, "(1 · 7 + 5) mod 16");
        assert_eq!(trace.steps[1].operation, "(1 · 12 + 5) mod 16");
    }

    #[test]
    fn test_mcg_reference_trace() {
        // seed 3, a = 3 (K = 0), m = 16
        let params = normalize(Family::Mcg, &raw(3, 0, None, 4)).unwrap();
        assert!(check(&params).satisfied);

        let trace = generate(&params, 2, 4).unwrap();
        let states: Vec<i64> = trace
            .steps
            .iter()
            .map(|s| s.next_state.to_i64().unwrap())
            .collect();
        assert_eq!(states, vec![9, 11]);

        let uniforms: Vec<&str> = trace.steps.iter().map(|s| s.uniform.as_str()).collect();
        assert_eq!(uniforms, vec!["0.6000", "0.7333"]);

        assert_eq!(trace.steps[0].operation, "(3 · 3) mod 16");
        assert_eq!(trace.steps[1].operation, "(3 · 9) mod 16");
    }

    #[test]
    fn test_steps_chain_and_are_one_indexed() {
        let params = normalize(Family::Lcg, &raw(7, 3, Some(5), 8)).unwrap();
        let trace = generate(&params, 6, 4).unwrap();

        assert_eq!(trace.steps[0].previous_state, params.seed);
        for (i, step) in trace.steps.iter().enumerate() {
            assert_eq!(step.index, i + 1);
            if i > 0 {
                assert_eq!(step.previous_state, trace.steps[i - 1].next_state);
            }
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        let params = normalize(Family::Mcg, &raw(11, 4, None, 12)).unwrap();
        let a = generate(&params, 20, 4).unwrap();
        let b = generate(&params, 20, 4).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_recurrence_beyond_machine_words() {
        // P = 100: every state is far outside u64 range
        let seed: BigInt = modmath::pow2(64) + 1;
        let raw = RawInputs {
            seed: seed.clone(),
            k: modmath::pow2(40),
            increment: Some(BigInt::from(12345)),
            precision: 100,
        };
        let params = normalize(Family::Lcg, &raw).unwrap();
        let trace = generate(&params, 5, 4).unwrap();

        let mut expected = seed;
        for step in &trace.steps {
            assert_eq!(step.previous_state, expected);
            expected = mod_reduce(
                &(&params.multiplier * &expected + &params.increment),
                &params.modulus,
            );
            assert_eq!(step.next_state, expected);
            assert!(step.next_state < params.modulus);
            assert!(step.next_state >= BigInt::from(0));
        }
    }

    #[test]
    fn test_zero_step_count_rejected() {
        let params = normalize(Family::Lcg, &raw(7, 0, Some(5), 4)).unwrap();
        assert_eq!(
            generate(&params, 0, 4).unwrap_err(),
            ParamError::InvalidStepCount { count: 0 }
        );
    }
}
