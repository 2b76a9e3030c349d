//! ═══════════════════════════════════════════════════════════════════════════════
//! SEQUENCE — Refractory Temporal Sequence Generation
//! ═══════════════════════════════════════════════════════════════════════════════
//!
//! Refractory invariant: a bit that spiked at t cannot spike at t+1.
//!
//! Circular sequences extend the invariant across the wrap, so the sequence
//! can be replayed end-to-start forever:
//!
//!   s[0] s[1] ... s[L-2] s[L-1] | s[0] s[1] ...
//!                        ^^^^^^^^^^^^^
//!                        s[L-1] is masked by both s[L-2] and s[0]
//! ═══════════════════════════════════════════════════════════════════════════════

use rand::Rng;

use crate::error::{TestbedError, TestbedResult};
use crate::pattern::PatternLike;

/// Ordered list of patterns, never mutated after generation
pub type TemporalSequence<P> = Vec<P>;

/// Random pattern; a bit is forced off when any mask has it set
pub fn random_pattern<P, R>(rng: &mut R, off_masks: &[&P]) -> P
where
    P: PatternLike,
    R: Rng + ?Sized,
{
    let mut pattern = P::default();
    for i in 0..pattern.size() {
        if !off_masks.iter().any(|mask| mask.bit(i)) {
            pattern.set_bit(i, rng.random_bool(0.5));
        }
    }
    pattern
}

pub fn random_sequence<P, R>(rng: &mut R, length: usize) -> TestbedResult<TemporalSequence<P>>
where
    P: PatternLike,
    R: Rng + ?Sized,
{
    if length < 1 {
        return Err(TestbedError::InvalidLength {
            operation: "random_sequence",
            length,
            minimum: 1,
        });
    }

    let mut sequence = Vec::with_capacity(length);
    sequence.push(random_pattern(rng, &[]));
    while sequence.len() < length {
        let next = random_pattern(rng, &[&sequence[sequence.len() - 1]]);
        sequence.push(next);
    }
    Ok(sequence)
}

pub fn circular_sequence<P, R>(rng: &mut R, length: usize) -> TestbedResult<TemporalSequence<P>>
where
    P: PatternLike,
    R: Rng + ?Sized,
{
    if length < 2 {
        return Err(TestbedError::InvalidLength {
            operation: "circular_sequence",
            length,
            minimum: 2,
        });
    }

    let mut sequence = random_sequence(rng, length)?;
    sequence.pop();
    let closing = random_pattern(rng, &[&sequence[sequence.len() - 1], &sequence[0]]);
    sequence.push(closing);
    Ok(sequence)
}

fn disjoint<P: PatternLike>(a: &P, b: &P) -> bool {
    (0..a.size()).all(|i| !(a.bit(i) && b.bit(i)))
}

/// No bit is set in two adjacent patterns
pub fn is_refractory<P: PatternLike>(sequence: &[P]) -> bool {
    sequence.windows(2).all(|w| disjoint(&w[0], &w[1]))
}

/// Refractory including the step from the last pattern back to the first
///
/// A single pattern wraps onto itself, so only the zero pattern qualifies.
pub fn is_circularly_refractory<P: PatternLike>(sequence: &[P]) -> bool {
    match (sequence.first(), sequence.last()) {
        (Some(first), Some(last)) => is_refractory(sequence) && disjoint(last, first),
        _ => true,
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::{count_ones, Bits};
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    type P = Bits<16>;

    #[test]
    fn test_zero_length_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = random_sequence::<P, _>(&mut rng, 0).unwrap_err();
        assert_eq!(
            err,
            TestbedError::InvalidLength {
                operation: "random_sequence",
                length: 0,
                minimum: 1
            }
        );
    }

    #[test]
    fn test_circular_needs_two_steps() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(circular_sequence::<P, _>(&mut rng, 1).is_err());
        assert_eq!(circular_sequence::<P, _>(&mut rng, 2).unwrap().len(), 2);
    }

    #[test]
    fn test_full_mask_yields_zero() {
        let mut rng = StdRng::seed_from_u64(5);
        let all = !P::zero();
        for _ in 0..20 {
            assert!(random_pattern(&mut rng, &[&all]).is_zero());
        }
    }

    #[test]
    fn test_unmasked_patterns_are_not_constant() {
        let mut rng = StdRng::seed_from_u64(9);
        let ones: usize = (0..200)
            .map(|_| count_ones(&random_pattern::<P, _>(&mut rng, &[])))
            .sum();
        // 3200 fair coin flips
        assert!(ones > 1300 && ones < 1900, "ones = {}", ones);
    }

    #[test]
    fn test_refractory_predicates() {
        let a = P::from_indices(&[0]);
        let b = P::from_indices(&[1]);
        assert!(is_refractory(&[a, b, a]));
        assert!(!is_refractory(&[a, a]));
        assert!(is_circularly_refractory(&[a, b]));
        assert!(!is_circularly_refractory(&[a, b, a]));
        assert!(is_circularly_refractory::<P>(&[]));
        assert!(!is_circularly_refractory(&[a]));
        assert!(is_circularly_refractory(&[P::zero()]));
    }

    proptest! {
        #[test]
        fn random_sequences_are_refractory(seed in any::<u64>(), length in 1usize..64) {
            let mut rng = StdRng::seed_from_u64(seed);
            let sequence = random_sequence::<P, _>(&mut rng, length).unwrap();
            prop_assert_eq!(sequence.len(), length);
            prop_assert!(is_refractory(&sequence));
        }

        #[test]
        fn circular_sequences_survive_the_wrap(seed in any::<u64>(), length in 2usize..64) {
            let mut rng = StdRng::seed_from_u64(seed);
            let sequence = circular_sequence::<P, _>(&mut rng, length).unwrap();
            prop_assert_eq!(sequence.len(), length);
            for i in 0..length {
                let next = &sequence[(i + 1) % length];
                for b in 0..16 {
                    prop_assert!(!(sequence[i].bit(b) && next.bit(b)));
                }
            }
        }

        #[test]
        fn masked_bits_stay_off(seed in any::<u64>(), a in any::<u16>(), b in any::<u16>()) {
            let to_bits = |word: u16| {
                let indices: Vec<usize> = (0..16).filter(|i| word >> i & 1 == 1).collect();
                P::from_indices(&indices)
            };
            let (mask_a, mask_b) = (to_bits(a), to_bits(b));
            let mut rng = StdRng::seed_from_u64(seed);
            let pattern = random_pattern(&mut rng, &[&mask_a, &mask_b]);
            prop_assert!(((mask_a | mask_b) & pattern).is_zero());
        }
    }
}
