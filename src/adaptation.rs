//! ═══════════════════════════════════════════════════════════════════════════════
//! ADAPTATION — Operational Learning Protocol
//! ═══════════════════════════════════════════════════════════════════════════════
//!
//! A predictor has learned a sequence exactly when, driven with it, it
//! reproduces it exactly at least once. Nothing else is inspected, so every
//! type satisfying the predictor contract is judged identically.
//!
//! Protocol:
//!   predict_then_feed: record predict() BEFORE feed(input), for every input
//!   time_to_adapt:     repeat predict_then_feed on the same instance until a
//!                      perfect round, counting len(inputs) per round
//!   adapted:           time_to_adapt < SimulatedInfinity
//! ═══════════════════════════════════════════════════════════════════════════════

use rand::Rng;

use crate::config::SimulatedInfinity;
use crate::error::{TestbedError, TestbedResult};
use crate::pattern::PatternLike;
use crate::predictor::PredictiveState;
use crate::sequence::{circular_sequence, random_sequence, TemporalSequence};

// ═══════════════════════════════════════════════════════════════════════════════
// DRIVEN PREDICTION
// ═══════════════════════════════════════════════════════════════════════════════

/// Predictions made one step ahead of each input
pub fn predict_then_feed<C, P>(predictor: &mut C, inputs: &[P]) -> TemporalSequence<P>
where
    C: PredictiveState<P>,
    P: PatternLike,
{
    let mut predictions = Vec::with_capacity(inputs.len());
    for input in inputs {
        predictions.push(predictor.predict());
        predictor.feed(input);
    }
    predictions
}

/// Attempt count at the first perfect round, or `infinity` if none
///
/// State accumulates across rounds; the predictor is never reset.
pub fn time_to_adapt<C, P>(predictor: &mut C, inputs: &[P], infinity: SimulatedInfinity) -> usize
where
    C: PredictiveState<P>,
    P: PatternLike,
{
    let mut time = 0;
    while !infinity.is_reached(time) {
        if predict_then_feed(predictor, inputs) == inputs {
            return time;
        }
        time += inputs.len();
    }
    infinity.get()
}

pub fn adapted<C, P>(predictor: &mut C, inputs: &[P], infinity: SimulatedInfinity) -> bool
where
    C: PredictiveState<P>,
    P: PatternLike,
{
    time_to_adapt(predictor, inputs, infinity) < infinity.get()
}

/// Reproduces `inputs` on every one of `infinity` further driven rounds
pub fn persists<C, P>(predictor: &mut C, inputs: &[P], infinity: SimulatedInfinity) -> bool
where
    C: PredictiveState<P>,
    P: PatternLike,
{
    (0..infinity.get()).all(|_| predict_then_feed(predictor, inputs) == inputs)
}

// ═══════════════════════════════════════════════════════════════════════════════
// FREE-RUNNING BEHAVIOUR
// ═══════════════════════════════════════════════════════════════════════════════

/// Output of a predictor fed only its own predictions
pub fn free_behaviour<C, P>(predictor: &mut C, length: usize) -> TemporalSequence<P>
where
    C: PredictiveState<P>,
    P: PatternLike,
{
    let mut behaviour = Vec::with_capacity(length);
    while behaviour.len() < length {
        let prediction = predictor.predict();
        predictor.feed(&prediction);
        behaviour.push(prediction);
    }
    behaviour
}

// ═══════════════════════════════════════════════════════════════════════════════
// SCENARIO BUILDING BLOCKS
// ═══════════════════════════════════════════════════════════════════════════════

/// Circular sequence that a fresh predictor adapts to
///
/// Samples at most `infinity` candidates.
pub fn learnable_sequence<C, P, R>(
    rng: &mut R,
    length: usize,
    infinity: SimulatedInfinity,
) -> TestbedResult<TemporalSequence<P>>
where
    C: PredictiveState<P>,
    P: PatternLike,
    R: Rng + ?Sized,
{
    for _ in 0..infinity.get() {
        let sequence = circular_sequence(rng, length)?;
        let mut fresh = C::default();
        if adapted(&mut fresh, &sequence, infinity) {
            return Ok(sequence);
        }
    }
    Err(TestbedError::NoLearnableSequence {
        length,
        attempts: infinity.get(),
    })
}

/// Fresh predictor with `strength` steps of unrelated random experience
pub fn biased_predictor<C, P, R>(rng: &mut R, strength: usize) -> TestbedResult<C>
where
    C: PredictiveState<P>,
    P: PatternLike,
    R: Rng + ?Sized,
{
    let experience = random_sequence(rng, strength)?;
    let mut predictor = C::default();
    predictor.feed_all(&experience);
    Ok(predictor)
}

// ═══════════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::Bits;
    use crate::predictor::{EchoCortex, SlotCortex};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    type P = Bits<64>;
    type Slots = SlotCortex<P, 6>;
    type Echo = EchoCortex<P>;

    const INFINITY: SimulatedInfinity = SimulatedInfinity::new(50);

    fn spike() -> P {
        P::from_indices(&[7])
    }

    #[test]
    fn test_predictions_precede_inputs() {
        let a = P::from_indices(&[0]);
        let b = P::from_indices(&[1]);
        let c = P::from_indices(&[2]);

        let mut echo = Echo::default();
        let predictions = predict_then_feed(&mut echo, &[a, b, c]);

        assert_eq!(predictions, vec![P::zero(), a, b]);
        assert_eq!(echo.predict(), c);
    }

    #[test]
    fn test_time_counts_patterns_not_rounds() {
        let mut slots = Slots::default();
        // round one misses the spike, round two reproduces both steps
        assert_eq!(time_to_adapt(&mut slots, &[spike(), P::zero()], INFINITY), 2);
    }

    #[test]
    fn test_failure_returns_the_sentinel() {
        let mut echo = Echo::default();
        let time = time_to_adapt(&mut echo, &[spike(), P::zero()], INFINITY);
        assert_eq!(time, INFINITY.get());
        assert!(!adapted(&mut Echo::default(), &[spike(), P::zero()], INFINITY));
    }

    #[test]
    fn test_adaptation_is_followed_by_reproduction() {
        let mut rng = StdRng::seed_from_u64(21);
        let sequence: Vec<P> = circular_sequence(&mut rng, 4).unwrap();

        let mut slots = Slots::default();
        assert!(adapted(&mut slots, &sequence, INFINITY));
        assert_eq!(predict_then_feed(&mut slots, &sequence), sequence);
        assert!(persists(&mut slots, &sequence, INFINITY));
    }

    #[test]
    fn test_echo_does_not_persist() {
        let mut echo = Echo::default();
        assert!(!persists(&mut echo, &[spike(), P::zero()], INFINITY));
    }

    #[test]
    fn test_free_behaviour_replays_adapted_cycle() {
        let sequence = [spike(), P::zero()];
        let mut slots = Slots::default();
        assert!(adapted(&mut slots, &sequence, INFINITY));

        let behaviour = free_behaviour(&mut slots, 4);
        assert_eq!(behaviour, vec![spike(), P::zero(), spike(), P::zero()]);
    }

    #[test]
    fn test_free_behaviour_of_echo_is_constant() {
        let mut echo = Echo::default();
        echo.feed(&spike());
        assert_eq!(free_behaviour(&mut echo, 3), vec![spike(); 3]);
    }

    #[test]
    fn test_learnable_sequence_is_learnable() {
        let mut rng = StdRng::seed_from_u64(3);
        let sequence = learnable_sequence::<Slots, P, _>(&mut rng, 3, INFINITY).unwrap();
        assert_eq!(sequence.len(), 3);
        assert!(adapted(&mut Slots::default(), &sequence, INFINITY));
    }

    #[test]
    fn test_learnable_sequence_gives_up() {
        let mut rng = StdRng::seed_from_u64(3);
        let err = learnable_sequence::<Echo, P, _>(&mut rng, 2, INFINITY).unwrap_err();
        assert_eq!(
            err,
            TestbedError::NoLearnableSequence {
                length: 2,
                attempts: 50
            }
        );
    }

    #[test]
    fn test_biased_predictor_has_experience() {
        let mut rng = StdRng::seed_from_u64(8);
        let biased: Slots = biased_predictor(&mut rng, 3).unwrap();
        assert_ne!(biased, Slots::default());
        assert_eq!(biased.used_slots(), 3);
        assert!(biased_predictor::<Slots, P, _>(&mut rng, 0).is_err());
    }
}
