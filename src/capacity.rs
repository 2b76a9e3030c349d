//! ═══════════════════════════════════════════════════════════════════════════════
//! CAPACITY PROBE
//! ═══════════════════════════════════════════════════════════════════════════════
//!
//! Capacity is the largest circular sequence length a fresh predictor adapts
//! to, found by walking lengths upward from 2 and stopping at the first miss:
//!
//!   L = 2 ✓   L = 3 ✓   ...   L = k ✓   L = k+1 ✗   →   capacity = k
//!
//! Each length is tried once with one random sequence, so the answer is an
//! estimate. A predictor that misses at L = 2 has capacity 1; one that never
//! misses below the simulated infinity is reported at the infinity itself.
//! ═══════════════════════════════════════════════════════════════════════════════

use rand::Rng;
use tracing::debug;

use crate::adaptation::time_to_adapt;
use crate::config::SimulatedInfinity;
use crate::error::TestbedResult;
use crate::pattern::PatternLike;
use crate::predictor::PredictiveState;
use crate::sequence::circular_sequence;

/// Largest circular length a fresh `C` adapts to, in `[1, infinity]`
pub fn max_adaptable_length<C, P, R>(rng: &mut R, infinity: SimulatedInfinity) -> TestbedResult<usize>
where
    C: PredictiveState<P>,
    P: PatternLike,
    R: Rng + ?Sized,
{
    for length in 2..infinity.get() {
        let sequence = circular_sequence(rng, length)?;
        let mut fresh = C::default();
        let time = time_to_adapt(&mut fresh, &sequence, infinity);
        if time >= infinity.get() {
            debug!(length, "capacity probe: first miss");
            return Ok(length - 1);
        }
        debug!(length, time, "capacity probe: adapted");
    }
    Ok(infinity.get())
}
