//! Axioms #6-#10: what a predictor can learn, and what its learning time depends on.

use rand::Rng;
use tracing::debug;

use crate::adaptation::{adapted, biased_predictor, learnable_sequence, time_to_adapt};
use crate::error::{ensure, TestbedResult};
use crate::pattern::{flip_random_bit, PatternLike};
use crate::predictor::PredictiveState;
use crate::sequence::circular_sequence;

use super::{Axiom, SuiteContext};

pub(super) fn refractory_period<C, P, R>(ctx: &SuiteContext, rng: &mut R) -> TestbedResult<()>
where
    C: PredictiveState<P>,
    P: PatternLike,
    R: Rng + ?Sized,
{
    let no_spikes = P::default();
    let single_spike = flip_random_bit(&no_spikes, rng);

    let alternating = [single_spike.clone(), no_spikes];
    let repeated = [single_spike.clone(), single_spike];

    ensure(
        adapted(&mut C::default(), &alternating, ctx.infinity),
        Axiom::RefractoryPeriod,
        "[single_spike, no_spikes] is adaptable",
    )?;
    ensure(
        !adapted(&mut C::default(), &repeated, ctx.infinity),
        Axiom::RefractoryPeriod,
        "[single_spike, single_spike] is not adaptable",
    )
}

pub(super) fn scalability<C, P, R>(ctx: &SuiteContext, rng: &mut R) -> TestbedResult<()>
where
    C: PredictiveState<P>,
    P: PatternLike,
    R: Rng + ?Sized,
{
    let longer = ctx.capacity + 1;
    for attempt in 0..ctx.infinity.get() {
        let sequence = circular_sequence(rng, longer)?;
        if adapted(&mut C::default(), &sequence, ctx.infinity) {
            debug!(length = longer, attempt, "adapted beyond capacity");
            return Ok(());
        }
    }
    ensure(
        false,
        Axiom::Scalability,
        "some fresh predictor adapts to a sequence one longer than capacity",
    )
}

pub(super) fn ageing<C, P, R>(ctx: &SuiteContext, rng: &mut R) -> TestbedResult<()>
where
    C: PredictiveState<P>,
    P: PatternLike,
    R: Rng + ?Sized,
{
    let mut dog = C::default();
    for trick in 0..ctx.infinity.get() {
        let new_trick = learnable_sequence::<C, P, R>(rng, ctx.sequence_length(), ctx.infinity)?;
        if !adapted(&mut dog, &new_trick, ctx.infinity) {
            debug!(tricks_learned = trick, "predictor stopped adapting");
            return Ok(());
        }
    }
    ensure(
        false,
        Axiom::Ageing,
        "one predictor eventually fails a new learnable sequence",
    )
}

pub(super) fn content_dependence<C, P, R>(ctx: &SuiteContext, rng: &mut R) -> TestbedResult<()>
where
    C: PredictiveState<P>,
    P: PatternLike,
    R: Rng + ?Sized,
{
    let length = ctx.sequence_length();
    let reference = circular_sequence(rng, length)?;
    let reference_time = time_to_adapt(&mut C::default(), &reference, ctx.infinity);

    for _ in 0..ctx.infinity.get() {
        let sequence = circular_sequence(rng, length)?;
        let time = time_to_adapt(&mut C::default(), &sequence, ctx.infinity);
        if time != reference_time {
            debug!(reference_time, time, "adaptation time depends on content");
            return Ok(());
        }
    }
    ensure(
        false,
        Axiom::ContentDependence,
        "adaptation time differs across same-length sequences",
    )
}

pub(super) fn state_dependence<C, P, R>(ctx: &SuiteContext, rng: &mut R) -> TestbedResult<()>
where
    C: PredictiveState<P>,
    P: PatternLike,
    R: Rng + ?Sized,
{
    let length = ctx.sequence_length();
    let target = learnable_sequence::<C, P, R>(rng, length, ctx.infinity)?;
    let fresh_time = time_to_adapt(&mut C::default(), &target, ctx.infinity);

    for _ in 0..ctx.infinity.get() {
        let mut biased: C = biased_predictor(rng, length)?;
        let time = time_to_adapt(&mut biased, &target, ctx.infinity);
        if time != fresh_time {
            debug!(fresh_time, time, "adaptation time depends on experience");
            return Ok(());
        }
    }
    ensure(
        false,
        Axiom::StateDependence,
        "adaptation time differs between fresh and experienced predictors",
    )
}
