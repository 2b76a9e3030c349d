//! Axioms #11-#12: what behaviour does and does not reveal about state.

use rand::Rng;
use tracing::{debug, info};

use crate::adaptation::{adapted, free_behaviour, learnable_sequence};
use crate::counterexample::CounterexampleSearch;
use crate::error::{ensure, TestbedResult};
use crate::pattern::{count_matches, PatternLike};
use crate::predictor::PredictiveState;
use crate::sequence::random_pattern;

use super::{Axiom, SuiteContext};

pub(super) fn unobservability<C, P, R>(ctx: &SuiteContext, rng: &mut R) -> TestbedResult<()>
where
    C: PredictiveState<P>,
    P: PatternLike,
    R: Rng + ?Sized,
{
    let search = CounterexampleSearch::new(ctx.sequence_length(), ctx.infinity)
        .with_bias_strength(ctx.capacity.max(1));
    let witness = search.run::<C, P, R>(rng)?;
    info!(
        length = witness.length,
        attempts = witness.attempts,
        "distinct states with identical behaviour"
    );

    ensure(
        witness.fresh != witness.biased,
        Axiom::Unobservability,
        "witness states differ",
    )?;

    let steps = ctx.infinity.get();
    let mut fresh = witness.fresh.clone();
    let mut biased = witness.biased.clone();
    ensure(
        free_behaviour(&mut fresh, steps) == free_behaviour(&mut biased, steps),
        Axiom::Unobservability,
        "witness states behave identically",
    )
}

pub(super) fn advantage<C, P, R>(ctx: &SuiteContext, rng: &mut R) -> TestbedResult<()>
where
    C: PredictiveState<P>,
    P: PatternLike,
    R: Rng + ?Sized,
{
    let mut adapted_score = 0;
    let mut unadapted_score = 0;

    for _ in 0..ctx.infinity.get() {
        let facts = learnable_sequence::<C, P, R>(rng, ctx.sequence_length(), ctx.infinity)?;
        let disruption: P = random_pattern(rng, &[]);
        let expectation = &facts[0];

        let mut a = C::default();
        adapted(&mut a, &facts, ctx.infinity);
        a.feed(&disruption).feed_all(&facts);
        adapted_score += count_matches(&a.predict(), expectation);

        let mut u = C::default();
        u.feed(&disruption).feed_all(&facts);
        unadapted_score += count_matches(&u.predict(), expectation);
    }

    debug!(adapted_score, unadapted_score, "advantage scores");
    ensure(
        adapted_score > unadapted_score,
        Axiom::Advantage,
        "adapted predictors recover with more matching bits",
    )
}
