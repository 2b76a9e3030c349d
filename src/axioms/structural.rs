//! Axioms #1-#5: how construction and feeding shape predictor state.

use rand::Rng;

use crate::error::{ensure, TestbedResult};
use crate::pattern::{flip_random_bit, PatternLike};
use crate::predictor::PredictiveState;
use crate::sequence::{random_pattern, random_sequence};

use super::{Axiom, SuiteContext};

pub(super) fn genesis<C, P, R>(_ctx: &SuiteContext, _rng: &mut R) -> TestbedResult<()>
where
    C: PredictiveState<P>,
    P: PatternLike,
    R: Rng + ?Sized,
{
    ensure(C::default() == C::default(), Axiom::Genesis, "C::default() == C::default()")
}

pub(super) fn emergence<C, P, R>(_ctx: &SuiteContext, rng: &mut R) -> TestbedResult<()>
where
    C: PredictiveState<P>,
    P: PatternLike,
    R: Rng + ?Sized,
{
    let mut c = C::default();
    c.feed(&random_pattern(rng, &[]));

    ensure(c != C::default(), Axiom::Emergence, "one fed pattern changes the state")
}

pub(super) fn determinism<C, P, R>(ctx: &SuiteContext, rng: &mut R) -> TestbedResult<()>
where
    C: PredictiveState<P>,
    P: PatternLike,
    R: Rng + ?Sized,
{
    let life: Vec<P> = random_sequence(rng, ctx.infinity.get())?;

    let mut c = C::default();
    let mut d = C::default();
    c.feed_all(&life);
    d.feed_all(&life);

    ensure(c == d, Axiom::Determinism, "equal lives end in equal states")
}

pub(super) fn time<C, P, R>(_ctx: &SuiteContext, rng: &mut R) -> TestbedResult<()>
where
    C: PredictiveState<P>,
    P: PatternLike,
    R: Rng + ?Sized,
{
    let pattern: P = random_pattern(rng, &[]);
    let inverse = pattern.complement();

    let mut c = C::default();
    let mut d = C::default();
    c.feed(&pattern).feed(&inverse);
    d.feed(&inverse).feed(&pattern);

    ensure(c != d, Axiom::Time, "P then ~P differs from ~P then P")
}

pub(super) fn sensitivity<C, P, R>(ctx: &SuiteContext, rng: &mut R) -> TestbedResult<()>
where
    C: PredictiveState<P>,
    P: PatternLike,
    R: Rng + ?Sized,
{
    let initial: P = random_pattern(rng, &[]);
    let nudged = flip_random_bit(&initial, rng);
    let life: Vec<P> = random_sequence(rng, ctx.infinity.get())?;

    let mut c = C::default();
    let mut d = C::default();
    c.feed(&initial).feed_all(&life);
    d.feed(&nudged).feed_all(&life);

    ensure(
        c != d,
        Axiom::Sensitivity,
        "one-bit-apart starts stay apart after an identical life",
    )
}
