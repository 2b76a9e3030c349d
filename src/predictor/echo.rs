use crate::pattern::PatternLike;

use super::PredictiveState;

/// Echo predictor: expects the last input to repeat
///
/// The smallest predictor with any state. Used to validate probe mechanics:
/// it can only reproduce constant sequences, so under the refractory
/// invariant its capacity is 1 on every run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EchoCortex<P> {
    last: P,
}

impl<P: PatternLike> EchoCortex<P> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> &P {
        &self.last
    }
}

impl<P: PatternLike> PredictiveState<P> for EchoCortex<P> {
    fn feed(&mut self, pattern: &P) -> &mut Self {
        self.last = pattern.clone();
        self
    }

    fn predict(&self) -> P {
        self.last.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::Bits;

    #[test]
    fn test_echo_predicts_last_input() {
        let mut echo = EchoCortex::<Bits<8>>::new();
        assert_eq!(echo.predict(), Bits::zero());

        let p = Bits::from_indices(&[0, 4]);
        echo.feed(&p);
        assert_eq!(echo.predict(), p);
        assert_eq!(echo.last(), &p);
    }

    #[test]
    fn test_echo_state_is_only_the_last_input() {
        let p = Bits::<8>::from_indices(&[1]);
        let q = Bits::<8>::from_indices(&[2]);

        let mut a = EchoCortex::new();
        a.feed(&p).feed(&q);
        let mut b = EchoCortex::new();
        b.feed(&q);

        assert_eq!(a, b);
    }
}
