use crate::pattern::PatternLike;

use super::PredictiveState;

/// First-order transition memory with a fixed number of slots
///
/// Each slot maps a context (the previous input) to the successor seen after
/// it. A known context is overwritten on every feed; a new context is stored
/// only while a slot is free. No refractory masking, no forgetting.
///
/// A fresh instance adapts to a circular sequence of length L in three rounds
/// when L + 1 <= SLOTS (one slot goes to the all-zero start context), and
/// never otherwise, so its probed capacity is `SLOTS - 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotCortex<P, const SLOTS: usize> {
    last: P,
    slots: Vec<(P, P)>,
}

impl<P: PatternLike, const SLOTS: usize> Default for SlotCortex<P, SLOTS> {
    fn default() -> Self {
        Self {
            last: P::default(),
            slots: Vec::with_capacity(SLOTS),
        }
    }
}

impl<P: PatternLike, const SLOTS: usize> SlotCortex<P, SLOTS> {
    pub fn used_slots(&self) -> usize {
        self.slots.len()
    }

    fn lookup(&self, context: &P) -> Option<usize> {
        self.slots.iter().position(|(c, _)| c == context)
    }
}

impl<P: PatternLike, const SLOTS: usize> PredictiveState<P> for SlotCortex<P, SLOTS> {
    fn feed(&mut self, pattern: &P) -> &mut Self {
        match self.lookup(&self.last) {
            Some(i) => self.slots[i].1 = pattern.clone(),
            None if self.slots.len() < SLOTS => {
                self.slots.push((self.last.clone(), pattern.clone()));
            }
            None => {}
        }
        self.last = pattern.clone();
        self
    }

    fn predict(&self) -> P {
        self.lookup(&self.last)
            .map(|i| self.slots[i].1.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::Bits;

    type Small = SlotCortex<Bits<8>, 2>;

    #[test]
    fn test_slots_recall_successor() {
        let a = Bits::<8>::from_indices(&[0]);
        let b = Bits::<8>::from_indices(&[1]);

        let mut cortex = Small::default();
        cortex.feed(&a).feed(&b).feed(&a);

        assert_eq!(cortex.predict(), b);
        assert_eq!(cortex.used_slots(), 2);
    }

    #[test]
    fn test_full_memory_ignores_new_contexts() {
        let a = Bits::<8>::from_indices(&[0]);
        let b = Bits::<8>::from_indices(&[1]);
        let c = Bits::<8>::from_indices(&[2]);

        let mut cortex = Small::default();
        cortex.feed(&a).feed(&b).feed(&c).feed(&a);

        // (zero -> a) and (a -> b) fill both slots; b's successor is dropped
        cortex.feed(&b);
        assert_eq!(cortex.used_slots(), 2);
        assert_eq!(cortex.predict(), Bits::zero());
    }
}
