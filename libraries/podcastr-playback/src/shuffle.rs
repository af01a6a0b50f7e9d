//! Random position selection for shuffle mode
//!
//! Shuffle picks a position on every `play_next` instead of reordering the
//! queue, so turning shuffle off needs no restore step.

use crate::types::ShufflePolicy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks the next position while shuffling
pub struct ShufflePicker {
    rng: StdRng,
    policy: ShufflePolicy,
}

impl ShufflePicker {
    /// Create a picker seeded from OS entropy, or from `seed` when given
    pub fn new(policy: ShufflePolicy, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self { rng, policy }
    }

    /// Active policy
    pub fn policy(&self) -> ShufflePolicy {
        self.policy
    }

    /// Pick a position in `0..len`
    ///
    /// Returns `None` for an empty queue.
    pub fn pick(&mut self, len: usize, current: usize) -> Option<usize> {
        match len {
            0 => None,
            1 => Some(0),
            _ => match self.policy {
                ShufflePolicy::Uniform => Some(self.rng.gen_range(0..len)),
                ShufflePolicy::AvoidRepeat => {
                    // Draw among the other len - 1 positions, then skip over current
                    let pick = self.rng.gen_range(0..len - 1);
                    Some(if pick >= current { pick + 1 } else { pick })
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_queue_has_no_pick() {
        let mut picker = ShufflePicker::new(ShufflePolicy::Uniform, Some(7));
        assert_eq!(picker.pick(0, 0), None);
    }

    #[test]
    fn single_episode_always_picks_zero() {
        let mut picker = ShufflePicker::new(ShufflePolicy::AvoidRepeat, Some(7));
        for _ in 0..20 {
            assert_eq!(picker.pick(1, 0), Some(0));
        }
    }

    #[test]
    fn uniform_covers_every_position() {
        let mut picker = ShufflePicker::new(ShufflePolicy::Uniform, Some(42));
        let mut counts = [0usize; 5];

        for _ in 0..1000 {
            let index = picker.pick(5, 2).unwrap();
            counts[index] += 1;
        }

        // Expected ~200 each
        for (index, count) in counts.iter().enumerate() {
            assert!(*count > 100, "position {} picked only {} times", index, count);
        }
    }

    #[test]
    fn uniform_may_repeat_current() {
        let mut picker = ShufflePicker::new(ShufflePolicy::Uniform, Some(3));
        let repeats = (0..500).filter(|_| picker.pick(2, 0) == Some(0)).count();
        assert!(repeats > 0);
    }

    #[test]
    fn avoid_repeat_never_picks_current() {
        let mut picker = ShufflePicker::new(ShufflePolicy::AvoidRepeat, Some(11));

        for current in 0..4 {
            for _ in 0..200 {
                let index = picker.pick(4, current).unwrap();
                assert!(index < 4);
                assert_ne!(index, current);
            }
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = ShufflePicker::new(ShufflePolicy::Uniform, Some(99));
        let mut b = ShufflePicker::new(ShufflePolicy::Uniform, Some(99));

        let seq_a: Vec<_> = (0..32).map(|_| a.pick(10, 0)).collect();
        let seq_b: Vec<_> = (0..32).map(|_| b.pick(10, 0)).collect();
        assert_eq!(seq_a, seq_b);
    }
}
