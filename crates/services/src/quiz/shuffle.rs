use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use quiz_core::{Clock, Question};

/// Reorders questions with a uniformly random permutation.
///
/// The generator is owned and seeded explicitly, so a given seed always
/// produces the same order.
#[derive(Debug, Clone)]
pub struct Shuffler {
    seed: u64,
    rng: StdRng,
}

impl Shuffler {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seed from the clock's current time.
    #[must_use]
    pub fn from_clock(clock: &Clock) -> Self {
        Self::new(clock.seed())
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw a random permutation of `0..n`.
    pub fn permutation(&mut self, n: usize) -> Vec<usize> {
        let mut perm: Vec<usize> = (0..n).collect();
        perm.shuffle(&mut self.rng);
        perm
    }

    /// Return the questions reordered so that input item `i` lands at `perm[i]`.
    pub fn shuffle(&mut self, questions: Vec<Question>) -> Vec<Question> {
        let perm = self.permutation(questions.len());
        let mut slots: Vec<Option<Question>> = vec![None; questions.len()];
        for (question, target) in questions.into_iter().zip(perm) {
            slots[target] = Some(question);
        }
        // A permutation fills every slot exactly once.
        slots.into_iter().flatten().collect()
    }
}
