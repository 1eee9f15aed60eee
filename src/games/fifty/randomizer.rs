use std::cell::RefCell;

use rand::{rngs::StdRng, Rng, SeedableRng};

pub trait Randomizer {
    /// Uniformly distributed index in the closed range `min..=max`.
    fn pick_index(&self, min: usize, max: usize) -> usize;
}

pub struct DefaultRandomizer {
    rng: RefCell<StdRng>,
}

impl DefaultRandomizer {
    pub fn new() -> Self {
        Self {
            rng: RefCell::new(StdRng::from_entropy()),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: RefCell::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for DefaultRandomizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Randomizer for DefaultRandomizer {
    fn pick_index(&self, min: usize, max: usize) -> usize {
        self.rng.borrow_mut().gen_range(min..=max)
    }
}

/// Always picks `min + offset`, clamped to `max`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedRandomizer {
    pub offset: usize,
}

impl Randomizer for FixedRandomizer {
    fn pick_index(&self, min: usize, max: usize) -> usize {
        (min + self.offset).min(max)
    }
}
