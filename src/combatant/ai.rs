use log::info;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::common::Coordinate;
use crate::grid::GridView;

use super::Combatant;

/// Computer player that fires at uniformly random cells. It keeps no memory
/// of earlier shots, so repeated targets are left to the grid to reject.
pub struct AiCombatant {
    rng: SmallRng,
}

impl AiCombatant {
    pub fn new(rng: SmallRng) -> Self {
        Self { rng }
    }

    /// Fix RNG seed for reproducible targeting.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl Combatant for AiCombatant {
    fn choose_target(&mut self, opponent: &GridView<'_>) -> Option<Coordinate> {
        let n = opponent.size();
        if n == 0 {
            return None;
        }
        let target = Coordinate::new(
            self.rng.random_range(0..n) as i32,
            self.rng.random_range(0..n) as i32,
        );
        info!("enemy is shooting: {}", target);
        Some(target)
    }
}
