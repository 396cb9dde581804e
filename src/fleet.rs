//! Random fleet placement by rejection sampling.
//!
//! Every vessel of the formation draws a random anchor and orientation until
//! the grid accepts it. A single attempt counter covers the whole formation;
//! once it runs out the partial grid is thrown away and generation starts
//! over on a fresh grid.

use alloc::vec::Vec;

use log::{debug, warn};
use rand::Rng;

use crate::common::{BoardError, Coordinate};
use crate::config::{ConfigError, GameConfig, MAX_PLACEMENT_ATTEMPTS, STANDARD_FORMATION};
use crate::grid::Grid;
use crate::vessel::{Orientation, Vessel};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FleetGenerator {
    size: usize,
    formation: Vec<usize>,
    max_attempts: usize,
}

impl FleetGenerator {
    /// Generator for the standard formation on a `size × size` grid.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            formation: STANDARD_FORMATION.to_vec(),
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.grid_size).with_max_attempts(config.max_placement_attempts)
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Replace the vessel lengths to place, in order.
    pub fn with_formation(mut self, formation: &[usize]) -> Self {
        self.formation = formation.to_vec();
        self
    }

    pub fn formation(&self) -> &[usize] {
        &self.formation
    }

    /// Reject settings under which no attempt could ever succeed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        let lengths = self.formation.iter().map(|&l| l.max(1));
        if let Some(length) = lengths.clone().find(|&l| l > self.size) {
            return Err(ConfigError::VesselTooLong {
                length,
                size: self.size,
            });
        }
        // On a grid padded by one row and column, each vessel plus the cells
        // after and beside it covers its own 2 x (length + 1) block.
        let blocks: usize = lengths.map(|l| 2 * (l + 1)).sum();
        if blocks > (self.size + 1) * (self.size + 1) {
            return Err(ConfigError::FormationTooDense { size: self.size });
        }
        Ok(())
    }

    /// One generation attempt. Fails with `PlacementAttemptsExhausted` once
    /// the shared attempt budget is spent; the partial grid is dropped.
    pub fn try_generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Grid, BoardError> {
        let mut grid = Grid::new(self.size)?;
        self.validate()?;
        let mut attempts = 0usize;
        for &length in &self.formation {
            loop {
                attempts += 1;
                if attempts > self.max_attempts {
                    return Err(BoardError::PlacementAttemptsExhausted {
                        attempts: self.max_attempts,
                    });
                }
                let vessel = self.random_vessel(rng, length);
                match grid.place_vessel(vessel) {
                    Ok(()) => break,
                    Err(BoardError::InvalidPlacement) => continue,
                    Err(e) => return Err(e),
                }
            }
        }
        grid.reset_transient_state();
        debug!(
            "generated {} vessels in {} attempts",
            grid.fleet_size(),
            attempts
        );
        Ok(grid)
    }

    /// Generate a complete grid, restarting from scratch whenever an attempt
    /// runs out of budget. Settings rejected by [`validate`](Self::validate)
    /// are returned as `BoardError::Config` before any attempt is made.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Grid, BoardError> {
        let mut restarts = 0usize;
        loop {
            match self.try_generate(rng) {
                Err(BoardError::PlacementAttemptsExhausted { attempts }) => {
                    restarts += 1;
                    warn!(
                        "fleet placement exhausted {} attempts, restarting (restart #{})",
                        attempts, restarts
                    );
                }
                other => return other,
            }
        }
    }

    fn random_vessel<R: Rng + ?Sized>(&self, rng: &mut R, length: usize) -> Vessel {
        let row = rng.random_range(0..self.size) as i32;
        let col = rng.random_range(0..self.size) as i32;
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        Vessel::new(Coordinate::new(row, col), length, orientation)
    }
}
