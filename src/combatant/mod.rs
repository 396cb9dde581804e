//! Combatant trait and implementations
//!
//! A combatant only decides where to shoot. Firing, rejection of bad targets
//! and retries happen in [`make_move`]:
//! - AiCombatant: uniform random targets
//! - HumanCombatant: targets read from a [`CoordinateSource`]
//! - ConsolePrompt: line-based `CoordinateSource` over any reader/writer

use core::fmt;

use log::warn;

use crate::common::{BoardError, Coordinate, FireOutcome};
use crate::grid::{Grid, GridView};

/// Interface implemented by the different kinds of players.
pub trait Combatant {
    /// Choose the next coordinate to fire at on the opponent's grid.
    /// Returns `None` when the combatant can no longer supply targets
    /// (for example, its input stream was closed).
    fn choose_target(&mut self, opponent: &GridView<'_>) -> Option<Coordinate>;
}

/// A shot the opponent's grid accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shot {
    pub target: Coordinate,
    pub outcome: FireOutcome,
    /// Targets rejected as out of bounds or already shot before this one.
    pub rejected: usize,
}

/// Reasons a move could not be completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// The combatant stopped supplying targets.
    Withdrawn,
    /// Every cell of the opponent's grid has already been shot.
    NoTargetsLeft,
    Board(BoardError),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::Withdrawn => write!(f, "combatant stopped choosing targets"),
            MoveError::NoTargetsLeft => write!(f, "no untargeted cells remain"),
            MoveError::Board(e) => write!(f, "{}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MoveError {}

/// Ask `combatant` for targets until `opponent` accepts one. Out-of-bounds
/// and repeated targets are reported and retried.
pub fn make_move<C: Combatant + ?Sized>(
    combatant: &mut C,
    opponent: &mut Grid,
) -> Result<Shot, MoveError> {
    let mut rejected = 0;
    loop {
        if opponent.untargeted_cells() == 0 {
            return Err(MoveError::NoTargetsLeft);
        }
        let target = combatant
            .choose_target(&opponent.view())
            .ok_or(MoveError::Withdrawn)?;
        match opponent.fire(target) {
            Ok(outcome) => {
                return Ok(Shot {
                    target,
                    outcome,
                    rejected,
                })
            }
            Err(e @ (BoardError::OutOfBounds(_) | BoardError::AlreadyTargeted(_))) => {
                warn!("{}", e);
                rejected += 1;
            }
            Err(e) => return Err(MoveError::Board(e)),
        }
    }
}

pub mod ai;
pub use ai::AiCombatant;

pub mod human;
pub use human::{CoordinateSource, HumanCombatant};

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::{parse_pair, ConsolePrompt, InputError};
