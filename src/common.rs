//! Common types for the game: coordinates, cell states, shot outcomes and
//! board errors.

use core::fmt;

use crate::bitboard::BitBoardError;
use crate::config::ConfigError;

/// A (row, column) position. Components are signed so that neighbourhood
/// arithmetic and converted user input can land outside a grid; validity is
/// always decided by the grid the coordinate is used against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

impl Coordinate {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Coordinate shifted by (`dr`, `dc`).
    pub const fn offset(self, dr: i32, dc: i32) -> Self {
        Self::new(self.row.saturating_add(dr), self.col.saturating_add(dc))
    }

    /// Chebyshev (king-move) distance between two coordinates.
    pub fn chebyshev(self, other: Coordinate) -> u32 {
        self.row
            .abs_diff(other.row)
            .max(self.col.abs_diff(other.col))
    }
}

impl fmt::Display for Coordinate {
    /// Formats using the 1-based numbering shown to players.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.row + 1, self.col + 1)
    }
}

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Empty,
    Occupied,
    Hit,
    Miss,
    /// Sealed perimeter around a destroyed vessel.
    DestroyedMarker,
}

impl CellState {
    /// Character used by the board renderer.
    pub fn symbol(self) -> char {
        match self {
            CellState::Empty => 'O',
            CellState::Occupied => '■',
            CellState::Hit => 'X',
            CellState::Miss => '.',
            CellState::DestroyedMarker => '*',
        }
    }
}

/// Result of a shot that the grid accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum FireOutcome {
    /// Shot landed on open water.
    Miss,
    /// Shot hit a vessel that still has undamaged cells.
    Damaged,
    /// Shot hit the last undamaged cell of a vessel.
    Destroyed,
}

impl FireOutcome {
    /// Whether the shooter keeps the turn.
    pub fn repeats_turn(self) -> bool {
        matches!(self, FireOutcome::Damaged)
    }
}

impl fmt::Display for FireOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FireOutcome::Miss => write!(f, "miss"),
            FireOutcome::Damaged => write!(f, "ship is damaged"),
            FireOutcome::Destroyed => write!(f, "ship is destroyed"),
        }
    }
}

/// Errors returned by Grid operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error (e.g., grid too large for the mask type).
    BitBoard(BitBoardError),
    /// Target lies outside the grid.
    OutOfBounds(Coordinate),
    /// Target was fired upon earlier.
    AlreadyTargeted(Coordinate),
    /// Vessel leaves the grid, overlaps a vessel or touches one.
    InvalidPlacement,
    /// Fleet generation used up its shared attempt budget.
    PlacementAttemptsExhausted { attempts: usize },
    /// Fleet generation settings that can never produce a grid.
    Config(ConfigError),
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoard(err)
    }
}

impl From<ConfigError> for BoardError {
    fn from(err: ConfigError) -> Self {
        BoardError::Config(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitBoard(e) => write!(f, "BitBoard error: {}", e),
            BoardError::OutOfBounds(c) => write!(f, "target {} is out of the board", c),
            BoardError::AlreadyTargeted(c) => write!(f, "target {} has already been shot", c),
            BoardError::InvalidPlacement => write!(f, "vessel cannot be placed there"),
            BoardError::PlacementAttemptsExhausted { attempts } => {
                write!(f, "fleet placement gave up after {} attempts", attempts)
            }
            BoardError::Config(e) => write!(f, "{}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
