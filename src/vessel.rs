//! Vessel geometry and damage tracking.

use crate::common::Coordinate;
use crate::config::MAX_GRID_SIZE;

/// Orientation of a vessel on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Cells advance along the column axis.
    Horizontal,
    /// Cells advance along the row axis.
    Vertical,
}

impl Orientation {
    /// Per-cell (row, col) step.
    const fn step(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// A straight vessel anchored at one end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vessel {
    anchor: Coordinate,
    length: usize,
    orientation: Orientation,
    remaining: usize,
}

impl Vessel {
    /// Build an undamaged vessel. `length` is clamped to
    /// `1..=MAX_GRID_SIZE`, so no vessel is longer than the largest grid.
    pub fn new(anchor: Coordinate, length: usize, orientation: Orientation) -> Self {
        let length = length.clamp(1, MAX_GRID_SIZE);
        Self {
            anchor,
            length,
            orientation,
            remaining: length,
        }
    }

    pub fn anchor(&self) -> Coordinate {
        self.anchor
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Undamaged cells left.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Cells covered by the vessel, starting at the anchor.
    pub fn occupied_cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let (dr, dc) = self.orientation.step();
        let anchor = self.anchor;
        (0..self.length).map(move |i| {
            // length <= MAX_GRID_SIZE
            let i = i as i32;
            anchor.offset(dr * i, dc * i)
        })
    }

    pub fn is_hit_by(&self, coord: Coordinate) -> bool {
        self.occupied_cells().any(|c| c == coord)
    }

    /// Record damage to one cell. The caller guarantees each cell is
    /// reported at most once.
    pub fn apply_hit(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    pub fn is_destroyed(&self) -> bool {
        self.remaining == 0
    }

    /// Every in-or-out-of-bounds cell within Chebyshev distance 1 of the
    /// vessel, the vessel's own cells included. May yield duplicates.
    pub fn neighbourhood(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.occupied_cells().flat_map(|cell| {
            (-1..=1).flat_map(move |dr| (-1..=1).map(move |dc| cell.offset(dr, dc)))
        })
    }
}
