//! One player's grid: cell states, vessels, shot history and the transient
//! exclusion zone used while a fleet is being placed.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use log::debug;

use crate::bitboard::BitBoard;
use crate::common::{BoardError, CellState, Coordinate, FireOutcome};
use crate::vessel::Vessel;

/// Set of grid cells. Grids up to 11×11 fit in a `u128`.
pub type CellMask = BitBoard<u128>;

pub struct Grid {
    size: usize,
    cells: Vec<CellState>,
    vessels: Vec<Vessel>,
    vessel_map: CellMask,
    // Placement-time only; emptied by `reset_transient_state`.
    exclusion: CellMask,
    placing: bool,
    shots: CellMask,
    fired: usize,
    destroyed: usize,
    hidden: bool,
}

impl Grid {
    /// Create an empty, visible grid of `size × size` cells.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        let empty = CellMask::try_new(size)?;
        Ok(Grid {
            size,
            cells: vec![CellState::Empty; size * size],
            vessels: Vec::new(),
            vessel_map: empty,
            exclusion: empty,
            placing: true,
            shots: empty,
            fired: 0,
            destroyed: 0,
            hidden: false,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_out_of_bounds(&self, coord: Coordinate) -> bool {
        self.locate(coord).is_none()
    }

    /// Converts an in-bounds coordinate into (row, col) indices.
    fn locate(&self, coord: Coordinate) -> Option<(usize, usize)> {
        let row = usize::try_from(coord.row).ok()?;
        let col = usize::try_from(coord.col).ok()?;
        (row < self.size && col < self.size).then_some((row, col))
    }

    /// Actual state of a cell, or `None` outside the grid.
    pub fn cell(&self, coord: Coordinate) -> Option<CellState> {
        self.locate(coord)
            .map(|(r, c)| self.cells[r * self.size + c])
    }

    fn set_cell(&mut self, row: usize, col: usize, state: CellState) {
        self.cells[row * self.size + col] = state;
    }

    /// Placed vessels, in placement order.
    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    pub fn fleet_size(&self) -> usize {
        self.vessels.len()
    }

    pub fn destroyed_count(&self) -> usize {
        self.destroyed
    }

    /// Returns `true` when every vessel has been destroyed.
    pub fn all_destroyed(&self) -> bool {
        self.destroyed == self.vessels.len()
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Hide intact vessel cells from observers of this grid.
    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    pub fn has_been_targeted(&self, coord: Coordinate) -> bool {
        self.locate(coord)
            .is_some_and(|(r, c)| self.shots.get(r, c).unwrap_or(false))
    }

    /// Number of coordinates in the shot history, sealed perimeters included.
    pub fn shots_taken(&self) -> usize {
        self.shots.count_ones()
    }

    /// Number of shots the grid accepted.
    pub fn shots_received(&self) -> usize {
        self.fired
    }

    /// Coordinates that can still be fired upon.
    pub fn untargeted_cells(&self) -> usize {
        self.size * self.size - self.shots.count_ones()
    }

    /// Current exclusion zone.
    pub fn exclusion(&self) -> CellMask {
        self.exclusion
    }

    /// Cells of `vessel`'s 8-neighbourhood (its own cells included) that
    /// lie on the grid and are not yet excluded.
    pub fn exclusion_zone(&self, vessel: &Vessel) -> CellMask {
        let mut zone = self.exclusion;
        zone.clear_all();
        for coord in vessel.neighbourhood() {
            if let Some((r, c)) = self.locate(coord) {
                if !self.exclusion.get(r, c).unwrap_or(true) {
                    let _ = zone.set(r, c);
                }
            }
        }
        zone
    }

    /// Place `vessel`, rejecting it if any cell is off the grid, occupied,
    /// or inside the exclusion zone of an earlier vessel. Placement closes
    /// once `reset_transient_state` has run.
    pub fn place_vessel(&mut self, vessel: Vessel) -> Result<(), BoardError> {
        if !self.placing || vessel.length() > self.size {
            return Err(BoardError::InvalidPlacement);
        }
        let busy = self.vessel_map | self.exclusion | self.shots;
        let mut cells = Vec::with_capacity(vessel.length());
        for coord in vessel.occupied_cells() {
            let (r, c) = self.locate(coord).ok_or(BoardError::InvalidPlacement)?;
            if busy.get(r, c)? {
                return Err(BoardError::InvalidPlacement);
            }
            cells.push((r, c));
        }
        for (r, c) in cells {
            self.vessel_map.set(r, c)?;
            self.set_cell(r, c, CellState::Occupied);
        }
        let zone = self.exclusion_zone(&vessel);
        self.exclusion |= zone;
        debug!(
            "placed vessel of length {} at {:?} {:?}",
            vessel.length(),
            vessel.anchor(),
            vessel.orientation()
        );
        self.vessels.push(vessel);
        Ok(())
    }

    /// Drop placement bookkeeping before play begins. No vessel can be
    /// placed afterwards.
    pub fn reset_transient_state(&mut self) {
        self.exclusion.clear_all();
        self.placing = false;
    }

    /// Resolve a shot at `coord`.
    pub fn fire(&mut self, coord: Coordinate) -> Result<FireOutcome, BoardError> {
        let (r, c) = self.locate(coord).ok_or(BoardError::OutOfBounds(coord))?;
        if self.shots.get(r, c)? {
            return Err(BoardError::AlreadyTargeted(coord));
        }
        self.shots.set(r, c)?;
        self.fired += 1;

        let Some(idx) = self.vessels.iter().position(|v| v.is_hit_by(coord)) else {
            self.set_cell(r, c, CellState::Miss);
            debug!("shot at {} missed", coord);
            return Ok(FireOutcome::Miss);
        };

        self.set_cell(r, c, CellState::Hit);
        let vessel = &mut self.vessels[idx];
        vessel.apply_hit();
        if !vessel.is_destroyed() {
            debug!("shot at {} damaged a vessel", coord);
            return Ok(FireOutcome::Damaged);
        }

        let vessel = *vessel;
        self.destroyed += 1;
        self.seal_perimeter(&vessel)?;
        debug!(
            "shot at {} destroyed a vessel ({}/{})",
            coord,
            self.destroyed,
            self.vessels.len()
        );
        Ok(FireOutcome::Destroyed)
    }

    /// Mark the untouched neighbourhood of a destroyed vessel. Those cells
    /// cannot hold another vessel, so they join the shot history.
    fn seal_perimeter(&mut self, vessel: &Vessel) -> Result<(), BoardError> {
        for coord in vessel.neighbourhood() {
            if let Some((r, c)) = self.locate(coord) {
                if self.cells[r * self.size + c] == CellState::Empty {
                    self.set_cell(r, c, CellState::DestroyedMarker);
                    self.shots.set(r, c)?;
                }
            }
        }
        Ok(())
    }

    /// Read-only projection that honours the visibility flag.
    pub fn view(&self) -> GridView<'_> {
        GridView { grid: self }
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("size", &self.size)
            .field("vessels", &self.vessels)
            .field("destroyed", &self.destroyed)
            .field("hidden", &self.hidden)
            .field("shots", &self.shots)
            .finish()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.view(), f)
    }
}

/// What an observer of a grid is allowed to see.
#[derive(Clone, Copy)]
pub struct GridView<'a> {
    grid: &'a Grid,
}

impl GridView<'_> {
    pub fn size(&self) -> usize {
        self.grid.size
    }

    pub fn is_out_of_bounds(&self, coord: Coordinate) -> bool {
        self.grid.is_out_of_bounds(coord)
    }

    pub fn has_been_targeted(&self, coord: Coordinate) -> bool {
        self.grid.has_been_targeted(coord)
    }

    /// Cell state as presented: intact vessel cells read as `Empty` while
    /// the grid is hidden.
    pub fn cell(&self, coord: Coordinate) -> Option<CellState> {
        self.grid.cell(coord).map(|state| match state {
            CellState::Occupied if self.grid.hidden => CellState::Empty,
            other => other,
        })
    }
}

impl fmt::Display for GridView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.size() as i32;
        write!(f, "  |")?;
        for col in 1..=n {
            write!(f, " {} |", col)?;
        }
        for row in 0..n {
            write!(f, "\n{:<2}|", row + 1)?;
            for col in 0..n {
                let state = self.cell(Coordinate::new(row, col)).unwrap_or_default();
                write!(f, " {} |", state.symbol())?;
            }
        }
        Ok(())
    }
}
