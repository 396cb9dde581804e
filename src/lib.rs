#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod bitboard;
pub mod combatant;
mod common;
mod config;
mod fleet;
mod game;
mod grid;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
#[cfg(feature = "std")]
mod ui;
mod vessel;

pub use bitboard::{BitBoard, BitBoardError, SetBits};
pub use combatant::{make_move, AiCombatant, Combatant, CoordinateSource, HumanCombatant, MoveError, Shot};
#[cfg(feature = "std")]
pub use combatant::{parse_pair, ConsolePrompt, InputError};
pub use common::*;
pub use config::*;
pub use fleet::FleetGenerator;
pub use game::*;
pub use grid::{CellMask, Grid, GridView};
#[cfg(feature = "std")]
pub use logging::{init_logging, init_logging_with};
#[cfg(feature = "std")]
pub use ui::*;
pub use vessel::{Orientation, Vessel};
