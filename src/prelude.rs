//! Commonly used types and utilities for ease of import.

pub use crate::{
    AiCombatant, Combatant, Coordinate, FireOutcome, FleetGenerator, GameConfig, GameState, Grid,
    HumanCombatant, Side, TurnEngine, Vessel,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, render_boards, ConsolePrompt};
