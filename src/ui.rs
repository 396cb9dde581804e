#![cfg(feature = "std")]

use std::string::String;

use crate::game::{GameState, Side, TurnEngine};

const RULE: &str = "-------------------------";

/// Startup banner explaining the input format.
pub fn banner() -> String {
    format!(
        "{rule}\n    welcome to sea battle\n{rule}\n    input format: x y\n    \
         x - row number\n    y - column number\n{rule}\n",
        rule = RULE
    )
}

/// Render both grids, each titled with its owner's label. Hidden grids
/// keep their intact vessels out of sight.
pub fn render_boards(engine: &TurnEngine, labels: [&str; 2]) -> String {
    let mut out = String::new();
    for (side, label) in [Side::First, Side::Second].into_iter().zip(labels) {
        let board = match engine.grid(side) {
            Some(grid) => grid.view().to_string(),
            None => "(not generated)".to_string(),
        };
        out.push_str(&format!("{}\n{} board:\n{}\n", RULE, label, board));
    }
    out.push_str(RULE);
    out
}

/// One-line description of the engine state.
pub fn describe_state(state: GameState, labels: [&str; 2]) -> String {
    let label = |side: Side| match side {
        Side::First => labels[0],
        Side::Second => labels[1],
    };
    match state {
        GameState::Setup => "setting up".to_string(),
        GameState::AwaitingMove(side) => format!("{} move", label(side)),
        GameState::GameOver { winner } => format!("{} win", label(winner)),
    }
}
