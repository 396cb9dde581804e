#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::{rngs::SmallRng, SeedableRng};
#[cfg(feature = "std")]
use sea_battle::{AiCombatant, FleetGenerator, GameConfig, Side, TurnEngine, DEFAULT_GRID_SIZE};
#[cfg(feature = "std")]
use serde_json::json;

/// Run one computer-vs-computer game and print a JSON summary.
#[derive(Parser)]
#[cfg(feature = "std")]
struct Args {
    /// Seed for the first player's fleet and targeting.
    seed1: u64,
    /// Seed for the second player's fleet and targeting.
    seed2: u64,
    #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
    size: usize,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = GameConfig {
        grid_size: args.size,
        ..GameConfig::default()
    };
    config.validate()?;

    let mut rng1 = SmallRng::seed_from_u64(args.seed1);
    let mut rng2 = SmallRng::seed_from_u64(args.seed2);
    let generator = FleetGenerator::from_config(&config);
    let g1 = generator.generate(&mut rng1)?;
    let g2 = generator.generate(&mut rng2)?;

    let mut engine = TurnEngine::new(
        Box::new(AiCombatant::new(rng1)),
        Box::new(AiCombatant::new(rng2)),
    );
    engine.begin(g1, g2)?;
    let winner = engine.run()?;

    let summary = |side: Side| {
        let grid = engine.grid(side);
        json!({
            "fleet": grid.map(|g| g.fleet_size()),
            "destroyed": grid.map(|g| g.destroyed_count()),
            "shots_received": grid.map(|g| g.shots_received()),
            "cells_targeted": grid.map(|g| g.shots_taken()),
        })
    };
    let winner = match winner {
        Side::First => "player1",
        Side::Second => "player2",
    };
    let result = json!({
        "size": args.size,
        "moves": engine.moves(),
        "winner": winner,
        "player1": summary(Side::First),
        "player2": summary(Side::Second),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
