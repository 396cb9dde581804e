#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use sea_battle::{
    describe_state, prelude::*, ConfigError, GameError, DEFAULT_GRID_SIZE,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer in this terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
        size: usize,
    },
    /// Watch the computer play against itself.
    Watch {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
        size: usize,
    },
}

#[cfg(feature = "std")]
fn game_config(seed: Option<u64>, size: usize) -> Result<GameConfig, ConfigError> {
    let config = GameConfig {
        grid_size: size,
        seed,
        ..GameConfig::default()
    };
    config.validate()?;
    Ok(config)
}

#[cfg(feature = "std")]
fn session_rng(config: &GameConfig) -> SmallRng {
    match config.seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn run_session(engine: &mut TurnEngine, labels: [&str; 2]) -> Result<Side, GameError> {
    loop {
        println!("{}", render_boards(engine, labels));
        let state = engine.state();
        println!("{}", describe_state(state, labels));
        if let GameState::GameOver { winner } = state {
            return Ok(winner);
        }
        engine.play_turn()?;
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Play {
        seed: None,
        size: DEFAULT_GRID_SIZE,
    });

    match command {
        Commands::Play { seed, size } => {
            let config = game_config(seed, size)?;
            let mut rng = session_rng(&config);
            print!("{}", sea_battle::banner());

            let user = HumanCombatant::new(ConsolePrompt::stdio());
            let ai = AiCombatant::new(SmallRng::from_rng(&mut rng));
            let mut engine = TurnEngine::new(Box::new(user), Box::new(ai));
            engine.setup(&FleetGenerator::from_config(&config), &mut rng)?;
            if let Some(grid) = engine.grid_mut(Side::Second) {
                grid.set_hidden(true);
            }

            if let Err(e) = run_session(&mut engine, ["user", "ai"]) {
                eprintln!("Game ended with an error: {}", e);
            }
        }
        Commands::Watch { seed, size } => {
            let config = game_config(seed, size)?;
            let mut rng = session_rng(&config);
            let ai1 = AiCombatant::new(SmallRng::from_rng(&mut rng));
            let ai2 = AiCombatant::new(SmallRng::from_rng(&mut rng));
            let mut engine = TurnEngine::new(Box::new(ai1), Box::new(ai2));
            engine.setup(&FleetGenerator::from_config(&config), &mut rng)?;
            run_session(&mut engine, ["ai 1", "ai 2"])?;
        }
    }
    Ok(())
}
