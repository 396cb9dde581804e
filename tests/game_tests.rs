use std::collections::VecDeque;

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use sea_battle::{
    make_move, AiCombatant, Combatant, Coordinate, FireOutcome, FleetGenerator, GameError,
    GameState, Grid, GridView, MoveError, Orientation, Side, TurnEngine, Vessel,
    DEFAULT_GRID_SIZE,
};

/// Fires at a fixed list of targets, then withdraws.
struct Scripted(VecDeque<Coordinate>);

impl Scripted {
    fn new(targets: &[(i32, i32)]) -> Self {
        Scripted(targets.iter().map(|&(r, c)| Coordinate::new(r, c)).collect())
    }
}

impl Combatant for Scripted {
    fn choose_target(&mut self, _opponent: &GridView<'_>) -> Option<Coordinate> {
        self.0.pop_front()
    }
}

fn grid_with(vessels: &[(i32, i32, usize, Orientation)]) -> Grid {
    let mut grid = Grid::new(DEFAULT_GRID_SIZE).unwrap();
    for &(row, col, len, orientation) in vessels {
        grid.place_vessel(Vessel::new(Coordinate::new(row, col), len, orientation))
            .unwrap();
    }
    grid.reset_transient_state();
    grid
}

#[test]
fn test_ai_vs_ai_game() {
    let mut rng = SmallRng::seed_from_u64(123);
    let mut engine = TurnEngine::new(
        Box::new(AiCombatant::seeded(1)),
        Box::new(AiCombatant::seeded(2)),
    );
    assert_eq!(engine.state(), GameState::Setup);
    engine
        .setup(&FleetGenerator::new(DEFAULT_GRID_SIZE), &mut rng)
        .unwrap();
    assert_eq!(engine.state(), GameState::AwaitingMove(Side::First));

    let winner = engine.run().unwrap();
    assert_eq!(engine.winner(), Some(winner));
    let loser_grid = engine.grid(winner.opponent()).unwrap();
    assert!(loser_grid.all_destroyed());
    assert!(!engine.grid(winner).unwrap().all_destroyed());
    // every accepted shot consumed a fresh cell
    let shots = engine.grid(Side::First).unwrap().shots_taken()
        + engine.grid(Side::Second).unwrap().shots_taken();
    assert!(engine.moves() <= shots);
    assert!(engine.moves() <= 2 * DEFAULT_GRID_SIZE * DEFAULT_GRID_SIZE);
}

#[test]
fn test_single_vessel_game_over_after_one_shot() {
    let mut engine = TurnEngine::new(
        Box::new(Scripted::new(&[(0, 0)])),
        Box::new(Scripted::new(&[])),
    );
    engine
        .begin(
            grid_with(&[(5, 5, 1, Orientation::Horizontal)]),
            grid_with(&[(0, 0, 1, Orientation::Horizontal)]),
        )
        .unwrap();

    let report = engine.play_turn().unwrap();
    assert_eq!(report.side, Side::First);
    assert_eq!(report.shot.outcome, FireOutcome::Destroyed);
    assert_eq!(report.next, GameState::GameOver { winner: Side::First });
    assert_eq!(engine.grid(Side::Second).unwrap().destroyed_count(), 1);
    assert_eq!(engine.play_turn().unwrap_err(), GameError::Finished);
    assert_eq!(engine.run(), Ok(Side::First));
}

#[test]
fn test_damage_repeats_turn_and_miss_or_destroy_passes_it() {
    let first = Scripted::new(&[(0, 0), (3, 3), (0, 1)]);
    let second = Scripted::new(&[(0, 0), (5, 5)]);
    let mut engine = TurnEngine::new(Box::new(first), Box::new(second));
    engine
        .begin(
            grid_with(&[(5, 5, 1, Orientation::Horizontal)]),
            grid_with(&[
                (0, 0, 2, Orientation::Horizontal),
                (4, 4, 1, Orientation::Horizontal),
            ]),
        )
        .unwrap();

    let r = engine.play_turn().unwrap();
    assert_eq!(r.shot.outcome, FireOutcome::Damaged);
    assert_eq!(r.next, GameState::AwaitingMove(Side::First));

    let r = engine.play_turn().unwrap();
    assert_eq!(r.side, Side::First);
    assert_eq!(r.shot.outcome, FireOutcome::Miss);
    assert_eq!(r.next, GameState::AwaitingMove(Side::Second));

    let r = engine.play_turn().unwrap();
    assert_eq!(r.side, Side::Second);
    assert_eq!(r.shot.outcome, FireOutcome::Miss);
    assert_eq!(r.next, GameState::AwaitingMove(Side::First));

    let r = engine.play_turn().unwrap();
    assert_eq!(r.shot.outcome, FireOutcome::Destroyed);
    assert_eq!(r.next, GameState::AwaitingMove(Side::Second));

    let r = engine.play_turn().unwrap();
    assert_eq!(r.side, Side::Second);
    assert_eq!(r.shot.outcome, FireOutcome::Destroyed);
    assert_eq!(r.next, GameState::GameOver { winner: Side::Second });
    assert_eq!(engine.moves(), 5);
}

#[test]
fn test_rejected_targets_are_retried() {
    let mut grid = grid_with(&[(2, 2, 1, Orientation::Horizontal)]);
    grid.fire(Coordinate::new(4, 4)).unwrap();

    let mut shooter = Scripted::new(&[(9, 9), (4, 4), (-1, 0), (2, 2)]);
    let shot = make_move(&mut shooter, &mut grid).unwrap();
    assert_eq!(shot.target, Coordinate::new(2, 2));
    assert_eq!(shot.outcome, FireOutcome::Destroyed);
    assert_eq!(shot.rejected, 3);
}

#[test]
fn test_withdrawn_combatant_is_reported() {
    let mut engine = TurnEngine::new(
        Box::new(Scripted::new(&[])),
        Box::new(Scripted::new(&[])),
    );
    engine
        .begin(
            grid_with(&[(0, 0, 1, Orientation::Horizontal)]),
            grid_with(&[(0, 0, 1, Orientation::Horizontal)]),
        )
        .unwrap();
    assert_eq!(
        engine.play_turn().unwrap_err(),
        GameError::Move(Side::First, MoveError::Withdrawn)
    );
    assert_eq!(engine.state(), GameState::AwaitingMove(Side::First));
}

#[test]
fn test_no_targets_left() {
    let mut grid = Grid::new(DEFAULT_GRID_SIZE).unwrap();
    for r in 0..DEFAULT_GRID_SIZE as i32 {
        for c in 0..DEFAULT_GRID_SIZE as i32 {
            grid.fire(Coordinate::new(r, c)).unwrap();
        }
    }
    let mut ai = AiCombatant::seeded(3);
    assert_eq!(
        make_move(&mut ai, &mut grid).unwrap_err(),
        MoveError::NoTargetsLeft
    );
}

#[test]
fn test_engine_lifecycle_errors() {
    let mut engine = TurnEngine::new(
        Box::new(AiCombatant::seeded(1)),
        Box::new(AiCombatant::seeded(2)),
    );
    assert_eq!(engine.play_turn().unwrap_err(), GameError::NotStarted);
    assert!(engine.grid(Side::First).is_none());

    let empty = Grid::new(DEFAULT_GRID_SIZE).unwrap();
    let full = grid_with(&[(0, 0, 1, Orientation::Horizontal)]);
    assert_eq!(
        engine.begin(empty, full).unwrap_err(),
        GameError::EmptyFleet(Side::First)
    );
    assert_eq!(engine.state(), GameState::Setup);

    let mut rng = SmallRng::seed_from_u64(4);
    let generator = FleetGenerator::new(DEFAULT_GRID_SIZE);
    engine.setup(&generator, &mut rng).unwrap();
    assert_eq!(
        engine.setup(&generator, &mut rng).unwrap_err(),
        GameError::AlreadyStarted
    );
}

#[test]
fn test_seeded_games_are_reproducible() {
    let play = || {
        let mut rng = SmallRng::seed_from_u64(77);
        let mut engine = TurnEngine::new(
            Box::new(AiCombatant::seeded(10)),
            Box::new(AiCombatant::seeded(20)),
        );
        engine
            .setup(&FleetGenerator::new(DEFAULT_GRID_SIZE), &mut rng)
            .unwrap();
        let winner = engine.run().unwrap();
        (winner, engine.moves())
    };
    assert_eq!(play(), play());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn every_game_ends_with_one_fleet_destroyed(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut engine = TurnEngine::new(
            Box::new(AiCombatant::seeded(seed.wrapping_add(1))),
            Box::new(AiCombatant::seeded(seed.wrapping_add(2))),
        );
        engine.setup(&FleetGenerator::new(DEFAULT_GRID_SIZE), &mut rng).unwrap();
        let winner = engine.run().unwrap();
        let loser = engine.grid(winner.opponent()).unwrap();
        prop_assert_eq!(loser.destroyed_count(), loser.fleet_size());
        let survivor = engine.grid(winner).unwrap();
        prop_assert!(survivor.destroyed_count() < survivor.fleet_size());
    }
}
