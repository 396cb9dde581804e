//! Turn engine: alternates two combatants, applies the repeat-on-hit rule
//! and detects the end of the game.

use alloc::boxed::Box;
use core::fmt;

use log::info;
use rand::Rng;

use crate::combatant::{make_move, Combatant, MoveError, Shot};
use crate::common::BoardError;
use crate::fleet::FleetGenerator;
use crate::grid::Grid;

/// One of the two players. Each side owns the grid at its index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::First => write!(f, "first player"),
            Side::Second => write!(f, "second player"),
        }
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Grids not generated yet.
    Setup,
    /// Waiting for `Side` to fire.
    AwaitingMove(Side),
    /// Terminal.
    GameOver { winner: Side },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Grids have not been installed yet.
    NotStarted,
    /// Grids were already installed.
    AlreadyStarted,
    /// The game has a winner; no further moves are accepted.
    Finished,
    /// A grid without vessels cannot take part in a game.
    EmptyFleet(Side),
    /// The given side could not complete its move.
    Move(Side, MoveError),
    Board(BoardError),
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::NotStarted => write!(f, "game has not started"),
            GameError::AlreadyStarted => write!(f, "game has already started"),
            GameError::Finished => write!(f, "game is over"),
            GameError::EmptyFleet(side) => write!(f, "{} has no vessels", side),
            GameError::Move(side, e) => write!(f, "{} could not move: {}", side, e),
            GameError::Board(e) => write!(f, "{}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}

/// What happened during one call to [`TurnEngine::play_turn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub side: Side,
    pub shot: Shot,
    /// State after the move.
    pub next: GameState,
}

/// Core game loop holding both combatants and their grids.
pub struct TurnEngine {
    combatants: [Box<dyn Combatant>; 2],
    grids: Option<[Grid; 2]>,
    state: GameState,
    moves: usize,
}

impl TurnEngine {
    /// Create an engine in the `Setup` state. `first` moves first.
    pub fn new(first: Box<dyn Combatant>, second: Box<dyn Combatant>) -> Self {
        Self {
            combatants: [first, second],
            grids: None,
            state: GameState::Setup,
            moves: 0,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn winner(&self) -> Option<Side> {
        match self.state {
            GameState::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    /// Number of accepted shots so far.
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Grid owned by `side`, once the game has begun.
    pub fn grid(&self, side: Side) -> Option<&Grid> {
        self.grids.as_ref().map(|g| &g[side.index()])
    }

    /// Mutable grid access, e.g. to toggle visibility.
    pub fn grid_mut(&mut self, side: Side) -> Option<&mut Grid> {
        self.grids.as_mut().map(|g| &mut g[side.index()])
    }

    /// Generate both grids with `generator` and begin the game.
    pub fn setup<R: Rng + ?Sized>(
        &mut self,
        generator: &FleetGenerator,
        rng: &mut R,
    ) -> Result<(), GameError> {
        if self.state != GameState::Setup {
            return Err(GameError::AlreadyStarted);
        }
        let first = generator.generate(rng)?;
        let second = generator.generate(rng)?;
        self.begin(first, second)
    }

    /// Install already populated grids and hand the first move to
    /// `Side::First`.
    pub fn begin(&mut self, first: Grid, second: Grid) -> Result<(), GameError> {
        if self.state != GameState::Setup {
            return Err(GameError::AlreadyStarted);
        }
        if first.fleet_size() == 0 {
            return Err(GameError::EmptyFleet(Side::First));
        }
        if second.fleet_size() == 0 {
            return Err(GameError::EmptyFleet(Side::Second));
        }
        self.grids = Some([first, second]);
        self.state = GameState::AwaitingMove(Side::First);
        Ok(())
    }

    /// Let the active side fire once and advance the state.
    pub fn play_turn(&mut self) -> Result<TurnReport, GameError> {
        let side = match self.state {
            GameState::Setup => return Err(GameError::NotStarted),
            GameState::GameOver { .. } => return Err(GameError::Finished),
            GameState::AwaitingMove(side) => side,
        };
        let grids = self.grids.as_mut().ok_or(GameError::NotStarted)?;
        let combatant = self.combatants[side.index()].as_mut();
        let shot = make_move(combatant, &mut grids[side.opponent().index()])
            .map_err(|e| GameError::Move(side, e))?;
        self.moves += 1;
        info!("{} fired at {}: {}", side, shot.target, shot.outcome);

        let defeated = [Side::First, Side::Second]
            .into_iter()
            .find(|s| grids[s.index()].all_destroyed());
        let next = match defeated {
            Some(loser) => GameState::GameOver {
                winner: loser.opponent(),
            },
            None if shot.outcome.repeats_turn() => GameState::AwaitingMove(side),
            None => GameState::AwaitingMove(side.opponent()),
        };
        if let GameState::GameOver { winner } = next {
            info!("{} wins after {} moves", winner, self.moves);
        }
        self.state = next;
        Ok(TurnReport { side, shot, next })
    }

    /// Play turns until one side wins.
    pub fn run(&mut self) -> Result<Side, GameError> {
        loop {
            if let GameState::GameOver { winner } = self.state {
                return Ok(winner);
            }
            self.play_turn()?;
        }
    }
}
