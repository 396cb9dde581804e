use core::fmt;

/// Side length of the standard board.
pub const DEFAULT_GRID_SIZE: usize = 6;
/// Smallest board on which the standard formation reliably fits.
pub const MIN_GRID_SIZE: usize = 6;
/// Largest board whose cells fit in a `u128` mask.
pub const MAX_GRID_SIZE: usize = 11;

/// Vessel lengths placed on every grid.
pub const STANDARD_FORMATION: [usize; 7] = [3, 2, 2, 1, 1, 1, 1];

/// Shared attempt budget for placing a whole formation on one grid.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 2000;

/// Total number of cells occupied by the standard formation.
pub const TOTAL_VESSEL_CELLS: usize = 3 + 2 + 2 + 1 + 1 + 1 + 1;

/// Errors produced by [`GameConfig::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    GridSize { size: usize },
    ZeroAttempts,
    /// A vessel is longer than the grid side.
    VesselTooLong { length: usize, size: usize },
    /// The formation cannot fit without vessels touching.
    FormationTooDense { size: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::GridSize { size } => write!(
                f,
                "grid size {} is outside {}..={}",
                size, MIN_GRID_SIZE, MAX_GRID_SIZE
            ),
            ConfigError::ZeroAttempts => write!(f, "placement attempt bound must be positive"),
            ConfigError::VesselTooLong { length, size } => write!(
                f,
                "vessel of length {} does not fit on a {}x{} grid",
                length, size, size
            ),
            ConfigError::FormationTooDense { size } => write!(
                f,
                "formation cannot be placed on a {}x{} grid without touching",
                size, size
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Settings for one game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub grid_size: usize,
    pub max_placement_attempts: usize,
    /// Fixed RNG seed for reproducible games.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            max_placement_attempts: MAX_PLACEMENT_ATTEMPTS,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&self.grid_size) {
            return Err(ConfigError::GridSize {
                size: self.grid_size,
            });
        }
        if self.max_placement_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        Ok(())
    }
}
