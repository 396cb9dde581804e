use crate::common::Coordinate;
use crate::grid::GridView;

use super::Combatant;

/// Supplier of raw 1-based (row, column) pairs typed by a person.
///
/// Implementations own prompting and re-prompting on malformed input; they
/// only return once they have a pair, or `None` when no more input will come.
pub trait CoordinateSource {
    fn next_pair(&mut self) -> Option<(u32, u32)>;
}

/// Player whose targets come from a [`CoordinateSource`].
pub struct HumanCombatant<S> {
    source: S,
}

impl<S: CoordinateSource> HumanCombatant<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn into_source(self) -> S {
        self.source
    }
}

fn to_zero_based(n: u32) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX).saturating_sub(1)
}

impl<S: CoordinateSource> Combatant for HumanCombatant<S> {
    fn choose_target(&mut self, _opponent: &GridView<'_>) -> Option<Coordinate> {
        let (row, col) = self.source.next_pair()?;
        Some(Coordinate::new(to_zero_based(row), to_zero_based(col)))
    }
}
