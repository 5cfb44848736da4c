use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One entry of the roster. City is an opaque label, compared only for
/// equality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub city: String,
}

/// Ordered team roster, unique by name, immutable after load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    pub teams: Vec<Team>,
}

impl Roster {
    pub fn new(teams: Vec<Team>) -> Self {
        Self { teams }
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

/// One fixture between two teams, played in the home team's city.
///
/// Games are immutable values; whether a game made it into the calendar
/// is expressed by the packing result, not by a flag on the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub home: String,
    pub away: String,
    pub city: String,
}

/// A schedulable unit holding up to two games.
///
/// Slots are only ever created around a first occupant, so `first` is
/// always present. Invariant: when `second` is filled, the two games are
/// hosted in different cities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub first: Game,
    pub second: Option<Game>,
}

impl Slot {
    pub fn open(first: Game) -> Self {
        Self {
            first,
            second: None,
        }
    }

    pub fn is_full(&self) -> bool {
        self.second.is_some()
    }

    /// Whether `game` may take the second sub-slot: it must be free and
    /// the candidate must be hosted in a different city than the first
    /// occupant.
    pub fn accepts(&self, game: &Game) -> bool {
        self.second.is_none() && self.first.city != game.city
    }

    pub fn games(&self) -> impl Iterator<Item = &Game> {
        std::iter::once(&self.first).chain(self.second.as_ref())
    }
}

/// A slot pinned to an integer position on the virtual grid of
/// slot-units implied by the date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionedSlot {
    pub position: usize,
    pub slot: Slot,
}

/// Final structured output of the scheduling core, handed to the
/// renderer together with the original start date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleResult {
    pub start_date: NaiveDate,
    pub capacity: usize,
    pub positioned: Vec<PositionedSlot>,
    /// Games that did not fit into the available capacity. Kept for
    /// diagnostics; their omission from the calendar is not an error.
    pub unplaced: Vec<Game>,
}
