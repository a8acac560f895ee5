//! Card data and per-card match status.

use crate::ability::Ability;
use crate::moves::Move;

/// Evolution stage of a card.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Stage {
    #[default]
    Basic,
    StageOne,
    StageTwo,
}

/// A playable card together with its transient in-match status.
///
/// Cards are assembled by the host from loaded moves and abilities; there is
/// no card content file yet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Card {
    pub id: u32,
    pub name: String,
    pub stage: Stage,
    /// Name of the card this one evolves from, for non-basic stages.
    pub evolves_from: Option<String>,
    pub health: u32,
    /// Element type; a member of the loaded type catalog.
    pub element: String,
    pub modifier: Option<String>,
    pub weakness: Vec<String>,
    pub retreat_cost: Vec<String>,
    pub abilities: Vec<Ability>,
    pub moves: Vec<Move>,
    /// Status conditions ("Asleep", "Paralyzed", ...) applied mid-match.
    pub status: Vec<String>,
    /// Set once the card has sat in play long enough to evolve.
    pub evolution_ready: bool,
}

impl Card {
    /// Fresh card with the given name and everything else defaulted.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Whether the given status condition is currently applied.
    pub fn has_status(&self, status: &str) -> bool {
        self.status.iter().any(|s| s == status)
    }

    /// Apply a status condition unless it is already present.
    pub fn apply_status(&mut self, status: impl Into<String>) {
        let status = status.into();
        if !self.has_status(&status) {
            self.status.push(status);
        }
    }

    /// Remove a status condition if present.
    pub fn clear_status(&mut self, status: &str) {
        self.status.retain(|s| s != status);
    }
}
