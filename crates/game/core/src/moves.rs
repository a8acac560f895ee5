//! Move records attached to cards.

use crate::hook::EffectHook;

/// One move as loaded from the move content files.
///
/// `energy` keeps the record's order and duplicates; every entry was
/// validated against the element-type catalog at load time. `effect` is
/// `None` for moves whose record carried the `None` sentinel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Move {
    pub name: String,
    pub energy: Vec<String>,
    pub damage: u32,
    pub effect: Option<EffectHook>,
}
