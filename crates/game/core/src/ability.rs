//! Ability records attached to cards.

use crate::hook::{ActivationHook, EffectHook};

/// One ability as loaded from the ability content files.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Ability {
    pub name: String,
    /// True for `Type: Passive` records, false for `Type: Active`.
    pub passive: bool,
    /// Predicate gating activation; `None` for records carrying the sentinel.
    pub activation: Option<ActivationHook>,
    /// Whether the ability can currently fire. Loaders always start this
    /// false; the match engine flips it once the activation condition holds.
    pub usable: bool,
    pub effect: Option<EffectHook>,
}
