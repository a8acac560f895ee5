//! Shipped standard-tier behavior functions.
//!
//! The starter set referenced by the shipped content files. Bodies only use
//! what the match containers support today; richer effects land together
//! with the rules engine.

use tcg_core::{ActivationFn, CoinFace, EffectFn, MatchState};

use crate::behavior::FunctionTable;

/// The acting player draws one card.
pub fn draw_effect(state: &mut MatchState) {
    state.attacker_mut().draw();
}

/// Put the defending active card to sleep.
pub fn sleep_effect(state: &mut MatchState) {
    if let Some(card) = state.defender_mut().active.as_mut() {
        card.apply_status("Asleep");
    }
}

/// Paralyze the defending active card.
pub fn paralyze_effect(state: &mut MatchState) {
    if let Some(card) = state.defender_mut().active.as_mut() {
        card.apply_status("Paralyzed");
    }
}

/// Flip a coin; on heads the acting player draws one card.
pub fn flip_draw_effect(state: &mut MatchState) {
    if state.coin.flip() == CoinFace::Heads {
        state.attacker_mut().draw();
    }
}

/// Active while the acting player has at least one benched card.
pub fn benched_ally_activation(state: &MatchState) -> bool {
    state.attacker().bench_count() > 0
}

/// Active while the acting player can still draw.
pub fn deck_not_empty_activation(state: &MatchState) -> bool {
    !state.attacker().deck.is_empty()
}

/// Standard effect table bound at startup.
pub fn effect_table() -> FunctionTable<EffectFn> {
    let mut table: FunctionTable<EffectFn> = FunctionTable::new();
    table
        .register("draw_effect", draw_effect)
        .register("sleep_effect", sleep_effect)
        .register("paralyze_effect", paralyze_effect)
        .register("flip_draw_effect", flip_draw_effect);
    table
}

/// Standard activation table bound at startup.
pub fn activation_table() -> FunctionTable<ActivationFn> {
    let mut table: FunctionTable<ActivationFn> = FunctionTable::new();
    table
        .register("benched_ally_activation", benched_ally_activation)
        .register("deck_not_empty_activation", deck_not_empty_activation);
    table
}
