//! Core data types and match-state containers for the TCG Pocket emulator.
//!
//! `tcg-core` defines the pure data layer: cards, moves, abilities, the
//! behavior-hook handles that bind them to callable game logic, and the
//! in-progress match state those hooks operate on. Content loading lives in
//! `tcg-content`; this crate performs no I/O.
pub mod ability;
pub mod board;
pub mod card;
pub mod coin;
pub mod hook;
pub mod moves;

pub use ability::Ability;
pub use board::{BENCH_SLOTS, MatchState, Seat, SideState};
pub use card::{Card, Stage};
pub use coin::{Coin, CoinFace};
pub use hook::{ActivationFn, ActivationHook, EffectFn, EffectHook, Hook, HookRole, SourceTier};
pub use moves::Move;
