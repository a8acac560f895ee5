//! Behavior-hook handles binding content records to callable game logic.
//!
//! Moves and abilities name their behavior in content files; the loader
//! resolves each name against compiled-in function tables and binds the
//! resulting handle here. A handle remembers the role it plays, the source
//! tier it was resolved from, and the name it was resolved under, so two
//! handles compare equal exactly when they refer to the same table entry.
//! The callable itself never participates in comparisons.

use crate::board::MatchState;

/// Callable applied when a move or ability effect fires.
pub type EffectFn = fn(&mut MatchState);

/// Predicate deciding whether an ability may activate.
pub type ActivationFn = fn(&MatchState) -> bool;

/// The role a resolved function plays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HookRole {
    /// Mutates match state when invoked.
    Effect,
    /// Read-only activation predicate.
    Activation,
}

/// Which tier of behavior tables a hook was resolved from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SourceTier {
    /// Shipped, mandatory content.
    Standard,
    /// Optional host-provided extensions.
    Custom,
}

/// A resolved behavior hook.
#[derive(Clone, Debug)]
pub struct Hook<F> {
    role: HookRole,
    tier: SourceTier,
    name: String,
    callable: F,
}

/// Hook bound to an effect function.
pub type EffectHook = Hook<EffectFn>;

/// Hook bound to an activation predicate.
pub type ActivationHook = Hook<ActivationFn>;

impl<F> Hook<F> {
    /// Bind `callable` under the given role, tier, and name.
    pub fn new(role: HookRole, tier: SourceTier, name: impl Into<String>, callable: F) -> Self {
        Self {
            role,
            tier,
            name: name.into(),
            callable,
        }
    }

    pub fn role(&self) -> HookRole {
        self.role
    }

    pub fn tier(&self) -> SourceTier {
        self.tier
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Handle key identifying the table entry this hook was resolved from.
    pub fn key(&self) -> (SourceTier, HookRole, &str) {
        (self.tier, self.role, &self.name)
    }
}

impl Hook<EffectFn> {
    /// Apply the effect to the match state.
    pub fn invoke(&self, state: &mut MatchState) {
        (self.callable)(state)
    }
}

impl Hook<ActivationFn> {
    /// Evaluate the activation predicate against the match state.
    pub fn evaluate(&self, state: &MatchState) -> bool {
        (self.callable)(state)
    }
}

// Equality is by handle key only. Comparing the callables would make hook
// identity depend on which function body a tier happens to export, and fn
// pointer comparisons are unreliable across codegen units anyway.
impl<F> PartialEq for Hook<F> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<F> Eq for Hook<F> {}
