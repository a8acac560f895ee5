//! Compiled-in behavior tables and hook resolution.
//!
//! Four tables cover roles {effect, activation} x tiers {standard, custom}.
//! Move effects and ability effects share the effect-role tables. A tier can
//! be absent entirely, which is distinct from a present table that does not
//! export a given name: resolution reports `SourcesMissing` only when both
//! tiers of a role are uninstalled.

pub mod standard;

use std::collections::HashMap;

use tcg_core::{ActivationFn, ActivationHook, EffectFn, EffectHook, Hook, HookRole, SourceTier};

/// Why a hook name failed to resolve.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// Neither tier of the role's tables is installed.
    #[error("no behavior sources installed for this role")]
    SourcesMissing,
    /// At least one tier is installed but none exports the name.
    #[error("behavior function `{0}` is not exported by any source")]
    NotFound(String),
}

/// Name-to-function table for one role and tier.
#[derive(Clone, Debug)]
pub struct FunctionTable<F> {
    functions: HashMap<&'static str, F>,
}

impl<F: Copy> FunctionTable<F> {
    pub fn new() -> Self {
        Self {
            functions: HashMap::new(),
        }
    }

    /// Register `function` under `name`, replacing any previous entry.
    pub fn register(&mut self, name: &'static str, function: F) -> &mut Self {
        self.functions.insert(name, function);
        self
    }

    /// Look up a function by name.
    pub fn get(&self, name: &str) -> Option<F> {
        self.functions.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

impl<F: Copy> Default for FunctionTable<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// The two tiers of function tables for one role.
///
/// `resolve` prefers the standard tier; the custom tier only answers names
/// the standard tier does not export.
#[derive(Clone, Debug)]
pub struct HookSource<F> {
    role: HookRole,
    standard: Option<FunctionTable<F>>,
    custom: Option<FunctionTable<F>>,
}

impl<F: Copy> HookSource<F> {
    /// Source with no tiers installed.
    pub fn empty(role: HookRole) -> Self {
        Self {
            role,
            standard: None,
            custom: None,
        }
    }

    /// Install or replace the standard-tier table.
    pub fn set_standard(&mut self, table: FunctionTable<F>) {
        self.standard = Some(table);
    }

    /// Install or replace the custom-tier table.
    pub fn set_custom(&mut self, table: FunctionTable<F>) {
        self.custom = Some(table);
    }

    pub fn role(&self) -> HookRole {
        self.role
    }

    /// Resolve `name` to a bound hook, standard tier first.
    pub fn resolve(&self, name: &str) -> Result<Hook<F>, ResolveError> {
        if self.standard.is_none() && self.custom.is_none() {
            return Err(ResolveError::SourcesMissing);
        }
        if let Some(function) = self.standard.as_ref().and_then(|table| table.get(name)) {
            return Ok(Hook::new(self.role, SourceTier::Standard, name, function));
        }
        if let Some(function) = self.custom.as_ref().and_then(|table| table.get(name)) {
            return Ok(Hook::new(self.role, SourceTier::Custom, name, function));
        }
        Err(ResolveError::NotFound(name.to_string()))
    }
}

/// All four behavior tables plus the resolution entry points the parsers use.
#[derive(Clone, Debug)]
pub struct BehaviorCatalog {
    effects: HookSource<EffectFn>,
    activations: HookSource<ActivationFn>,
}

impl BehaviorCatalog {
    /// Catalog with no sources installed at all.
    pub fn empty() -> Self {
        Self {
            effects: HookSource::empty(HookRole::Effect),
            activations: HookSource::empty(HookRole::Activation),
        }
    }

    /// Catalog pre-loaded with the shipped standard tables.
    ///
    /// The custom tier starts absent; hosts install it through the setters.
    pub fn builtin() -> Self {
        let mut catalog = Self::empty();
        catalog.effects.set_standard(standard::effect_table());
        catalog.activations.set_standard(standard::activation_table());
        catalog
    }

    pub fn effects(&self) -> &HookSource<EffectFn> {
        &self.effects
    }

    pub fn activations(&self) -> &HookSource<ActivationFn> {
        &self.activations
    }

    pub fn set_standard_effects(&mut self, table: FunctionTable<EffectFn>) {
        self.effects.set_standard(table);
    }

    pub fn set_custom_effects(&mut self, table: FunctionTable<EffectFn>) {
        self.effects.set_custom(table);
    }

    pub fn set_standard_activations(&mut self, table: FunctionTable<ActivationFn>) {
        self.activations.set_standard(table);
    }

    pub fn set_custom_activations(&mut self, table: FunctionTable<ActivationFn>) {
        self.activations.set_custom(table);
    }

    /// Resolve a move- or ability-effect name.
    pub fn resolve_effect(&self, name: &str) -> Result<EffectHook, ResolveError> {
        self.effects.resolve(name)
    }

    /// Resolve an ability-activation name.
    pub fn resolve_activation(&self, name: &str) -> Result<ActivationHook, ResolveError> {
        self.activations.resolve(name)
    }
}
