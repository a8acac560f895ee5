//! Ability record parsing.

use tcg_core::Ability;

use crate::behavior::BehaviorCatalog;
use crate::loaders::{NONE_SENTINEL, RECORD_SEGMENTS, field_value, split_record};

/// Why an ability record was rejected.
///
/// `Display` output is the exact text logged for the skipped record. Unlike
/// move effects, ability hook failures do not distinguish missing sources
/// from unknown names; both log the "does not exist" text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AbilityRecordError {
    /// Wrong number of comma-space separated segments.
    #[error("Error in formatting of ability: {0}")]
    Format(String),

    /// First segment does not carry the `Ability Name:` label.
    #[error("Error in formatting of ability name for ability: {0}")]
    NameFormat(String),

    /// Second segment does not carry the `Type:` label.
    #[error("Error in formatting of ability type for ability: {0}")]
    KindFormat(String),

    /// Third segment does not carry the `Activation Function:` label.
    #[error("Error in formatting of ability activation function for ability: {0}")]
    ActivationFormat(String),

    /// Fourth segment does not carry the `Effect Function:` label.
    #[error("Error in formatting of ability effect function for ability: {0}")]
    EffectFormat(String),

    /// Name value is empty after trimming.
    #[error("No name is given for ability: {0}")]
    MissingName(String),

    /// Type value is neither `passive` nor `active`.
    #[error("Type value for ability is not passive or active in ability: {0}")]
    InvalidKind(String),

    /// Activation name failed to resolve, whatever the reason.
    #[error("Ability activation function does not exist for ability: {0}")]
    ActivationNotFound(String),

    /// Effect name failed to resolve, whatever the reason.
    #[error("Ability effect function does not exist for ability: {0}")]
    EffectNotFound(String),
}

/// Parser for one-line ability records.
///
/// Grammar:
///
/// ```text
/// Ability Name: <name>, Type: <Passive|Active>, Activation Function: <name|None>, Effect Function: <name|None>
/// ```
///
/// Structure is checked before values, in the same order as the move parser.
/// The type value is matched case-insensitively. Every parsed ability starts
/// with `usable` false.
pub struct AbilityParser;

impl AbilityParser {
    /// Parse and validate one ability record line.
    pub fn parse(line: &str, hooks: &BehaviorCatalog) -> Result<Ability, AbilityRecordError> {
        let segments = split_record(line);
        if segments.len() != RECORD_SEGMENTS {
            return Err(AbilityRecordError::Format(line.to_string()));
        }

        let name = field_value(segments[0], "Ability Name:")
            .ok_or_else(|| AbilityRecordError::NameFormat(line.to_string()))?;
        let kind = field_value(segments[1], "Type:")
            .ok_or_else(|| AbilityRecordError::KindFormat(line.to_string()))?;
        let activation = field_value(segments[2], "Activation Function:")
            .ok_or_else(|| AbilityRecordError::ActivationFormat(line.to_string()))?;
        let effect = field_value(segments[3], "Effect Function:")
            .ok_or_else(|| AbilityRecordError::EffectFormat(line.to_string()))?;

        if name.is_empty() {
            return Err(AbilityRecordError::MissingName(line.to_string()));
        }
        let passive = if kind.eq_ignore_ascii_case("passive") {
            true
        } else if kind.eq_ignore_ascii_case("active") {
            false
        } else {
            return Err(AbilityRecordError::InvalidKind(line.to_string()));
        };
        let activation = if activation == NONE_SENTINEL {
            None
        } else {
            match hooks.resolve_activation(activation) {
                Ok(hook) => Some(hook),
                Err(_) => return Err(AbilityRecordError::ActivationNotFound(line.to_string())),
            }
        };
        let effect = if effect == NONE_SENTINEL {
            None
        } else {
            match hooks.resolve_effect(effect) {
                Ok(hook) => Some(hook),
                Err(_) => return Err(AbilityRecordError::EffectNotFound(line.to_string())),
            }
        };

        Ok(Ability {
            name: name.to_string(),
            passive,
            activation,
            usable: false,
            effect,
        })
    }
}
