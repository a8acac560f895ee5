//! Move record parsing.

use tcg_core::Move;

use crate::behavior::{BehaviorCatalog, ResolveError};
use crate::loaders::{NONE_SENTINEL, RECORD_SEGMENTS, TypeCatalog, field_value, split_record};

/// Why a move record was rejected.
///
/// `Display` output is the exact text logged for the skipped record.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveRecordError {
    /// Wrong number of comma-space separated segments.
    #[error("Error in formatting of move: {0}")]
    Format(String),

    /// First segment does not carry the `Move Name:` label.
    #[error("Error in formatting of move name for move: {0}")]
    NameFormat(String),

    /// Second segment does not carry the `Energies:` label.
    #[error("Error in formatting of move energy for move: {0}")]
    EnergyFormat(String),

    /// Third segment does not carry the `Damage:` label.
    #[error("Error in formatting of move damage for move: {0}")]
    DamageFormat(String),

    /// Fourth segment does not carry the `Effect Function:` label.
    #[error("Error in formatting of move function for move: {0}")]
    FunctionFormat(String),

    /// Name value is empty after trimming.
    #[error("No name is given for move: {0}")]
    MissingName(String),

    /// An energy entry is not in the type catalog.
    #[error("Illegal energy type used in move: {0}")]
    IllegalEnergy(String),

    /// Damage value is empty or not all ASCII digits.
    #[error("Move damage value is not digit for move: {0}")]
    DamageNotDigit(String),

    /// Neither effect tier is installed.
    #[error("Move effect modules are not present")]
    EffectSourcesMissing,

    /// No installed effect tier exports the named function.
    #[error("Move effect function does not exist for move: {0}")]
    EffectNotFound(String),
}

/// Parser for one-line move records.
///
/// Grammar:
///
/// ```text
/// Move Name: <name>, Energies: <type[; type...]|None>, Damage: <digits>, Effect Function: <name|None>
/// ```
///
/// Structure is checked before values: segment count, then every label in
/// order, then the field values in order. The first failure wins.
pub struct MoveParser;

impl MoveParser {
    /// Parse and validate one move record line.
    ///
    /// Energy entries must be members of `types`. An effect name other than
    /// the sentinel must resolve in `hooks`, standard tier first.
    pub fn parse(
        line: &str,
        types: &TypeCatalog,
        hooks: &BehaviorCatalog,
    ) -> Result<Move, MoveRecordError> {
        let segments = split_record(line);
        if segments.len() != RECORD_SEGMENTS {
            return Err(MoveRecordError::Format(line.to_string()));
        }

        let name = field_value(segments[0], "Move Name:")
            .ok_or_else(|| MoveRecordError::NameFormat(line.to_string()))?;
        let energy = field_value(segments[1], "Energies:")
            .ok_or_else(|| MoveRecordError::EnergyFormat(line.to_string()))?;
        let damage = field_value(segments[2], "Damage:")
            .ok_or_else(|| MoveRecordError::DamageFormat(line.to_string()))?;
        let function = field_value(segments[3], "Effect Function:")
            .ok_or_else(|| MoveRecordError::FunctionFormat(line.to_string()))?;

        if name.is_empty() {
            return Err(MoveRecordError::MissingName(line.to_string()));
        }
        let energy = Self::parse_energy(energy, line, types)?;
        let damage = Self::parse_damage(damage, line)?;
        let effect = if function == NONE_SENTINEL {
            None
        } else {
            match hooks.resolve_effect(function) {
                Ok(hook) => Some(hook),
                Err(ResolveError::SourcesMissing) => {
                    return Err(MoveRecordError::EffectSourcesMissing);
                }
                Err(ResolveError::NotFound(_)) => {
                    return Err(MoveRecordError::EffectNotFound(line.to_string()));
                }
            }
        };

        Ok(Move {
            name: name.to_string(),
            energy,
            damage,
            effect,
        })
    }

    /// Split the energy list on `;`, trimming each entry.
    ///
    /// The sentinel yields an empty cost; order and duplicates are kept.
    fn parse_energy(
        value: &str,
        line: &str,
        types: &TypeCatalog,
    ) -> Result<Vec<String>, MoveRecordError> {
        if value == NONE_SENTINEL {
            return Ok(Vec::new());
        }
        let mut energy = Vec::new();
        for entry in value.split(';') {
            let entry = entry.trim();
            if !types.contains(entry) {
                return Err(MoveRecordError::IllegalEnergy(line.to_string()));
            }
            energy.push(entry.to_string());
        }
        Ok(energy)
    }

    fn parse_damage(value: &str, line: &str) -> Result<u32, MoveRecordError> {
        if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(MoveRecordError::DamageNotDigit(line.to_string()));
        }
        value
            .parse()
            .map_err(|_| MoveRecordError::DamageNotDigit(line.to_string()))
    }
}
