//! Registry-building reader over the content data directory.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tcg_core::{Ability, Move};
use tracing::{debug, error, info};

use crate::behavior::BehaviorCatalog;
use crate::loaders::{AbilityParser, MoveParser, TypeCatalog};

/// Standard (mandatory) content file names.
const STANDARD_TYPES_FILE: &str = "pokemon_standard_types.txt";
const STANDARD_MOVES_FILE: &str = "pokemon_standard_moves.txt";
const STANDARD_ABILITIES_FILE: &str = "pokemon_standard_abilities.txt";

/// Custom (optional) content file names.
const CUSTOM_TYPES_FILE: &str = "pokemon_custom_types.txt";
const CUSTOM_MOVES_FILE: &str = "pokemon_custom_moves.txt";
const CUSTOM_ABILITIES_FILE: &str = "pokemon_custom_abilities.txt";

/// Reader that accumulates the type catalog and the move/ability registries
/// from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── pokemon_standard_types.txt
/// ├── pokemon_custom_types.txt       (optional)
/// ├── pokemon_standard_moves.txt
/// ├── pokemon_custom_moves.txt       (optional)
/// ├── pokemon_standard_abilities.txt
/// └── pokemon_custom_abilities.txt   (optional)
/// ```
///
/// Standard files are mandatory: a missing one aborts that content kind.
/// Custom files extend the standard content and can override records by
/// name. Malformed records are logged and skipped without aborting the scan.
pub struct ContentReader {
    data_dir: PathBuf,
    hooks: BehaviorCatalog,
    types: TypeCatalog,
    moves: HashMap<String, Move>,
    abilities: HashMap<String, Ability>,
}

impl ContentReader {
    /// Reader over `data_dir` with the shipped standard behavior tables.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self::with_hooks(data_dir, BehaviorCatalog::builtin())
    }

    /// Reader over `data_dir` with a caller-assembled behavior catalog.
    pub fn with_hooks(data_dir: impl Into<PathBuf>, hooks: BehaviorCatalog) -> Self {
        Self {
            data_dir: data_dir.into(),
            hooks,
            types: TypeCatalog::new(),
            moves: HashMap::new(),
            abilities: HashMap::new(),
        }
    }

    /// Load everything in dependency order: types, then moves, then
    /// abilities. Moves validate their energy costs against the catalog, so
    /// the order matters.
    pub fn read_all(&mut self) {
        self.read_all_types();
        self.read_all_moves();
        self.read_all_abilities();
    }

    /// Load the element-type catalog from the standard and custom type files.
    ///
    /// Returns the accumulated catalog. A missing standard file logs an
    /// error and returns whatever the catalog already holds; the custom file
    /// is not consulted in that case.
    pub fn read_all_types(&mut self) -> TypeCatalog {
        let standard = self.data_dir.join(STANDARD_TYPES_FILE);
        if !standard.exists() {
            error!(
                "Cannot locate standard types file, {STANDARD_TYPES_FILE}, did not import any types"
            );
            return self.types.clone();
        }
        let Some(contents) = self.read_file(&standard) else {
            return self.types.clone();
        };
        self.types.extend_from_lines(&contents);
        info!("Imported standard types from file");

        let custom = self.data_dir.join(CUSTOM_TYPES_FILE);
        if !custom.exists() {
            info!(
                "Cannot locate custom types file, {CUSTOM_TYPES_FILE}, did not import any custom types"
            );
            return self.types.clone();
        }
        if let Some(contents) = self.read_file(&custom) {
            self.types.extend_from_lines(&contents);
            info!("Imported custom types from file");
        }
        self.types.clone()
    }

    /// Load the move registry from the standard and custom move files.
    ///
    /// Returns a snapshot of the registry. A missing standard file logs an
    /// error and yields an empty registry, regardless of previously loaded
    /// content.
    pub fn read_all_moves(&mut self) -> HashMap<String, Move> {
        let standard = self.data_dir.join(STANDARD_MOVES_FILE);
        if !standard.exists() {
            error!(
                "Cannot locate standard moves file, {STANDARD_MOVES_FILE}, did not import any moves"
            );
            return HashMap::new();
        }
        let Some(contents) = self.read_file(&standard) else {
            return HashMap::new();
        };
        self.scan_moves(&contents);
        info!("Imported standard moves from file");

        let custom = self.data_dir.join(CUSTOM_MOVES_FILE);
        if !custom.exists() {
            info!(
                "Cannot locate custom moves file, {CUSTOM_MOVES_FILE}, did not import any custom moves"
            );
            return self.moves.clone();
        }
        if let Some(contents) = self.read_file(&custom) {
            self.scan_moves(&contents);
            info!("Imported custom moves from file");
        }
        self.moves.clone()
    }

    /// Load the ability registry from the standard and custom ability files.
    ///
    /// Same contract as [`ContentReader::read_all_moves`].
    pub fn read_all_abilities(&mut self) -> HashMap<String, Ability> {
        let standard = self.data_dir.join(STANDARD_ABILITIES_FILE);
        if !standard.exists() {
            error!(
                "Cannot locate standard abilities file, {STANDARD_ABILITIES_FILE}, did not import any abilities"
            );
            return HashMap::new();
        }
        let Some(contents) = self.read_file(&standard) else {
            return HashMap::new();
        };
        self.scan_abilities(&contents);
        info!("Imported standard abilities from file");

        let custom = self.data_dir.join(CUSTOM_ABILITIES_FILE);
        if !custom.exists() {
            info!(
                "Cannot locate custom abilities file, {CUSTOM_ABILITIES_FILE}, did not import any custom abilities"
            );
            return self.abilities.clone();
        }
        if let Some(contents) = self.read_file(&custom) {
            self.scan_abilities(&contents);
            info!("Imported custom abilities from file");
        }
        self.abilities.clone()
    }

    /// Parse one move record line, logging and discarding failures.
    pub fn read_move(&self, line: &str) -> Option<Move> {
        match MoveParser::parse(line, &self.types, &self.hooks) {
            Ok(record) => Some(record),
            Err(err) => {
                error!("{err}");
                None
            }
        }
    }

    /// Parse one ability record line, logging and discarding failures.
    pub fn read_ability(&self, line: &str) -> Option<Ability> {
        match AbilityParser::parse(line, &self.hooks) {
            Ok(record) => Some(record),
            Err(err) => {
                error!("{err}");
                None
            }
        }
    }

    /// Directory the content files are read from.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Behavior tables hook names resolve against.
    pub fn hooks(&self) -> &BehaviorCatalog {
        &self.hooks
    }

    /// Accumulated element-type catalog.
    pub fn types(&self) -> &TypeCatalog {
        &self.types
    }

    /// Accumulated move registry.
    pub fn moves(&self) -> &HashMap<String, Move> {
        &self.moves
    }

    /// Accumulated ability registry.
    pub fn abilities(&self) -> &HashMap<String, Ability> {
        &self.abilities
    }

    fn scan_moves(&mut self, contents: &str) {
        for line in contents.lines() {
            if let Some(record) = self.read_move(line) {
                debug!("Imported move {}", record.name);
                self.moves.insert(record.name.clone(), record);
            }
        }
    }

    fn scan_abilities(&mut self, contents: &str) {
        for line in contents.lines() {
            if let Some(record) = self.read_ability(line) {
                debug!("Imported ability {}", record.name);
                self.abilities.insert(record.name.clone(), record);
            }
        }
    }

    /// Read a content file that is known to exist, logging on failure.
    fn read_file(&self, path: &Path) -> Option<String> {
        match fs::read_to_string(path) {
            Ok(contents) => Some(contents),
            Err(e) => {
                error!("Failed to read file {}: {}", path.display(), e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behavior::FunctionTable;
    use tcg_core::{ActivationFn, EffectFn, MatchState, SourceTier};
    use tempfile::TempDir;

    fn spark(_: &mut MatchState) {}

    fn watchful(_: &MatchState) -> bool {
        true
    }

    fn test_hooks() -> BehaviorCatalog {
        let mut catalog = BehaviorCatalog::empty();
        let mut effects: FunctionTable<EffectFn> = FunctionTable::new();
        effects.register("spark", spark);
        catalog.set_standard_effects(effects);
        let mut activations: FunctionTable<ActivationFn> = FunctionTable::new();
        activations.register("watchful", watchful);
        catalog.set_custom_activations(activations);
        catalog
    }

    fn write_file(dir: &Path, name: &str, contents: &str) {
        fs::write(dir.join(name), contents).unwrap();
    }

    fn reader_for(dir: &TempDir) -> ContentReader {
        ContentReader::with_hooks(dir.path(), test_hooks())
    }

    #[test]
    fn test_read_all_types_unions_standard_and_custom() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), STANDARD_TYPES_FILE, "Electric\nWater\n");
        write_file(dir.path(), CUSTOM_TYPES_FILE, "Nuclear\nWater\n");

        let mut reader = reader_for(&dir);
        let catalog = reader.read_all_types();
        assert_eq!(catalog.len(), 3);
        assert!(catalog.contains("Electric"));
        assert!(catalog.contains("Nuclear"));
    }

    #[test]
    fn test_read_all_types_without_custom_file() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), STANDARD_TYPES_FILE, "Electric\n");

        let mut reader = reader_for(&dir);
        let catalog = reader.read_all_types();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains("Electric"));
    }

    #[test]
    fn test_read_all_types_missing_standard_keeps_catalog() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), STANDARD_TYPES_FILE, "Electric\n");

        let mut reader = reader_for(&dir);
        assert_eq!(reader.read_all_types().len(), 1);

        // With the standard file gone, the held catalog is returned as-is.
        fs::remove_file(dir.path().join(STANDARD_TYPES_FILE)).unwrap();
        let catalog = reader.read_all_types();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains("Electric"));
    }

    #[test]
    fn test_read_all_moves_merges_custom_over_standard() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), STANDARD_TYPES_FILE, "Electric\n");
        write_file(
            dir.path(),
            STANDARD_MOVES_FILE,
            "Move Name: Thunder Shock, Energies: Electric, Damage: 30, Effect Function: spark\n\
             Move Name: Splash, Energies: None, Damage: 0, Effect Function: None\n",
        );
        write_file(
            dir.path(),
            CUSTOM_MOVES_FILE,
            "Move Name: Splash, Energies: None, Damage: 10, Effect Function: None\n\
             Move Name: Overcharge, Energies: Electric; Electric, Damage: 70, Effect Function: spark\n",
        );

        let mut reader = reader_for(&dir);
        reader.read_all_types();
        let moves = reader.read_all_moves();

        assert_eq!(moves.len(), 3);
        assert_eq!(moves["Thunder Shock"].damage, 30);
        // The custom record overrides the standard one by name.
        assert_eq!(moves["Splash"].damage, 10);
        assert_eq!(
            moves["Overcharge"].energy,
            vec!["Electric".to_string(), "Electric".to_string()]
        );
        assert_eq!(
            moves["Overcharge"].effect.as_ref().map(|h| h.tier()),
            Some(SourceTier::Standard)
        );
    }

    #[test]
    fn test_read_all_moves_missing_standard_returns_empty() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), STANDARD_TYPES_FILE, "Electric\n");
        write_file(
            dir.path(),
            STANDARD_MOVES_FILE,
            "Move Name: Thunder Shock, Energies: Electric, Damage: 30, Effect Function: None\n",
        );

        let mut reader = reader_for(&dir);
        reader.read_all_types();
        assert_eq!(reader.read_all_moves().len(), 1);

        // Unlike types, a vanished standard moves file yields an empty
        // registry even though records were loaded before.
        fs::remove_file(dir.path().join(STANDARD_MOVES_FILE)).unwrap();
        assert!(reader.read_all_moves().is_empty());
    }

    #[test]
    fn test_read_all_moves_skips_malformed_records() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), STANDARD_TYPES_FILE, "Electric\n");
        write_file(
            dir.path(),
            STANDARD_MOVES_FILE,
            "Move Name: Thunder Shock, Energies: Electric, Damage: 30, Effect Function: None\n\
             not a record\n\
             Move Name:, Energies: Electric, Damage: 30, Effect Function: None\n\
             Move Name: Ember, Energies: Fire, Damage: 30, Effect Function: None\n",
        );

        let mut reader = reader_for(&dir);
        reader.read_all_types();
        let moves = reader.read_all_moves();
        assert_eq!(moves.len(), 1);
        assert!(moves.contains_key("Thunder Shock"));
    }

    #[test]
    fn test_read_all_moves_requires_loaded_types() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), STANDARD_TYPES_FILE, "Electric\n");
        write_file(
            dir.path(),
            STANDARD_MOVES_FILE,
            "Move Name: Thunder Shock, Energies: Electric, Damage: 30, Effect Function: None\n",
        );

        // Skipping read_all_types leaves the catalog empty, so every energy
        // reference is rejected.
        let mut reader = reader_for(&dir);
        assert!(reader.read_all_moves().is_empty());
    }

    #[test]
    fn test_read_all_abilities_merges_custom_over_standard() {
        let dir = TempDir::new().unwrap();
        write_file(
            dir.path(),
            STANDARD_ABILITIES_FILE,
            "Ability Name: Thick Fat, Type: Passive, Activation Function: None, Effect Function: None\n\
             Ability Name: Vigilance, Type: Active, Activation Function: watchful, Effect Function: spark\n",
        );
        write_file(
            dir.path(),
            CUSTOM_ABILITIES_FILE,
            "Ability Name: Thick Fat, Type: Active, Activation Function: watchful, Effect Function: None\n",
        );

        let mut reader = reader_for(&dir);
        let abilities = reader.read_all_abilities();

        assert_eq!(abilities.len(), 2);
        assert!(!abilities["Thick Fat"].passive);
        assert_eq!(
            abilities["Thick Fat"].activation.as_ref().map(|h| h.tier()),
            Some(SourceTier::Custom)
        );
        assert!(!abilities["Vigilance"].usable);
        assert_eq!(
            abilities["Vigilance"].effect.as_ref().map(|h| h.name().to_string()),
            Some("spark".to_string())
        );
    }

    #[test]
    fn test_read_all_abilities_missing_standard_returns_empty() {
        let dir = TempDir::new().unwrap();
        let mut reader = reader_for(&dir);
        assert!(reader.read_all_abilities().is_empty());
    }

    #[test]
    fn test_read_all_abilities_skips_malformed_records() {
        let dir = TempDir::new().unwrap();
        write_file(
            dir.path(),
            STANDARD_ABILITIES_FILE,
            "Ability Name: Thick Fat, Type: Passive, Activation Function: None, Effect Function: None\n\
             Ability Name: Odd, Type: Sometimes, Activation Function: None, Effect Function: None\n",
        );

        let mut reader = reader_for(&dir);
        let abilities = reader.read_all_abilities();
        assert_eq!(abilities.len(), 1);
        assert!(abilities.contains_key("Thick Fat"));
    }

    #[test]
    fn test_read_move_and_read_ability_discard_failures() {
        let dir = TempDir::new().unwrap();
        let mut reader = reader_for(&dir);
        reader.types.insert("Electric");

        assert!(
            reader
                .read_move("Move Name: Jolt, Energies: Electric, Damage: 20, Effect Function: spark")
                .is_some()
        );
        assert!(reader.read_move("not a record").is_none());

        assert!(
            reader
                .read_ability(
                    "Ability Name: Static, Type: Passive, Activation Function: None, Effect Function: None"
                )
                .is_some()
        );
        assert!(reader.read_ability("not a record").is_none());
    }

    #[test]
    fn test_read_all_loads_in_dependency_order() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), STANDARD_TYPES_FILE, "Electric\n");
        write_file(
            dir.path(),
            STANDARD_MOVES_FILE,
            "Move Name: Thunder Shock, Energies: Electric, Damage: 30, Effect Function: spark\n",
        );
        write_file(
            dir.path(),
            STANDARD_ABILITIES_FILE,
            "Ability Name: Static, Type: Passive, Activation Function: None, Effect Function: None\n",
        );

        let mut reader = reader_for(&dir);
        reader.read_all();

        assert_eq!(reader.types().len(), 1);
        assert_eq!(reader.moves().len(), 1);
        assert_eq!(reader.abilities().len(), 1);
    }

    #[test]
    fn test_shipped_data_loads_cleanly() {
        let manifest_dir = env!("CARGO_MANIFEST_DIR");
        let mut reader = ContentReader::new(Path::new(manifest_dir).join("data"));
        reader.read_all();

        assert_eq!(reader.types().len(), 10);
        assert_eq!(reader.moves().len(), 9);
        assert_eq!(reader.abilities().len(), 4);
        assert_eq!(
            reader.moves()["Thunder Shock"].effect.as_ref().map(|h| h.name()),
            Some("paralyze_effect")
        );
        assert!(reader.abilities()["Thick Fat"].passive);
    }

    #[test]
    fn test_builtin_hooks_cover_the_shipped_names() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), STANDARD_TYPES_FILE, "Lightning\n");
        write_file(
            dir.path(),
            STANDARD_MOVES_FILE,
            "Move Name: Recharge, Energies: Lightning, Damage: 0, Effect Function: draw_effect\n",
        );
        write_file(
            dir.path(),
            STANDARD_ABILITIES_FILE,
            "Ability Name: Stockpile, Type: Active, Activation Function: deck_not_empty_activation, Effect Function: draw_effect\n",
        );

        let mut reader = ContentReader::new(dir.path());
        reader.read_all();
        assert_eq!(reader.moves().len(), 1);
        assert_eq!(reader.abilities().len(), 1);
    }
}
