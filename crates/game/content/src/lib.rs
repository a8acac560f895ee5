//! Content pipeline for the TCG Pocket emulator.
//!
//! This crate turns line-oriented content files into the name-keyed
//! registries the match engine consumes:
//! - element-type catalog (standard + custom type files)
//! - move registry (standard + custom move files)
//! - ability registry (standard + custom ability files)
//!
//! Records name their behavior; names resolve at load time against the
//! compiled-in function tables in [`behavior`], standard tier before custom.
//! Loading is resilient per record (malformed lines are logged and skipped)
//! and strict per file (a missing standard file aborts that content kind).

pub mod behavior;
pub mod loaders;

pub use behavior::{BehaviorCatalog, FunctionTable, HookSource, ResolveError};
pub use loaders::{
    AbilityParser, AbilityRecordError, ContentReader, MoveParser, MoveRecordError, TypeCatalog,
};
