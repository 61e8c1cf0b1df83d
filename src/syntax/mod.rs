//! # Syntax Module
//!
//! Read-only model of the host syntax tree the route engine walks.
//!
//! The engine never parses source code itself. A host (IDE plugin, indexer,
//! test fixture) hands over a [`SyntaxTree`] snapshot, either built in memory
//! or loaded from YAML/JSON with [`load_tree`], and the engine borrows it for
//! the duration of one scan.
//!
//! - `types` - expression nodes, annotations, declarations
//! - `index` - the host capability traits ([`SymbolTable`],
//!   [`AnnotationIndex`], [`ModuleLocator`]) and the borrowed
//!   [`AnnotationSite`] view
//! - `load` - snapshot loading from disk

mod index;
mod load;
mod types;

pub use index::*;
pub use load::*;
pub use types::*;
