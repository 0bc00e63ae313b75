//! Read-only reference tables: symmetry operators, experimental methods,
//! and species names, plus the CSV loader that fills them at startup.

pub mod loader;
pub mod store;

pub use loader::TableError;
pub use store::{ReferenceTables, ReferenceTablesBuilder, NO_SYMMETRY};
