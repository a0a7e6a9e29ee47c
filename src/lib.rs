// kamusi - dictionary lookup backed by an embedded Turso/libsql database.
//
// The store owns the persistent schema and the shared client handle, the
// lookup service answers exact/fuzzy/batch searches, and the tracker keeps
// an atomic tally of words that were searched but never found.

pub mod cli;
pub mod loader;
pub mod lookup;
pub mod store;
pub mod tracker;

// Re-export log macros for use throughout the crate
pub use log::{debug, error, info, trace, warn};
