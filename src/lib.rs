//! Notule library: the note store data model and its JSON file persistence.
//!
//! The CLI binary lives in `src/bin/cli` and is a thin layer over these
//! two modules.

pub mod notes;
pub mod storage;
