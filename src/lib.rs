//! Workspace facade: re-exports `citydb-core` so the demos can use
//! `citydb_rs::prelude::*`.

pub use citydb_core::*;
