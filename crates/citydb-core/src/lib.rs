// crates/citydb-core/src/lib.rs

//! An in-memory register of cities (name, area, population) with
//! case-insensitive search, partial updates, all-or-nothing spreadsheet
//! import and a few aggregate reports.
//!
//! ```rust
//! use citydb_core::prelude::*;
//!
//! let mut repo = CityRepository::new();
//! repo.add("lisboa", 100.05, 545_000)?;
//! repo.add("porto", 41.42, 231_800)?;
//!
//! assert_eq!(repo.find_by_name("LISBOA").map(City::name), Some("Lisboa"));
//! assert_eq!(repo.average_population(), 388_400.0);
//! # Ok::<(), CityError>(())
//! ```

pub mod common;
pub mod error;
pub mod form;
pub mod loader; // CSV / spreadsheet sources
pub mod model;
pub mod prelude;
pub mod repository;
pub mod text;
pub mod theme;
pub mod traits;

// Re-exports
pub use crate::common::RepoStats;
pub use crate::error::{CityError, Result};
pub use crate::model::{City, CityMapping, CityPatch};
pub use crate::repository::CityRepository;
