//! citydb prelude: bring common types and traits into scope.

pub use crate::common::RepoStats;
pub use crate::error::{CityError, Result};
pub use crate::form::{CityDraft, CityForm, PatchForm};
pub use crate::loader::{open_table, Table};
pub use crate::model::{City, CityMapping, CityPatch};
pub use crate::repository::CityRepository;
pub use crate::text::{equals_folded, fold_key, title_case};
pub use crate::theme::{Palette, Theme, ThemeManager};
pub use crate::traits::NameMatch;
