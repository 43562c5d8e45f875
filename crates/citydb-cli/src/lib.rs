//! citydb-cli
//! ==========
//!
//! Command-line front end for the `citydb-core` city register.
//!
//! The binary (`citydb`) keeps every city in memory for the lifetime of the
//! process. Files passed with `--import` are loaded first; then either a
//! one-shot command runs or an interactive session starts.
//!
//! Quick start
//! -----------
//!
//! ```text
//! citydb --help
//! citydb -i cidades.xlsx list --filter porto
//! citydb -i cidades.xlsx report
//! citydb -i cidades.csv shell
//! ```
//!
//! Inside the session:
//!
//! ```text
//! > add "vila real" 378.8 51850
//! > update "Vila Real" --population 52000
//! > list vila
//! > import mais_cidades.xlsx
//! > report
//! > theme escuro
//! > quit
//! ```
//!
//! For programmatic access use the `citydb-core` crate directly.

pub mod args;
pub mod logger;
pub mod render;
pub mod shell;
