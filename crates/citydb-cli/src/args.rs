use citydb_core::theme::Theme;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for citydb
#[derive(Debug, Parser)]
#[command(
    name = "citydb",
    version,
    about = "Manage an in-memory list of cities: add, edit, search, import spreadsheets, report"
)]
pub struct CliArgs {
    /// CSV or spreadsheet file to load before running the command (repeatable)
    #[arg(short = 'i', long = "import", global = true)]
    pub import: Vec<PathBuf>,

    /// Colour theme: claro/light or escuro/dark
    #[arg(
        short = 't',
        long = "theme",
        global = true,
        default_value = "claro",
        value_parser = parse_theme
    )]
    pub theme: Theme,

    /// Log debug events to stderr
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the loaded cities
    List {
        /// Only cities whose name contains this text (case-insensitive)
        #[arg(short = 'f', long = "filter")]
        filter: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Look a city up by name (case-insensitive)
    Find {
        /// Exact city name
        name: String,
    },

    /// Largest city, most populous city and average population
    Report,

    /// Count, total population and total area
    Stats,

    /// Interactive session (the default)
    Shell,
}

fn parse_theme(name: &str) -> Result<Theme, String> {
    name.parse::<Theme>().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn theme_flag_parses_into_a_theme() {
        let args = CliArgs::try_parse_from(["citydb", "--theme", "escuro", "report"]).unwrap();
        assert_eq!(args.theme, Theme::Dark);
        assert!(matches!(args.command, Some(Commands::Report)));

        let args = CliArgs::try_parse_from(["citydb", "stats", "-t", "Dark"]).unwrap();
        assert_eq!(args.theme, Theme::Dark);

        let args = CliArgs::try_parse_from(["citydb"]).unwrap();
        assert_eq!(args.theme, Theme::Light);
    }

    #[test]
    fn unknown_theme_is_rejected_by_the_parser() {
        let err = CliArgs::try_parse_from(["citydb", "--theme", "sepia", "stats"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert!(err.to_string().contains("theme sepia not found"));
    }
}
