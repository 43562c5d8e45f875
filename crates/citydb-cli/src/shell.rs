//! The interactive session: one command per line, run against an in-memory
//! repository that lives as long as the session.

use crate::render;
use anyhow::{bail, Context};
use citydb_core::form::{CityForm, PatchForm};
use citydb_core::theme::{Theme, ThemeManager};
use citydb_core::{CityError, CityRepository};
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "citydb", no_binary_name = true, disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Debug, Subcommand)]
pub enum ShellCommand {
    /// Add a city: add <NAME> <AREA> <POPULATION>
    Add {
        name: String,
        area: String,
        population: String,
    },

    /// List cities, optionally only those whose name contains FILTER
    #[command(alias = "ls")]
    List { filter: Option<String> },

    /// Show one city
    Find { name: String },

    /// Change some fields of a city
    #[command(alias = "edit")]
    Update {
        /// Current name of the city
        name: String,
        /// New name
        #[arg(long = "name")]
        rename: Option<String>,
        /// New area in km²
        #[arg(long)]
        area: Option<String>,
        /// New population
        #[arg(long)]
        population: Option<String>,
    },

    /// Remove a city
    #[command(alias = "rm")]
    Remove { name: String },

    /// Import cities from a CSV or spreadsheet file (all rows or none)
    Import { path: PathBuf },

    /// City with the largest area
    Largest,

    /// City with the largest population
    Populous,

    /// Average population
    Average,

    /// Largest, most populous and average in one go
    Report,

    /// Count, total population and total area
    Stats,

    /// Switch theme; without a name, toggle between claro and escuro
    Theme { name: Option<String> },

    /// Leave the session
    #[command(alias = "exit")]
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Default)]
pub struct Session {
    repo: CityRepository,
    themes: ThemeManager,
}

impl Session {
    pub fn new(theme: Theme) -> Self {
        Session {
            repo: CityRepository::new(),
            themes: ThemeManager::new(theme),
        }
    }

    pub fn repository(&self) -> &CityRepository {
        &self.repo
    }

    pub fn theme(&self) -> Theme {
        self.themes.current()
    }

    /// Imports a file up front, before any command runs.
    pub fn preload(&mut self, path: &Path) -> anyhow::Result<usize> {
        self.repo
            .import_path(path)
            .with_context(|| format!("failed to import {}", path.display()))
    }

    /// Parses and runs one input line. Malformed lines print usage and keep
    /// the session going; failed operations come back as errors.
    pub fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> anyhow::Result<Flow> {
        let words = split_words(line)?;
        if words.is_empty() {
            return Ok(Flow::Continue);
        }

        match ShellLine::try_parse_from(&words) {
            Ok(parsed) => self.dispatch(parsed.command, out),
            Err(e) if e.kind() == ErrorKind::DisplayHelp => {
                write!(out, "{}", e.render())?;
                Ok(Flow::Continue)
            }
            Err(e) => {
                let message = e.render().to_string();
                bail!("{}", message.trim_start_matches("error: ").trim_end())
            }
        }
    }

    pub fn dispatch<W: Write>(&mut self, command: ShellCommand, out: &mut W) -> anyhow::Result<Flow> {
        match command {
            ShellCommand::Add {
                name,
                area,
                population,
            } => {
                let draft = CityForm::new(name, area, population).validate()?;
                let city = draft.add_to(&mut self.repo)?;
                writeln!(out, "Added {}", render::describe(city))?;
            }

            ShellCommand::List { filter } => {
                render::write_table(out, &self.repo.list(filter.as_deref()))?;
            }

            ShellCommand::Find { name } => match self.repo.find_by_name(&name) {
                Some(city) => writeln!(out, "{}", render::describe(city))?,
                None => writeln!(out, "No city named {name}")?,
            },

            ShellCommand::Update {
                name,
                rename,
                area,
                population,
            } => {
                let patch = PatchForm {
                    name: rename,
                    area,
                    population,
                }
                .validate()?;
                if patch.is_empty() {
                    writeln!(out, "Nothing to update; use --name, --area or --population")?;
                    return Ok(Flow::Continue);
                }
                match self.repo.update(&name, &patch) {
                    Ok(city) => writeln!(out, "Updated {}", render::describe(city))?,
                    Err(CityError::NotFound(_)) => writeln!(out, "No city named {name}")?,
                    Err(e) => return Err(e.into()),
                }
            }

            ShellCommand::Remove { name } => match self.repo.remove(&name) {
                Ok(city) => writeln!(out, "Removed {}", city.name())?,
                Err(CityError::NotFound(_)) => writeln!(out, "No city named {name}")?,
                Err(e) => return Err(e.into()),
            },

            ShellCommand::Import { path } => {
                let count = self.repo.import_path(&path)?;
                writeln!(out, "{count} cities imported.")?;
            }

            ShellCommand::Largest => self.write_largest(out)?,
            ShellCommand::Populous => self.write_most_populous(out)?,
            ShellCommand::Average => self.write_average(out)?,
            ShellCommand::Report => {
                self.write_largest(out)?;
                self.write_most_populous(out)?;
                self.write_average(out)?;
            }

            ShellCommand::Stats => render::write_stats(out, &self.repo.stats())?,

            ShellCommand::Theme { name } => {
                let theme = match name {
                    Some(name) => self.themes.set_theme(&name)?,
                    None => self.themes.toggle(),
                };
                render::write_theme(out, theme)?;
            }

            ShellCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Reads commands until end of input or `quit`. Errors are reported and
    /// the session carries on.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W, prompt: bool) -> anyhow::Result<()> {
        if prompt {
            write!(out, "> ")?;
            out.flush()?;
        }
        for line in input.lines() {
            let line = line?;
            match self.execute(&line, out) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(e) => {
                    tracing::debug!(error = %e, line = %line, "command failed");
                    writeln!(out, "error: {e}")?;
                }
            }
            if prompt {
                write!(out, "> ")?;
                out.flush()?;
            }
        }
        Ok(())
    }

    fn write_largest<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        match self.repo.largest_by_area() {
            Some(city) => writeln!(out, "Largest city: {}", render::describe(city)),
            None => writeln!(out, "No cities registered"),
        }
    }

    fn write_most_populous<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        match self.repo.most_populous() {
            Some(city) => writeln!(out, "Most populous city: {}", render::describe(city)),
            None => writeln!(out, "No cities registered"),
        }
    }

    fn write_average<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(
            out,
            "Average population: {} inhabitants",
            render::format_decimal(self.repo.average_population())
        )
    }
}

/// Splits a line into words with POSIX shell quoting rules: quotes group
/// words with spaces and a backslash escapes the next character.
pub fn split_words(line: &str) -> anyhow::Result<Vec<String>> {
    match shlex::split(line) {
        Some(words) => Ok(words),
        None => bail!("unterminated quote or trailing backslash"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_words_honours_quotes() {
        assert_eq!(
            split_words(r#"add "Rio de Janeiro" 1200.3 '6 747 815'"#).unwrap(),
            ["add", "Rio de Janeiro", "1200.3", "6 747 815"]
        );
        assert_eq!(split_words("  list  ").unwrap(), ["list"]);
        assert_eq!(split_words(r#"find """#).unwrap(), ["find", ""]);
        assert!(split_words("find \"Porto").is_err());
    }

    #[test]
    fn split_words_handles_escapes() {
        assert_eq!(
            split_words(r"add Rio\ Grande 1 1").unwrap(),
            ["add", "Rio Grande", "1", "1"]
        );
        assert_eq!(
            split_words(r#"find "D\"Ouro""#).unwrap(),
            ["find", "D\"Ouro"]
        );
        assert!(split_words("find Porto\\").is_err());
    }

    #[test]
    fn blank_line_does_nothing() {
        let mut session = Session::default();
        let mut out = Vec::new();
        assert_eq!(session.execute("   ", &mut out).unwrap(), Flow::Continue);
        assert!(out.is_empty());
    }
}
