//! citydb — Command-line interface for citydb-core
//!
//! Usage examples
//! --------------
//!
//! - Interactive session with a spreadsheet preloaded
//!   $ citydb --import cidades.xlsx
//!
//! - List cities whose name contains "vila"
//!   $ citydb -i cidades.xlsx list --filter vila
//!
//! - Largest, most populous and average population
//!   $ citydb -i cidades.xlsx report
//!
//! Set `RUST_LOG` (e.g. `RUST_LOG=citydb_core=debug`) for more detail.
use citydb_cli::args::{CliArgs, Commands};
use citydb_cli::logger;
use citydb_cli::shell::{Session, ShellCommand};
use clap::Parser;
use std::io::{self, IsTerminal, Write};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    logger::init_cli_logger(args.verbose);

    let mut session = Session::new(args.theme);

    for path in &args.import {
        let count = session.preload(path)?;
        tracing::info!(path = %path.display(), count, "preloaded");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command.unwrap_or(Commands::Shell) {
        Commands::List { filter, json } => {
            if json {
                let cities = session.repository().list(filter.as_deref());
                serde_json::to_writer_pretty(&mut out, &cities)?;
                writeln!(out)?;
            } else {
                session.dispatch(ShellCommand::List { filter }, &mut out)?;
            }
        }

        Commands::Find { name } => {
            session.dispatch(ShellCommand::Find { name }, &mut out)?;
        }

        Commands::Report => {
            session.dispatch(ShellCommand::Report, &mut out)?;
        }

        Commands::Stats => {
            session.dispatch(ShellCommand::Stats, &mut out)?;
        }

        Commands::Shell => {
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            if interactive {
                writeln!(
                    out,
                    "citydb {} ({} cities loaded, theme {}). Type `help` for commands.",
                    env!("CARGO_PKG_VERSION"),
                    session.repository().len(),
                    session.theme()
                )?;
            }
            session.run(stdin.lock(), &mut out, interactive)?;
        }
    }

    Ok(())
}
