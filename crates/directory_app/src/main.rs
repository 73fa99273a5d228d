mod cli;
mod command;
mod config;
mod render;
mod session;

use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use directory_core::DirectoryState;
use directory_logging::{directory_info, LogDestination, DEFAULT_LOG_FILE};

use crate::cli::Cli;
use crate::session::Session;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let destination = if cli.log_file {
        LogDestination::Both(DEFAULT_LOG_FILE.into())
    } else {
        LogDestination::Terminal
    };
    directory_logging::initialize(destination, cli.log_level.into());

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", failure_message(&err));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = config::resolve(cli)?;
    let store = directory_source::load_records(&config.data)
        .with_context(|| format!("cannot show the directory from {:?}", config.data))?;
    directory_info!(
        "Starting directory with {} records, page size {}, {:?}",
        store.len(),
        config.directory.page_size,
        config.directory.query_change
    );

    let state = DirectoryState::new(Arc::new(store), config.directory);
    let stdin = io::stdin();
    let mut session = Session::new(state, io::stdout().lock());
    session.run(stdin.lock())?;
    Ok(())
}

/// The single report of a fatal error; the library layers only return it.
fn failure_message(err: &anyhow::Error) -> String {
    format!("Error: {:#}", err)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_failure_is_reported_once_with_its_cause() {
        let temp = TempDir::new().unwrap();
        let data = temp.path().join("team.json");
        fs::write(
            &data,
            r#"[{"id": 1, "name": "A", "jobTitle": "B"}, {"id": 1, "name": "C", "jobTitle": "D"}]"#,
        )
        .unwrap();
        let data_arg = data.to_string_lossy().into_owned();
        let cli = Cli::try_parse_from(["directory", "--data", data_arg.as_str()]).unwrap();

        let err = run(&cli).unwrap_err();
        let message = failure_message(&err);

        assert!(message.starts_with("Error: cannot show the directory from"));
        assert_eq!(message.matches("duplicate record id 1").count(), 1);
    }
}
