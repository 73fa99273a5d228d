//! Settings resolution: command line flags over the RON config file over defaults.

use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directory_core::{DirectoryConfig, QueryChangePolicy};
use directory_logging::directory_info;
use serde::Deserialize;

use crate::cli::Cli;

pub const DEFAULT_DATA_PATH: &str = "data/team-data.json";

/// Contents of the optional config file, e.g.
///
/// ```ron
/// (
///     data: Some("data/team-data.json"),
///     page_size: Some(9),
///     keep_page_on_query_change: Some(true),
/// )
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub data: Option<PathBuf>,
    pub page_size: Option<NonZeroUsize>,
    pub keep_page_on_query_change: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data: PathBuf,
    pub directory: DirectoryConfig,
}

pub fn load_file_config(path: &Path) -> Result<FileConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {:?}", path))?;
    let config = ron::from_str(&content)
        .with_context(|| format!("failed to parse config file {:?}", path))?;
    directory_info!("Loaded config from {:?}", path);
    Ok(config)
}

pub fn resolve(cli: &Cli) -> Result<AppConfig> {
    let file = match &cli.config {
        Some(path) => load_file_config(path)?,
        None => FileConfig::default(),
    };
    Ok(merge(cli, file))
}

fn merge(cli: &Cli, file: FileConfig) -> AppConfig {
    let defaults = DirectoryConfig::default();
    let keep_page = cli.keep_page || file.keep_page_on_query_change.unwrap_or(false);
    AppConfig {
        data: cli
            .data
            .clone()
            .or(file.data)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH)),
        directory: DirectoryConfig {
            page_size: cli.page_size.or(file.page_size).unwrap_or(defaults.page_size),
            query_change: if keep_page {
                QueryChangePolicy::KeepPageIfValid
            } else {
                defaults.query_change
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("directory").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_without_flags_or_file() {
        let config = resolve(&cli(&[])).unwrap();
        assert_eq!(
            config,
            AppConfig {
                data: PathBuf::from(DEFAULT_DATA_PATH),
                directory: DirectoryConfig::default(),
            }
        );
        assert_eq!(config.directory.page_size.get(), 6);
        assert_eq!(
            config.directory.query_change,
            QueryChangePolicy::ResetToFirstPage
        );
    }

    #[test]
    fn file_values_fill_in_and_flags_override() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("directory.ron");
        fs::write(
            &path,
            "(data: Some(\"people.json\"), page_size: Some(9), keep_page_on_query_change: Some(true))",
        )
        .unwrap();
        let path_arg = path.to_string_lossy().into_owned();

        let config = resolve(&cli(&["--config", &path_arg])).unwrap();
        assert_eq!(config.data, PathBuf::from("people.json"));
        assert_eq!(config.directory.page_size.get(), 9);
        assert_eq!(
            config.directory.query_change,
            QueryChangePolicy::KeepPageIfValid
        );

        let config = resolve(&cli(&["--config", &path_arg, "--page-size", "3"])).unwrap();
        assert_eq!(config.directory.page_size.get(), 3);
    }

    #[test]
    fn partial_file_is_accepted() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("directory.ron");
        fs::write(&path, "(page_size: Some(2))").unwrap();

        let file = load_file_config(&path).unwrap();
        assert_eq!(
            file,
            FileConfig {
                page_size: NonZeroUsize::new(2),
                ..FileConfig::default()
            }
        );
    }

    #[test]
    fn unreadable_or_invalid_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        assert!(load_file_config(&temp.path().join("missing.ron")).is_err());

        let path = temp.path().join("bad.ron");
        fs::write(&path, "(page_size: Some(0))").unwrap();
        assert!(load_file_config(&path).is_err());
    }
}
