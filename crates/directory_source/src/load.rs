use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directory_core::{MalformedDataError, RecordStore};
use directory_logging::directory_info;
use thiserror::Error;

use crate::decode_records;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid record data in {path:?}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: MalformedDataError,
    },
}

/// Read and validate the record document at `path`. Called once at startup.
pub fn load_records(path: &Path) -> Result<RecordStore, SourceError> {
    let json = fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let store = decode_records(&json).map_err(|source| SourceError::Malformed {
        path: path.to_path_buf(),
        source,
    })?;
    directory_info!("Loaded {} records from {:?}", store.len(), path);
    Ok(store)
}
