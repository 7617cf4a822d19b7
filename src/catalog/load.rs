//! Catalog loading functionality

use super::{Catalog, LoadCatalogProblem, Song};
use std::{
    fs::File,
    io::{ErrorKind, Read},
    path::{Path, PathBuf},
};
use thiserror::Error;
use tracing::{info, warn};

/// Default name of the songs data file.
pub const DEFAULT_DATA_FILE: &str = "data.json";

#[derive(Debug, Error)]
pub enum LoadCatalogError {
    #[error("Data file {path:?} not found: {source}")]
    FileNotFound {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not read data file {path:?}: {source}")]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed data in {path:?}: {source}")]
    MalformedData {
        path: PathBuf,
        source: serde_json::Error,
    },
}

fn read_data_file(path: &Path) -> Result<Vec<u8>, LoadCatalogError> {
    let mut file = File::open(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound | ErrorKind::PermissionDenied => LoadCatalogError::FileNotFound {
            path: path.to_path_buf(),
            source,
        },
        _ => LoadCatalogError::Unreadable {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)
        .map_err(|source| LoadCatalogError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(buffer)
}

/// Decodes a JSON array of songs. A `null` document is an empty catalog.
pub fn parse_songs(bytes: &[u8]) -> Result<Vec<Song>, serde_json::Error> {
    let songs: Option<Vec<Song>> = serde_json::from_slice(bytes)?;
    Ok(songs.unwrap_or_default())
}

/// Reads and decodes the whole data file, producing the catalog or nothing.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog, LoadCatalogError> {
    let path = path.as_ref();
    info!("Loading songs from {:?}...", path);

    let bytes = read_data_file(path)?;
    let songs = parse_songs(&bytes).map_err(|source| LoadCatalogError::MalformedData {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog_result = Catalog::build(songs);
    let problems = catalog_result.problems;
    let catalog = catalog_result.catalog;

    if !problems.is_empty() {
        warn!("Found {} non-fatal problems:", problems.len());
        for problem in problems.iter() {
            match problem {
                LoadCatalogProblem::DuplicateId { id, count } => {
                    warn!("- id {} appears {} times, lookups return the first", id, count)
                }
            }
        }
    }

    info!("Catalog has {} songs", catalog.len());
    Ok(catalog)
}
