use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Could not access catalog file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Catalog file {} is not a valid movie document: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Could not serialize catalog: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Error when writing CSV file {file_name}: {source}")]
    Csv {
        file_name: String,
        #[source]
        source: csv::Error,
    },

    #[error("Movie number {index} is out of range, catalog has {len} movies")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Console error: {0}")]
    Console(#[from] std::io::Error),

    #[error("Input closed")]
    InputClosed,
}
