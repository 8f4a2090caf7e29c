use std::{
    fs::File,
    io::{Read, Write},
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{error::CatalogError, model::movie::Movie};

#[derive(Deserialize)]
struct WrappedDocument {
    movies: Vec<Movie>,
}

#[derive(Serialize)]
struct WrappedDocumentRef<'a> {
    movies: &'a [Movie],
    #[serde(flatten)]
    extra: &'a Map<String, Value>,
}

/// The catalog as it lives on disk. Nothing is cached: every call goes back
/// to the file.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    file_path: PathBuf,
}

impl CatalogStore {
    pub fn new(file_path: impl Into<PathBuf>) -> CatalogStore {
        CatalogStore {
            file_path: file_path.into(),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn load(&self) -> Result<Vec<Movie>, CatalogError> {
        let content = self.read_content()?;
        let movies = self.parse_movies(&content).map_err(|e| CatalogError::Malformed {
            path: self.file_path.clone(),
            source: e,
        })?;

        log::debug!(
            "Loaded {} movies from {}",
            movies.len(),
            self.file_path.display()
        );
        Ok(movies)
    }

    /// Overwrites the whole document with `movies`. Top-level keys other than
    /// `movies` already in the file are written back unchanged.
    pub fn save(&self, movies: &[Movie]) -> Result<(), CatalogError> {
        let extra = self.existing_top_level_keys();
        let json_string = serde_json::to_string_pretty(&WrappedDocumentRef {
            movies,
            extra: &extra,
        })
        .map_err(CatalogError::Serialize)?;

        let mut file = File::create(&self.file_path).map_err(|e| self.io_error(e))?;
        file.write_all(json_string.as_bytes())
            .map_err(|e| self.io_error(e))?;

        log::debug!(
            "Saved {} movies to {}",
            movies.len(),
            self.file_path.display()
        );
        Ok(())
    }

    fn read_content(&self) -> Result<String, CatalogError> {
        let mut file = File::open(&self.file_path).map_err(|e| self.io_error(e))?;

        let mut content = String::new();
        file.read_to_string(&mut content)
            .map_err(|e| self.io_error(e))?;
        Ok(content)
    }

    // Shape is picked from a generic parse, then the typed parse runs on the
    // original text so errors keep their line and column.
    fn parse_movies(&self, content: &str) -> Result<Vec<Movie>, serde_json::Error> {
        let value: Value = serde_json::from_str(content)?;
        if value.is_array() {
            serde_json::from_str::<Vec<Movie>>(content)
        } else {
            serde_json::from_str::<WrappedDocument>(content).map(|document| document.movies)
        }
    }

    fn existing_top_level_keys(&self) -> Map<String, Value> {
        let content = match self.read_content() {
            Ok(content) => content,
            Err(_) => return Map::new(),
        };

        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(mut document)) => {
                document.remove("movies");
                document
            }
            Ok(_) => Map::new(),
            Err(e) => {
                log::warn!(
                    "Could not read existing keys from {}, rewriting it from scratch: {}",
                    self.file_path.display(),
                    e
                );
                Map::new()
            }
        }
    }

    fn io_error(&self, source: std::io::Error) -> CatalogError {
        CatalogError::Io {
            path: self.file_path.clone(),
            source,
        }
    }
}
