use csv::Writer;

use crate::{error::CatalogError, model::movie::Movie};

/// Writes the catalog in a shape Letterboxd's importer accepts.
pub struct CsvWriter {}

impl CsvWriter {
    pub fn save_movies_to_csv(movies: &[Movie], file_name: &str) -> Result<(), CatalogError> {
        let csv_error = |source: csv::Error| CatalogError::Csv {
            file_name: file_name.to_string(),
            source,
        };

        let mut wrt = Writer::from_path(file_name).map_err(csv_error)?;
        wrt.write_record(Movie::csv_titles()).map_err(csv_error)?;
        for movie in movies.iter() {
            if let Err(e) = wrt.write_record(movie.to_csvable_array()) {
                log::error!("Error when adding entry to Csv file {}. Entry: {:?}", file_name, movie);
                return Err(csv_error(e));
            }
        }

        wrt.flush().map_err(|e| csv_error(e.into()))?;

        log::info!("Exported {} movies to {}", movies.len(), file_name);
        Ok(())
    }
}
