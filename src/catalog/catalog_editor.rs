use crate::{
    error::CatalogError,
    model::movie::{Movie, MovieUpdate},
};

/// In-memory mutations of the catalog list. Indexes are zero-based positions.
#[derive(Debug)]
pub struct CatalogEditor {}

impl CatalogEditor {
    pub fn add(movies: &mut Vec<Movie>, movie: Movie) {
        log::info!("Adding movie {}", movie.title);
        movies.push(movie);
    }

    pub fn update(
        movies: &mut [Movie],
        index: usize,
        update: MovieUpdate,
    ) -> Result<&Movie, CatalogError> {
        let len = movies.len();
        let movie = movies
            .get_mut(index)
            .ok_or(CatalogError::IndexOutOfRange { index, len })?;

        log::info!("Updating movie at position {}: {:?}", index + 1, update);
        movie.apply(update);
        Ok(&*movie)
    }

    pub fn delete(movies: &mut Vec<Movie>, index: usize) -> Result<Movie, CatalogError> {
        if index >= movies.len() {
            return Err(CatalogError::IndexOutOfRange {
                index,
                len: movies.len(),
            });
        }

        let removed = movies.remove(index);
        log::info!("Deleted movie {}", removed.title);
        Ok(removed)
    }
}
