use std::collections::HashSet;

use crate::model::movie::Movie;

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogStats {
    pub total_movies: usize,
    /// `None` for an empty catalog.
    pub average_rating: Option<f64>,
    pub genres: Vec<String>,
}

impl CatalogStats {
    pub fn compute(movies: &[Movie]) -> CatalogStats {
        let average_rating = if movies.is_empty() {
            None
        } else {
            let sum: f64 = movies.iter().map(Movie::numeric_rating).sum();
            Some(sum / movies.len() as f64)
        };

        let mut seen = HashSet::new();
        let mut genres = vec![];
        for genre in movies.iter().flat_map(|movie| movie.genres()) {
            if seen.insert(genre.to_lowercase()) {
                genres.push(genre.to_string());
            }
        }

        CatalogStats {
            total_movies: movies.len(),
            average_rating,
            genres,
        }
    }

    pub fn average_rating_display(&self) -> String {
        match self.average_rating {
            Some(avg) => format!("{:.2}", avg),
            None => "N/A".to_string(),
        }
    }
}
