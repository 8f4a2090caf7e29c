use std::cmp::Ordering;

use crate::model::movie::Movie;

#[derive(Debug)]
pub struct CatalogQueries {}

impl CatalogQueries {
    pub fn search_by_title<'a>(movies: &'a [Movie], term: &str) -> Vec<&'a Movie> {
        let term = term.to_lowercase();
        movies
            .iter()
            .filter(|movie| movie.title.to_lowercase().contains(&term))
            .collect()
    }

    pub fn filter_by_genre<'a>(movies: &'a [Movie], genre: &str) -> Vec<&'a Movie> {
        movies.iter().filter(|movie| movie.has_genre(genre)).collect()
    }

    /// Highest rating first. The sort is stable and unparsable ratings go last.
    pub fn sort_by_rating(movies: &[Movie]) -> Vec<&Movie> {
        let mut sorted: Vec<&Movie> = movies.iter().collect();
        sorted.sort_by(|a, b| {
            let (a, b) = (a.numeric_rating(), b.numeric_rating());
            match (a.is_nan(), b.is_nan()) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                (false, false) => b.total_cmp(&a),
            }
        });
        sorted
    }
}
