use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A value that the catalog document may hold either as a JSON number or as a
/// JSON string. It is written back exactly as it was read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(serde_json::Number),
    Text(String),
}

impl FieldValue {
    /// Loose numeric conversion: blank text is zero, anything unparsable is NaN.
    /// Only the exact spelling `Infinity` counts as infinite.
    pub fn as_f64(&self) -> f64 {
        match self {
            FieldValue::Number(n) => n.as_f64().unwrap_or(f64::NAN),
            FieldValue::Text(s) => {
                let trimmed = s.trim();
                // rejects "inf", "nan" and friends that str::parse would take
                let has_word = trimmed
                    .chars()
                    .any(|c| c.is_ascii_alphabetic() && !matches!(c, 'e' | 'E'));
                match trimmed {
                    "" => 0.0,
                    "Infinity" | "+Infinity" => f64::INFINITY,
                    "-Infinity" => f64::NEG_INFINITY,
                    _ if has_word => f64::NAN,
                    _ => trimmed.parse::<f64>().unwrap_or(f64::NAN),
                }
            }
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // 8.0 reads back as 8
            FieldValue::Number(n) if n.is_f64() => match n.as_f64() {
                Some(float) => write!(f, "{}", float),
                None => write!(f, "{}", n),
            },
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Movie {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub year: FieldValue,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub rating: FieldValue,

    // Anything else a hand-edited document carries survives a rewrite.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Movie {
    pub fn new(
        title: impl Into<String>,
        year: impl Into<FieldValue>,
        genre: impl Into<String>,
        rating: impl Into<FieldValue>,
    ) -> Movie {
        Movie {
            title: title.into(),
            year: year.into(),
            genre: genre.into(),
            rating: rating.into(),
            extra: Map::new(),
        }
    }

    pub fn genres(&self) -> Vec<&str> {
        self.genre
            .split(',')
            .map(|g| g.trim())
            .filter(|g| !g.is_empty())
            .collect()
    }

    pub fn has_genre(&self, name: &str) -> bool {
        let wanted = name.trim().to_lowercase();
        self.genres().iter().any(|g| g.to_lowercase() == wanted)
    }

    pub fn numeric_rating(&self) -> f64 {
        self.rating.as_f64()
    }

    pub fn apply(&mut self, update: MovieUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(year) = update.year {
            self.year = FieldValue::Text(year);
        }
        if let Some(genre) = update.genre {
            self.genre = genre;
        }
        if let Some(rating) = update.rating {
            self.rating = FieldValue::Text(rating);
        }
    }

    pub fn to_csvable_array(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            self.year.to_string(),
            self.rating.to_string(),
            self.genres().join(", "),
        ]
    }

    pub fn csv_titles() -> Vec<&'static str> {
        vec!["Title", "Year", "Rating10", "Tags"]
    }
}

/// Replacement values for an update. `None` keeps what the record already has.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieUpdate {
    pub title: Option<String>,
    pub year: Option<String>,
    pub genre: Option<String>,
    pub rating: Option<String>,
}

impl MovieUpdate {
    /// Builds an update from raw answers, where a blank answer means "keep".
    pub fn from_answers(title: &str, year: &str, genre: &str, rating: &str) -> MovieUpdate {
        fn keep_if_blank(answer: &str) -> Option<String> {
            let answer = answer.trim();
            if answer.is_empty() {
                None
            } else {
                Some(answer.to_string())
            }
        }

        MovieUpdate {
            title: keep_if_blank(title),
            year: keep_if_blank(year),
            genre: keep_if_blank(genre),
            rating: keep_if_blank(rating),
        }
    }
}
