use serde::{Deserialize, Serialize};

use crate::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SearchMode {
    Single,
    Multi,
}

impl std::fmt::Display for SearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchMode::Single => write!(f, "SINGLE"),
            SearchMode::Multi => write!(f, "MULTI"),
        }
    }
}

/// Form input for one search. Built per submission and consumed once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    pub segment: String,
    pub mode: SearchMode,
    pub single_city: String,
    /// Raw newline-delimited text, one city per line.
    pub multi_cities: String,
}

impl SearchParams {
    #[must_use]
    pub fn single(segment: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            segment: segment.into(),
            mode: SearchMode::Single,
            single_city: city.into(),
            multi_cities: String::new(),
        }
    }

    #[must_use]
    pub fn multi(segment: impl Into<String>, cities: impl Into<String>) -> Self {
        Self {
            segment: segment.into(),
            mode: SearchMode::Multi,
            single_city: String::new(),
            multi_cities: cities.into(),
        }
    }

    /// Resolves the mode and raw city input into the ordered list of cities to
    /// search. Duplicates are kept.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MissingCity`] when single mode has a blank city,
    /// or [`CoreError::NoCities`] when multi mode has no non-blank lines.
    pub fn cities(&self) -> Result<Vec<String>, CoreError> {
        match self.mode {
            SearchMode::Single => {
                let city = self.single_city.trim();
                if city.is_empty() {
                    return Err(CoreError::MissingCity);
                }
                Ok(vec![city.to_string()])
            }
            SearchMode::Multi => {
                let cities: Vec<String> = self
                    .multi_cities
                    .split('\n')
                    .map(str::trim)
                    .filter(|c| !c.is_empty())
                    .map(ToOwned::to_owned)
                    .collect();
                if cities.is_empty() {
                    return Err(CoreError::NoCities);
                }
                Ok(cities)
            }
        }
    }
}
