//! Wire envelope for `GET /api/movies`.

use serde::{Deserialize, Serialize};

use crate::Movie;

/// Body returned by the catalog backend.
///
/// A missing or `null` `results` field is an empty catalog, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieListResponse {
    #[serde(default)]
    pub results: Option<Vec<Movie>>,
}

impl MovieListResponse {
    pub fn into_movies(self) -> Vec<Movie> {
        self.results.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn results_are_read_in_order() {
        let body = r#"{"results":[{"title":"Parasite","year":"2019"},{"title":"Jaws","year":"1975"}]}"#;
        let movies = serde_json::from_str::<MovieListResponse>(body)
            .expect("decode")
            .into_movies();

        assert_eq!(
            movies,
            vec![
                Movie::new("Parasite").with_year("2019"),
                Movie::new("Jaws").with_year("1975"),
            ]
        );
    }

    #[test]
    fn missing_or_null_results_is_empty() {
        for body in [r#"{}"#, r#"{"results":null}"#, r#"{"page":1}"#] {
            let movies = serde_json::from_str::<MovieListResponse>(body)
                .expect("decode")
                .into_movies();
            assert!(movies.is_empty(), "{body} should yield no movies");
        }
    }
}
