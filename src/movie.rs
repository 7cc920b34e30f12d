//! Movie records returned by the search endpoint

use chrono::NaiveDate;
use serde::Deserialize;

/// Base URL for poster and backdrop images
pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// Body of a successful `search/movie` call
///
/// Only `results` is required; paging fields are kept when present.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<Movie>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub total_results: Option<u32>,
}

/// A single movie search result
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub original_title: Option<String>,
    #[serde(default)]
    pub original_language: Option<String>,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    /// `YYYY-MM-DD`, sometimes an empty string
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u32,
    #[serde(default)]
    pub popularity: f64,
}

impl Movie {
    fn parsed_release_date(&self) -> Option<NaiveDate> {
        let raw = self.release_date.as_deref()?.trim();
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
    }

    /// Release year, if the date is present and well-formed
    pub fn release_year(&self) -> Option<i32> {
        use chrono::Datelike;
        self.parsed_release_date().map(|date| date.year())
    }

    /// Release date as "March 31, 1999"
    pub fn release_date_long(&self) -> Option<String> {
        self.parsed_release_date()
            .map(|date| date.format("%B %-d, %Y").to_string())
    }

    /// Rating with one decimal, or "-" when nobody voted
    pub fn rating_display(&self) -> String {
        if self.vote_count == 0 {
            "-".to_string()
        } else {
            format!("{:.1}", self.vote_average)
        }
    }

    pub fn poster_url(&self) -> Option<String> {
        self.poster_path
            .as_deref()
            .filter(|path| !path.is_empty())
            .map(|path| format!("{}{}", IMAGE_BASE_URL, path))
    }

    pub fn backdrop_url(&self) -> Option<String> {
        self.backdrop_path
            .as_deref()
            .filter(|path| !path.is_empty())
            .map(|path| format!("{}{}", IMAGE_BASE_URL, path))
    }

    /// Original title, only when it differs from the localized one
    pub fn distinct_original_title(&self) -> Option<&str> {
        self.original_title
            .as_deref()
            .filter(|original| !original.is_empty() && *original != self.title)
    }
}

#[cfg(test)]
#[path = "movie_tests.rs"]
mod movie_tests;
