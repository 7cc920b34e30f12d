//! cinesearch - interactive terminal movie search
//!
//! Searches The Movie Database from a ratatui interface: type a title, browse
//! the result cards, open a card for details.

pub mod app;
pub mod config;
pub mod detail;
pub mod error;
pub mod grid;
pub mod input;
pub mod movie;
pub mod notification;
pub mod search;
pub mod tmdb;
pub mod widgets;


pub use app::App;
pub use config::Config;
pub use error::{ConfigError, SearchError};
pub use movie::Movie;
