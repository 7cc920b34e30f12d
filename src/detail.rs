//! Movie detail modal
//!
//! Shown over everything else while a movie is selected.

pub mod detail_render;
