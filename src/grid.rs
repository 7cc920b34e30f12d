//! Result grid
//!
//! Lays out search results as cards in rows and tracks the card under the cursor.

pub mod grid_render;
mod grid_state;

pub use grid_state::GridState;
