pub mod input_render;
mod input_state;

pub use input_state::InputState;

#[cfg(test)]
mod input_render_tests;
