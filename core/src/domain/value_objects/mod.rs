//! Value objects used across the flow.

pub mod screen;

pub use screen::Screen;
