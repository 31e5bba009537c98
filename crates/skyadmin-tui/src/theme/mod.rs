//! Color palette and style builders shared by all widgets

pub mod palette;
pub mod styles;
