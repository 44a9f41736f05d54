//! Paint model: colors handed to clear passes and shaders.

pub mod color;

pub use color::Color;
