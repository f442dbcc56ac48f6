//! Wavefield library - interactive procedural wave-field background

pub mod camera;
pub mod cli;
pub mod error;
pub mod field;
pub mod overlay;
pub mod params;
pub mod picking;
pub mod rendering;
pub mod text;
