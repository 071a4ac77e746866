//! Core

#[macro_use]
extern crate log;

// Re-export.
pub mod camera;
pub mod common;
pub mod geometry;
pub mod interaction;
pub mod light;
pub mod material;
pub mod sampler;
pub mod scene;
pub mod spectrum;
pub mod tracer;
