//! Geometry

mod ray;
mod shape;
mod vector2;
mod vector3;

// Re-export
pub use ray::*;
pub use shape::*;
pub use vector2::*;
pub use vector3::*;
