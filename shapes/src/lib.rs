//! Shapes

mod plane;
mod sphere;
mod square;
mod triangle;

// Re-export
pub use plane::*;
pub use sphere::*;
pub use square::*;
pub use triangle::*;
