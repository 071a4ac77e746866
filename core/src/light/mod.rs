//! Lights

mod ambient;
mod area;
mod environment;
mod parallel;

// Re-export
pub use ambient::*;
pub use area::*;
pub use environment::*;
pub use parallel::*;
