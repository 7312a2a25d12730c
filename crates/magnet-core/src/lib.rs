pub mod config;
pub mod constants;
pub mod controller;
pub mod geometry;
pub mod smoothing;

pub use config::*;
pub use controller::*;
pub use geometry::*;
pub use smoothing::*;
