pub mod canvas;
pub mod config;
pub mod error;
pub mod gradient;
pub mod ppm;
pub mod rng;
pub mod types;
pub mod vector;

pub use canvas::Canvas;
pub use error::{Error, Result};
pub use types::{rgba, Color, Float, TRANSPARENT_BLACK};
pub use vector::{vec3, Vector3};
