pub mod generator;
pub mod grid;
pub mod render;

pub use generator::{GenerateError, Generation, generate};
pub use grid::{Direction, Grid};
