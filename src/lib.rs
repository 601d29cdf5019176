// Domain layer - grid, rule and patterns
pub mod domain;

// Application layer - configuration and the simulation loop
pub mod application;

// Infrastructure layer - input translation and drawing
pub mod input;
pub mod rendering;

pub mod error;
pub mod logging;

// Re-exports for convenience
pub use application::{LoopControl, RandomFill, SimConfig, SimulationLoop};
pub use domain::{Cell, Grid, Pattern, PatternPlacement, RuleEngine, presets};
pub use error::{LifeError, Result};
