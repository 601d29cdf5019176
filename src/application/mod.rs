mod config;
mod simulation;

pub use config::{RandomFill, SimConfig};
pub use simulation::{LoopControl, SimulationLoop};
