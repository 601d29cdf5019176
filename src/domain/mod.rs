mod cell;
mod grid;
mod rules;
mod patterns;

pub use cell::Cell;
pub use grid::Grid;
pub use rules::{ConwayRule, RuleEngine};
pub use patterns::{Pattern, PatternPlacement, presets};
