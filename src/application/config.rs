use std::time::Duration;

use crate::domain::{PatternPlacement, presets};
use crate::error::{LifeError, Result};
use crate::rendering::{CellLayout, Palette};

/// Seed the board with random soup before any pattern is stamped
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RandomFill {
    /// Probability of each cell starting alive, in `[0, 1]`
    pub density: f64,
    pub seed: u64,
}

/// Everything fixed at construction time. There is no runtime reconfiguration.
#[derive(Clone, Debug)]
pub struct SimConfig {
    pub window_title: String,
    pub window_width: u32,
    pub window_height: u32,
    pub grid_columns: usize,
    pub grid_rows: usize,
    pub tick_delay_seconds: f64,
    pub initial_pattern: Option<PatternPlacement>,
    pub random_fill: Option<RandomFill>,
    pub palette: Palette,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            window_title: "Conway's Game of Life".to_owned(),
            window_width: 700,
            window_height: 700,
            grid_columns: 50,
            grid_rows: 50,
            tick_delay_seconds: 0.1,
            initial_pattern: Some(PatternPlacement::new(presets::glider(), 10, 10)),
            random_fill: None,
            palette: Palette::default(),
        }
    }
}

impl SimConfig {
    pub fn with_window(mut self, width: u32, height: u32) -> Self {
        self.window_width = width;
        self.window_height = height;
        self
    }

    pub fn with_grid(mut self, columns: usize, rows: usize) -> Self {
        self.grid_columns = columns;
        self.grid_rows = rows;
        self
    }

    pub fn with_tick_delay(mut self, seconds: f64) -> Self {
        self.tick_delay_seconds = seconds;
        self
    }

    pub fn with_pattern(mut self, placement: Option<PatternPlacement>) -> Self {
        self.initial_pattern = placement;
        self
    }

    pub fn with_random_fill(mut self, fill: Option<RandomFill>) -> Self {
        self.random_fill = fill;
        self
    }

    /// Fail fast on any value the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        // The window backend takes signed pixel sizes
        for (field, value) in [
            ("window width", self.window_width),
            ("window height", self.window_height),
        ] {
            if value == 0 || i32::try_from(value).is_err() {
                return Err(LifeError::dimension(field, value));
            }
        }
        if self.grid_columns == 0 {
            return Err(LifeError::dimension("grid columns", self.grid_columns));
        }
        if self.grid_rows == 0 {
            return Err(LifeError::dimension("grid rows", self.grid_rows));
        }
        self.tick_delay()?;
        if let Some(fill) = &self.random_fill {
            if !(0.0..=1.0).contains(&fill.density) {
                return Err(LifeError::setting(
                    "random fill density",
                    format!("{} is outside [0, 1]", fill.density),
                ));
            }
        }
        Ok(())
    }

    /// Delay between ticks. Negative, non-finite and out-of-range values fail.
    pub fn tick_delay(&self) -> Result<Duration> {
        Duration::try_from_secs_f64(self.tick_delay_seconds).map_err(|err| {
            LifeError::setting(
                "tick delay",
                format!("{} seconds: {err}", self.tick_delay_seconds),
            )
        })
    }

    /// Window size in the signed form macroquad expects
    pub fn window_size(&self) -> Result<(i32, i32)> {
        let width = i32::try_from(self.window_width)
            .map_err(|_| LifeError::dimension("window width", self.window_width))?;
        let height = i32::try_from(self.window_height)
            .map_err(|_| LifeError::dimension("window height", self.window_height))?;
        Ok((width, height))
    }

    pub fn layout(&self) -> CellLayout {
        CellLayout::new(
            self.window_width,
            self.window_height,
            self.grid_columns,
            self.grid_rows,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = SimConfig::default();
        assert!(config.validate().is_ok());
        assert!((config.tick_delay().unwrap().as_secs_f64() - 0.1).abs() < 1e-9);
        assert_eq!(config.window_size(), Ok((700, 700)));
        assert_eq!(config.layout().cell_size(), (14.0, 14.0));
    }

    #[test]
    fn test_zero_window_rejected() {
        let err = SimConfig::default().with_window(0, 700).validate().unwrap_err();
        assert!(matches!(
            err,
            LifeError::InvalidDimension { field: "window width", .. }
        ));
    }

    #[test]
    fn test_zero_grid_rejected() {
        let err = SimConfig::default().with_grid(50, 0).validate().unwrap_err();
        assert!(matches!(
            err,
            LifeError::InvalidDimension { field: "grid rows", .. }
        ));
    }

    #[test]
    fn test_negative_delay_rejected() {
        for seconds in [-0.5, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                SimConfig::default().with_tick_delay(seconds).validate(),
                Err(LifeError::InvalidSetting { field: "tick delay", .. })
            ));
        }
        assert!(SimConfig::default().with_tick_delay(0.0).validate().is_ok());
    }

    #[test]
    fn test_huge_finite_delay_rejected() {
        let config = SimConfig::default().with_tick_delay(1e30);
        assert!(matches!(
            config.validate(),
            Err(LifeError::InvalidSetting { field: "tick delay", .. })
        ));
        assert!(config.tick_delay().is_err());
    }

    #[test]
    fn test_window_larger_than_i32_rejected() {
        let too_wide = i32::MAX as u32 + 1;
        let config = SimConfig::default().with_window(too_wide, 700);
        assert!(matches!(
            config.validate(),
            Err(LifeError::InvalidDimension { field: "window width", .. })
        ));
        assert!(config.window_size().is_err());
    }

    #[test]
    fn test_density_out_of_range_rejected() {
        let config = SimConfig::default().with_random_fill(Some(RandomFill {
            density: 1.5,
            seed: 1,
        }));
        assert!(matches!(
            config.validate(),
            Err(LifeError::InvalidSetting { field: "random fill density", .. })
        ));
    }

    #[test]
    fn test_uneven_cell_size() {
        let layout = SimConfig::default().with_window(700, 500).with_grid(30, 40).layout();
        let (w, h) = layout.cell_size();
        assert!((w - 700.0 / 30.0).abs() < 1e-4);
        assert!((h - 12.5).abs() < 1e-6);
    }
}
