use std::time::Duration;

use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, info, trace};

use super::SimConfig;
use crate::domain::{Cell, Grid, RuleEngine};
use crate::error::Result;
use crate::input::{Command, InputController};
use crate::rendering::{CellLayout, Palette, Surface, render_grid};

/// Whether the driver should keep calling `tick`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Quit,
}

/// SimulationLoop owns all simulation state: the double-buffered grid,
/// the pause flag and the generation counter.
pub struct SimulationLoop {
    current: Grid,
    next: Grid,
    engine: RuleEngine,
    input: InputController,
    layout: CellLayout,
    palette: Palette,
    tick_delay: Duration,
    paused: bool,
    quit_requested: bool,
    generation: u64,
    pending_edits: Vec<(usize, usize, Cell)>,
}

impl SimulationLoop {
    /// Validate the configuration and seed the initial grid.
    /// Nothing is created if any setting is invalid.
    pub fn new(config: &SimConfig) -> Result<Self> {
        config.validate()?;
        let tick_delay = config.tick_delay()?;

        let mut current = Grid::new(config.grid_columns, config.grid_rows)?;
        if let Some(fill) = &config.random_fill {
            let mut rng = StdRng::seed_from_u64(fill.seed);
            current.fill_random(&mut rng, fill.density);
            debug!(density = fill.density, seed = fill.seed, "random fill applied");
        }
        if let Some(placement) = &config.initial_pattern {
            placement.apply(&mut current);
            debug!(
                pattern = placement.pattern.name(),
                x = placement.x_offset,
                y = placement.y_offset,
                "initial pattern placed"
            );
        }

        let layout = config.layout();
        info!(
            columns = config.grid_columns,
            rows = config.grid_rows,
            population = current.count_alive(),
            "simulation ready"
        );

        Ok(Self {
            next: current.clone(),
            current,
            engine: RuleEngine::new(),
            input: InputController::new(layout),
            layout,
            palette: config.palette,
            tick_delay,
            paused: false,
            quit_requested: false,
            generation: 0,
            pending_edits: Vec::new(),
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.current
    }

    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.current.count_alive()
    }

    pub const fn tick_delay(&self) -> Duration {
        self.tick_delay
    }

    /// Record the effect of one command. Cell edits are held until the
    /// next advance so they land on top of the freshly computed generation.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::TogglePause => {
                self.paused = !self.paused;
                debug!(paused = self.paused, generation = self.generation, "pause toggled");
            }
            Command::SetCell { x, y, cell } => {
                self.pending_edits.push((x, y, cell));
            }
            Command::Quit => {
                info!(generation = self.generation, "quit requested");
                self.quit_requested = true;
            }
        }
    }

    /// Advance one generation unless paused, then apply pending edits.
    /// Edits bypass the rule for their cell this tick.
    pub fn advance(&mut self) {
        if !self.paused {
            self.engine.step_into(&self.current, &mut self.next);
            std::mem::swap(&mut self.current, &mut self.next);
            self.generation += 1;
            trace!(generation = self.generation, "generation advanced");
        }

        for (x, y, cell) in self.pending_edits.drain(..) {
            self.current.set(x as isize, y as isize, cell);
            trace!(x, y, ?cell, "cell edited");
        }
    }

    /// One tick without pacing: drain input, advance, draw.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) -> LoopControl {
        for event in surface.poll_events() {
            if let Some(command) = self.input.interpret(&event) {
                self.apply(command);
            }
        }

        self.advance();
        render_grid(surface, &self.current, &self.layout, &self.palette);

        if self.quit_requested {
            LoopControl::Quit
        } else {
            LoopControl::Continue
        }
    }

    /// Blocking driver for surfaces that present synchronously.
    /// Runs until the surface reports a quit.
    pub fn run<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        while self.tick(surface) == LoopControl::Continue {
            surface.present();
            if !self.tick_delay.is_zero() {
                std::thread::sleep(self.tick_delay);
            }
        }
        info!(generation = self.generation, "simulation stopped");
    }
}
