use std::process::ExitCode;

use macroquad::Window;
use macroquad::prelude::*;
use toroidal_life::{LoopControl, SimConfig, SimulationLoop, logging, rendering::MacroquadSurface};

fn window_conf(config: &SimConfig, (width, height): (i32, i32)) -> Conf {
    Conf {
        window_title: config.window_title.clone(),
        window_width: width,
        window_height: height,
        window_resizable: false,
        ..Default::default()
    }
}

/// Tick, flip, sleep until the window asks to close
async fn drive(mut sim: SimulationLoop) {
    let mut surface = MacroquadSurface::new();
    let delay = sim.tick_delay();

    while sim.tick(&mut surface) == LoopControl::Continue {
        next_frame().await;
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }
    tracing::info!(generation = sim.generation(), "window closed");
}

fn main() -> ExitCode {
    logging::init();

    let config = SimConfig::default();

    // Validate before any window exists
    let built = SimulationLoop::new(&config).and_then(|sim| Ok((sim, config.window_size()?)));
    let (sim, window_size) = match built {
        Ok(ready) => ready,
        Err(err) => {
            tracing::error!(%err, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(
        width = config.window_width,
        height = config.window_height,
        "opening window"
    );
    Window::from_config(window_conf(&config, window_size), drive(sim));
    ExitCode::SUCCESS
}
