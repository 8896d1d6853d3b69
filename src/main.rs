extern crate sdl2;

pub mod advance;
pub mod clock;
pub mod error;
pub mod history;
pub mod input;
pub mod logging;
pub mod main_loop;
pub mod point;
pub mod render;
pub mod simulation;
pub mod trackbar;
pub mod world;
pub mod world_gen;

use clock::SystemClock;
use error::AppError;
use input::SdlInput;
use log::info;
use main_loop::MainLoop;
use render::{init_graphics, DisplayConfig};
use simulation::{RateConfig, SharedRates, SimulationConfig};
use world_gen::init_simulation;

pub fn main() -> Result<(), AppError> {
    // Setup.
    logging::init_logging(logging::level_from_env())?;
    let simulation_config = SimulationConfig::default();
    let graphics = init_graphics(DisplayConfig {
        title: "DeltaTime",
        scale: simulation_config.output_scale,
    })?;
    let rates = SharedRates::new(RateConfig::default());
    let input = SdlInput::new(
        &graphics.sdl_context,
        rates.clone(),
        simulation_config.output_scale,
    )?;
    info!("Simulation config: {:?}", simulation_config);

    // Run until a non-command key or the window closes.
    let mut main_loop = MainLoop::new(
        SystemClock::default(),
        graphics,
        input,
        init_simulation(simulation_config),
        rates,
    );
    main_loop.run()
}
