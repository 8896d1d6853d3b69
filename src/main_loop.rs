use crate::{
    clock::Clock,
    error::AppError,
    input::{Command, InputController},
    render::Renderer,
    simulation::{SharedRates, TimeAccumulator},
    world::Simulation,
    world_gen::ColorGenerator,
};
use log::{debug, info, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

/// Drives clock → ticks → render → input once per frame.
pub struct MainLoop<C, R, I> {
    clock: C,
    renderer: R,
    input: I,
    simulation: Simulation,
    accumulator: TimeAccumulator,
    rates: SharedRates,
    colors: ColorGenerator,
    frames: u64,
}

impl<C: Clock, R: Renderer, I: InputController> MainLoop<C, R, I> {
    pub fn new(
        clock: C,
        renderer: R,
        input: I,
        simulation: Simulation,
        rates: SharedRates,
    ) -> MainLoop<C, R, I> {
        let accumulator = TimeAccumulator::new(clock.now());
        MainLoop {
            clock,
            renderer,
            input,
            simulation,
            accumulator,
            rates,
            colors: ColorGenerator::default(),
            frames: 0,
        }
    }

    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    pub fn accumulator(&self) -> &TimeAccumulator {
        &self.accumulator
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn run(&mut self) -> Result<(), AppError> {
        info!("Main loop started with {:?}", self.rates.get());
        while self.run_frame()? == LoopControl::Continue {}
        info!(
            "Main loop stopped after {} frames, {} ticks, {} points",
            self.frames(),
            self.accumulator().total_ticks(),
            self.simulation().len()
        );
        Ok(())
    }

    pub fn run_frame(&mut self) -> Result<LoopControl, AppError> {
        // Rates may have been changed by the trackbars since last frame.
        let rates = self.rates.get();

        let now = self.clock.now();
        let delta = now.saturating_sub(self.accumulator.last_sample());
        if rates.is_long_frame(delta) {
            warn!("Long frame: {}ms since last sample", delta);
        }
        let ticks = self.accumulator.advance(now, rates.tick_duration_ms());
        for _ in 0..ticks {
            self.simulation.step();
        }
        debug!(
            "Frame {}: {} ticks, carry {}ms",
            self.frames,
            ticks,
            self.accumulator.carry()
        );

        self.renderer.render(&self.simulation.snapshot(), &rates)?;
        self.frames += 1;

        let command = self.input.poll(rates.poll_timeout())?;
        Ok(self.dispatch(command))
    }

    fn dispatch(&mut self, command: Command) -> LoopControl {
        match command {
            Command::Idle => {}
            Command::BumpUp => self.simulation.bump(true),
            Command::BumpDown => self.simulation.bump(false),
            Command::Spawn => {
                let color = self.colors.next_color();
                self.simulation.spawn(color);
            }
            Command::Quit => return LoopControl::Stop,
        }
        LoopControl::Continue
    }
}
