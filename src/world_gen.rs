use crate::{point::PointColor, simulation::SimulationConfig, world::Simulation};
use rand::Rng;
use rand_pcg::Pcg64;

/// Colors handed to points spawned from the keyboard.
pub struct ColorGenerator {
    rng: Pcg64,
}

impl Default for ColorGenerator {
    fn default() -> Self {
        ColorGenerator {
            rng: Pcg64::new(0xcafef00dd15ea5e5, 0xa02bdbf7bb3c0a7ac28fa16a64abf96),
        }
    }
}

impl ColorGenerator {
    pub fn next_color(&mut self) -> PointColor {
        PointColor::rgb(
            self.rng.gen_range(0..=255),
            self.rng.gen_range(0..=255),
            self.rng.gen_range(0..=255),
        )
    }
}

/// A simulation holding the single green starting point.
pub fn init_simulation(config: SimulationConfig) -> Simulation {
    let mut simulation = Simulation::new(config);
    simulation.spawn(PointColor::rgb(0, 255, 0));
    simulation
}
