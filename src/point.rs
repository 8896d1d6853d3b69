use crate::{history::HistoryBuffer, simulation::SimulationConfig};
use nalgebra::Vector3;

/// RGB color tag of a point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointColor(pub Vector3<u8>);

impl PointColor {
    pub fn rgb(r: u8, g: u8, b: u8) -> PointColor {
        PointColor(Vector3::new(r, g, b))
    }
}

/// Insertion position of a point. Stable for the lifetime of the simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointIndex(pub usize);

#[derive(Clone, Debug, PartialEq)]
pub struct KinematicPoint {
    pub velocity: f32,
    pub displacement: f32,
    pub acceleration: f32,
    pub history: HistoryBuffer,
}

impl KinematicPoint {
    pub fn new(
        velocity: f32,
        displacement: f32,
        acceleration: f32,
        history_len: usize,
    ) -> KinematicPoint {
        KinematicPoint {
            velocity,
            displacement,
            acceleration,
            history: HistoryBuffer::new(history_len),
        }
    }

    pub fn spawned(config: &SimulationConfig) -> KinematicPoint {
        KinematicPoint::new(
            config.spawn_velocity,
            config.spawn_displacement,
            config.spawn_acceleration,
            config.history_len(),
        )
    }

    /// One fixed tick. The tick is the unit of time, so nothing is scaled by a delta.
    pub fn integrate(&mut self, config: &SimulationConfig) {
        self.velocity += self.acceleration;
        self.displacement += self.velocity;

        // Inelastic floor bounce.
        if self.displacement < config.floor_level {
            self.velocity = -self.velocity * config.restitution;
            self.displacement = config.floor_level;
        }

        self.history.record(self.displacement.round() as i32);
    }

    /// Overwrites the velocity.
    pub fn apply_impulse(&mut self, magnitude: f32) {
        self.velocity = magnitude;
    }
}
