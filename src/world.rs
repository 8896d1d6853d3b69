use crate::{
    advance::physics_schedule,
    point::{KinematicPoint, PointColor, PointIndex},
    simulation::SimulationConfig,
};
use legion::{IntoQuery, Resources, Schedule, World};
use log::{debug, info};

/// Read-only copy of a point, handed to the renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct PointSnapshot {
    pub index: usize,
    pub velocity: f32,
    pub displacement: f32,
    pub color: PointColor,
    /// Oldest sample first.
    pub history: Vec<i32>,
}

/// Owns the points and the schedule that ticks them.
///
/// Points are only ever appended, so the collection grows for as long as the user keeps
/// spawning. There is no eviction.
pub struct Simulation {
    world: World,
    resources: Resources,
    schedule: Schedule,
    config: SimulationConfig,
    len: usize,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Simulation {
        let mut resources = Resources::default();
        resources.insert(config);
        Simulation {
            world: World::default(),
            resources,
            schedule: physics_schedule(),
            config,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Runs one fixed tick over every point.
    pub fn step(&mut self) {
        self.schedule.execute(&mut self.world, &mut self.resources);
    }

    /// Point `i` gets velocity `i + 3` going up, `3 - i` going down.
    pub fn bump(&mut self, up: bool) {
        let direction = if up { "up" } else { "down" };
        debug!("Bump {} ({} points)", direction, self.len);
        let mut query = <(&mut KinematicPoint, &PointIndex)>::query();
        query.for_each_mut(&mut self.world, |(point, index)| {
            let i = index.0 as f32;
            point.apply_impulse(if up { i } else { -i } + 3.);
        });
    }

    pub fn spawn(&mut self, color: PointColor) -> usize {
        self.insert(KinematicPoint::spawned(&self.config), color)
    }

    pub fn insert(&mut self, point: KinematicPoint, color: PointColor) -> usize {
        let index = self.len;
        self.world.push((point, PointIndex(index), color));
        self.len += 1;
        info!("Spawned point {} with color {:?}, {} total", index, color.0, self.len);
        index
    }

    pub fn snapshot(&self) -> Vec<PointSnapshot> {
        let mut points = <(&KinematicPoint, &PointIndex, &PointColor)>::query()
            .iter(&self.world)
            .map(|(point, index, color)| PointSnapshot {
                index: index.0,
                velocity: point.velocity,
                displacement: point.displacement,
                color: *color,
                history: point.history.snapshot(),
            })
            .collect::<Vec<_>>();
        points.sort_by_key(|point| point.index);
        points
    }
}
