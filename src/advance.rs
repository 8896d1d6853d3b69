use legion::*;

use crate::{point::KinematicPoint, simulation::SimulationConfig};

#[system(for_each)]
pub fn integrate_points(point: &mut KinematicPoint, #[resource] config: &SimulationConfig) {
    point.integrate(config);
}

pub fn physics_schedule() -> Schedule {
    Schedule::builder()
        .add_system(integrate_points_system())
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::PointIndex;

    #[test]
    fn schedule_integrates_every_point_once() {
        let config = SimulationConfig::default();
        let mut world = World::default();
        let mut resources = Resources::default();
        resources.insert(config);
        world.push((KinematicPoint::spawned(&config), PointIndex(0)));
        world.push((KinematicPoint::new(-10., 15., 0., 100), PointIndex(1)));

        let mut schedule = physics_schedule();
        schedule.execute(&mut world, &mut resources);

        let mut cursors = <&KinematicPoint>::query()
            .iter(&world)
            .map(|point| point.history.cursor())
            .collect::<Vec<_>>();
        cursors.sort();
        assert_eq!(cursors, vec![1, 1]);
        let floored = <&KinematicPoint>::query()
            .iter(&world)
            .filter(|point| point.displacement == config.floor_level)
            .count();
        assert_eq!(floored, 1);
    }
}
