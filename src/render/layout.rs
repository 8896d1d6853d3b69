//! Screen-space positions for one point, in frame coordinates (origin top-left, y down).

use crate::{point::PointColor, world::PointSnapshot};

pub type Pixel = (i32, i32);

pub const VELOCITY_SCALE: f32 = 10.;

#[derive(Clone, Debug, PartialEq)]
pub struct PointMarks {
    pub trail: Vec<Pixel>,
    pub velocity: (Pixel, Pixel),
    pub marker: Pixel,
    pub color: PointColor,
}

/// Trail samples are spread across the left half of the frame, oldest at x = 0. The
/// velocity segment and the marker sit on the vertical center line.
pub fn layout_point(point: &PointSnapshot, scale: i32) -> PointMarks {
    let spacing = match point.history.len() as i32 {
        0 => 0,
        len => scale / len / 2,
    };
    let trail = point
        .history
        .iter()
        .enumerate()
        .map(|(k, &sample)| (k as i32 * spacing, scale - sample))
        .collect();

    let center_x = scale / 2;
    let y = scale - point.displacement as i32;
    let tip = y - (point.velocity * VELOCITY_SCALE) as i32;
    PointMarks {
        trail,
        velocity: ((center_x, y), (center_x, tip)),
        marker: (center_x, y),
        color: point.color,
    }
}
