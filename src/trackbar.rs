use crate::simulation::{RateConfig, SharedRates, MAX_FRAME_CAP, MAX_TICK_RATE};

pub const ROW_HEIGHT: i32 = 20;
pub const PANEL_HEIGHT: i32 = ROW_HEIGHT * 2;
const LABEL_WIDTH: i32 = 120;
const MARGIN: i32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RateKind {
    FrameCap,
    TickRate,
}

/// Horizontal slider for one rate, laid out as a row of the panel above the frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Trackbar {
    pub kind: RateKind,
    pub label: &'static str,
    pub max: u32,
    pub row: i32,
}

pub const TRACKBARS: [Trackbar; 2] = [
    Trackbar {
        kind: RateKind::FrameCap,
        label: "FrameRate",
        max: MAX_FRAME_CAP,
        row: 0,
    },
    Trackbar {
        kind: RateKind::TickRate,
        label: "TickRate",
        max: MAX_TICK_RATE,
        row: 1,
    },
];

impl Trackbar {
    pub fn top(&self) -> i32 {
        self.row * ROW_HEIGHT
    }

    pub fn center_y(&self) -> i32 {
        self.top() + ROW_HEIGHT / 2
    }

    /// (start, end) of the slider track in window x.
    pub fn track(&self, width: i32) -> (i32, i32) {
        (LABEL_WIDTH, (width - MARGIN).max(LABEL_WIDTH + 1))
    }

    pub fn contains(&self, x: i32, y: i32, width: i32) -> bool {
        let (x0, x1) = self.track(width);
        y >= self.top() && y < self.top() + ROW_HEIGHT && x >= x0 - MARGIN && x <= x1 + MARGIN
    }

    pub fn value_at(&self, x: i32, width: i32) -> u32 {
        let (x0, x1) = self.track(width);
        let t = (x - x0) as f32 / (x1 - x0) as f32;
        (t.max(0.).min(1.) * self.max as f32).round() as u32
    }

    pub fn knob_x(&self, value: u32, width: i32) -> i32 {
        let (x0, x1) = self.track(width);
        let t = value.min(self.max) as f32 / self.max as f32;
        x0 + ((x1 - x0) as f32 * t).round() as i32
    }

    pub fn read(&self, rates: &RateConfig) -> u32 {
        match self.kind {
            RateKind::FrameCap => rates.frame_cap,
            RateKind::TickRate => rates.tick_rate,
        }
    }

    pub fn write(&self, rates: &SharedRates, value: u32) {
        match self.kind {
            RateKind::FrameCap => rates.set_frame_cap(value),
            RateKind::TickRate => rates.set_tick_rate(value),
        }
    }
}

pub fn hit_test(x: i32, y: i32, width: i32) -> Option<Trackbar> {
    TRACKBARS
        .iter()
        .copied()
        .find(|bar| bar.contains(x, y, width))
}

pub fn by_kind(kind: RateKind) -> Trackbar {
    match kind {
        RateKind::FrameCap => TRACKBARS[0],
        RateKind::TickRate => TRACKBARS[1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: i32 = 600;

    #[test]
    fn ends_of_track_map_to_range() {
        let bar = by_kind(RateKind::TickRate);
        let (x0, x1) = bar.track(WIDTH);
        assert_eq!(bar.value_at(x0, WIDTH), 0);
        assert_eq!(bar.value_at(x1, WIDTH), MAX_TICK_RATE);
        assert_eq!(bar.value_at(x0 - 50, WIDTH), 0);
        assert_eq!(bar.value_at(x1 + 50, WIDTH), MAX_TICK_RATE);
    }

    #[test]
    fn value_grows_with_x() {
        let bar = by_kind(RateKind::FrameCap);
        let (x0, x1) = bar.track(WIDTH);
        let mut last = 0;
        for x in x0..=x1 {
            let value = bar.value_at(x, WIDTH);
            assert!(value >= last);
            last = value;
        }
    }

    #[test]
    fn knob_round_trips_through_value() {
        let bar = by_kind(RateKind::FrameCap);
        for value in [0, 1, 60, 200, 240].iter().copied() {
            let x = bar.knob_x(value, WIDTH);
            let back = bar.value_at(x, WIDTH) as i64;
            assert!((back - value as i64).abs() <= 1);
        }
    }

    #[test]
    fn hit_test_picks_row() {
        let (x0, _) = TRACKBARS[0].track(WIDTH);
        assert_eq!(
            hit_test(x0 + 5, 3, WIDTH).map(|b| b.kind),
            Some(RateKind::FrameCap)
        );
        assert_eq!(
            hit_test(x0 + 5, ROW_HEIGHT + 3, WIDTH).map(|b| b.kind),
            Some(RateKind::TickRate)
        );
        assert_eq!(hit_test(x0 + 5, PANEL_HEIGHT + 3, WIDTH), None);
    }

    #[test]
    fn writes_reach_shared_rates() {
        let rates = SharedRates::new(RateConfig::default());
        by_kind(RateKind::TickRate).write(&rates, 0);
        by_kind(RateKind::FrameCap).write(&rates, 60);
        assert_eq!(rates.get().tick_rate, 0);
        assert_eq!(by_kind(RateKind::FrameCap).read(&rates.get()), 60);
    }
}
