use crate::{
    error::AppError,
    simulation::SharedRates,
    trackbar::{self, RateKind},
};
use log::info;
use sdl2::{event::Event, keyboard::Keycode, mouse::MouseButton, EventPump};
use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Nothing pressed before the poll timed out.
    Idle,
    BumpUp,
    BumpDown,
    Spawn,
    Quit,
}

pub fn command_for_key(key: Keycode) -> Command {
    match key {
        Keycode::W => Command::BumpUp,
        Keycode::S => Command::BumpDown,
        Keycode::Space => Command::Spawn,
        _ => Command::Quit,
    }
}

/// Blocks for up to `timeout` waiting for a command. The wait paces the frame rate.
pub trait InputController {
    fn poll(&mut self, timeout: Duration) -> Result<Command, AppError>;
}

/// Maps an event to a command. Key presses SDL cannot name still count as "any other key".
pub fn command_for_event(event: &Event) -> Option<Command> {
    match event {
        Event::Quit { .. } => Some(Command::Quit),
        Event::KeyDown { keycode, .. } => Some(keycode.map_or(Command::Quit, command_for_key)),
        _ => None,
    }
}

/// Left-button drag state for the trackbar panel.
pub struct TrackbarDrag {
    width: i32,
    dragging: Option<RateKind>,
}

impl TrackbarDrag {
    pub fn new(width: u32) -> TrackbarDrag {
        TrackbarDrag {
            width: width as i32,
            dragging: None,
        }
    }

    fn drag_to(&self, kind: RateKind, x: i32, rates: &SharedRates) {
        let bar = trackbar::by_kind(kind);
        let value = bar.value_at(x, self.width);
        if bar.read(&rates.get()) != value {
            bar.write(rates, value);
            info!("{} set to {}", bar.label, value);
        }
    }

    pub fn handle(&mut self, event: &Event, rates: &SharedRates) {
        match *event {
            Event::MouseButtonDown {
                mouse_btn: MouseButton::Left,
                x,
                y,
                ..
            } => {
                self.dragging = trackbar::hit_test(x, y, self.width).map(|bar| bar.kind);
                if let Some(kind) = self.dragging {
                    self.drag_to(kind, x, rates);
                }
            }
            Event::MouseMotion { x, .. } => {
                if let Some(kind) = self.dragging {
                    self.drag_to(kind, x, rates);
                }
            }
            Event::MouseButtonUp {
                mouse_btn: MouseButton::Left,
                ..
            } => self.dragging = None,
            _ => {}
        }
    }
}

/// Keyboard commands plus mouse dragging on the trackbars.
pub struct SdlInput {
    event_pump: EventPump,
    rates: SharedRates,
    drag: TrackbarDrag,
}

impl SdlInput {
    pub fn new(
        sdl_context: &sdl2::Sdl,
        rates: SharedRates,
        width: u32,
    ) -> Result<SdlInput, AppError> {
        Ok(SdlInput {
            event_pump: sdl_context.event_pump().map_err(AppError::Sdl)?,
            rates,
            drag: TrackbarDrag::new(width),
        })
    }

    /// Mouse handling stays inside the poll; only key presses and quit end it early.
    fn handle(&mut self, event: Event) -> Option<Command> {
        self.drag.handle(&event, &self.rates);
        command_for_event(&event)
    }
}

impl InputController for SdlInput {
    fn poll(&mut self, timeout: Duration) -> Result<Command, AppError> {
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining == Duration::from_millis(0) {
                return Ok(Command::Idle);
            }
            let wait_ms = (remaining.as_millis() as u32).max(1);
            match self.event_pump.wait_event_timeout(wait_ms) {
                Some(event) => {
                    if let Some(command) = self.handle(event) {
                        return Ok(command);
                    }
                }
                None => return Ok(Command::Idle),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::RateConfig;
    use sdl2::keyboard::Mod;

    #[test]
    fn recognized_keys() {
        assert_eq!(command_for_key(Keycode::W), Command::BumpUp);
        assert_eq!(command_for_key(Keycode::S), Command::BumpDown);
        assert_eq!(command_for_key(Keycode::Space), Command::Spawn);
    }

    #[test]
    fn any_other_key_quits() {
        for key in [Keycode::Escape, Keycode::Q, Keycode::A, Keycode::Return].iter() {
            assert_eq!(command_for_key(*key), Command::Quit);
        }
    }

    fn key_down(keycode: Option<Keycode>) -> Event {
        Event::KeyDown {
            timestamp: 0,
            window_id: 1,
            keycode,
            scancode: None,
            keymod: Mod::NOMOD,
            repeat: false,
        }
    }

    fn mouse_button(down: bool, x: i32, y: i32) -> Event {
        if down {
            Event::MouseButtonDown {
                timestamp: 0,
                window_id: 1,
                which: 0,
                mouse_btn: MouseButton::Left,
                clicks: 1,
                x,
                y,
            }
        } else {
            Event::MouseButtonUp {
                timestamp: 0,
                window_id: 1,
                which: 0,
                mouse_btn: MouseButton::Left,
                clicks: 1,
                x,
                y,
            }
        }
    }

    #[test]
    fn events_map_to_commands() {
        assert_eq!(
            command_for_event(&Event::Quit { timestamp: 0 }),
            Some(Command::Quit)
        );
        assert_eq!(
            command_for_event(&key_down(Some(Keycode::W))),
            Some(Command::BumpUp)
        );
        assert_eq!(
            command_for_event(&key_down(Some(Keycode::Space))),
            Some(Command::Spawn)
        );
        assert_eq!(command_for_event(&mouse_button(true, 10, 10)), None);
        assert_eq!(command_for_event(&mouse_button(false, 10, 10)), None);
    }

    #[test]
    fn unnamed_key_press_quits() {
        // Layout-specific keys such as 'é' arrive without a keycode.
        assert_eq!(command_for_event(&key_down(None)), Some(Command::Quit));
    }

    #[test]
    fn dragging_a_trackbar_sets_its_rate() {
        let rates = SharedRates::new(RateConfig::default());
        let mut drag = TrackbarDrag::new(600);
        let tick_bar = trackbar::by_kind(RateKind::TickRate);
        let (x0, _) = tick_bar.track(600);

        drag.handle(&mouse_button(true, x0, tick_bar.center_y()), &rates);
        assert_eq!(rates.get().tick_rate, 0);
        assert_eq!(rates.get().frame_cap, RateConfig::default().frame_cap);

        drag.handle(&mouse_button(false, x0, tick_bar.center_y()), &rates);
        // Released: presses outside the panel leave both rates alone.
        drag.handle(&mouse_button(true, 300, 300), &rates);
        assert_eq!(rates.get().tick_rate, 0);
        assert_eq!(rates.get().frame_cap, RateConfig::default().frame_cap);
    }
}
