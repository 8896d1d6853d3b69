pub mod layout;

use crate::{
    error::AppError,
    simulation::RateConfig,
    trackbar::{PANEL_HEIGHT, TRACKBARS},
    world::PointSnapshot,
};
use layout::{layout_point, Pixel};
use sdl2::{gfx::primitives::DrawRenderer, pixels::Color, render::WindowCanvas};

const BACKGROUND: Color = Color::RGB(0, 0, 0);
const PANEL: Color = Color::RGB(40, 40, 40);
const PANEL_TEXT: Color = Color::RGB(220, 220, 220);
const TRAIL: Color = Color::RGB(255, 0, 0);
const VELOCITY: Color = Color::RGB(255, 255, 0);

pub struct DisplayConfig {
    pub title: &'static str,
    /// Side of the square simulation frame. The window adds the trackbar panel on top.
    pub scale: u32,
}

/// Draws one frame from a snapshot of the simulation. Never touches simulation state.
pub trait Renderer {
    fn render(&mut self, points: &[PointSnapshot], rates: &RateConfig) -> Result<(), AppError>;
}

pub struct Graphics {
    pub config: DisplayConfig,
    pub sdl_context: sdl2::Sdl,
    pub canvas: WindowCanvas,
}

pub fn init_graphics(display_config: DisplayConfig) -> Result<Graphics, AppError> {
    let sdl_context = sdl2::init().map_err(AppError::Sdl)?;
    let video_subsystem = sdl_context.video().map_err(AppError::Sdl)?;

    let window = video_subsystem
        .window(
            display_config.title,
            display_config.scale,
            display_config.scale + PANEL_HEIGHT as u32,
        )
        .position_centered()
        .build()?;

    Ok(Graphics {
        config: display_config,
        sdl_context,
        canvas: window.into_canvas().build()?,
    })
}

// gfx takes i16 coordinates.
fn px(v: i32) -> i16 {
    v.max(i16::MIN as i32).min(i16::MAX as i32) as i16
}

impl Graphics {
    fn width(&self) -> i32 {
        self.config.scale as i32
    }

    fn draw_panel(&self, rates: &RateConfig) -> Result<(), String> {
        let width = self.width();
        self.canvas.box_(0, 0, px(width - 1), px(PANEL_HEIGHT - 1), PANEL)?;
        for bar in TRACKBARS.iter() {
            let value = bar.read(rates);
            let (x0, x1) = bar.track(width);
            let y = px(bar.center_y());
            let text = format!("{} {}", bar.label, value);
            self.canvas.string(4, px(bar.center_y() - 4), &text, PANEL_TEXT)?;
            self.canvas.hline(px(x0), px(x1), y, PANEL_TEXT)?;
            let knob_x = px(bar.knob_x(value, width));
            self.canvas.filled_circle(knob_x, y, 5, PANEL_TEXT)?;
        }
        Ok(())
    }

    fn draw_point(&self, point: &PointSnapshot) -> Result<(), String> {
        let marks = layout_point(point, self.width());
        let shift = |(x, y): Pixel| (px(x), px(y + PANEL_HEIGHT));

        for &mark in &marks.trail {
            let (x, y) = shift(mark);
            self.canvas.circle(x, y, 2, TRAIL)?;
        }

        let (from, to) = (shift(marks.velocity.0), shift(marks.velocity.1));
        self.canvas.thick_line(from.0, from.1, to.0, to.1, 2, VELOCITY)?;

        let (x, y) = shift(marks.marker);
        let color = marks.color.0;
        let color = Color::RGB(color.x, color.y, color.z);
        self.canvas.filled_circle(x, y, 3, color)?;
        Ok(())
    }
}

impl Renderer for Graphics {
    fn render(&mut self, points: &[PointSnapshot], rates: &RateConfig) -> Result<(), AppError> {
        self.canvas.set_draw_color(BACKGROUND);
        self.canvas.clear();
        self.draw_panel(rates).map_err(AppError::Sdl)?;
        for point in points {
            self.draw_point(point).map_err(AppError::Sdl)?;
        }
        self.canvas.present();
        Ok(())
    }
}
