use macroquad::prelude::*;

use super::{Rect, RectStyle, Rgb, Surface};
use crate::input::{InputEvent, PointerState};

fn to_color(Rgb(r, g, b): Rgb) -> Color {
    Color::from_rgba(r, g, b, 255)
}

/// Surface backed by the macroquad window.
/// macroquad flips the frame in `next_frame().await`, so `present` is left
/// to the async driver in `main`.
pub struct MacroquadSurface {
    _private: (),
}

impl MacroquadSurface {
    /// Must be called from inside the macroquad window future
    pub fn new() -> Self {
        // Deliver the close button as an InputEvent::Quit instead of exiting
        prevent_quit();
        Self { _private: () }
    }

    fn pointer_snapshot() -> PointerState {
        // Indexed by PointerButton: primary, middle, secondary
        let held = [
            is_mouse_button_down(MouseButton::Left),
            is_mouse_button_down(MouseButton::Middle),
            is_mouse_button_down(MouseButton::Right),
        ];
        let position = held.iter().any(|&h| h).then(mouse_position);
        PointerState { held, position }
    }
}

impl Default for MacroquadSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for MacroquadSurface {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        let mut events: Vec<InputEvent> = get_keys_pressed()
            .into_iter()
            .map(|_| InputEvent::KeyPress)
            .collect();

        events.push(InputEvent::Pointer(Self::pointer_snapshot()));

        if is_quit_requested() {
            events.push(InputEvent::Quit);
        }
        events
    }

    fn clear(&mut self, color: Rgb) {
        clear_background(to_color(color));
    }

    fn draw_rect(&mut self, rect: Rect, style: RectStyle) {
        match style {
            RectStyle::Filled(color) => {
                draw_rectangle(rect.x, rect.y, rect.w, rect.h, to_color(color));
            }
            RectStyle::Outlined { color, thickness } => {
                draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, thickness, to_color(color));
            }
        }
    }

    fn present(&mut self) {}
}
