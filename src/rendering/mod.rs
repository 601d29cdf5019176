mod macroquad_surface;

pub use macroquad_surface::MacroquadSurface;

use crate::domain::Grid;
use crate::input::InputEvent;

/// 8-bit RGB color, independent of any graphics library
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Axis-aligned rectangle in pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RectStyle {
    Filled(Rgb),
    Outlined { color: Rgb, thickness: f32 },
}

/// Minimal capability set the simulation needs from a window.
/// The simulation only ever talks to the platform through this trait.
pub trait Surface {
    /// Non-blocking: return whatever happened since the last call
    fn poll_events(&mut self) -> Vec<InputEvent>;

    fn clear(&mut self, color: Rgb);

    fn draw_rect(&mut self, rect: Rect, style: RectStyle);

    /// Make everything drawn since the last clear visible
    fn present(&mut self);
}

/// Colors used to draw the board
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub background: Rgb,
    pub alive: Rgb,
    pub dead_outline: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb(25, 25, 25),
            alive: Rgb(255, 255, 255),
            dead_outline: Rgb(128, 128, 128),
        }
    }
}

/// Maps between grid cells and window pixels.
/// Cell sizes are fractional when the window does not divide evenly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellLayout {
    columns: usize,
    rows: usize,
    cell_width: f32,
    cell_height: f32,
}

impl CellLayout {
    /// Callers pass validated, non-zero sizes
    pub(crate) fn new(window_width: u32, window_height: u32, columns: usize, rows: usize) -> Self {
        Self {
            columns,
            rows,
            cell_width: window_width as f32 / columns as f32,
            cell_height: window_height as f32 / rows as f32,
        }
    }

    pub const fn cell_size(&self) -> (f32, f32) {
        (self.cell_width, self.cell_height)
    }

    /// Cell under a pixel position. Positions outside the window are
    /// clamped to the nearest edge cell rather than wrapped.
    pub fn pixel_to_cell(&self, px: f32, py: f32) -> (usize, usize) {
        let clamp = |pixel: f32, size: f32, count: usize| {
            let idx = (pixel / size).floor();
            if idx.is_nan() || idx < 0.0 {
                0
            } else {
                (idx as usize).min(count.saturating_sub(1))
            }
        };
        (
            clamp(px, self.cell_width, self.columns),
            clamp(py, self.cell_height, self.rows),
        )
    }

    /// Pixel rectangle covered by a cell
    pub fn cell_rect(&self, x: usize, y: usize) -> Rect {
        Rect {
            x: x as f32 * self.cell_width,
            y: y as f32 * self.cell_height,
            w: self.cell_width,
            h: self.cell_height,
        }
    }
}

/// Draw every cell: alive cells filled, dead cells as a thin outline
pub fn render_grid<S: Surface + ?Sized>(
    surface: &mut S,
    grid: &Grid,
    layout: &CellLayout,
    palette: &Palette,
) {
    surface.clear(palette.background);
    for (x, y, cell) in grid.iter_cells() {
        let style = if cell.is_alive() {
            RectStyle::Filled(palette.alive)
        } else {
            RectStyle::Outlined {
                color: palette.dead_outline,
                thickness: 1.0,
            }
        };
        surface.draw_rect(layout.cell_rect(x, y), style);
    }
}
