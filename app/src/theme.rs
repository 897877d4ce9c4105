use afterglow_core::Rgb;
use macroquad::color::Color;

/// Resting cell fill.
pub const CELL_BASE: Rgb = Rgb(0, 10, 100);
/// Freshly activated cell, also a correctly revealed one.
pub const CELL_LIT: Rgb = Rgb(255, 255, 255);
/// Revealed cell that was not part of the pattern.
pub const CELL_MISS: Rgb = Rgb(0, 30, 50);

pub fn to_screen(color: Rgb) -> Color {
    Color::from_rgba(color.0, color.1, color.2, 255)
}
