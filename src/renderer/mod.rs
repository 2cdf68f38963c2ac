//! Rendering
//!
//! The simulation knows nothing about drawing. Each entity kind implements
//! `Draw` against the `Canvas` capability; backends implement `Canvas`.

#[cfg(target_arch = "wasm32")]
mod canvas2d;
pub mod effects;
pub mod shapes;
pub mod text;

#[cfg(target_arch = "wasm32")]
pub use canvas2d::Canvas2d;
pub use effects::Effects;
pub use shapes::{Draw, draw_round};
pub use text::TextCanvas;

/// RGBA color, 0xRRGGBB plus alpha
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub rgb: u32,
    pub alpha: f32,
}

impl Color {
    pub const fn rgb(rgb: u32) -> Self {
        Self { rgb, alpha: 1.0 }
    }

    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self {
            rgb: self.rgb,
            alpha,
        }
    }
}

/// Palette
pub mod colors {
    use super::Color;

    pub const WHITE: Color = Color::rgb(0xffffff);
    pub const BLACK: Color = Color::rgb(0x000000);
    pub const PLAYER_BLUE: Color = Color::rgb(0x1976d2);
    pub const RED: Color = Color::rgb(0xff4444);
    pub const PARACHUTE_RED: Color = Color::rgb(0xe53935);
    pub const OBSTACLE_GREEN: Color = Color::rgb(0x2e7d32);
    pub const WARNING_YELLOW: Color = Color::rgb(0xff9800);
    pub const GROUND_BROWN: Color = Color::rgb(0x5d4e37);
    pub const SAFE_ZONE: Color = Color::rgb(0x00e676);
    pub const CLOUD_WHITE: Color = Color::rgb(0xf5f5f5);
    pub const PLANE_SILVER: Color = Color::rgb(0xe0e0e0);
    pub const FLASH_RED: Color = Color::rgb(0xff0000);
    pub const FLASH_GREEN: Color = Color::rgb(0x00ff00);
}

/// Minimal 2D drawing surface
pub trait Canvas {
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);

    /// Ellipse inscribed in the given box
    fn fill_ellipse(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, width: f32, color: Color);
}
