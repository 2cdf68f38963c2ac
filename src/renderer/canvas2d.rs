//! HTML canvas 2D backend (wasm32)

use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use super::{Canvas, Color};
use crate::hud::{HudSnapshot, RESTART_HINT};

const HUD_FONT: &str = "18px monospace";
const BANNER_FONT: &str = "bold 36px monospace";

/// Scales world units onto a canvas of any size
pub struct Canvas2d {
    ctx: CanvasRenderingContext2d,
    scale: f64,
    /// Camera offset in world units (screen shake)
    offset: (f64, f64),
}

impl Canvas2d {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self {
            ctx,
            scale: 1.0,
            offset: (0.0, 0.0),
        }
    }

    pub fn set_offset(&mut self, dx: f32, dy: f32) {
        self.offset = (dx as f64, dy as f64);
    }

    fn px(&self, x: f32) -> f64 {
        (x as f64 + self.offset.0) * self.scale
    }

    fn py(&self, y: f32) -> f64 {
        (y as f64 + self.offset.1) * self.scale
    }

    /// Fit a world of `world_width` into `pixel_width` canvas pixels
    pub fn set_scale(&mut self, pixel_width: f64, world_width: f64) {
        self.scale = if world_width > 0.0 { pixel_width / world_width } else { 1.0 };
    }

    /// Sky gradient stand-in: one flat fill
    pub fn clear(&self, width: f64, height: f64) {
        self.ctx.set_global_alpha(1.0);
        self.ctx.set_fill_style_str("#87ceeb");
        self.ctx.fill_rect(0.0, 0.0, width, height);
    }

    fn css(color: Color) -> String {
        format!("#{:06x}", color.rgb)
    }

    fn text(&self, text: &str, x: f64, y: f64) {
        let _ = self.ctx.fill_text(text, x * self.scale, y * self.scale);
    }

    /// HUD overlay in world coordinates
    pub fn draw_hud(&self, hud: &HudSnapshot, world_width: f64) {
        self.ctx.set_global_alpha(1.0);
        self.ctx.set_fill_style_str("#000000");
        self.ctx.set_font(HUD_FONT);
        self.ctx.set_text_align("left");
        self.text(&format!("Wind: {}", hud.wind), 10.0, 25.0);
        self.text(&format!("Altitude: {}", hud.altitude), 10.0, 50.0);
        self.text(&format!("Status: {}", hud.status.as_str()), 10.0, 75.0);

        let Some(banner) = hud.banner else { return };
        let center = world_width / 2.0;
        self.ctx.set_text_align("center");
        self.ctx.set_font(BANNER_FONT);
        self.text(banner, center, 200.0);

        self.ctx.set_font(HUD_FONT);
        let mut y = 240.0;
        if let Some(score) = &hud.score {
            self.text(score, center, y);
            y += 30.0;
        }
        if !hud.high_scores.is_empty() {
            self.text("High Scores", center, y);
            for line in &hud.high_scores {
                y += 24.0;
                self.text(line, center, y);
            }
            y += 30.0;
        }
        self.text(RESTART_HINT, center, y);
    }
}

impl Canvas for Canvas2d {
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        let s = self.scale;
        self.ctx.set_global_alpha(color.alpha as f64);
        self.ctx.set_fill_style_str(&Self::css(color));
        self.ctx
            .fill_rect(self.px(x), self.py(y), width as f64 * s, height as f64 * s);
    }

    fn fill_ellipse(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        let s = self.scale;
        let (rx, ry) = (width as f64 / 2.0, height as f64 / 2.0);
        self.ctx.set_global_alpha(color.alpha as f64);
        self.ctx.set_fill_style_str(&Self::css(color));
        self.ctx.begin_path();
        if self
            .ctx
            .ellipse(
                self.px(x) + rx * s,
                self.py(y) + ry * s,
                rx * s,
                ry * s,
                0.0,
                0.0,
                TAU,
            )
            .is_ok()
        {
            self.ctx.fill();
        }
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, width: f32, color: Color) {
        let s = self.scale;
        self.ctx.set_global_alpha(color.alpha as f64);
        self.ctx.set_stroke_style_str(&Self::css(color));
        self.ctx.set_line_width(width as f64 * s);
        self.ctx.begin_path();
        self.ctx.move_to(self.px(x1), self.py(y1));
        self.ctx.line_to(self.px(x2), self.py(y2));
        self.ctx.stroke();
    }
}
