//! Character-grid canvas for terminals and logs

use super::{Canvas, Color, colors};

/// Rasterizes world coordinates onto a fixed grid of characters
#[derive(Debug, Clone)]
pub struct TextCanvas {
    cols: usize,
    rows: usize,
    scale_x: f32,
    scale_y: f32,
    cells: Vec<char>,
}

impl TextCanvas {
    /// Grid of `cols` x `rows` covering a world of the given size
    pub fn new(cols: usize, rows: usize, world_width: f32, world_height: f32) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            cols,
            rows,
            scale_x: cols as f32 / world_width,
            scale_y: rows as f32 / world_height,
            cells: vec![' '; cols * rows],
        }
    }

    fn glyph(color: Color) -> char {
        match color.rgb {
            rgb if rgb == colors::PLAYER_BLUE.rgb => '@',
            rgb if rgb == colors::RED.rgb => 'X',
            rgb if rgb == colors::PARACHUTE_RED.rgb => '^',
            rgb if rgb == colors::OBSTACLE_GREEN.rgb => '#',
            rgb if rgb == colors::WARNING_YELLOW.rgb => '=',
            rgb if rgb == colors::GROUND_BROWN.rgb => '_',
            rgb if rgb == colors::SAFE_ZONE.rgb => 'S',
            rgb if rgb == colors::CLOUD_WHITE.rgb => '~',
            rgb if rgb == colors::PLANE_SILVER.rgb => '%',
            _ => '.',
        }
    }

    fn plot(&mut self, col: i64, row: i64, ch: char) {
        if col < 0 || row < 0 || col >= self.cols as i64 || row >= self.rows as i64 {
            return;
        }
        self.cells[row as usize * self.cols + col as usize] = ch;
    }

    /// Cell span covered by a world-space box, at least one cell
    fn span(&self, x: f32, y: f32, width: f32, height: f32) -> (i64, i64, i64, i64) {
        let c0 = (x * self.scale_x).floor() as i64;
        let r0 = (y * self.scale_y).floor() as i64;
        let c1 = ((x + width) * self.scale_x).ceil().max(c0 as f32 + 1.0) as i64;
        let r1 = ((y + height) * self.scale_y).ceil().max(r0 as f32 + 1.0) as i64;
        (c0, r0, c1, r1)
    }

    pub fn char_at(&self, col: usize, row: usize) -> Option<char> {
        (col < self.cols && row < self.rows).then(|| self.cells[row * self.cols + col])
    }

    /// Rows joined with newlines, trailing spaces trimmed
    pub fn render(&self) -> String {
        self.cells
            .chunks(self.cols)
            .map(|row| row.iter().collect::<String>().trim_end().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Canvas for TextCanvas {
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        let ch = Self::glyph(color);
        let (c0, r0, c1, r1) = self.span(x, y, width, height);
        for row in r0..r1 {
            for col in c0..c1 {
                self.plot(col, row, ch);
            }
        }
    }

    fn fill_ellipse(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        let ch = Self::glyph(color);
        let (c0, r0, c1, r1) = self.span(x, y, width, height);
        let (cx, cy) = ((c0 + c1) as f32 / 2.0, (r0 + r1) as f32 / 2.0);
        let (rx, ry) = (((c1 - c0) as f32 / 2.0).max(0.5), ((r1 - r0) as f32 / 2.0).max(0.5));
        for row in r0..r1 {
            for col in c0..c1 {
                let dx = (col as f32 + 0.5 - cx) / rx;
                let dy = (row as f32 + 0.5 - cy) / ry;
                if dx * dx + dy * dy <= 1.0 {
                    self.plot(col, row, ch);
                }
            }
        }
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, _width: f32, color: Color) {
        let ch = Self::glyph(color);
        let (ax, ay) = (x1 * self.scale_x, y1 * self.scale_y);
        let (bx, by) = (x2 * self.scale_x, y2 * self.scale_y);
        let steps = (bx - ax).abs().max((by - ay).abs()).ceil().max(1.0) as usize;
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            let col = (ax + (bx - ax) * t).floor() as i64;
            let row = (ay + (by - ay) * t).floor() as i64;
            self.plot(col, row, ch);
        }
    }
}
