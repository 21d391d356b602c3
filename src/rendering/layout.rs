/// Screen geometry for pointy-top hexagons in the odd-r layout:
/// odd rows are pushed half a hexagon to the right.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HexLayout {
    pub origin_x: f32,
    pub origin_y: f32,
    /// Distance from a hexagon's center to any corner
    pub size: f32,
}

const SQRT_3: f32 = 1.732_050_8;

impl HexLayout {
    pub fn new(origin_x: f32, origin_y: f32, size: f32) -> Self {
        Self { origin_x, origin_y, size }
    }

    /// Largest layout that fits a `width` x `height` grid inside the area
    pub fn fit(width: usize, height: usize, area_width: f32, area_height: f32) -> Self {
        let by_width = area_width / (SQRT_3 * (width as f32 + 0.5));
        let by_height = area_height / (1.5 * height as f32 + 0.5);
        Self::new(0.0, 0.0, by_width.min(by_height).max(1.0))
    }

    /// Horizontal distance between neighboring centers in a row
    pub fn hex_width(&self) -> f32 {
        SQRT_3 * self.size
    }

    /// Vertical distance between row centers
    pub fn row_spacing(&self) -> f32 {
        1.5 * self.size
    }

    fn row_shift(&self, row: usize) -> f32 {
        if row % 2 == 1 { self.hex_width() / 2.0 } else { 0.0 }
    }

    /// Screen position of a cell's center
    pub fn center(&self, row: usize, col: usize) -> (f32, f32) {
        let x = self.origin_x + self.hex_width() * (col as f32 + 0.5) + self.row_shift(row);
        let y = self.origin_y + self.size + self.row_spacing() * row as f32;
        (x, y)
    }

    /// Cell under a screen point, if any. Picks the nearest center among the
    /// candidate rows/cols around the point and rejects points outside its hexagon radius.
    pub fn hit_test(&self, x: f32, y: f32, width: usize, height: usize) -> Option<(usize, usize)> {
        let approx_row = ((y - self.origin_y) / self.row_spacing()).floor() as i64;

        (approx_row - 1..=approx_row + 1)
            .filter(|&r| r >= 0 && (r as usize) < height)
            .flat_map(|r| {
                let row = r as usize;
                let offset_x = x - self.origin_x - self.row_shift(row);
                let approx_col = (offset_x / self.hex_width()).floor() as i64;
                (approx_col - 1..=approx_col + 1)
                    .filter(move |&c| c >= 0 && (c as usize) < width)
                    .map(move |c| (row, c as usize))
            })
            .map(|(row, col)| {
                let (cx, cy) = self.center(row, col);
                ((row, col), (cx - x).powi(2) + (cy - y).powi(2))
            })
            .filter(|&(_, dist_sq)| dist_sq <= self.size * self.size)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(pos, _)| pos)
    }
}
