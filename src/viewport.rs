//! Centered crop/zoom window geometry for a displayed plane.
//!
//! Pure geometry: no pixel data is touched here. The renderer applies the
//! returned window when drawing the plane and its overlay markers.

/// Axis-aligned display window in plane index coordinates.
///
/// The Y limits follow the top-down image convention: `y_top >= y_bottom`,
/// with increasing row index moving downward on screen, so a renderer sets
/// its vertical range as `(y_top, y_bottom)` in that order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewBounds {
    pub x_min: f32,
    pub x_max: f32,
    pub y_top: f32,
    pub y_bottom: f32,
}

impl ViewBounds {
    pub fn width(&self) -> f32 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f32 {
        self.y_top - self.y_bottom
    }
}

/// Magnification factor for a 0..=100 zoom slider position.
///
/// 0 maps to 0.5 (widest view), 50 to 1.25, 100 to 2.0 (most magnified).
pub fn zoom_factor(zoom: u8) -> f32 {
    0.5 + (f32::from(zoom.min(100)) / 100.0) * 1.5
}

/// Compute the display window for a plane of `rows` x `cols`, centered on the
/// plane's midpoint and shrunk by the zoom factor.
pub fn compute_bounds(rows: usize, cols: usize, zoom: u8) -> ViewBounds {
    let center_x = cols as f32 / 2.0;
    let center_y = rows as f32 / 2.0;
    let factor = zoom_factor(zoom);
    let half_width = cols as f32 / factor / 2.0;
    let half_height = rows as f32 / factor / 2.0;
    ViewBounds {
        x_min: center_x - half_width,
        x_max: center_x + half_width,
        y_top: center_y + half_height,
        y_bottom: center_y - half_height,
    }
}
