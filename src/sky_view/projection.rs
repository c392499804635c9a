use std::f64::consts::PI;

use super::{CanvasSize, ScreenPoint, ViewportState};

/// how far outside the canvas, in pixels, a point still counts as visible
pub const VISIBILITY_MARGIN: f64 = 50.0;
/// fraction of the canvas width covered by one unit of projected radius at zoom 1
const SKY_SCALE: f64 = 0.4;

/// maps right ascension (hours) and declination (degrees) to canvas pixels.
/// RA 12h sits on the vertical center line, the horizontal offset grows with sin(ra) and
/// shrinks towards the poles with cos(dec). Any finite input is accepted, points may land
/// outside the canvas
pub fn project(
    viewport: &ViewportState,
    canvas: CanvasSize,
    ra_hours: f64,
    dec_degrees: f64,
) -> ScreenPoint {
    let ra_rad = (ra_hours * 15.0 - 180.0) * PI / 180.0;
    let cos_dec = dec_degrees.to_radians().cos();
    let scale = cos_dec * canvas.width * viewport.zoom * SKY_SCALE;
    let center = canvas.center();

    ScreenPoint::new(
        center.x + viewport.pan.x + ra_rad.sin() * scale,
        center.y + viewport.pan.y - ra_rad.cos() * scale,
    )
}

/// true if the point lies within `VISIBILITY_MARGIN` of the canvas on every side
pub fn is_visible(point: &ScreenPoint, canvas_width: f64, canvas_height: f64) -> bool {
    point.x >= -VISIBILITY_MARGIN
        && point.x <= canvas_width + VISIBILITY_MARGIN
        && point.y >= -VISIBILITY_MARGIN
        && point.y <= canvas_height + VISIBILITY_MARGIN
}
