//! The render pass: a pure mapping from catalog, plotted objects and viewport to an ordered
//! list of 2D drawing operations. A platform backend executes the list, nothing here draws.

use std::sync::Arc;

use serde_derive::Serialize;

use super::projection::{is_visible, project};
use super::{CanvasSize, PlottedObject, ScreenPoint, ViewportState};
use crate::catalog::{CelestialPoint, ConstellationEdge};

/// stars brighter than this get a name label
pub const LABEL_MAGNITUDE_LIMIT: f64 = 1.5;
const MARKER_RADIUS: f64 = 8.0;
const CROSSHAIR_HALF_LENGTH: f64 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// opacity, 1 is fully opaque
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Rgba { r, g, b, a }
    }

    pub const fn with_alpha(self, a: f64) -> Self {
        Rgba { a, ..self }
    }
}

const BACKGROUND: Rgba = Rgba::new(0, 4, 16, 1.0);
const CONSTELLATION_LINE: Rgba = Rgba::new(100, 149, 237, 0.3);
const STAR_WHITE: Rgba = Rgba::new(255, 255, 245, 1.0);
const STAR_BLUE: Rgba = Rgba::new(200, 220, 255, 1.0);
const STAR_LABEL: Rgba = Rgba::new(255, 255, 255, 0.8);

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    FillRect {
        origin: ScreenPoint,
        width: f64,
        height: f64,
        color: Rgba,
    },
    Line {
        from: ScreenPoint,
        to: ScreenPoint,
        width: f64,
        color: Rgba,
    },
    FillCircle {
        center: ScreenPoint,
        radius: f64,
        color: Rgba,
    },
    StrokeCircle {
        center: ScreenPoint,
        radius: f64,
        width: f64,
        color: Rgba,
    },
    Text {
        position: ScreenPoint,
        text: String,
        size: f64,
        color: Rgba,
    },
}

pub fn star_radius(magnitude: f64) -> f64 {
    ((6.0 - magnitude) * 0.8).max(0.5)
}

pub fn star_opacity(magnitude: f64) -> f64 {
    (1.0 - magnitude / 5.0).max(0.3)
}

fn star_color(star: &CelestialPoint) -> Rgba {
    // the very brightest stars get a slightly blue tint
    let base = if star.magnitude < 0.5 {
        STAR_BLUE
    } else {
        STAR_WHITE
    };
    base.with_alpha(star_opacity(star.magnitude))
}

/// marker color for a plotted object, by its kind
pub fn kind_color(kind: &str) -> Rgba {
    match kind.to_ascii_lowercase().as_str() {
        "star" => Rgba::new(255, 215, 0, 1.0),
        "planet" => Rgba::new(255, 140, 0, 1.0),
        "galaxy" => Rgba::new(186, 85, 211, 1.0),
        "nebula" => Rgba::new(255, 105, 180, 1.0),
        "moon" | "satellite" => Rgba::new(192, 192, 192, 1.0),
        _ => Rgba::new(255, 80, 80, 1.0),
    }
}

/// builds one frame. Order: background, constellation lines (when enabled, a line is kept if
/// either end is visible), visible stars, labels of bright named stars, plotted objects
pub fn render_frame(
    stars: &[Arc<CelestialPoint>],
    constellations: &[ConstellationEdge],
    plotted: &[PlottedObject],
    viewport: &ViewportState,
    canvas: CanvasSize,
) -> Vec<DrawCommand> {
    let (width, height) = (canvas.width, canvas.height);
    let to_screen = |ra: f64, dec: f64| project(viewport, canvas, ra, dec);

    let mut commands = vec![DrawCommand::FillRect {
        origin: ScreenPoint::origin(),
        width,
        height,
        color: BACKGROUND,
    }];

    if viewport.show_constellations {
        for edge in constellations {
            let from = to_screen(edge.a.ra_hours, edge.a.dec_degrees);
            let to = to_screen(edge.b.ra_hours, edge.b.dec_degrees);
            if is_visible(&from, width, height) || is_visible(&to, width, height) {
                commands.push(DrawCommand::Line {
                    from,
                    to,
                    width: 1.0,
                    color: CONSTELLATION_LINE,
                });
            }
        }
    }

    let mut labels = vec![];
    for star in stars {
        let center = to_screen(star.ra_hours, star.dec_degrees);
        if !is_visible(&center, width, height) {
            continue;
        }
        commands.push(DrawCommand::FillCircle {
            center,
            radius: star_radius(star.magnitude),
            color: star_color(star),
        });
        if star.magnitude < LABEL_MAGNITUDE_LIMIT && !star.is_synthetic() {
            labels.push(DrawCommand::Text {
                position: ScreenPoint::new(center.x + 8.0, center.y - 8.0),
                text: star.name.clone(),
                size: 11.0,
                color: STAR_LABEL,
            });
        }
    }
    commands.extend(labels);

    for object in plotted {
        let center = to_screen(object.ra_hours, object.dec_degrees);
        let color = kind_color(&object.kind);
        commands.push(DrawCommand::StrokeCircle {
            center,
            radius: MARKER_RADIUS,
            width: 2.0,
            color,
        });
        commands.push(DrawCommand::Line {
            from: ScreenPoint::new(center.x - CROSSHAIR_HALF_LENGTH, center.y),
            to: ScreenPoint::new(center.x + CROSSHAIR_HALF_LENGTH, center.y),
            width: 1.0,
            color,
        });
        commands.push(DrawCommand::Line {
            from: ScreenPoint::new(center.x, center.y - CROSSHAIR_HALF_LENGTH),
            to: ScreenPoint::new(center.x, center.y + CROSSHAIR_HALF_LENGTH),
            width: 1.0,
            color,
        });
        commands.push(DrawCommand::Text {
            position: ScreenPoint::new(center.x + 12.0, center.y - 12.0),
            text: object.name.clone(),
            size: 13.0,
            color,
        });
    }

    commands
}
