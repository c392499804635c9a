pub mod input;
pub mod projection;
pub mod render;

use log::debug;
use nalgebra::{Point2, Vector2};
use serde_derive::{Deserialize, Serialize};

use crate::catalog::StarCatalog;
use crate::search::SearchResult;
pub use input::{DragState, InputEvent};
pub use render::{render_frame, DrawCommand, Rgba};

/// a position on the canvas in pixels, y grows downwards
pub type ScreenPoint = Point2<f64>;

pub const MIN_ZOOM: f64 = 0.5;
pub const MAX_ZOOM: f64 = 5.0;
/// zoom applied when jumping to a plotted object
pub const PLOT_ZOOM: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    pub fn new(width: f64, height: f64) -> Self {
        CanvasSize { width, height }
    }

    pub fn center(&self) -> ScreenPoint {
        ScreenPoint::new(self.width / 2.0, self.height / 2.0)
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        CanvasSize::new(800.0, 600.0)
    }
}

/// zoom, pan and display toggles. Changed only by input or an explicit reset
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewportState {
    /// always within [MIN_ZOOM, MAX_ZOOM]
    pub zoom: f64,
    /// pixel offset of the sky relative to the canvas center, unbounded
    pub pan: Vector2<f64>,
    pub show_constellations: bool,
}

impl Default for ViewportState {
    fn default() -> Self {
        ViewportState {
            zoom: 1.0,
            pan: Vector2::zeros(),
            show_constellations: true,
        }
    }
}

/// an externally supplied object, e.g. a search result, drawn on top of the sky
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlottedObject {
    pub name: String,
    pub ra_hours: f64,
    pub dec_degrees: f64,
    pub kind: String,
}

/// the interactive star map: owns the catalog, the viewport and the plotted objects.
/// Owned by the hosting UI, which feeds it input events and asks it for frames
#[derive(Debug)]
pub struct SkyView {
    catalog: StarCatalog,
    viewport: ViewportState,
    plotted: Vec<PlottedObject>,
    canvas: CanvasSize,
    drag: DragState,
}

impl SkyView {
    pub fn new(catalog: StarCatalog, canvas: CanvasSize) -> SkyView {
        SkyView {
            catalog,
            viewport: ViewportState::default(),
            plotted: vec![],
            canvas,
            drag: DragState::Idle,
        }
    }

    pub fn catalog(&self) -> &StarCatalog {
        &self.catalog
    }

    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    pub fn plotted_objects(&self) -> &[PlottedObject] {
        &self.plotted
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// screen position of a sky coordinate under the current viewport and canvas
    pub fn project(&self, ra_hours: f64, dec_degrees: f64) -> ScreenPoint {
        projection::project(&self.viewport, self.canvas, ra_hours, dec_degrees)
    }

    pub fn is_visible(&self, point: &ScreenPoint) -> bool {
        projection::is_visible(point, self.canvas.width, self.canvas.height)
    }

    /// clamps to [MIN_ZOOM, MAX_ZOOM], NaN leaves the zoom unchanged
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom.is_nan() {
            return;
        }
        self.viewport.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn zoom_by(&mut self, multiplier: f64) {
        self.set_zoom(self.viewport.zoom * multiplier);
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.viewport.pan += Vector2::new(dx, dy);
    }

    pub fn reset_view(&mut self) {
        self.viewport.zoom = 1.0;
        self.viewport.pan = Vector2::zeros();
        debug!("view reset");
    }

    pub fn toggle_constellations(&mut self) {
        self.viewport.show_constellations = !self.viewport.show_constellations;
        debug!(
            "constellation lines {}",
            if self.viewport.show_constellations {
                "shown"
            } else {
                "hidden"
            }
        );
    }

    pub fn set_constellations_visible(&mut self, visible: bool) {
        self.viewport.show_constellations = visible;
    }

    /// adds the object, replacing any earlier one with the same name, and jumps to it:
    /// zoom becomes `PLOT_ZOOM` and the pan is chosen so the object sits at the canvas center
    pub fn plot_object(
        &mut self,
        name: impl Into<String>,
        ra_hours: f64,
        dec_degrees: f64,
        kind: impl Into<String>,
    ) {
        let name = name.into();
        self.plotted.retain(|p| p.name != name);
        debug!("plotting {} at ra {:.3}h dec {:.3}deg", name, ra_hours, dec_degrees);
        self.plotted.push(PlottedObject {
            name,
            ra_hours,
            dec_degrees,
            kind: kind.into(),
        });

        self.viewport.zoom = PLOT_ZOOM;
        let target = self.project(ra_hours, dec_degrees);
        self.viewport.pan += self.canvas.center() - target;
    }

    pub fn clear_plotted_objects(&mut self) {
        self.plotted.clear();
    }

    /// replaces the plotted objects with every result that has coordinates, in order, so the
    /// view ends up centered on the last one. Returns how many were plotted
    pub fn plot_search_results(&mut self, results: &[SearchResult]) -> usize {
        self.clear_plotted_objects();
        let mut plotted = 0;
        for result in results {
            match &result.coordinates {
                Some(c) => {
                    self.plot_object(
                        result.name.as_str(),
                        c.ra_hours,
                        c.dec_degrees,
                        result.kind.as_str(),
                    );
                    plotted += 1;
                }
                None => debug!("{} has no coordinates, not plotted", result.name),
            }
        }
        plotted
    }

    /// draw commands for the current state
    pub fn frame(&self) -> Vec<DrawCommand> {
        let commands = render_frame(
            &self.catalog.stars,
            &self.catalog.constellations,
            &self.plotted,
            &self.viewport,
            self.canvas,
        );
        log::trace!(
            "rendered {} draw commands at zoom {:.2}",
            commands.len(),
            self.viewport.zoom
        );
        commands
    }
}
