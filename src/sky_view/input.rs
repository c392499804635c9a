use serde_derive::{Deserialize, Serialize};

use super::{CanvasSize, ScreenPoint, SkyView};

/// zoom multiplier for one wheel tick towards the user
pub const WHEEL_ZOOM_OUT: f64 = 0.9;
/// zoom multiplier for one wheel tick away from the user
pub const WHEEL_ZOOM_IN: f64 = 1.1;

/// platform independent input, translated by whatever adapter hosts the view
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    PointerDown { x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    PointerUp,
    PointerLeave,
    /// positive `delta_y` means the wheel was scrolled down
    Wheel { delta_y: f64 },
    Resize { width: f64, height: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        last: ScreenPoint,
    },
}

impl SkyView {
    /// applies one input event, returns true when the view has to be rendered again
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::PointerDown { x, y } => self.on_pointer_down(x, y),
            InputEvent::PointerMove { x, y } => self.on_pointer_move(x, y),
            InputEvent::PointerUp => self.on_pointer_up(),
            InputEvent::PointerLeave => self.on_pointer_leave(),
            InputEvent::Wheel { delta_y } => self.on_wheel(delta_y),
            InputEvent::Resize { width, height } => self.on_resize(width, height),
        }
    }

    pub fn on_pointer_down(&mut self, x: f64, y: f64) -> bool {
        self.drag = DragState::Dragging {
            last: ScreenPoint::new(x, y),
        };
        false
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) -> bool {
        match self.drag {
            DragState::Idle => false,
            DragState::Dragging { last } => {
                self.pan_by(x - last.x, y - last.y);
                self.drag = DragState::Dragging {
                    last: ScreenPoint::new(x, y),
                };
                true
            }
        }
    }

    pub fn on_pointer_up(&mut self) -> bool {
        self.drag = DragState::Idle;
        false
    }

    pub fn on_pointer_leave(&mut self) -> bool {
        self.drag = DragState::Idle;
        false
    }

    pub fn on_wheel(&mut self, delta_y: f64) -> bool {
        self.zoom_by(if delta_y > 0.0 {
            WHEEL_ZOOM_OUT
        } else {
            WHEEL_ZOOM_IN
        });
        true
    }

    pub fn on_resize(&mut self, width: f64, height: f64) -> bool {
        self.canvas = CanvasSize::new(width, height);
        true
    }
}
