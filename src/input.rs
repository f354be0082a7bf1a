//! Pointer input.
//!
//! The animation only listens to the mouse: its position, and whether a
//! button is held. [`Input`] folds raw winit window events into that state,
//! and [`Input::pointer`] takes the once-per-tick snapshot the world reads.
//!
//! The pressed flag is a latch over every button: any button going down sets
//! it, any button going up clears it. There is no drag or double-click
//! handling and no keyboard interface.

use glam::Vec2;
use winit::event::{ElementState, WindowEvent};

/// Pointer state sampled once per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pointer {
    /// Cursor position in canvas pixels.
    pub position: Vec2,
    /// Whether a mouse button is held.
    pub pressed: bool,
}

/// Pointer state tracking.
#[derive(Debug)]
pub struct Input {
    position: Vec2,
    pressed: bool,
    // Physical pixels per canvas pixel
    scale_factor: f64,
}

impl Default for Input {
    fn default() -> Self {
        Self::new()
    }
}

impl Input {
    /// Create a new input tracker.
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            pressed: false,
            scale_factor: 1.0,
        }
    }

    /// Snapshot for this tick.
    pub fn pointer(&self) -> Pointer {
        Pointer {
            position: self.position,
            pressed: self.pressed,
        }
    }

    /// Set the window's scale factor so cursor positions map to canvas pixels.
    pub(crate) fn set_scale_factor(&mut self, scale_factor: f64) {
        if scale_factor > 0.0 {
            self.scale_factor = scale_factor;
        }
    }

    pub(crate) fn press(&mut self) {
        self.pressed = true;
    }

    pub(crate) fn release(&mut self) {
        self.pressed = false;
    }

    pub(crate) fn move_to(&mut self, physical_x: f64, physical_y: f64) {
        self.position = Vec2::new(
            (physical_x / self.scale_factor) as f32,
            (physical_y / self.scale_factor) as f32,
        );
    }

    /// Process a winit window event.
    pub(crate) fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            // Any button counts
            WindowEvent::MouseInput { state, .. } => match state {
                ElementState::Pressed => self.press(),
                ElementState::Released => self.release(),
            },

            WindowEvent::CursorMoved { position, .. } => {
                self.move_to(position.x, position.y);
            }

            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.set_scale_factor(*scale_factor);
            }

            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_latches_until_release() {
        let mut input = Input::new();
        assert!(!input.pointer().pressed);

        input.press();
        assert!(input.pointer().pressed);
        // Still held on later ticks with no new events
        assert!(input.pointer().pressed);

        input.release();
        assert!(!input.pointer().pressed);
    }

    #[test]
    fn test_position_scaled_to_canvas() {
        let mut input = Input::new();
        input.move_to(400.0, 300.0);
        assert_eq!(input.pointer().position, Vec2::new(400.0, 300.0));

        input.set_scale_factor(2.0);
        input.move_to(800.0, 600.0);
        assert_eq!(input.pointer().position, Vec2::new(400.0, 300.0));

        // Nonsense scale factors are ignored
        input.set_scale_factor(0.0);
        input.move_to(10.0, 10.0);
        assert_eq!(input.pointer().position, Vec2::new(5.0, 5.0));
    }
}
