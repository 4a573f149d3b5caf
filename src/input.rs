//! Input handling.
//!
//! Processes keyboard and mouse state; discriminates grapple clicks from
//! camera drags by how far the cursor travelled while held.

use crate::camera::Camera;
use crate::constants::CLICK_DRAG_THRESHOLD;
use std::collections::HashSet;
use winit::keyboard::KeyCode;

/// Input state tracking
pub struct InputState {
    pub keys_pressed: HashSet<KeyCode>,
    pub mouse_pos: (f32, f32),
    pub last_mouse_pos: (f32, f32),
    pub mouse_down: bool,
    /// Cursor position at the moment the button went down
    pub press_pos: Option<(f32, f32)>,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            keys_pressed: HashSet::new(),
            mouse_pos: (0.0, 0.0),
            last_mouse_pos: (0.0, 0.0),
            mouse_down: false,
            press_pos: None,
        }
    }

    /// Record a button press at the current cursor position
    pub fn register_press(&mut self) {
        self.mouse_down = true;
        self.press_pos = Some(self.mouse_pos);
    }

    /// Record the button release; returns true if the gesture was a click
    /// (cursor stayed within the drag threshold) rather than a drag.
    pub fn register_release(&mut self) -> bool {
        self.mouse_down = false;
        match self.press_pos.take() {
            Some((px, py)) => {
                let dx = self.mouse_pos.0 - px;
                let dy = self.mouse_pos.1 - py;
                dx.abs() <= CLICK_DRAG_THRESHOLD && dy.abs() <= CLICK_DRAG_THRESHOLD
            }
            None => false,
        }
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of processing input
#[derive(Default)]
pub struct InputResult {
    /// Toggle fullscreen
    pub toggle_fullscreen: bool,
    /// Toggle the tuning panel
    pub toggle_panel: bool,
    /// Reset the scene to its spawn state
    pub reset: bool,
}

/// Process keyboard input and return actions to take
pub fn process_keyboard(input: &mut InputState) -> InputResult {
    let mut result = InputResult::default();

    // Toggle fullscreen (only process once per key press)
    if input.keys_pressed.remove(&KeyCode::F11) {
        result.toggle_fullscreen = true;
    }

    // Toggle tuning panel
    if input.keys_pressed.remove(&KeyCode::Tab) {
        result.toggle_panel = true;
    }

    // Reset scene
    if input.keys_pressed.remove(&KeyCode::KeyR) {
        result.reset = true;
    }

    result
}

/// Process mouse drag for camera panning
pub fn process_mouse_drag(input: &mut InputState, camera: &mut Camera) {
    if input.mouse_down {
        let dx = input.mouse_pos.0 - input.last_mouse_pos.0;
        let dy = input.mouse_pos.1 - input.last_mouse_pos.1;
        if dx.abs() > 0.1 || dy.abs() > 0.1 {
            camera.pan(dx, dy);
        }
    }
    // Consume the mouse delta so it's not applied again next frame
    input.last_mouse_pos = input.mouse_pos;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyboard_actions_consumed_once() {
        let mut input = InputState::new();
        input.keys_pressed.insert(KeyCode::F11);
        input.keys_pressed.insert(KeyCode::KeyR);

        let first = process_keyboard(&mut input);
        assert!(first.toggle_fullscreen);
        assert!(first.reset);
        assert!(!first.toggle_panel);

        let second = process_keyboard(&mut input);
        assert!(!second.toggle_fullscreen);
        assert!(!second.reset);
    }

    #[test]
    fn test_steady_release_is_a_click() {
        let mut input = InputState::new();
        input.mouse_pos = (100.0, 100.0);
        input.register_press();
        input.mouse_pos = (101.0, 102.0);
        assert!(input.register_release());
        assert!(input.press_pos.is_none());
    }

    #[test]
    fn test_travelled_release_is_a_drag() {
        let mut input = InputState::new();
        input.mouse_pos = (100.0, 100.0);
        input.register_press();
        input.mouse_pos = (140.0, 100.0);
        assert!(!input.register_release());
    }

    #[test]
    fn test_drag_pans_camera() {
        let mut input = InputState::new();
        let mut camera = Camera::new(800.0, 600.0);

        input.mouse_pos = (10.0, 0.0);
        input.register_press();
        input.mouse_pos = (30.0, 0.0);
        input.last_mouse_pos = (10.0, 0.0);
        process_mouse_drag(&mut input, &mut camera);

        assert!(camera.position.x != 0.0);
        assert_eq!(input.last_mouse_pos, input.mouse_pos);
    }
}
