use std::collections::HashSet;
use std::hash::Hash;

use glam::Vec2;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Held / pressed / released bookkeeping for one kind of button.
#[derive(Debug)]
struct Buttons<T> {
    down: HashSet<T>,
    pressed: HashSet<T>,
    released: HashSet<T>,
}

impl<T> Default for Buttons<T> {
    fn default() -> Self {
        Self {
            down: HashSet::new(),
            pressed: HashSet::new(),
            released: HashSet::new(),
        }
    }
}

impl<T: Copy + Eq + Hash> Buttons<T> {
    fn update(&mut self, button: T, state: ElementState) {
        match state {
            ElementState::Pressed => {
                // OS key repeat sends Pressed again while held; only the first counts.
                if self.down.insert(button) {
                    self.pressed.insert(button);
                }
            }
            ElementState::Released => {
                self.down.remove(&button);
                self.released.insert(button);
            }
        }
    }

    fn clear_edges(&mut self) {
        self.pressed.clear();
        self.released.clear();
    }
}

/// Keyboard and mouse state, fed from winit window events.
///
/// "Pressed" and "released" are edges that last for one frame; call
/// [`Input::begin_frame`] once the frame has consumed them.
#[derive(Debug, Default)]
pub struct Input {
    keys: Buttons<KeyCode>,
    mouse: Buttons<MouseButton>,
    cursor: Option<Vec2>,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the per-frame edges.
    pub fn begin_frame(&mut self) {
        self.keys.clear_edges();
        self.mouse.clear_edges();
    }

    /// Process a window event and update input state.
    pub fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    self.keys.update(key, event.state);
                }
            }
            WindowEvent::MouseInput { state, button, .. } => self.mouse.update(*button, *state),
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Some(Vec2::new(position.x as f32, position.y as f32));
            }
            WindowEvent::CursorLeft { .. } => self.cursor = None,
            WindowEvent::Focused(false) => {
                // Releases happening while unfocused are never delivered.
                self.keys.down.clear();
                self.mouse.down.clear();
            }
            _ => {}
        }
    }

    pub fn key_down(&self, key: KeyCode) -> bool {
        self.keys.down.contains(&key)
    }

    /// Returns true if the key was pressed this frame.
    pub fn key_pressed(&self, key: KeyCode) -> bool {
        self.keys.pressed.contains(&key)
    }

    pub fn key_released(&self, key: KeyCode) -> bool {
        self.keys.released.contains(&key)
    }

    pub fn mouse_down(&self, button: MouseButton) -> bool {
        self.mouse.down.contains(&button)
    }

    /// Returns true if the mouse button was pressed this frame.
    pub fn mouse_pressed(&self, button: MouseButton) -> bool {
        self.mouse.pressed.contains(&button)
    }

    pub fn mouse_released(&self, button: MouseButton) -> bool {
        self.mouse.released.contains(&button)
    }

    /// Cursor position in physical window pixels, or `None` when the cursor is outside.
    pub fn cursor_position(&self) -> Option<Vec2> {
        self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_is_an_edge_but_down_persists() {
        let mut buttons = Buttons::default();
        buttons.update(MouseButton::Left, ElementState::Pressed);
        assert!(buttons.pressed.contains(&MouseButton::Left));
        assert!(buttons.down.contains(&MouseButton::Left));

        buttons.clear_edges();
        assert!(!buttons.pressed.contains(&MouseButton::Left));
        assert!(buttons.down.contains(&MouseButton::Left));
    }

    #[test]
    fn repeated_press_while_held_is_ignored() {
        let mut buttons = Buttons::default();
        buttons.update(KeyCode::Space, ElementState::Pressed);
        buttons.clear_edges();
        buttons.update(KeyCode::Space, ElementState::Pressed);
        assert!(!buttons.pressed.contains(&KeyCode::Space));

        buttons.update(KeyCode::Space, ElementState::Released);
        assert!(buttons.released.contains(&KeyCode::Space));
        assert!(!buttons.down.contains(&KeyCode::Space));
    }

    #[test]
    fn losing_focus_releases_held_buttons() {
        let mut input = Input::new();
        input.keys.update(KeyCode::Space, ElementState::Pressed);
        input.mouse.update(MouseButton::Left, ElementState::Pressed);
        input.begin_frame();

        input.handle_event(&WindowEvent::Focused(false));
        assert!(!input.key_down(KeyCode::Space));
        assert!(!input.mouse_down(MouseButton::Left));

        // The next press after refocusing registers as a fresh edge.
        input.handle_event(&WindowEvent::Focused(true));
        input.mouse.update(MouseButton::Left, ElementState::Pressed);
        assert!(input.mouse_pressed(MouseButton::Left));
    }

    #[test]
    fn fresh_input_has_no_cursor() {
        let input = Input::new();
        assert_eq!(input.cursor_position(), None);
        assert!(!input.mouse_down(MouseButton::Left));
        assert!(!input.key_pressed(KeyCode::Space));
    }
}
