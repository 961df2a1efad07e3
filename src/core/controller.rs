use std::collections::HashSet;

use crate::traits::{Button, Controller};

/// Tracks button state between frames so a held key only counts once
#[derive(Debug, Clone, Default)]
pub struct ButtonEdges {
    previous: HashSet<Button>,
    pressed: HashSet<Button>,
}

impl ButtonEdges {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sample the controller for this frame
    pub fn update(&mut self, controller: &dyn Controller) {
        let current: HashSet<Button> = controller.get_down_keys().iter().copied().collect();
        self.pressed = current.difference(&self.previous).copied().collect();
        self.previous = current;
    }

    /// True only on the frame the button went down
    pub fn just_pressed(&self, button: Button) -> bool {
        self.pressed.contains(&button)
    }
}

/// Controller with a fixed set of pressed buttons, for scripted and headless runs
#[derive(Debug, Clone, Default)]
pub struct ScriptedController {
    pressed: Vec<Button>,
}

impl ScriptedController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, button: Button) {
        if !self.pressed.contains(&button) {
            self.pressed.push(button);
        }
    }

    pub fn release(&mut self, button: Button) {
        self.pressed.retain(|&b| b != button);
    }
}

impl Controller for ScriptedController {
    fn get_down_keys(&self) -> &[Button] {
        &self.pressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockController {
        pressed: Vec<Button>,
    }

    impl Controller for MockController {
        fn get_down_keys(&self) -> &[Button] {
            &self.pressed
        }
    }

    #[test]
    fn test_press_is_reported_once() {
        let mut edges = ButtonEdges::new();
        let held = MockController {
            pressed: vec![Button::Pause],
        };

        edges.update(&held);
        assert!(edges.just_pressed(Button::Pause));

        edges.update(&held);
        assert!(!edges.just_pressed(Button::Pause));
    }

    #[test]
    fn test_release_and_press_again() {
        let mut edges = ButtonEdges::new();
        let down = MockController {
            pressed: vec![Button::Pause],
        };
        let up = MockController { pressed: vec![] };

        edges.update(&down);
        edges.update(&up);
        assert!(!edges.just_pressed(Button::Pause));

        edges.update(&down);
        assert!(edges.just_pressed(Button::Pause));
    }

    #[test]
    fn test_scripted_controller() {
        let mut controller = ScriptedController::new();
        controller.press(Button::Pause);
        controller.press(Button::Pause);
        assert_eq!(controller.get_down_keys(), &[Button::Pause]);

        controller.release(Button::Pause);
        assert!(controller.get_down_keys().is_empty());
    }
}
