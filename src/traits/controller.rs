/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Pause,
}

/// Controller - reports which buttons are held this frame
pub trait Controller {
    /// Get all currently pressed buttons
    fn get_down_keys(&self) -> &[Button];
}
