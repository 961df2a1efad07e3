/// Output sinks the session writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiBinding {
    Score,
    Highscore,
    Level,
    Paused,
}

impl UiBinding {
    pub const REQUIRED: [UiBinding; 4] = [
        UiBinding::Score,
        UiBinding::Highscore,
        UiBinding::Level,
        UiBinding::Paused,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            UiBinding::Score => "score text",
            UiBinding::Highscore => "highscore text",
            UiBinding::Level => "level text",
            UiBinding::Paused => "pause overlay",
        }
    }
}

/// Session HUD abstraction - the session only ever writes to it
pub trait SessionView {
    fn set_score_text(&mut self, text: &str);

    fn set_highscore_text(&mut self, text: &str);

    fn set_level_text(&mut self, text: &str);

    /// Show or hide the extra-life indicator at `index`
    fn set_life_indicator(&mut self, index: usize, visible: bool);

    /// Show or hide the power indicator at `index`
    fn set_power_indicator(&mut self, index: usize, visible: bool);

    /// Show or hide the pause overlay
    fn set_paused(&mut self, paused: bool);

    fn life_indicator_count(&self) -> usize;

    fn power_indicator_count(&self) -> usize;

    /// Whether a required sink is wired up
    fn has_binding(&self, _binding: UiBinding) -> bool {
        true
    }
}
