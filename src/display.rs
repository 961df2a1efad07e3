use std::collections::HashSet;

use crate::traits::{SessionView, UiBinding};

/// View that keeps the HUD in memory, for headless runs and tests.
///
/// Writes to a binding marked missing are dropped.
#[derive(Debug, Clone, Default)]
pub struct HeadlessView {
    score: String,
    highscore: String,
    level: String,
    lives: Vec<bool>,
    power: Vec<bool>,
    paused: bool,
    missing: HashSet<UiBinding>,
}

impl HeadlessView {
    /// Create a view with the given number of life and power indicators
    pub fn new(life_indicators: usize, power_indicators: usize) -> Self {
        Self {
            lives: vec![false; life_indicators],
            power: vec![false; power_indicators],
            ..Default::default()
        }
    }

    /// Leave a required sink unwired
    pub fn without(mut self, binding: UiBinding) -> Self {
        self.missing.insert(binding);
        self
    }

    pub fn score_text(&self) -> &str {
        &self.score
    }

    pub fn highscore_text(&self) -> &str {
        &self.highscore
    }

    pub fn level_text(&self) -> &str {
        &self.level
    }

    pub fn life_indicators(&self) -> &[bool] {
        &self.lives
    }

    pub fn power_indicators(&self) -> &[bool] {
        &self.power
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// One-line text rendering of the HUD
    pub fn hud_line(&self) -> String {
        let mut line = format!(
            "{} | {} | {} | lives {} | power {}",
            self.score,
            self.highscore,
            self.level,
            indicator_bar(&self.lives),
            indicator_bar(&self.power),
        );
        if self.paused {
            line.push_str(" | PAUSED");
        }
        line
    }
}

fn indicator_bar(indicators: &[bool]) -> String {
    indicators
        .iter()
        .map(|&on| if on { '#' } else { '.' })
        .collect()
}

impl SessionView for HeadlessView {
    fn set_score_text(&mut self, text: &str) {
        if !self.missing.contains(&UiBinding::Score) {
            self.score = text.to_string();
        }
    }

    fn set_highscore_text(&mut self, text: &str) {
        if !self.missing.contains(&UiBinding::Highscore) {
            self.highscore = text.to_string();
        }
    }

    fn set_level_text(&mut self, text: &str) {
        if !self.missing.contains(&UiBinding::Level) {
            self.level = text.to_string();
        }
    }

    fn set_life_indicator(&mut self, index: usize, visible: bool) {
        if let Some(slot) = self.lives.get_mut(index) {
            *slot = visible;
        }
    }

    fn set_power_indicator(&mut self, index: usize, visible: bool) {
        if let Some(slot) = self.power.get_mut(index) {
            *slot = visible;
        }
    }

    fn set_paused(&mut self, paused: bool) {
        if !self.missing.contains(&UiBinding::Paused) {
            self.paused = paused;
        }
    }

    fn life_indicator_count(&self) -> usize {
        self.lives.len()
    }

    fn power_indicator_count(&self) -> usize {
        self.power.len()
    }

    fn has_binding(&self, binding: UiBinding) -> bool {
        !self.missing.contains(&binding)
    }
}
