/// Level loading facility
pub trait LevelLoader {
    /// Identifier of the level currently running
    fn current_level(&self) -> String;

    /// Switch to another level
    fn load_level(&mut self, level: &str);
}
