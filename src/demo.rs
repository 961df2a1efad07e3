//! Demo module provides a small in-memory scene for headless sessions
//!
//! # Examples
//!
//! ```
//! use sparty_session::demo::*;
//! use glam::Vec3;
//!
//! let world = DemoBuilder::new("level1")
//!     .player_at(Vec3::new(0.0, 1.0, 0.0))
//!     .add_enemies(3, true)
//!     .add_enemies(1, false)
//!     .build();
//!
//! assert_eq!(world.enemy_count(), 4);
//! ```

use glam::Vec3;

use crate::traits::{ActorRegistry, EnemyActor, LevelLoader, PlayerActor, Stunnable};

// ============================================================================
// Actors
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct DemoPlayer {
    pub position: Vec3,
    pub respawns: u32,
}

impl DemoPlayer {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            respawns: 0,
        }
    }
}

impl PlayerActor for DemoPlayer {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn respawn(&mut self, at: Vec3) {
        self.position = at;
        self.respawns += 1;
        log::debug!("Player respawned at {:?}", at);
    }
}

/// Enemy with an optional stun capability
#[derive(Debug, Clone, PartialEq)]
pub struct DemoEnemy {
    pub stunnable: bool,
    pub times_stunned: u32,
}

impl DemoEnemy {
    pub fn new(stunnable: bool) -> Self {
        Self {
            stunnable,
            times_stunned: 0,
        }
    }
}

impl Stunnable for DemoEnemy {
    fn stunned(&mut self) {
        self.times_stunned += 1;
    }
}

impl EnemyActor for DemoEnemy {
    fn as_stunnable(&mut self) -> Option<&mut dyn Stunnable> {
        if self.stunnable {
            Some(self as &mut dyn Stunnable)
        } else {
            None
        }
    }
}

// ============================================================================
// World
// ============================================================================

/// Scene with at most one player, some enemies and a level loader that
/// just records what was asked of it
#[derive(Debug, Clone)]
pub struct DemoWorld {
    level: String,
    player: Option<DemoPlayer>,
    enemies: Vec<DemoEnemy>,
    loaded: Vec<String>,
}

impl DemoWorld {
    pub fn player_state(&self) -> Option<&DemoPlayer> {
        self.player.as_ref()
    }

    pub fn enemy_states(&self) -> &[DemoEnemy] {
        &self.enemies
    }

    pub fn enemy_count(&self) -> usize {
        self.enemies.len()
    }

    /// Every level load requested so far, oldest first
    pub fn loaded_levels(&self) -> &[String] {
        &self.loaded
    }

    /// Reset actors for a freshly entered level, the player goes back to `spawn`
    pub fn enter_level(&mut self, spawn: Vec3) {
        if let Some(player) = self.player.as_mut() {
            player.position = spawn;
        }
        for enemy in &mut self.enemies {
            enemy.times_stunned = 0;
        }
    }
}

impl ActorRegistry for DemoWorld {
    fn player(&mut self) -> Option<&mut dyn PlayerActor> {
        self.player.as_mut().map(|p| p as &mut dyn PlayerActor)
    }

    fn enemies(&mut self) -> Vec<&mut dyn EnemyActor> {
        self.enemies
            .iter_mut()
            .map(|e| e as &mut dyn EnemyActor)
            .collect()
    }
}

impl LevelLoader for DemoWorld {
    fn current_level(&self) -> String {
        self.level.clone()
    }

    fn load_level(&mut self, level: &str) {
        log::info!("Loading level {}", level);
        self.level = level.to_string();
        self.loaded.push(level.to_string());
    }
}

// ============================================================================
// Builder
// ============================================================================

pub struct DemoBuilder {
    level: String,
    player: Option<DemoPlayer>,
    enemies: Vec<DemoEnemy>,
}

impl DemoBuilder {
    pub fn new(level: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            player: None,
            enemies: Vec::new(),
        }
    }

    pub fn player_at(mut self, position: Vec3) -> Self {
        self.player = Some(DemoPlayer::new(position));
        self
    }

    pub fn add_enemies(mut self, count: usize, stunnable: bool) -> Self {
        self.enemies
            .extend(std::iter::repeat_with(|| DemoEnemy::new(stunnable)).take(count));
        self
    }

    pub fn build(self) -> DemoWorld {
        DemoWorld {
            level: self.level,
            player: self.player,
            enemies: self.enemies,
            loaded: Vec::new(),
        }
    }
}

/// Default scene used by the binary
pub fn default_world(level: &str) -> DemoWorld {
    DemoBuilder::new(level)
        .player_at(Vec3::new(-8.0, 1.5, 0.0))
        .add_enemies(4, true)
        .add_enemies(1, false)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_stunnable_enemies_expose_capability() {
        let mut world = DemoBuilder::new("l").add_enemies(2, true).add_enemies(1, false).build();
        let capable = world
            .enemies()
            .into_iter()
            .filter_map(|e| e.as_stunnable().map(|_| ()))
            .count();
        assert_eq!(capable, 2);
    }

    #[test]
    fn loader_records_levels() {
        let mut world = default_world("level1");
        assert_eq!(world.current_level(), "level1");
        world.load_level("level2");
        assert_eq!(world.current_level(), "level2");
        assert_eq!(world.loaded_levels(), &["level2".to_string()]);
    }

    #[test]
    fn respawn_moves_player() {
        let mut world = default_world("level1");
        let player = world.player().expect("player");
        player.respawn(Vec3::ZERO);
        assert_eq!(world.player_state().unwrap().position, Vec3::ZERO);
        assert_eq!(world.player_state().unwrap().respawns, 1);
    }
}
