use glam::Vec3;

use super::clock::GameClock;
use super::controller::ButtonEdges;
use super::power::PowerMeter;
use super::transition::{TransitionHandle, TransitionScheduler, VICTORY_DELAY_SECONDS};
use crate::config::SessionConfig;
use crate::traits::{
    ActorRegistry, Button, Controller, LevelLoader, SessionStore, SessionView, UiBinding,
};
use crate::types::{highscore_text, score_text, RunState, SessionState, MAX_LIVES};

/// Game session controller - score, lives, power meter, pause and level flow
/// for one running level.
///
/// Built once per level by the bootstrapper and handed by reference to
/// whatever needs to report gameplay events.
pub struct GameSession<S, V, W>
where
    S: SessionStore,
    V: SessionView,
    W: ActorRegistry + LevelLoader,
{
    config: SessionConfig,
    state: SessionState,
    power: PowerMeter,
    clock: GameClock,
    run_state: RunState,
    edges: ButtonEdges,
    transitions: TransitionScheduler,
    current_level: String,
    transitioned_to: Option<String>,
    store: S,
    view: V,
    world: W,
}

impl<S, V, W> GameSession<S, V, W>
where
    S: SessionStore,
    V: SessionView,
    W: ActorRegistry + LevelLoader,
{
    /// Create a session and run setup against its collaborators
    pub fn new(config: SessionConfig, store: S, view: V, world: W) -> Self {
        let start_lives = config.start_lives;
        let mut session = Self {
            config,
            state: SessionState::new(start_lives),
            power: PowerMeter::new(),
            clock: GameClock::new(),
            run_state: RunState::Running,
            edges: ButtonEdges::new(),
            transitions: TransitionScheduler::new(),
            current_level: String::new(),
            transitioned_to: None,
            store,
            view,
            world,
        };
        session.setup_defaults();
        session
    }

    fn setup_defaults(&mut self) {
        self.state.spawn_location = match self.world.player() {
            Some(player) => Some(player.position()),
            None => {
                log::error!("Player not found in game session");
                None
            }
        };

        self.current_level = self.world.current_level();

        if self.config.level_after_victory.is_empty() {
            log::warn!("level_after_victory not specified, defaulted to current level");
            self.config.level_after_victory = self.current_level.clone();
        }

        if self.config.level_after_game_over.is_empty() {
            log::warn!("level_after_game_over not specified, defaulted to current level");
            self.config.level_after_game_over = self.current_level.clone();
        }

        for binding in UiBinding::REQUIRED {
            if !self.view.has_binding(binding) {
                log::error!("Need to set {} on game session", binding.name());
            }
        }

        self.refresh_player_state();
        self.refresh_gui();
    }

    /// Pull lives, score and highscore from the store.
    ///
    /// A store reporting no lives has never been saved to, so it is reset to
    /// the configured starting lives first. The current level is marked as
    /// unlocked on every load.
    pub fn refresh_player_state(&mut self) {
        let mut lives = self.store.lives();

        if lives <= 0 {
            log::info!(
                "No saved lives, resetting progress to {} lives",
                self.config.start_lives
            );
            self.store.reset_state(self.config.start_lives, false);
            lives = self.store.lives();
        }

        self.state.lives = lives;
        self.state.score = self.store.score();
        self.state.highscore = self.store.highscore();

        if self.state.highscore < self.state.score {
            log::warn!(
                "Saved highscore {} is below saved score {}, raising it",
                self.state.highscore,
                self.state.score
            );
            self.state.highscore = self.state.score;
        }

        self.store.unlock_level(&self.current_level);
    }

    /// Push every piece of state to the view
    pub fn refresh_gui(&mut self) {
        self.view.set_score_text(&score_text(self.state.score));
        self.view.set_highscore_text(&highscore_text(self.state.highscore));
        self.view.set_level_text(&self.current_level);

        self.update_lives_ui();
        self.update_power_ui();
    }

    /// Per-frame update. `delta` is real seconds since the last frame.
    pub fn update(&mut self, delta: f32, input: &dyn Controller) {
        let scaled = self.clock.advance(delta);

        self.edges.update(input);
        if self.edges.just_pressed(Button::Pause) {
            self.toggle_pause();
        }

        // Recomputed even while paused; the frozen clock keeps it steady
        self.add_power();

        // Loading a level tears the scene down, later arrivals are dropped with it
        if let Some(target) = self.transitions.tick(scaled).into_iter().next() {
            self.load_level(&target);
        }
    }

    pub fn toggle_pause(&mut self) {
        match self.run_state {
            RunState::Running => self.pause(),
            RunState::Paused => self.resume(),
        }
    }

    pub fn pause(&mut self) {
        self.view.set_paused(true);
        self.clock.set_time_scale(0.0);
        self.run_state = RunState::Paused;
        log::debug!("Game paused at {:.2}s", self.clock.time());
    }

    pub fn resume(&mut self) {
        self.clock.set_time_scale(1.0);
        self.view.set_paused(false);
        self.run_state = RunState::Running;
        log::debug!("Game resumed at {:.2}s", self.clock.time());
    }

    /// Extra-life indicators, the life being played is not shown
    pub fn update_lives_ui(&mut self) {
        for i in 0..self.view.life_indicator_count() {
            let visible = (i as i64) < i64::from(self.state.lives) - 1;
            self.view.set_life_indicator(i, visible);
        }
    }

    pub fn update_power_ui(&mut self) {
        let level = usize::from(self.power.level());
        for i in 0..self.view.power_indicator_count() {
            self.view.set_power_indicator(i, i < level);
        }
    }

    /// Grant lives. Ignored entirely if it would go past `MAX_LIVES`.
    pub fn add_lives(&mut self, amount: i32) {
        let topped_up = self.state.lives.checked_add(amount);
        if let Some(lives) = topped_up.filter(|&n| n <= MAX_LIVES) {
            self.state.lives = lives;
        } else {
            log::debug!(
                "Ignoring {} extra lives, already at {}",
                amount,
                self.state.lives
            );
        }

        self.update_lives_ui();
    }

    /// Add to the score, dragging the highscore along when it is beaten.
    /// Nothing is saved until the next level transition.
    pub fn add_points(&mut self, amount: u32) {
        self.state.score = self.state.score.saturating_add(amount);
        self.view.set_score_text(&score_text(self.state.score));

        if self.state.score > self.state.highscore {
            self.state.highscore = self.state.score;
            self.view.set_highscore_text(&highscore_text(self.state.highscore));
        }
    }

    /// Recharge the power meter from game time
    pub fn add_power(&mut self) {
        self.power.recharge(self.clock.time());
        self.update_power_ui();
    }

    /// Spend a full power meter to stun every stunnable enemy.
    /// Returns false without doing anything when the meter is not full.
    pub fn stun_all_enemies(&mut self) -> bool {
        if !self.power.is_full() {
            return false;
        }

        let mut stunned = 0;
        for enemy in self.world.enemies() {
            if let Some(target) = enemy.as_stunnable() {
                target.stunned();
                stunned += 1;
            }
        }

        self.power.try_consume(self.clock.time());
        self.update_power_ui();
        log::info!("Power used, {} enemies stunned", stunned);
        true
    }

    /// Player was hit: lose a life, then respawn or end the game
    pub fn reset_game(&mut self) {
        self.state.lives = self.state.lives.saturating_sub(1);
        self.refresh_gui();

        if self.state.is_game_over() {
            self.save_progress();
            let target = self.config.level_after_game_over.clone();
            log::info!("Game over, loading {}", target);
            self.load_level(&target);
        } else {
            self.respawn_player();
        }
    }

    /// Level finished: save now, load the next level after the victory delay
    pub fn level_complete(&mut self) -> TransitionHandle {
        self.save_progress();

        let target = self.config.level_after_victory.clone();
        log::info!(
            "Level {} complete, loading {} in {}s",
            self.current_level,
            target,
            VICTORY_DELAY_SECONDS
        );
        self.transitions.schedule(&target, VICTORY_DELAY_SECONDS)
    }

    /// Drop a scheduled transition. False if it already fired.
    pub fn cancel_transition(&mut self, handle: TransitionHandle) -> bool {
        self.transitions.cancel(handle)
    }

    /// Scene teardown, nothing scheduled survives it
    pub fn teardown(&mut self) {
        if self.transitions.pending_count() > 0 {
            log::debug!(
                "Dropping {} pending transitions",
                self.transitions.pending_count()
            );
        }
        self.transitions.cancel_all();
    }

    /// Hand the collaborators back, e.g. to build the session for the next level
    pub fn into_parts(mut self) -> (S, V, W) {
        self.teardown();
        (self.store, self.view, self.world)
    }

    fn respawn_player(&mut self) {
        let Some(spawn) = self.state.spawn_location else {
            log::error!("No spawn location recorded, cannot respawn player");
            return;
        };

        match self.world.player() {
            Some(player) => player.respawn(spawn),
            None => log::error!("Player not found in game session, cannot respawn"),
        }
    }

    fn save_progress(&mut self) {
        self.store
            .save_state(self.state.score, self.state.highscore, self.state.lives);
    }

    fn load_level(&mut self, target: &str) {
        self.transitions.cancel_all();
        self.transitioned_to = Some(target.to_string());
        self.world.load_level(target);
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn highscore(&self) -> u32 {
        self.state.highscore
    }

    pub fn lives(&self) -> i32 {
        self.state.lives
    }

    pub fn power_level(&self) -> u8 {
        self.power.level()
    }

    pub fn spawn_location(&self) -> Option<Vec3> {
        self.state.spawn_location
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_paused(&self) -> bool {
        self.run_state == RunState::Paused
    }

    /// Game seconds since the session started
    pub fn game_time(&self) -> f64 {
        self.clock.time()
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn current_level(&self) -> &str {
        &self.current_level
    }

    /// Level this session handed over to, if any
    pub fn transitioned_to(&self) -> Option<&str> {
        self.transitioned_to.as_deref()
    }

    pub fn is_transition_pending(&self, handle: TransitionHandle) -> bool {
        self.transitions.is_pending(handle)
    }

    pub fn pending_transitions(&self) -> usize {
        self.transitions.pending_count()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn world(&self) -> &W {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut W {
        &mut self.world
    }
}
