//! Line-based gameplay scripts for driving a session without a game engine.
//!
//! One command per line, `#` starts a comment:
//!
//! ```text
//! points 100    # add_points
//! lives 1       # add_lives
//! wait 2.5      # run frames for 2.5 real seconds
//! pause         # tap the pause button
//! stun          # stun_all_enemies
//! hit           # reset_game
//! complete      # level_complete
//! cancel        # cancel the last scheduled transition
//! ```

use anyhow::{bail, Context, Result};

use crate::core::{GameSession, ScriptedController, TransitionHandle};
use crate::traits::{ActorRegistry, Button, LevelLoader, SessionStore, SessionView};

#[derive(Debug, Clone, PartialEq)]
pub enum ScriptEvent {
    Wait(f32),
    Points(u32),
    Lives(i32),
    Pause,
    Stun,
    Hit,
    Complete,
    Cancel,
}

/// Parse a script, reporting the first bad line
pub fn parse_script(text: &str) -> Result<Vec<ScriptEvent>> {
    let mut events = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        let event = parse_line(line).with_context(|| format!("line {}: `{}`", index + 1, line))?;
        events.push(event);
    }

    Ok(events)
}

fn parse_line(line: &str) -> Result<ScriptEvent> {
    let mut parts = line.split_whitespace();
    let command = parts.next().unwrap_or("");
    let arg = parts.next();
    if parts.next().is_some() {
        bail!("too many arguments");
    }

    let event = match (command, arg) {
        ("wait", Some(secs)) => {
            let secs: f32 = secs.parse().context("wait needs a number of seconds")?;
            if !secs.is_finite() || secs < 0.0 {
                bail!("wait needs a non-negative duration");
            }
            ScriptEvent::Wait(secs)
        }
        ("points", Some(n)) => ScriptEvent::Points(n.parse().context("points needs a count")?),
        ("lives", Some(n)) => ScriptEvent::Lives(n.parse().context("lives needs a count")?),
        ("pause", None) => ScriptEvent::Pause,
        ("stun", None) => ScriptEvent::Stun,
        ("hit", None) => ScriptEvent::Hit,
        ("complete", None) => ScriptEvent::Complete,
        ("cancel", None) => ScriptEvent::Cancel,
        ("wait" | "points" | "lives", None) => bail!("`{}` needs an argument", command),
        ("pause" | "stun" | "hit" | "complete" | "cancel", Some(_)) => {
            bail!("`{}` takes no argument", command)
        }
        _ => bail!("unknown command `{}`", command),
    };

    Ok(event)
}

/// Why a run stopped
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// Script exhausted while still in the level
    Finished,
    /// The session loaded another level
    Transitioned(String),
}

/// Feeds script events into sessions at a fixed frame rate.
/// Keeps its place across levels so one script can span several sessions.
pub struct ScriptRunner {
    events: Vec<ScriptEvent>,
    cursor: usize,
    frame_delta: f32,
    controller: ScriptedController,
    last_transition: Option<TransitionHandle>,
    frames: u64,
}

impl ScriptRunner {
    pub fn new(events: Vec<ScriptEvent>, fps: f32) -> Self {
        Self {
            events,
            cursor: 0,
            frame_delta: 1.0 / fps.max(1.0),
            controller: ScriptedController::new(),
            last_transition: None,
            frames: 0,
        }
    }

    pub fn is_done(&self) -> bool {
        self.cursor >= self.events.len()
    }

    /// Frames simulated so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run events until the script ends or the session changes level.
    ///
    /// A `wait` cut short by a transition is dropped, not resumed in the next level.
    pub fn run<S, V, W>(&mut self, session: &mut GameSession<S, V, W>) -> RunOutcome
    where
        S: SessionStore,
        V: SessionView,
        W: ActorRegistry + LevelLoader,
    {
        self.last_transition = None;

        while let Some(event) = self.events.get(self.cursor).cloned() {
            self.cursor += 1;
            self.apply(session, &event);

            if let Some(level) = session.transitioned_to() {
                return RunOutcome::Transitioned(level.to_string());
            }
        }

        RunOutcome::Finished
    }

    fn apply<S, V, W>(&mut self, session: &mut GameSession<S, V, W>, event: &ScriptEvent)
    where
        S: SessionStore,
        V: SessionView,
        W: ActorRegistry + LevelLoader,
    {
        log::debug!("Script: {:?}", event);

        match *event {
            ScriptEvent::Wait(secs) => {
                let frames = (secs / self.frame_delta).round() as u64;
                for _ in 0..frames {
                    self.step(session, self.frame_delta);
                    if session.transitioned_to().is_some() {
                        break;
                    }
                }
            }
            ScriptEvent::Points(amount) => session.add_points(amount),
            ScriptEvent::Lives(amount) => session.add_lives(amount),
            ScriptEvent::Pause => {
                // Press and release on zero-length frames so waits stay exact
                self.controller.press(Button::Pause);
                self.step(session, 0.0);
                self.controller.release(Button::Pause);
                self.step(session, 0.0);
            }
            ScriptEvent::Stun => {
                if !session.stun_all_enemies() {
                    log::info!("Stun refused, power at {}", session.power_level());
                }
            }
            ScriptEvent::Hit => session.reset_game(),
            ScriptEvent::Complete => self.last_transition = Some(session.level_complete()),
            ScriptEvent::Cancel => match self.last_transition.take() {
                Some(handle) => {
                    session.cancel_transition(handle);
                }
                None => log::warn!("Script: nothing to cancel"),
            },
        }
    }

    fn step<S, V, W>(&mut self, session: &mut GameSession<S, V, W>, delta: f32)
    where
        S: SessionStore,
        V: SessionView,
        W: ActorRegistry + LevelLoader,
    {
        session.update(delta, &self.controller);
        self.frames += 1;
    }
}

/// Script the binary runs when none is given
pub const DEFAULT_SCRIPT: &str = "\
points 100
wait 31
stun
hit
pause
wait 5
pause
lives 1
points 250
complete
wait 4
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands_and_comments() {
        let events = parse_script(
            "# warmup\n\
             points 10\n\
             \n\
             wait 1.5   # let power build\n\
             lives -1\n\
             pause\nstun\nhit\ncomplete\ncancel\n",
        )
        .unwrap();

        assert_eq!(
            events,
            vec![
                ScriptEvent::Points(10),
                ScriptEvent::Wait(1.5),
                ScriptEvent::Lives(-1),
                ScriptEvent::Pause,
                ScriptEvent::Stun,
                ScriptEvent::Hit,
                ScriptEvent::Complete,
                ScriptEvent::Cancel,
            ]
        );
    }

    #[test]
    fn errors_name_the_line() {
        let err = parse_script("points 1\njump\n").unwrap_err();
        assert!(format!("{err:#}").contains("line 2"));

        assert!(parse_script("wait").is_err());
        assert!(parse_script("wait -1").is_err());
        assert!(parse_script("points lots").is_err());
        assert!(parse_script("hit now").is_err());
        assert!(parse_script("points 1 2").is_err());
    }

    #[test]
    fn default_script_parses() {
        assert_eq!(parse_script(DEFAULT_SCRIPT).unwrap().len(), 11);
    }
}
