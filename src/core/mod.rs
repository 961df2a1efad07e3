pub mod clock;
pub mod controller;
pub mod power;
pub mod session;
pub mod timer;
pub mod transition;

pub use clock::GameClock;
pub use controller::{ButtonEdges, ScriptedController};
pub use power::{compute_power_level, PowerMeter, MAX_POWER, POWER_RECHARGE_SECONDS};
pub use session::GameSession;
pub use timer::Countdown;
pub use transition::{TransitionHandle, TransitionScheduler, VICTORY_DELAY_SECONDS};
