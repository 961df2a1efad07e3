use anyhow::{Context, Result};
use clap::Parser;

use sparty_session::cli::Cli;
use sparty_session::config::SessionConfig;
use sparty_session::demo;
use sparty_session::display::HeadlessView;
use sparty_session::script::{parse_script, RunOutcome, ScriptRunner, DEFAULT_SCRIPT};
use sparty_session::stores::{JsonFileStore, MemoryStore};
use sparty_session::traits::SessionStore;
use sparty_session::GameSession;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => SessionConfig::from_path(path)?,
        None => SessionConfig::default(),
    };
    let config = cli.apply_overrides(config);

    let script = match &cli.script {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?,
        None => DEFAULT_SCRIPT.to_string(),
    };
    let events = parse_script(&script).context("Invalid gameplay script")?;

    match &cli.store {
        Some(path) => run(&cli, config, JsonFileStore::open(path)?, events),
        None => run(&cli, config, MemoryStore::new(), events),
    }
}

fn run<S: SessionStore>(
    cli: &Cli,
    config: SessionConfig,
    store: S,
    events: Vec<sparty_session::script::ScriptEvent>,
) -> Result<()> {
    let mut runner = ScriptRunner::new(events, cli.fps);
    let mut store = store;
    let mut view = HeadlessView::new(cli.life_indicators, cli.power_indicators);
    let mut world = demo::default_world(&cli.start_level());
    let spawn = world.player_state().map(|p| p.position);

    for _ in 0..=cli.max_levels {
        let mut session = GameSession::new(config.clone(), store, view, world);
        let outcome = runner.run(&mut session);

        if !cli.no_hud {
            println!("[{}] {}", session.current_level(), session.view().hud_line());
        }
        log::info!(
            "Left {} after {:.2}s of game time: score {}, highscore {}, lives {}",
            session.current_level(),
            session.game_time(),
            session.score(),
            session.highscore(),
            session.lives()
        );

        (store, view, world) = session.into_parts();

        match outcome {
            RunOutcome::Transitioned(level) => {
                log::info!("Entering {}", level);
                if let Some(spawn) = spawn {
                    world.enter_level(spawn);
                }
                if runner.is_done() {
                    break;
                }
            }
            RunOutcome::Finished => break,
        }
    }

    println!(
        "Saved progress: score {}, highscore {}, lives {} ({} frames simulated)",
        store.score(),
        store.highscore(),
        store.lives(),
        runner.frames()
    );

    Ok(())
}
