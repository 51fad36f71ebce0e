//! Food Finder terminal front end.

use std::io;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod driver;
mod protocol;
mod render;
mod session;
mod settings;
mod tui;

use food_finder_core::{Agent, GameState};
use session::Session;
use settings::{Mode, Settings};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never mix with the screen or JSON replies
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let settings = Settings::from_env()?;
    info!(?settings, "Starting Food Finder...");

    let game = match settings.seed {
        Some(seed) => GameState::with_seed(settings.config, seed)?,
        None => GameState::new(settings.config)?,
    };
    let mut session = Session::new(game);

    match settings.mode {
        Mode::Interactive => tui::run(session),
        Mode::Json => driver::run_json(&mut session, io::stdin().lock(), &mut io::stdout().lock()),
        Mode::Auto(strategy) => {
            let mut agent = match settings.seed {
                Some(seed) => Agent::with_seed(strategy, seed),
                None => Agent::new(strategy),
            };
            driver::run_auto(&mut session, &mut agent, &mut io::stdout().lock())
        }
    }
}
