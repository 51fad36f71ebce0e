//! Line-based loops for the JSON and auto-play modes.

use crate::protocol::{ClientMessage, ServerMessage};
use crate::render;
use crate::session::Session;
use food_finder_core::Agent;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

/// Answer JSON requests, one per line, until end of input.
pub fn run_json<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    output: &mut W,
) -> anyhow::Result<()> {
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let reply = match serde_json::from_str::<ClientMessage>(&line) {
            Ok(msg) => session.handle_message(msg),
            Err(e) => {
                warn!("Invalid message: {}", line);
                ServerMessage::Error {
                    message: format!("Invalid message: {}", e),
                }
            }
        };

        writeln!(output, "{}", serde_json::to_string(&reply)?)?;
        output.flush()?;
    }

    Ok(())
}

/// Let an agent play the current game to the end, drawing every step.
pub fn run_auto<W: Write>(
    session: &mut Session,
    agent: &mut Agent,
    output: &mut W,
) -> anyhow::Result<()> {
    info!(strategy = ?agent.strategy, "agent playing");
    draw(session, output)?;

    while let Some(action) = agent.choose_action(&session.game) {
        for event in session.game.apply_action(action) {
            debug!(?event, "event");
        }
        draw(session, output)?;
    }

    info!(
        status = %session.game.status(),
        steps = session.game.steps(),
        "agent finished"
    );
    output.flush()?;
    Ok(())
}

fn draw<W: Write>(session: &Session, output: &mut W) -> anyhow::Result<()> {
    let snapshot = session.game.snapshot();
    write!(output, "\n{}", render::board(&snapshot))?;
    for line in render::status_lines(&snapshot) {
        writeln!(output, "{}", line)?;
    }
    Ok(())
}
