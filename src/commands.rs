//! Non-interactive commands.

use anyhow::{Context, Result};
use gridtac_core::{BoardSize, Game, GameStatus, Transition, winning_lines};
use tracing::{info, instrument, warn};

/// Places `moves` in order and renders the resulting game.
///
/// Ignored placements are skipped with a note, the same way the state
/// machine treats them.
#[instrument(skip(moves), fields(moves = moves.len()))]
pub fn replay(size: usize, moves: &[usize], json: bool) -> Result<String> {
    let size = BoardSize::new(size).context("Invalid board size")?;
    let mut game = Game::new(size);
    let mut notes = Vec::new();

    for (position, &index) in moves.iter().enumerate() {
        if let Transition::Ignored(rejection) = game.place_mark(index) {
            warn!(position, index, %rejection, "Replay move ignored");
            notes.push(format!("move #{} ({}) ignored: {}", position, index, rejection));
        }
    }

    info!(history = game.history().len(), "Replay finished");

    if json {
        return serde_json::to_string_pretty(&game.snapshot()).context("Failed to encode snapshot");
    }

    let status = match game.status() {
        GameStatus::InProgress => format!("In progress, {} to move", game.current_player()),
        GameStatus::Won { winner, line } => format!("{} wins on {}", winner, line),
        GameStatus::Tied => "Tie".to_string(),
    };

    let mut out = game.board().display();
    out.push_str("\n\n");
    out.push_str(&status);
    for note in notes {
        out.push('\n');
        out.push_str(&note);
    }
    Ok(out)
}

/// Lists the winning lines for a board size in evaluation order.
#[instrument]
pub fn lines(size: usize) -> Result<String> {
    let size = BoardSize::new(size).context("Invalid board size")?;
    Ok(winning_lines(size)
        .iter()
        .map(|line| line.to_string())
        .collect::<Vec<_>>()
        .join("\n"))
}
