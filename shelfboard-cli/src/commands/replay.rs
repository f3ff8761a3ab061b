//! Replay command implementation

use super::load_script;
use anyhow::{bail, Result};
use shelfboard_core::{BoardSession, Status};
use std::fmt::Write;
use std::path::Path;

/// Render the board as plain text, one block per column
pub(crate) fn render_board(session: &BoardSession) -> String {
    let view = session.view();
    let mut out = String::new();

    for status in Status::ALL {
        let column = view.column(status);
        let _ = writeln!(out, "{} ({})", status, column.cards.len());
        for card in &column.cards {
            let _ = writeln!(out, "  - {} by {}", card.book.title, card.book.author);
        }
    }

    out
}

/// Replay a script against an empty board and print the result
pub fn replay(script: &str, json: bool, strict: bool) -> Result<()> {
    let actions = load_script(Path::new(script))?;
    let total = actions.len();

    let mut session = BoardSession::new();
    let rejected = session.replay(actions);

    for (index, err) in &rejected {
        tracing::warn!("Action {} rejected: {}", index, err);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
    } else {
        print!("{}", render_board(&session));
    }

    if strict && !rejected.is_empty() {
        bail!("{} of {} actions rejected", rejected.len(), total);
    }

    Ok(())
}
