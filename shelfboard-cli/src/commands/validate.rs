//! Validate command implementation

use super::load_script;
use anyhow::{bail, Result};
use shelfboard_core::BoardSession;
use std::path::Path;

/// Validate a session script by replaying it on a scratch board
pub fn validate(script: &str, strict: bool) -> Result<()> {
    let actions = match load_script(Path::new(script)) {
        Ok(actions) => actions,
        Err(e) => {
            eprintln!("Invalid script: {:#}", e);
            bail!("Validation failed for {}", script);
        }
    };
    let total = actions.len();

    let mut session = BoardSession::new();
    let rejected = session.replay(actions);

    println!("Valid script");
    println!("  Actions:  {}", total);
    println!("  Accepted: {}", total - rejected.len());
    println!("  Rejected: {}", rejected.len());
    for (index, err) in &rejected {
        println!("    #{}: {}", index, err);
    }

    if strict && !rejected.is_empty() {
        bail!("Validation failed for {}: {} rejected actions", script, rejected.len());
    }

    Ok(())
}
