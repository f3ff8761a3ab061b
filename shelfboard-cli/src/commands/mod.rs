//! CLI command implementations

mod batch;
mod replay;
mod validate;

pub use batch::batch;
pub use replay::replay;
pub use validate::validate;

use anyhow::{Context, Result};
use shelfboard_core::Action;
use std::path::Path;

/// Read and parse a session script
fn load_script(path: &Path) -> Result<Vec<Action>> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to open script: {}", path.display()))?;
    Action::parse_script(&data).with_context(|| format!("Failed to parse {}", path.display()))
}
