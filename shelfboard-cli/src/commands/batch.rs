//! Batch replay command implementation

use super::load_script;
use anyhow::{bail, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use shelfboard_core::BoardSession;
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Replay every script in a directory
pub fn batch(input_dir: &str, output_dir: Option<&str>, jobs: usize) -> Result<()> {
    let input_path = Path::new(input_dir);
    let output_path = output_dir.map(Path::new);

    if let Some(output_path) = output_path {
        fs::create_dir_all(output_path)?;
    }

    // Find all scripts
    let files: Vec<_> = fs::read_dir(input_path)
        .with_context(|| format!("Failed to read directory: {}", input_dir))?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.extension().and_then(|e| e.to_str()) == Some("json"))
        .collect();

    if files.is_empty() {
        println!("No scripts found in {}", input_dir);
        return Ok(());
    }

    println!("Found {} scripts to replay", files.len());

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}")
            .context("Invalid progress template")?
            .progress_chars("##-"),
    );

    let success_count = AtomicUsize::new(0);
    let error_count = AtomicUsize::new(0);
    let rejected_count = AtomicUsize::new(0);

    // Configure thread pool
    rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build_global()
        .ok(); // Ignore if already configured

    files.par_iter().for_each(|script| {
        match process_script(script, output_path) {
            Ok(rejected) => {
                success_count.fetch_add(1, Ordering::Relaxed);
                rejected_count.fetch_add(rejected, Ordering::Relaxed);
            }
            Err(e) => {
                error_count.fetch_add(1, Ordering::Relaxed);
                tracing::error!("Failed to replay {:?}: {:#}", script, e);
            }
        }

        pb.inc(1);
    });

    pb.finish();

    let success = success_count.load(Ordering::Relaxed);
    let errors = error_count.load(Ordering::Relaxed);

    println!("\nBatch replay complete:");
    println!("  Success:  {}", success);
    println!("  Errors:   {}", errors);
    println!("  Rejected actions: {}", rejected_count.load(Ordering::Relaxed));

    if errors > 0 {
        bail!("Batch replay completed with {} errors", errors);
    }

    Ok(())
}

/// Replay one script, returning how many of its actions were rejected
fn process_script(script: &Path, output_dir: Option<&Path>) -> Result<usize> {
    let actions = load_script(script)?;

    let mut session = BoardSession::new();
    let rejected = session.replay(actions);

    if let Some(output_dir) = output_dir {
        let stem = script
            .file_stem()
            .and_then(|s| s.to_str())
            .context("Could not determine output filename from script")?;
        let output_file = output_dir.join(format!("{}.board.json", stem));
        fs::write(&output_file, serde_json::to_string_pretty(&session.snapshot())?)?;
        tracing::info!("Replayed {:?} -> {:?}", script, output_file);
    }

    Ok(rejected.len())
}
