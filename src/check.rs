use std::error::Error;
use std::path::PathBuf;
use std::sync::mpsc::channel;

use hashbrown::HashSet;
use notify::RecursiveMode;
use umbra_fixture::{Fixture, FixtureError, Summary, builtin, check_all, load_dir};

use crate::app::spawn_watcher;
use crate::config::CheckConfig;

/// Directories in first-seen order, each once. The same path can come from
/// both `--dir` and `check.dirs`.
fn unique_dirs(dirs: &[PathBuf]) -> Vec<&PathBuf> {
    let mut seen = HashSet::new();
    dirs.iter().filter(|d| seen.insert(*d)).collect()
}

/// Builtin fixtures (unless disabled) followed by each directory in order.
pub fn collect(cfg: &CheckConfig) -> Result<Vec<Fixture>, FixtureError> {
    let mut fixtures = if cfg.builtin { builtin()? } else { Vec::new() };
    for dir in unique_dirs(&cfg.dirs) {
        fixtures.extend(load_dir(dir)?);
    }
    Ok(fixtures)
}

/// Failure tables, then the summary lines.
pub fn report(summary: &Summary) -> String {
    let mut out = String::new();
    for failure in &summary.failures {
        out.push_str(&failure.to_string());
        out.push('\n');
    }
    for line in summary.lines() {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

fn run_once(cfg: &CheckConfig) -> Result<Summary, FixtureError> {
    let fixtures = collect(cfg)?;
    let summary = check_all(&fixtures);
    print!("{}", report(&summary));
    Ok(summary)
}

/// Returns the number of failed fixtures.
pub fn run(cfg: &CheckConfig, watch: bool) -> Result<usize, Box<dyn Error>> {
    let summary = run_once(cfg)?;
    if !watch {
        return Ok(summary.failed);
    }
    if cfg.dirs.is_empty() {
        return Err("--watch needs a fixture directory (--dir or check.dirs)".into());
    }
    let dirs = unique_dirs(&cfg.dirs);
    let (tx, rx) = channel::<()>();
    for dir in &dirs {
        spawn_watcher((*dir).clone(), RecursiveMode::NonRecursive, tx.clone());
    }
    drop(tx);
    log::info!(target: "fixture", "watching {} director(ies) for changes", dirs.len());
    while rx.recv().is_ok() {
        // Editors emit bursts of events per save.
        std::thread::sleep(std::time::Duration::from_millis(100));
        let burst = 1 + rx.try_iter().count();
        log::info!(target: "fixture", "{} change event(s), re-running", burst);
        if let Err(e) = run_once(cfg) {
            log::warn!(target: "fixture", "{}", e);
        }
    }
    Ok(0)
}
