use std::error::Error;
use std::fs::File;
use std::path::Path;

use simplelog::{LevelFilter, WriteLogger};

/// Console logging for the batch commands. `RUST_LOG` overrides the `info` default.
pub fn init_console() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

/// The viewer owns the terminal, so its log goes to a file.
pub fn init_file(path: &Path) -> Result<(), Box<dyn Error>> {
    let file = File::create(path)?;
    WriteLogger::init(LevelFilter::Debug, simplelog::Config::default(), file)?;
    Ok(())
}
