//! `umbra`: check field-of-view fixtures, print a lit map, or explore one in the terminal.
#![forbid(unsafe_code)]

use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use umbra_geom::Coord;

mod app;
mod check;
mod config;
mod logging;
mod show;

use app::App;
use config::Config;

#[derive(Parser)]
#[command(name = "umbra")]
#[command(about = "Recursive shadowcasting field of view")]
struct Cli {
    /// Config file (defaults to ./umbra.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the ascii fixtures and print a report
    Check {
        /// Also load every *.txt fixture in this directory
        #[arg(long)]
        dir: Option<PathBuf>,
        /// Re-run whenever a fixture directory changes
        #[arg(long)]
        watch: bool,
    },

    /// Print one map lit from one position
    Show {
        #[arg(long)]
        map: PathBuf,
        #[arg(long, allow_hyphen_values = true)]
        row: i32,
        #[arg(long, allow_hyphen_values = true)]
        col: i32,
        #[arg(long, allow_hyphen_values = true)]
        radius: i32,
    },

    /// Walk around a map interactively
    View {
        #[arg(long)]
        map: Option<PathBuf>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        radius: Option<i32>,
    },
}

fn run(cli: Cli) -> Result<ExitCode, Box<dyn Error>> {
    let mut cfg = Config::resolve(cli.config.as_deref())?;
    match cli.command {
        Command::Check { dir, watch } => {
            logging::init_console();
            cfg.check.dirs.extend(dir);
            let failed = check::run(&cfg.check, watch)?;
            Ok(if failed == 0 {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(failed.min(255) as u8)
            })
        }
        Command::Show {
            map,
            row,
            col,
            radius,
        } => {
            logging::init_console();
            show::run(&map, Coord::new(row, col), radius)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::View { map, seed, radius } => {
            let viewer = &mut cfg.viewer;
            if map.is_some() {
                viewer.map = map;
            }
            if seed.is_some() {
                viewer.seed = seed;
            }
            if let Some(r) = radius {
                viewer.radius = r;
            }
            logging::init_file(&viewer.log_file)?;
            let mut app = App::from_config(viewer)?;
            app.run(Duration::from_millis(viewer.poll_ms))?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("umbra: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_negative_show_coordinates() {
        let cli = Cli::try_parse_from([
            "umbra", "show", "--map", "m.txt", "--row", "-2", "--col", "3", "--radius", "4",
        ])
        .unwrap();
        match cli.command {
            Command::Show { row, col, radius, .. } => assert_eq!((row, col, radius), (-2, 3, 4)),
            _ => panic!("expected show"),
        }
    }

    #[test]
    fn global_config_flag_follows_subcommand() {
        let cli = Cli::try_parse_from(["umbra", "check", "--watch", "--dir", "fx", "--config", "u.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("u.toml")));
        match cli.command {
            Command::Check { dir, watch } => {
                assert_eq!(dir, Some(PathBuf::from("fx")));
                assert!(watch);
            }
            _ => panic!("expected check"),
        }
    }

    #[test]
    fn view_flags_are_optional() {
        let cli = Cli::try_parse_from(["umbra", "view", "--seed", "9"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::View { map: None, seed: Some(9), radius: None }
        ));
    }
}
