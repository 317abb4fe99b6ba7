use std::error::Error;
use std::path::Path;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use umbra_geom::Coord;
use umbra_grid::Grid;
use umbra_grid::ascii::parse_centered;

use super::state::{App, Tile};
use super::watchers::spawn_map_watcher;
use crate::config::ViewerConfig;

pub const DUNGEON: &str = include_str!("../../maps/dungeon.txt");

/// Read a map file (first line is a title) into a `width` x `height` viewport.
pub fn load_map(path: Option<&Path>, width: usize, height: usize) -> Result<Grid<char>, Box<dyn Error>> {
    let text = match path {
        Some(p) => std::fs::read_to_string(p).map_err(|e| format!("{}: {}", p.display(), e))?,
        None => DUNGEON.to_string(),
    };
    if width == 0 || height == 0 {
        return Err(format!("viewport {}x{} is empty", width, height).into());
    }
    Ok(parse_centered(&text, width, height))
}

pub(crate) fn random_cell(rng: &mut Pcg32, width: usize, height: usize) -> Coord {
    let row = rng.random_range(0..height);
    let col = rng.random_range(0..width);
    Coord::new(row as i32, col as i32)
}

impl App {
    pub fn new(map: &Grid<char>, cfg: &ViewerConfig, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let observer = random_cell(&mut rng, map.width(), map.height());
        let max_radius = cfg.max_radius.max(0);
        Self {
            grid: map.map(|&ch| Tile::new(ch)),
            observer,
            radius: cfg.radius.clamp(0, max_radius),
            max_radius,
            tag: 0,
            color: cfg.color,
            debug: cfg.debug,
            lights: 0,
            scans: 0,
            dirty: true,
            rng,
            map_path: None,
            map_event_rx: None,
        }
    }

    /// Build the viewer from config. A configured map file is watched for changes
    /// when `watch_map` is set.
    pub fn from_config(cfg: &ViewerConfig) -> Result<Self, Box<dyn Error>> {
        let seed = cfg.seed.unwrap_or_else(rand::random::<u64>);
        log::info!(target: "viewer", "observer seed {}", seed);
        let map = load_map(cfg.map.as_deref(), cfg.width, cfg.height)?;
        let mut app = Self::new(&map, cfg, seed);
        if let Some(path) = &cfg.map {
            app.map_path = Some(path.clone());
            if cfg.watch_map {
                app.map_event_rx = Some(spawn_map_watcher(path.clone()));
            }
        }
        log::info!(
            target: "viewer",
            "map {}x{} observer {} radius {}",
            app.grid.width(),
            app.grid.height(),
            app.observer,
            app.radius
        );
        Ok(app)
    }
}
