use std::path::PathBuf;
use std::sync::mpsc::Receiver;

use rand_pcg::Pcg32;
use umbra_geom::Coord;
use umbra_grid::Grid;

/// One map cell and what the last light passes recorded on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile {
    pub glyph: char,
    /// Frame that last lit this cell; 0 means never.
    pub tag: u64,
    /// Scans run before the cell was lit in that frame.
    pub scan: u32,
}

impl Tile {
    pub fn new(glyph: char) -> Self {
        Self {
            glyph,
            tag: 0,
            scan: 0,
        }
    }
}

pub struct App {
    pub grid: Grid<Tile>,
    pub observer: Coord,
    pub radius: i32,
    pub max_radius: i32,
    pub tag: u64,
    pub color: bool,
    pub debug: bool,
    /// Visits in the current frame, including cells off the map.
    pub lights: usize,
    pub scans: u32,
    pub(crate) dirty: bool,
    pub(crate) rng: Pcg32,
    pub(crate) map_path: Option<PathBuf>,
    pub(crate) map_event_rx: Option<Receiver<()>>,
}
