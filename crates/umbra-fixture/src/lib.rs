//! Ascii fixtures for the field-of-view engine: parse, run, compare, report.
#![forbid(unsafe_code)]

use std::error::Error;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use umbra_fov::FovError;
use umbra_geom::Coord;
use umbra_grid::ascii::{self, FLOOR, LIT, UNBOUNDED};
use umbra_grid::{Grid, GridError};

mod harness;
mod report;

pub use harness::{Summary, check_all, check_fixture, run_fixture};
pub use report::{FixtureMismatch, RowReport};

/// An observer cell found in a fixture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Probe {
    pub at: Coord,
    pub radius: ProbeRadius,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProbeRadius {
    Digit(u8),
    /// `@`: reaches every cell of the fixture.
    Unbounded,
}

impl ProbeRadius {
    pub fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            UNBOUNDED => Some(ProbeRadius::Unbounded),
            _ => ch.to_digit(10).map(|d| ProbeRadius::Digit(d as u8)),
        }
    }

    /// Radius passed to the engine for a grid of the given size.
    pub fn resolve(self, width: usize, height: usize) -> i32 {
        match self {
            ProbeRadius::Digit(d) => i32::from(d),
            ProbeRadius::Unbounded => (width + height) as i32,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fixture {
    pub name: String,
    /// Rows as written, trimmed and right-padded.
    pub expected: Vec<String>,
    /// Starting state: every `.` replaced by a blank floor cell.
    pub grid: Grid<char>,
    /// Row-major.
    pub probes: Vec<Probe>,
}

impl Fixture {
    pub fn parse(name: impl Into<String>, text: &str) -> Result<Self, FixtureError> {
        let name = name.into();
        let expected = ascii::block_lines(text);
        let grid = Grid::from_rows(
            expected
                .iter()
                .map(|l| l.chars().map(|c| if c == LIT { FLOOR } else { c }).collect())
                .collect(),
        )
        .map_err(|source| FixtureError::Grid {
            fixture: name.clone(),
            source,
        })?;
        let probes = grid
            .iter()
            .filter_map(|(at, &ch)| ProbeRadius::from_glyph(ch).map(|radius| Probe { at, radius }))
            .collect();
        Ok(Self {
            name,
            expected,
            grid,
            probes,
        })
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }
}

#[derive(Debug)]
pub enum FixtureError {
    Grid {
        fixture: String,
        source: GridError,
    },
    /// The engine asked about a cell outside the fixture.
    OutOfBounds { fixture: String, at: Coord },
    /// The engine refused a probe radius.
    Radius { fixture: String, radius: i32 },
    Mismatch(FixtureMismatch),
    Io { path: PathBuf, source: io::Error },
}

impl FixtureError {
    pub(crate) fn from_fov(fixture: &str, e: FovError<FixtureError>) -> Self {
        match e {
            FovError::Callback(inner) => inner,
            FovError::NegativeRadius(radius) => FixtureError::Radius {
                fixture: fixture.to_string(),
                radius,
            },
        }
    }
}

impl fmt::Display for FixtureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixtureError::Grid { fixture, source } => write!(f, "fixture {}: {}", fixture, source),
            FixtureError::OutOfBounds { fixture, at } => {
                write!(f, "fixture {}: grid position {} out of range", fixture, at)
            }
            FixtureError::Radius { fixture, radius } => {
                write!(f, "fixture {}: invalid radius {}", fixture, radius)
            }
            FixtureError::Mismatch(m) => write!(f, "{}", m),
            FixtureError::Io { path, source } => write!(f, "{}: {}", path.display(), source),
        }
    }
}

impl Error for FixtureError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            FixtureError::Grid { source, .. } => Some(source),
            FixtureError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

const BUILTIN: [(&str, &str); 4] = [
    ("01_open_radii", include_str!("../fixtures/01_open_radii.txt")),
    ("02_scattered_walls", include_str!("../fixtures/02_scattered_walls.txt")),
    ("03_walled_room", include_str!("../fixtures/03_walled_room.txt")),
    ("04_dungeon_slice", include_str!("../fixtures/04_dungeon_slice.txt")),
];

/// Fixtures compiled into the crate.
pub fn builtin() -> Result<Vec<Fixture>, FixtureError> {
    BUILTIN
        .iter()
        .map(|(name, text)| Fixture::parse(*name, text))
        .collect()
}

/// Every `*.txt` file in `dir`, ordered by file name. The file stem names the fixture.
pub fn load_dir(dir: &Path) -> Result<Vec<Fixture>, FixtureError> {
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_err(dir))? {
        let path = entry.map_err(io_err(dir))?.path();
        if path.is_file() && path.extension().is_some_and(|e| e == "txt") {
            paths.push(path);
        }
    }
    paths.sort();
    let mut out = Vec::with_capacity(paths.len());
    for path in paths {
        let text = std::fs::read_to_string(&path).map_err(io_err(&path))?;
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        log::debug!(target: "fixture", "loaded {} from {}", name, path.display());
        out.push(Fixture::parse(name, &text)?);
    }
    Ok(out)
}

fn io_err(path: &Path) -> impl FnOnce(io::Error) -> FixtureError {
    let path = path.to_path_buf();
    move |source| FixtureError::Io { path, source }
}
