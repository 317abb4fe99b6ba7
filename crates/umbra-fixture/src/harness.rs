use rayon::prelude::*;
use umbra_fov::compute;
use umbra_grid::Grid;
use umbra_grid::ascii::{FLOOR, LIT, WALL};

use crate::report::FixtureMismatch;
use crate::{Fixture, FixtureError};

/// Run every probe of `fixture` in order over a fresh copy of its grid.
///
/// Floor cells the engine visits are marked lit; `#` cells report opaque. A visit
/// outside the grid aborts the run with [`FixtureError::OutOfBounds`].
pub fn run_fixture(fixture: &Fixture) -> Result<Grid<char>, FixtureError> {
    let mut cells = fixture.grid.clone();
    let (w, h) = (fixture.width(), fixture.height());
    for probe in &fixture.probes {
        let radius = probe.radius.resolve(w, h);
        log::debug!(target: "fixture", "{}: probe at {} radius {}", fixture.name, probe.at, radius);
        compute(probe.at, radius, |at| {
            let cell = cells.get_mut(at).ok_or_else(|| FixtureError::OutOfBounds {
                fixture: fixture.name.clone(),
                at,
            })?;
            if *cell == FLOOR {
                *cell = LIT;
            }
            Ok::<bool, FixtureError>(*cell == WALL)
        })
        .map_err(|e| FixtureError::from_fov(&fixture.name, e))?;
    }
    Ok(cells)
}

/// Run `fixture` and compare the result with its expected rows. `index` only
/// labels the report.
pub fn check_fixture(index: usize, fixture: &Fixture) -> Result<(), FixtureError> {
    let result = run_fixture(fixture)?.render_rows();
    if result == fixture.expected {
        return Ok(());
    }
    Err(FixtureError::Mismatch(FixtureMismatch::new(
        index,
        &fixture.name,
        &result,
        &fixture.expected,
    )))
}

/// Outcome of [`check_all`].
#[derive(Debug, Default)]
pub struct Summary {
    pub passed: usize,
    pub failed: usize,
    /// One entry per failed fixture, in input order.
    pub failures: Vec<FixtureError>,
}

impl Summary {
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// `Failed N test case(s).` and `Passed N test case(s).`, each only when non-zero.
    pub fn lines(&self) -> Vec<String> {
        let mut out = Vec::new();
        if self.failed > 0 {
            out.push(format!("Failed {} test case(s).", self.failed));
        }
        if self.passed > 0 {
            out.push(format!("Passed {} test case(s).", self.passed));
        }
        out
    }
}

/// Check fixtures in parallel. Results keep the order of `fixtures`.
pub fn check_all(fixtures: &[Fixture]) -> Summary {
    let results: Vec<Result<(), FixtureError>> = fixtures
        .par_iter()
        .enumerate()
        .map(|(i, f)| check_fixture(i, f))
        .collect();
    let mut summary = Summary::default();
    for r in results {
        match r {
            Ok(()) => summary.passed += 1,
            Err(e) => {
                summary.failed += 1;
                summary.failures.push(e);
            }
        }
    }
    log::info!(
        target: "fixture",
        "checked {} fixtures: {} passed, {} failed",
        fixtures.len(),
        summary.passed,
        summary.failed
    );
    summary
}
