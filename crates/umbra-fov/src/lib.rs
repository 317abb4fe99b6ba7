//! Field-of-view engine: recursive shadowcasting over octants with exact slopes.
//!
//! The engine owns no grid. Callers hand it a `visit` callback that both records a
//! cell as seen and reports whether that cell is opaque; the engine decides which
//! cells to ask about. Returning `true` for coordinates outside the caller's map is
//! the way to bound exploration.
#![forbid(unsafe_code)]

use std::convert::Infallible;
use std::error::Error;
use std::fmt;

use hashbrown::HashSet;
use umbra_geom::{Coord, OCTANTS, Slope};

mod ledger;
mod sweep;

use sweep::Sweep;

/// Failure of a [`compute`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FovError<E> {
    /// The radius was negative. It is never clamped.
    NegativeRadius(i32),
    /// A callback failed; its error is passed through untouched.
    Callback(E),
}

impl<E: fmt::Display> fmt::Display for FovError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FovError::NegativeRadius(r) => write!(f, "radius must be non-negative, got {}", r),
            FovError::Callback(e) => write!(f, "visibility callback failed: {}", e),
        }
    }
}

impl<E: Error + 'static> Error for FovError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            FovError::NegativeRadius(_) => None,
            FovError::Callback(e) => Some(e),
        }
    }
}

/// One row sweep inside one octant, reported to the diagnostic hook.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanStep {
    /// Index into [`OCTANTS`].
    pub octant: usize,
    pub depth: i32,
    pub start: Slope,
    pub end: Slope,
}

/// Visit every cell visible from `origin` within `radius`.
///
/// `visit` is called once per candidate cell, the origin first. Its return value is
/// the cell's opacity; opaque cells are still reported but cast shadows. Any error
/// from `visit` aborts the sweep and comes back as [`FovError::Callback`].
pub fn compute<V, E>(origin: Coord, radius: i32, visit: V) -> Result<(), FovError<E>>
where
    V: FnMut(Coord) -> Result<bool, E>,
{
    compute_traced(origin, radius, visit, |_| Ok(()))
}

/// [`compute`] with a hook invoked once per internal row sweep.
///
/// The hook exists for instrumentation; the visited set does not depend on it.
pub fn compute_traced<V, S, E>(
    origin: Coord,
    radius: i32,
    mut visit: V,
    on_scan: S,
) -> Result<(), FovError<E>>
where
    V: FnMut(Coord) -> Result<bool, E>,
    S: FnMut(ScanStep) -> Result<(), E>,
{
    if radius < 0 {
        return Err(FovError::NegativeRadius(radius));
    }
    log::trace!(target: "fov", "compute origin={} radius={}", origin, radius);
    // The origin is lit whatever its own opacity.
    visit(origin).map_err(FovError::Callback)?;
    let mut sweep = Sweep::new(origin, radius, visit, on_scan);
    for (index, octant) in OCTANTS.iter().enumerate() {
        sweep.run(index, *octant).map_err(FovError::Callback)?;
    }
    Ok(())
}

/// Collect the visible set for an opacity predicate that cannot fail.
pub fn visible_set<F>(
    origin: Coord,
    radius: i32,
    is_opaque: F,
) -> Result<HashSet<Coord>, FovError<Infallible>>
where
    F: Fn(Coord) -> bool,
{
    let mut seen = HashSet::new();
    compute(origin, radius, |c| {
        seen.insert(c);
        Ok::<bool, Infallible>(is_opaque(c))
    })?;
    Ok(seen)
}

/// Slope window every octant starts from.
pub const FULL_OCTANT: (Slope, Slope) = (Slope::ZERO, Slope::ONE);

#[cfg(test)]
mod tests;
