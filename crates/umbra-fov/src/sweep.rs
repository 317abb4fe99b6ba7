use std::marker::PhantomData;

use umbra_geom::{Coord, Octant, Slope, within_radius};

use crate::ScanStep;
use crate::ledger::Ledger;

/// Traversal of one `compute` call. Slope windows are passed by value down the
/// recursion; the only mutable state is the callbacks and the boundary ledger.
pub(crate) struct Sweep<V, S, E> {
    origin: Coord,
    radius: i32,
    visit: V,
    on_scan: S,
    pub(crate) ledger: Ledger,
    _err: PhantomData<fn() -> E>,
}

impl<V, S, E> Sweep<V, S, E>
where
    V: FnMut(Coord) -> Result<bool, E>,
    S: FnMut(ScanStep) -> Result<(), E>,
{
    pub(crate) fn new(origin: Coord, radius: i32, visit: V, on_scan: S) -> Self {
        Self {
            origin,
            radius,
            visit,
            on_scan,
            ledger: Ledger::default(),
            _err: PhantomData,
        }
    }

    pub(crate) fn run(&mut self, index: usize, octant: Octant) -> Result<(), E> {
        let (start, end) = crate::FULL_OCTANT;
        self.cast(index, octant, 1, start, end)
    }

    // Sweeps rows outward while the window stays open. A transparent run closed by
    // an opaque cell recurses with a narrowed end; the trailing run continues in
    // this loop.
    fn cast(
        &mut self,
        index: usize,
        octant: Octant,
        mut depth: i32,
        mut start: Slope,
        end: Slope,
    ) -> Result<(), E> {
        while depth <= self.radius && start < end {
            (self.on_scan)(ScanStep { octant: index, depth, start, end })?;
            let first = start.first_offset_above(depth).max(0);
            let last = end.last_offset_below(depth).min(i64::from(depth));
            let mut prev: Option<bool> = None;
            for offset in first..=last {
                let offset = offset as i32;
                let opaque = self.look(octant, depth, offset)?;
                match (prev, opaque) {
                    (Some(false), true) => {
                        let near = Slope::cell_min(depth, offset);
                        self.cast(index, octant, depth + 1, start, near)?;
                    }
                    (Some(true), false) => start = Slope::cell_max(depth, offset - 1),
                    _ => {}
                }
                prev = Some(opaque);
            }
            if prev != Some(false) {
                return Ok(());
            }
            depth += 1;
        }
        Ok(())
    }

    // Cells beyond the radius are skipped and count as transparent.
    fn look(&mut self, octant: Octant, depth: i32, offset: i32) -> Result<bool, E> {
        let cell = octant.to_world(self.origin, depth, offset);
        if !within_radius(cell - self.origin, self.radius) {
            return Ok(false);
        }
        if offset != 0 && offset != depth {
            return (self.visit)(cell);
        }
        if let Some(opaque) = self.ledger.get(cell) {
            return Ok(opaque);
        }
        let opaque = (self.visit)(cell)?;
        self.ledger.record(cell, opaque);
        Ok(opaque)
    }
}
