use std::cell::Cell;
use std::convert::Infallible;

use umbra_fov::{FovError, compute_traced};
use umbra_grid::ascii::WALL;

use super::state::App;

impl App {
    /// Light the map from the observer for a new frame.
    ///
    /// Off-map cells are opaque. Every visited on-map cell is stamped with the
    /// frame tag and the number of scans run so far; scans are only counted in
    /// debug mode.
    pub fn update_light(&mut self) -> Result<(), FovError<Infallible>> {
        self.tag += 1;
        let tag = self.tag;
        let debug = self.debug;
        let scans = Cell::new(0u32);
        let mut lights = 0usize;
        let grid = &mut self.grid;
        compute_traced(
            self.observer,
            self.radius,
            |at| {
                lights += 1;
                let Some(tile) = grid.get_mut(at) else {
                    return Ok(true);
                };
                tile.tag = tag;
                tile.scan = scans.get();
                Ok(tile.glyph == WALL)
            },
            |_| {
                if debug {
                    scans.set(scans.get() + 1);
                }
                Ok::<(), Infallible>(())
            },
        )?;
        self.lights = lights;
        self.scans = scans.get();
        self.dirty = false;
        log::trace!(target: "viewer", "frame {} lit {} cells in {} scans", tag, lights, self.scans);
        Ok(())
    }
}
