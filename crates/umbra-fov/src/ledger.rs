use hashbrown::HashMap;
use umbra_geom::Coord;

/// Opacity of cells on octant boundary rays (axes and diagonals), seen so far in
/// the current call. Each such cell borders two octants; the second one reads it
/// from here instead of reporting it again.
#[derive(Default)]
pub(crate) struct Ledger {
    rays: HashMap<Coord, bool>,
}

impl Ledger {
    #[inline]
    pub(crate) fn get(&self, cell: Coord) -> Option<bool> {
        self.rays.get(&cell).copied()
    }

    #[inline]
    pub(crate) fn record(&mut self, cell: Coord, opaque: bool) {
        self.rays.insert(cell, opaque);
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.rays.len()
    }
}
