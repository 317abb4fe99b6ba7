//! Rectangular cell storage and the ascii map grammar.
#![forbid(unsafe_code)]

use std::fmt;

use umbra_geom::Coord;

pub mod ascii;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    Empty,
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::Empty => write!(f, "grid has no rows"),
            GridError::Ragged {
                row,
                expected,
                found,
            } => write!(f, "row {} has {} cells, expected {}", row, found, expected),
        }
    }
}

impl std::error::Error for GridError {}

/// Row-major grid addressed by [`Coord`]; (0, 0) is the top-left cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map(Vec::len).ok_or(GridError::Empty)?;
        let mut cells = Vec::with_capacity(width * height);
        for (row, r) in rows.into_iter().enumerate() {
            if r.len() != width {
                return Err(GridError::Ragged {
                    row,
                    expected: width,
                    found: r.len(),
                });
            }
            cells.extend(r);
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn filled(width: usize, height: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            width,
            height,
            cells: vec![value; width * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn idx(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.row >= 0 && c.col >= 0 && (c.row as usize) < self.height && (c.col as usize) < self.width
    }

    #[inline]
    pub fn get(&self, c: Coord) -> Option<&T> {
        if !self.contains(c) {
            return None;
        }
        Some(&self.cells[self.idx(c.row as usize, c.col as usize)])
    }

    #[inline]
    pub fn get_mut(&mut self, c: Coord) -> Option<&mut T> {
        if !self.contains(c) {
            return None;
        }
        let i = self.idx(c.row as usize, c.col as usize);
        Some(&mut self.cells[i])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        (0..self.height).map(move |r| &self.cells[r * self.width..(r + 1) * self.width])
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coord, &T)> {
        let w = self.width.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, t)| (Coord::new((i / w) as i32, (i % w) as i32), t))
    }

    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            width: self.width,
            height: self.height,
            cells: self.cells.iter().map(f).collect(),
        }
    }
}

impl Grid<char> {
    pub fn render_rows(&self) -> Vec<String> {
        self.rows().map(|r| r.iter().collect()).collect()
    }
}
