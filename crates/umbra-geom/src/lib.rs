//! Grid coordinates, exact slopes, and the octant transform table.
#![forbid(unsafe_code)]

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, Sub};

/// Integer (row, col) position on an unbounded plane. Rows grow downward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const ORIGIN: Coord = Coord { row: 0, col: 0 };

    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    #[inline]
    pub const fn offset(self, drow: i32, dcol: i32) -> Self {
        Self::new(self.row + drow, self.col + dcol)
    }

    /// Chebyshev distance, the number of king moves between two cells.
    #[inline]
    pub fn chebyshev(self, other: Coord) -> i32 {
        (self.row - other.row).abs().max((self.col - other.col).abs())
    }
}

impl Add for Coord {
    type Output = Coord;
    #[inline]
    fn add(self, rhs: Coord) -> Coord {
        Coord::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Coord {
    type Output = Coord;
    #[inline]
    fn sub(self, rhs: Coord) -> Coord {
        Coord::new(self.row - rhs.row, self.col - rhs.col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Coord {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Coord::new(row, col)
    }
}

/// True when the point of the cell at `delta` nearest the origin's centre lies
/// within `radius` of that centre. Evaluated in half-cell units so it stays exact.
#[inline]
pub fn within_radius(delta: Coord, radius: i32) -> bool {
    if radius < 0 {
        return false;
    }
    let near = |d: i32| -> i128 { (2 * i128::from(d).abs() - 1).max(0) };
    let (a, b) = (near(delta.row), near(delta.col));
    let r2 = 2 * i128::from(radius);
    a * a + b * b <= r2 * r2
}

/// Exact rational slope `num / den` with `den > 0`, measured as offset over depth
/// inside one octant. Comparisons cross-multiply in `i128` and never round.
#[derive(Clone, Copy, Debug)]
pub struct Slope {
    num: i64,
    den: i64,
}

impl Slope {
    pub const ZERO: Slope = Slope { num: 0, den: 1 };
    pub const ONE: Slope = Slope { num: 1, den: 1 };

    /// Panics if `den` is zero.
    pub fn new(num: i64, den: i64) -> Self {
        assert!(den != 0, "slope denominator must be non-zero");
        if den < 0 {
            Self { num: -num, den: -den }
        } else {
            Self { num, den }
        }
    }

    #[inline]
    pub fn numer(self) -> i64 {
        self.num
    }

    #[inline]
    pub fn denom(self) -> i64 {
        self.den
    }

    /// Slope through the cell corner nearest the start side: `(2o-1)/(2d+1)`.
    #[inline]
    pub fn cell_min(depth: i32, offset: i32) -> Self {
        Self::new(2 * i64::from(offset) - 1, 2 * i64::from(depth) + 1)
    }

    /// Slope through the cell corner nearest the end side: `(2o+1)/(2d-1)`.
    /// Only meaningful for `depth >= 1`.
    #[inline]
    pub fn cell_max(depth: i32, offset: i32) -> Self {
        Self::new(2 * i64::from(offset) + 1, 2 * i64::from(depth) - 1)
    }

    /// Smallest offset at `depth` whose `cell_max` lies strictly above this slope.
    pub fn first_offset_above(self, depth: i32) -> i64 {
        let (n, m) = (i128::from(self.num), i128::from(self.den));
        let top = n * (2 * i128::from(depth) - 1) - m;
        let o = top.div_euclid(2 * m) + 1;
        clamp_i64(o)
    }

    /// Largest offset at `depth` whose `cell_min` lies strictly below this slope.
    pub fn last_offset_below(self, depth: i32) -> i64 {
        let (n, m) = (i128::from(self.num), i128::from(self.den));
        let top = n * (2 * i128::from(depth) + 1) + m;
        // ceil(top / 2m) - 1
        let o = -((-top).div_euclid(2 * m)) - 1;
        clamp_i64(o)
    }
}

#[inline]
fn clamp_i64(v: i128) -> i64 {
    v.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
}

impl PartialEq for Slope {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Slope {}

impl PartialOrd for Slope {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Slope {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = i128::from(self.num) * i128::from(other.den);
        let rhs = i128::from(other.num) * i128::from(self.den);
        lhs.cmp(&rhs)
    }
}

impl fmt::Display for Slope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

/// Linear map from an octant's canonical (depth, offset) axes to world (row, col).
/// Depth grows away from the origin; offset sweeps from the axis toward the diagonal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Octant {
    pub depth_axis: (i32, i32),
    pub offset_axis: (i32, i32),
}

impl Octant {
    const fn new(depth_axis: (i32, i32), offset_axis: (i32, i32)) -> Self {
        Self { depth_axis, offset_axis }
    }

    #[inline]
    pub fn to_world(self, origin: Coord, depth: i32, offset: i32) -> Coord {
        origin.offset(
            depth * self.depth_axis.0 + offset * self.offset_axis.0,
            depth * self.depth_axis.1 + offset * self.offset_axis.1,
        )
    }
}

/// Clockwise from north. Every cell other than the origin lies in at least one
/// octant; cells on the axes and diagonals lie in exactly two.
pub const OCTANTS: [Octant; 8] = [
    Octant::new((-1, 0), (0, 1)),
    Octant::new((0, 1), (-1, 0)),
    Octant::new((0, 1), (1, 0)),
    Octant::new((1, 0), (0, 1)),
    Octant::new((1, 0), (0, -1)),
    Octant::new((0, -1), (1, 0)),
    Octant::new((0, -1), (-1, 0)),
    Octant::new((-1, 0), (0, -1)),
];
