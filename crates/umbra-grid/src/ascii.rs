//! Ascii maps: `#` walls, digits and `@` observers, spaces and `.` floor.

use crate::{Grid, GridError};

pub const WALL: char = '#';
pub const FLOOR: char = ' ';
pub const LIT: char = '.';
pub const UNBOUNDED: char = '@';

/// Lines of a map block. The first line is a header and is dropped; trailing
/// whitespace is trimmed and shorter lines are right-padded to the widest one.
pub fn block_lines(text: &str) -> Vec<String> {
    let lines: Vec<&str> = text.lines().skip(1).map(str::trim_end).collect();
    let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    lines.into_iter().map(|l| pad_right(l, width)).collect()
}

pub fn parse_block(text: &str) -> Result<Grid<char>, GridError> {
    Grid::from_rows(block_lines(text).iter().map(|l| l.chars().collect()).collect())
}

/// Place a map block in the middle of a `width` x `height` viewport. Blank rows
/// and columns fill the margins; anything that does not fit is clipped from the
/// bottom and right.
pub fn parse_centered(text: &str, width: usize, height: usize) -> Grid<char> {
    let lines: Vec<&str> = text.lines().skip(1).map(str::trim_end).collect();
    let top = height.saturating_sub(lines.len()) / 2;
    // Rows clipped off the bottom do not count toward the margin.
    let widest = lines
        .iter()
        .take(height.saturating_sub(top))
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0);
    let left = width.saturating_sub(widest) / 2;

    let mut grid = Grid::filled(width, height, FLOOR);
    for (i, line) in lines.iter().enumerate() {
        let row = top + i;
        if row >= height {
            break;
        }
        for (j, ch) in line.chars().enumerate() {
            let col = left + j;
            if col >= width {
                break;
            }
            let at = grid.idx(row, col);
            grid.cells[at] = ch;
        }
    }
    grid
}

fn pad_right(line: &str, width: usize) -> String {
    let mut s = String::with_capacity(width);
    s.push_str(line);
    for _ in line.chars().count()..width {
        s.push(FLOOR);
    }
    s
}
