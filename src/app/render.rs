use crossterm::style::Color;
use umbra_grid::ascii::{FLOOR, LIT, WALL};

use super::state::App;

const SCAN_COLORS: [Color; 4] = [Color::Red, Color::Yellow, Color::Green, Color::Blue];

/// A character ready for the terminal; `None` draws in the default colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub color: Option<Color>,
}

impl App {
    /// Cells as they should appear this frame, row by row, observer included.
    pub fn frame(&self) -> Vec<Vec<Glyph>> {
        let mut rows: Vec<Vec<Glyph>> = self
            .grid
            .rows()
            .map(|row| row.iter().map(|t| self.glyph_for(t.glyph, t.tag, t.scan)).collect())
            .collect();
        let (r, c) = (self.observer.row as usize, self.observer.col as usize);
        if let Some(cell) = rows.get_mut(r).and_then(|row| row.get_mut(c)) {
            *cell = Glyph {
                ch: if self.blocked() { WALL } else { '@' },
                color: None,
            };
        }
        rows
    }

    fn glyph_for(&self, glyph: char, tag: u64, scan: u32) -> Glyph {
        let lit = tag != 0 && tag == self.tag;
        let mut ch = if tag != 0 { glyph } else { FLOOR };
        if ch == FLOOR && lit {
            ch = if self.debug && scan > 0 {
                scan_letter(scan)
            } else {
                LIT
            };
        }
        let color = if !self.color {
            None
        } else if lit {
            Some(if self.debug {
                SCAN_COLORS[(i64::from(scan) - 1).rem_euclid(SCAN_COLORS.len() as i64) as usize]
            } else if ch == LIT {
                Color::Yellow
            } else {
                Color::Green
            })
        } else if self.debug {
            Some(Color::Black)
        } else {
            Some(Color::Blue)
        };
        Glyph { ch, color }
    }

    /// The two status lines, each padded or cut to `width`.
    pub fn status_lines(&self, width: usize) -> [String; 2] {
        let yn = |b: bool| if b { 'Y' } else { 'N' };
        let first = [
            format!("[+-] Radius = {}", self.radius),
            format!("[SPACE] {}", if self.blocked() { "Unblock" } else { "Block" }),
            format!("[C]olor = {}", yn(self.color)),
            format!("[D]ebug = {}", yn(self.debug)),
            "[Q]uit".to_string(),
        ]
        .join("  ");
        let mut second = format!("Lit {} cells", self.lights);
        if self.debug {
            second.push_str(&format!(" during {} scans", self.scans));
        }
        second.push('.');
        [fit(&first, width), fit(&second, width)]
    }
}

fn scan_letter(scan: u32) -> char {
    char::from(b'a' + ((scan - 1) % 26) as u8)
}

fn fit(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width).chars().take(width).collect()
}
