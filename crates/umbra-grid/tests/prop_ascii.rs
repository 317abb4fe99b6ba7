use proptest::prelude::*;
use umbra_geom::Coord;
use umbra_grid::GridError;
use umbra_grid::ascii::{block_lines, parse_block, parse_centered};

fn map_line() -> impl Strategy<Value = String> {
    "[# .0-9@]{0,12}"
}

fn block() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(map_line(), 1..10)
}

fn as_text(header: &str, lines: &[String]) -> String {
    let mut s = String::from(header);
    for l in lines {
        s.push('\n');
        s.push_str(l);
    }
    s
}

/// The map lines as the parser sees them: a trailing empty line is not a row.
fn map_rows(text: &str) -> Vec<&str> {
    text.lines().skip(1).map(str::trim_end).collect()
}

proptest! {
    // Every block line comes out at the width of the widest trimmed line
    #[test]
    fn block_lines_are_rectangular(lines in block(), header in "[a-z ]{0,8}") {
        let text = as_text(&header, &lines);
        let rows = map_rows(&text);
        let out = block_lines(&text);
        let width = rows.iter().map(|l| l.len()).max().unwrap_or(0);
        prop_assert_eq!(out.len(), rows.len());
        for (o, l) in out.iter().zip(&rows) {
            prop_assert_eq!(o.len(), width);
            prop_assert_eq!(o.trim_end(), *l);
        }
    }

    // parse_block renders back to the padded lines, or reports an empty block
    #[test]
    fn parse_block_round_trips_render(lines in block()) {
        let text = as_text("", &lines);
        let padded = block_lines(&text);
        match parse_block(&text) {
            Ok(grid) => {
                prop_assert_eq!(grid.height(), padded.len());
                prop_assert_eq!(grid.render_rows(), padded);
            }
            Err(e) => {
                prop_assert_eq!(e, GridError::Empty);
                prop_assert!(padded.is_empty());
            }
        }
    }

    // The viewport always has the requested size and keeps the map's cells in order
    #[test]
    fn centered_has_exact_size(lines in block(), w in 1usize..40, h in 1usize..30) {
        let text = as_text("", &lines);
        let rows = map_rows(&text);
        let grid = parse_centered(&text, w, h);
        prop_assert_eq!(grid.width(), w);
        prop_assert_eq!(grid.height(), h);
        let top = h.saturating_sub(rows.len()) / 2;
        let widest = rows.iter().take(h - top).map(|l| l.len()).max().unwrap_or(0);
        let left = w.saturating_sub(widest) / 2;
        for (i, l) in rows.iter().enumerate() {
            for (j, ch) in l.chars().enumerate() {
                let at = Coord::new((top + i) as i32, (left + j) as i32);
                if let Some(got) = grid.get(at) {
                    prop_assert_eq!(*got, ch);
                }
            }
        }
    }
}
