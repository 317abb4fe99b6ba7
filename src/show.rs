use std::convert::Infallible;
use std::error::Error;
use std::path::Path;

use umbra_fov::compute;
use umbra_geom::Coord;
use umbra_grid::Grid;
use umbra_grid::ascii::{FLOOR, LIT, WALL, parse_block};

/// Light `map` from `observer` and draw the result: lit floor as `.`, the
/// observer as `@`. Also returns the number of visits, off-map ones included.
pub fn render(map: &Grid<char>, observer: Coord, radius: i32) -> Result<(Vec<String>, usize), Box<dyn Error>> {
    if !map.contains(observer) {
        return Err(format!(
            "observer {} is outside the {}x{} map",
            observer,
            map.width(),
            map.height()
        )
        .into());
    }
    let mut out = map.clone();
    let mut lights = 0usize;
    compute(observer, radius, |at| {
        lights += 1;
        let Some(cell) = out.get_mut(at) else {
            return Ok(true);
        };
        if *cell == FLOOR {
            *cell = LIT;
        }
        Ok::<bool, Infallible>(*cell == WALL)
    })?;
    if let Some(cell) = out.get_mut(observer)
        && *cell != WALL
    {
        *cell = '@';
    }
    Ok((out.render_rows(), lights))
}

pub fn run(map: &Path, observer: Coord, radius: i32) -> Result<(), Box<dyn Error>> {
    let text = std::fs::read_to_string(map).map_err(|e| format!("{}: {}", map.display(), e))?;
    let grid = parse_block(&text)?;
    log::info!(
        "{}: {}x{} observer {} radius {}",
        map.display(),
        grid.width(),
        grid.height(),
        observer,
        radius
    );
    let (rows, lights) = render(&grid, observer, radius)?;
    for row in rows {
        println!("{}", row.trim_end());
    }
    println!("Lit {} cells.", lights);
    Ok(())
}
