use super::*;
use crate::sweep::Sweep;
use std::collections::HashMap;

fn walls(cells: &[(i32, i32)]) -> HashSet<Coord> {
    cells.iter().map(|&c| Coord::from(c)).collect()
}

fn visits(origin: Coord, radius: i32, walls: &HashSet<Coord>) -> Vec<Coord> {
    let mut out = Vec::new();
    compute(origin, radius, |c| {
        out.push(c);
        Ok::<_, Infallible>(walls.contains(&c))
    })
    .unwrap();
    out
}

fn shape(origin: Coord, radius: i32) -> Vec<String> {
    let seen: HashSet<Coord> = visits(origin, radius, &HashSet::new()).into_iter().collect();
    (-radius..=radius)
        .map(|dr| {
            (-radius..=radius)
                .map(|dc| if seen.contains(&origin.offset(dr, dc)) { '.' } else { ' ' })
                .collect()
        })
        .collect()
}

#[test]
fn zero_radius_is_only_origin() {
    let v = visits(Coord::new(5, 5), 0, &HashSet::new());
    assert_eq!(v, vec![Coord::new(5, 5)]);
}

#[test]
fn open_plane_shapes_match_reference_diamonds() {
    assert_eq!(shape(Coord::ORIGIN, 1), vec!["...", "...", "..."]);
    assert_eq!(
        shape(Coord::ORIGIN, 2),
        vec![" ... ", ".....", ".....", ".....", " ... "]
    );
    assert_eq!(
        shape(Coord::new(-7, 12), 3),
        vec![
            " ..... ", ".......", ".......", ".......", ".......", ".......", " ..... "
        ]
    );
}

#[test]
fn origin_is_reported_first_even_when_opaque() {
    let o = Coord::new(2, -3);
    let v = visits(o, 4, &walls(&[(2, -3)]));
    assert_eq!(v[0], o);
    assert!(v.len() > 1, "opaque origin still lights its surroundings");
}

#[test]
fn no_cell_is_reported_twice() {
    let w = walls(&[(0, 2), (1, 1), (-2, 0), (3, -3), (-1, 4)]);
    let v = visits(Coord::ORIGIN, 9, &w);
    let mut counts: HashMap<Coord, usize> = HashMap::new();
    for c in &v {
        *counts.entry(*c).or_default() += 1;
    }
    assert!(counts.values().all(|&n| n == 1), "{:?}", counts);
}

#[test]
fn adjacent_wall_shadows_cells_behind_it() {
    let w = walls(&[(0, 1)]);
    let seen: HashSet<Coord> = visits(Coord::ORIGIN, 4, &w).into_iter().collect();
    assert!(seen.contains(&Coord::new(0, 1)), "walls are reported");
    assert!(!seen.contains(&Coord::new(0, 2)));
    assert!(!seen.contains(&Coord::new(1, 2)), "corner-grazing line is blocked");
    assert!(seen.contains(&Coord::new(1, 1)));
    assert!(seen.contains(&Coord::new(2, 2)));
    assert!(seen.contains(&Coord::new(0, -4)));
}

#[test]
fn negative_radius_is_rejected_before_any_visit() {
    let mut called = false;
    let res = compute(Coord::ORIGIN, -1, |_| {
        called = true;
        Ok::<_, Infallible>(false)
    });
    assert_eq!(res, Err(FovError::NegativeRadius(-1)));
    assert!(!called);
}

#[test]
fn callback_error_stops_the_sweep() {
    let mut calls = 0;
    let res = compute(Coord::ORIGIN, 10, |c| {
        calls += 1;
        if calls == 5 { Err(format!("boom at {c}")) } else { Ok(false) }
    });
    match res {
        Err(FovError::Callback(msg)) => assert!(msg.starts_with("boom at")),
        other => panic!("unexpected {:?}", other),
    }
    assert_eq!(calls, 5);
}

#[test]
fn scan_hook_error_propagates() {
    let res = compute_traced(
        Coord::ORIGIN,
        3,
        |_| Ok(false),
        |step| if step.octant == 2 { Err("stop") } else { Ok(()) },
    );
    assert_eq!(res, Err(FovError::Callback("stop")));
}

#[test]
fn scan_hook_has_no_semantic_effect() {
    let w = walls(&[(1, 2), (-3, 1), (2, -2)]);
    let plain = visits(Coord::ORIGIN, 6, &w);
    let mut traced = Vec::new();
    let mut steps = 0;
    compute_traced(
        Coord::ORIGIN,
        6,
        |c| {
            traced.push(c);
            Ok::<_, Infallible>(w.contains(&c))
        },
        |step| {
            assert!(step.start < step.end);
            assert!(step.depth >= 1 && step.depth <= 6);
            steps += 1;
            Ok(())
        },
    )
    .unwrap();
    assert_eq!(plain, traced);
    assert!(steps >= 8);
}

#[test]
fn boundary_rays_go_through_ledger() {
    let mut seen = Vec::new();
    let mut sweep = Sweep::new(
        Coord::ORIGIN,
        3,
        |c| {
            seen.push(c);
            Ok::<_, Infallible>(false)
        },
        |_| Ok(()),
    );
    for (i, oct) in OCTANTS.iter().enumerate() {
        sweep.run(i, *oct).unwrap();
    }
    // 12 axis cells plus the diagonal cells at depth 1 and 2
    assert_eq!(sweep.ledger.len(), 20);
}

#[test]
fn error_display_mentions_radius() {
    let e: FovError<Infallible> = FovError::NegativeRadius(-4);
    assert_eq!(e.to_string(), "radius must be non-negative, got -4");
}
