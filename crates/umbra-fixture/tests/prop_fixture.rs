use proptest::prelude::*;
use umbra_fixture::{Fixture, check_all, check_fixture, run_fixture};

// Walled room with random interior walls, floor and probes
fn arb_room() -> impl Strategy<Value = String> {
    (3usize..14, 3usize..10).prop_flat_map(|(w, h)| {
        let cell = prop_oneof![
            6 => Just(' '),
            2 => Just('#'),
            1 => (0u32..10).prop_map(|d| char::from_digit(d, 10).unwrap_or('0')),
            1 => Just('@'),
        ];
        prop::collection::vec(cell, w * h).prop_map(move |inner| {
            let mut text = String::from("room");
            let border = "#".repeat(w + 2);
            text.push('\n');
            text.push_str(&border);
            for row in inner.chunks(w) {
                text.push('\n');
                text.push('#');
                text.extend(row.iter());
                text.push('#');
            }
            text.push('\n');
            text.push_str(&border);
            text
        })
    })
}

proptest! {
    // Only floor cells change, and the run is reproducible
    #[test]
    fn runs_touch_only_floor(text in arb_room()) {
        let f = Fixture::parse("room", &text).unwrap();
        let out = run_fixture(&f).unwrap();
        for (at, &before) in f.grid.iter() {
            let after = *out.get(at).unwrap();
            if before == ' ' {
                prop_assert!(after == ' ' || after == '.');
            } else {
                prop_assert_eq!(after, before);
            }
        }
        prop_assert_eq!(run_fixture(&f).unwrap(), out);
    }

    // A fixture written from its own result passes
    #[test]
    fn recorded_result_is_a_passing_fixture(text in arb_room()) {
        let f = Fixture::parse("room", &text).unwrap();
        let rows = run_fixture(&f).unwrap().render_rows();
        let recorded = format!("room\n{}", rows.join("\n"));
        let again = Fixture::parse("room", &recorded).unwrap();
        prop_assert!(check_fixture(0, &again).is_ok());
    }

    // Parallel checking agrees with checking one by one
    #[test]
    fn check_all_matches_sequential(rooms in prop::collection::vec(arb_room(), 1..6)) {
        let fixtures: Vec<Fixture> = rooms
            .iter()
            .enumerate()
            .map(|(i, t)| Fixture::parse(format!("room{i}"), t).unwrap())
            .collect();
        let summary = check_all(&fixtures);
        let sequential = fixtures
            .iter()
            .enumerate()
            .filter(|(i, f)| check_fixture(*i, f).is_err())
            .count();
        prop_assert_eq!(summary.failed, sequential);
        prop_assert_eq!(summary.passed + summary.failed, fixtures.len());
    }
}
