//! Property tests for the windowed list.

#![allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]

use library::{Catalog, Domain};
use proptest::prelude::*;
use ui::WindowedList;

#[derive(Debug, Clone, Copy)]
enum Move {
    Up,
    Down,
    Random,
    Jump(usize),
}

fn moves() -> impl Strategy<Value = Vec<Move>> {
    prop::collection::vec(
        prop_oneof![
            Just(Move::Up),
            Just(Move::Down),
            Just(Move::Random),
            (0usize..200).prop_map(Move::Jump),
        ],
        0..120,
    )
}

fn list(count: usize, page: usize, seed: u64) -> WindowedList {
    let mut l = WindowedList::new(page, 40, seed);
    l.populate(
        Domain::Artists,
        Catalog::from_entries((0..count).map(|i| format!("{i:04}"))),
    );
    l.set_domain(Domain::Artists);
    l.clear();
    l
}

fn apply(l: &mut WindowedList, m: Move) {
    match m {
        Move::Up => l.selection_up(false),
        Move::Down => l.selection_down(false),
        Move::Random => l.select_random_entry(false),
        Move::Jump(i) => l.jump_to(i),
    }
}

fn assert_bounds(l: &WindowedList) {
    let count = l.count();
    if count == 0 {
        assert_eq!(l.selection_index(), 0);
        return;
    }
    assert!(l.selection_index() < count);
    if count > l.page_size() {
        assert!(l.window_start() <= l.selection_index());
        assert!(l.selection_index() < l.window_start() + l.page_size());
        assert!(l.window_start() + l.page_size() <= count);
    }
}

proptest! {
    #[test]
    fn selection_and_window_stay_in_bounds(
        count in 0usize..60,
        page in 1usize..16,
        seed in any::<u64>(),
        script in moves(),
    ) {
        let mut l = list(count, page, seed);
        for m in script {
            apply(&mut l, m);
            assert_bounds(&l);
        }
    }

    #[test]
    fn up_then_down_returns_to_same_entry(
        count in 1usize..60,
        page in 1usize..16,
        start in 0usize..60,
    ) {
        let mut l = list(count, page, 1);
        l.jump_to(start);
        let before = l.selection_index();
        l.selection_up(false);
        l.selection_down(false);
        prop_assert_eq!(l.selection_index(), before);
    }

    #[test]
    fn full_lap_down_returns_home(count in 1usize..60, page in 1usize..16) {
        let mut l = list(count, page, 1);
        for _ in 0..count {
            l.selection_down(false);
        }
        prop_assert_eq!(l.selection_index(), 0);
        prop_assert_eq!(l.window_start(), 0);
    }

    #[test]
    fn push_pop_restores_selection(
        count in 1usize..60,
        page in 1usize..16,
        script in moves(),
    ) {
        let mut l = list(count, page, 3);
        for m in script {
            apply(&mut l, m);
        }
        let saved = (l.selection_index(), l.window_start(), l.count());
        l.push().unwrap();

        l.populate(Domain::Albums, Catalog::from_entries(["x", "y"]));
        l.set_domain(Domain::Albums);
        l.clear();
        l.selection_down(false);

        l.pop().unwrap();
        prop_assert_eq!((l.selection_index(), l.window_start(), l.count()), saved);
        prop_assert_eq!(l.domain(), Domain::Artists);
    }

    #[test]
    fn random_cycle_visits_every_entry(count in 1usize..150, seed in any::<u64>()) {
        let mut l = list(count, 8, seed);
        let mut seen = vec![false; count];
        seen[l.selection_index()] = true;
        for _ in 1..count {
            l.select_random_entry(false);
            let i = l.selection_index();
            prop_assert!(!seen[i], "index {} picked twice in one cycle", i);
            seen[i] = true;
        }
        prop_assert!(seen.iter().all(|s| *s));
    }
}

#[test]
fn six_ups_match_quarter_batch_on_25_entries() {
    let mut l = list(25, 10, 0);
    for _ in 0..25 / 4 {
        l.selection_up(false);
    }
    assert_eq!(l.selection_index(), 19);
    assert_eq!(l.window_start(), 15);
}
