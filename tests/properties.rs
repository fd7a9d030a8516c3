//! Property-based tests for the containers.
//!
//! These use proptest to generate random write sequences and bulk loads, and
//! check them against a `HashMap` model:
//! 1. Growth idempotence: the last value written to an index is read back.
//! 2. Default fill: every other index reads as the default.
//! 3. Offset invariant: the bounds are exactly the hull of the writes and 0.
//! 4. Bulk round-trip: bulk-loaded content reads back at its offset.
//! 5. Monotonicity: writing never shrinks the bounding box.

use std::collections::HashMap;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use stretchy::{Bounds, Nested, Stretchy, Stretchy1, StretchyN};

const DEFAULT: i32 = -1;

// -- Strategies --

fn index_strategy() -> impl Strategy<Value = isize> { -40isize..40 }

fn writes_1d() -> impl Strategy<Value = Vec<(isize, i32)>> {
    prop::collection::vec((index_strategy(), 0i32..1000), 0..30)
}

fn writes_2d() -> impl Strategy<Value = Vec<((isize, isize), i32)>> {
    prop::collection::vec(((index_strategy(), index_strategy()), 0i32..1000), 0..30)
}

fn rows_strategy() -> impl Strategy<Value = Vec<Vec<i32>>> {
    prop::collection::vec(prop::collection::vec(0i32..1000, 0..8), 0..8)
}

/// The smallest interval containing 0 and every index in `indices`.
fn hull(indices: impl IntoIterator<Item = isize>) -> Bounds {
    indices.into_iter().fold(Bounds::EMPTY, |b, i| b.union(Bounds::new(i, i + 1)))
}

fn covers(outer: Bounds, inner: Bounds) -> bool {
    outer.start <= inner.start && inner.end <= outer.end
}

// -- Properties --

proptest! {
    #[test]
    fn growth_idempotence_1d(writes in writes_1d(), probes in prop::collection::vec(index_strategy(), 0..20)) {
        let mut s = Stretchy1::new(DEFAULT);
        let mut model = HashMap::new();
        for &(i, v) in &writes {
            s[i] = v;
            model.insert(i, v);
        }
        for (&i, &v) in &model {
            prop_assert_eq!(s[i], v);
        }
        for i in probes {
            prop_assert_eq!(s[i], model.get(&i).copied().unwrap_or(DEFAULT));
        }
    }

    #[test]
    fn default_fill_far_away(writes in writes_1d(), far in prop_oneof![Just(1_000_000isize), Just(-1_000_000), Just(isize::MAX), Just(isize::MIN)]) {
        let mut s = Stretchy1::new(DEFAULT);
        prop_assert_eq!(s[far], DEFAULT);
        for (i, v) in writes { s[i] = v; }
        prop_assert_eq!(s[far], DEFAULT);
        prop_assert!(s.len() <= 80);
    }

    #[test]
    fn offset_invariant_1d(writes in writes_1d()) {
        let mut s = Stretchy1::new(DEFAULT);
        for &(i, v) in &writes { s[i] = v; }
        let expected = hull(writes.iter().map(|&(i, _)| i));
        prop_assert_eq!(s.bounds(), expected);
        prop_assert_eq!(s.offset(), expected.start);
        prop_assert_eq!(s.len(), expected.len());
        prop_assert_eq!(s.iter().count(), s.len());
    }

    #[test]
    fn bulk_round_trip_1d(content in prop::collection::vec(0i32..1000, 0..20), k in index_strategy()) {
        let s = Stretchy1::with_content(DEFAULT, content.iter().copied(), k);
        let n = content.len() as isize;
        for (j, &v) in content.iter().enumerate() {
            prop_assert_eq!(s[k + j as isize], v);
        }
        for i in (k - 5)..k {
            prop_assert_eq!(s[i], DEFAULT);
        }
        for i in (k + n)..(k + n + 5) {
            prop_assert_eq!(s[i], DEFAULT);
        }
        prop_assert_eq!(s.bounds(), Bounds::new(k.min(0), (k + n).max(0)));
    }

    #[test]
    fn growth_idempotence_2d(writes in writes_2d()) {
        let mut s = StretchyN::new(2, DEFAULT).unwrap();
        let mut model = HashMap::new();
        for &(i, v) in &writes {
            s[i] = v;
            model.insert(i, v);
        }
        for (&i, &v) in &model {
            prop_assert_eq!(s[i], v);
        }
        for i in -3..3 {
            for j in -3..3 {
                prop_assert_eq!(s[(i, j)], model.get(&(i, j)).copied().unwrap_or(DEFAULT));
            }
        }
    }

    #[test]
    fn boundaries_only_grow(writes in writes_2d()) {
        let mut s = StretchyN::new(2, DEFAULT).unwrap();
        let mut before = s.boundaries();
        for ((i, j), v) in writes {
            s[(i, j)] = v;
            let after = s.boundaries();
            prop_assert!(covers(after[0], before[0]));
            prop_assert!(covers(after[1], before[1]));
            prop_assert!(after[0].contains(i));
            prop_assert!(after[1].contains(j));
            before = after;
        }
    }

    #[test]
    fn boundaries_are_hull_2d(writes in writes_2d()) {
        let mut s = StretchyN::new(2, DEFAULT).unwrap();
        for &(i, v) in &writes { s[i] = v; }
        let rows = hull(writes.iter().map(|&((i, _), _)| i));
        let columns = hull(writes.iter().map(|&((_, j), _)| j));
        prop_assert_eq!(s.boundaries(), vec![rows, columns]);
    }

    #[test]
    fn bulk_round_trip_2d(rows in rows_strategy(), k0 in index_strategy(), k1 in index_strategy()) {
        let content = rows.iter().map(|r| Nested::row(r.iter().copied()));
        let s = StretchyN::with_content(2, DEFAULT, content, (k0, k1)).unwrap();
        for (r, row) in rows.iter().enumerate() {
            let i = k0 + r as isize;
            for (c, &v) in row.iter().enumerate() {
                prop_assert_eq!(s[(i, k1 + c as isize)], v);
            }
            prop_assert_eq!(s[(i, k1 - 1)], DEFAULT);
            prop_assert_eq!(s[(i, k1 + row.len() as isize)], DEFAULT);
        }
        prop_assert_eq!(s[(k0 - 1, k1)], DEFAULT);
        prop_assert_eq!(s[(k0 + rows.len() as isize, k1)], DEFAULT);
    }
}

// -- Concrete scenarios --

fn dots() -> Stretchy1<char> { Stretchy1::new('.') }

#[test]
fn set_after_gap() {
    let mut s = dots();
    s[2] = '#';
    assert_eq!(s.format("s").unwrap(), "..#");
}

#[test]
fn set_negative() {
    let mut s = dots();
    s[-2] = '#';
    assert_eq!(s.format("s").unwrap(), "#.");
    assert_eq!(s.offset(), -2);
}

#[test]
fn bulk_load_negative_offset() {
    let s = Stretchy1::with_content('.', "12345".chars(), -3);
    assert_eq!(s.offset(), -3);
    assert_eq!(s.format("s").unwrap(), "12345");
}

#[test]
fn literal_comma_separated() {
    let mut s = Stretchy1::with_content(Some("."), [Some("x"), None], 0);
    s.set(2, Some("234"));
    assert_eq!(s.format("r,s").unwrap(), r#""x",None,"234""#);
    let numbers = Stretchy1::with_content(Some(0), [Some(1), None, Some(234)], 0);
    assert_eq!(numbers.format("r,s").unwrap(), "1,None,234");
}

#[test]
fn jagged_bounding_box() {
    let mut s = StretchyN::new(2, '.').unwrap();
    s[(0, 5)] = '#';
    s[(3, -2)] = '#';
    assert_eq!(s.boundaries()[1], Bounds::new(-2, 6));
    assert_eq!(s.plane(0).map(|p| p.len()), Some(6));
}

#[test]
fn three_dimensional_display() {
    let mut s = Stretchy::empty(3, 0).unwrap();
    s.set((0, 0, 0), 1).unwrap();
    s.set((1, -1, 1), 2).unwrap();
    assert_eq!(s.to_string(), [
        "[[[0 0]",
        "  [1 0]]",
        "",
        " [[0 2]",
        "  [0 0]]]",
    ].join("\n"));
}
