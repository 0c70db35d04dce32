use confect::source::{PcgSource, RandomSource};
use confect::{choice, generate_seeded, int_range, pick_one, GenError, Generator};
use std::collections::HashSet;
use test_log::test;

#[test]
fn empty_choice_fails_before_consuming_randomness() {
    let g: Generator<u64> = choice(vec![]);
    let mut source = PcgSource::from_seed(13);
    assert_eq!(
        g.generate(&mut source),
        Err(GenError::EmptyOptions { combinator: "choice" })
    );
    assert_eq!(source.next_u64(), crate::drain(13, 1)[0]);
}

#[test]
fn choice_only_yields_members() {
    let g = choice(vec![int_range(1, 1), int_range(2, 2), int_range(3, 3)]);
    let mut seen = HashSet::new();
    for seed in 0..300 {
        seen.insert(generate_seeded(&g, seed).unwrap());
    }
    assert_eq!(seen, HashSet::from([1, 2, 3]));
}

#[test]
fn inner_failures_propagate_unchanged() {
    let g = choice(vec![crate::always_fails()]);
    assert_eq!(
        generate_seeded(&g, 0),
        Err(GenError::InvalidIntRange { low: 1, high: 0 })
    );
}

#[test]
fn pick_one_selects_only_supplied_literals() {
    let g = pick_one(vec!["a", "b", "c"]);
    let mut seen = HashSet::new();
    for seed in 0..300 {
        seen.insert(generate_seeded(&g, seed).unwrap());
    }
    assert_eq!(seen, HashSet::from(["a", "b", "c"]));
}

#[test]
fn empty_pick_one_fails() {
    let g: Generator<u8> = pick_one(vec![]);
    assert_eq!(
        generate_seeded(&g, 0),
        Err(GenError::EmptyOptions { combinator: "pick_one" })
    );
}
