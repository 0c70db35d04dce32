use confect::{generate_seeded, sample_bernoulli, sample_bernoulli_with};
use std::collections::HashSet;
use test_log::test;

#[test]
fn every_subset_appears_and_order_is_preserved() {
    let g = sample_bernoulli(vec!['x', 'y']);
    let mut seen = HashSet::new();
    for seed in 0..2000 {
        let subset = generate_seeded(&g, seed).unwrap();
        match subset.as_slice() {
            [] | ['x'] | ['y'] | ['x', 'y'] => {}
            other => panic!("reordered or invented elements: {other:?}"),
        }
        seen.insert(subset);
    }
    assert_eq!(seen.len(), 4);
}

#[test]
fn empty_input_yields_an_empty_subset() {
    let g = sample_bernoulli(Vec::<u8>::new());
    for seed in 0..10 {
        assert_eq!(generate_seeded(&g, seed), Ok(vec![]));
    }
}

#[test]
fn extreme_probabilities_are_degenerate() {
    let all = sample_bernoulli_with(vec![1, 2, 3], 1.0);
    let none = sample_bernoulli_with(vec![1, 2, 3], 0.0);
    for seed in 0..100 {
        assert_eq!(generate_seeded(&all, seed), Ok(vec![1, 2, 3]));
        assert_eq!(generate_seeded(&none, seed), Ok(vec![]));
    }
}

#[test]
#[should_panic(expected = "inclusion probability")]
fn out_of_range_probability_panics_at_construction() {
    let _ = sample_bernoulli_with(vec![1], 1.5);
}

#[test]
#[should_panic(expected = "inclusion probability")]
fn nan_probability_panics_at_construction() {
    let _ = sample_bernoulli_with(vec![1], f64::NAN);
}
