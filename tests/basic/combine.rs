use confect::source::{PcgSource, RandomSource};
use confect::{combine, combine3, combine4, generate_seeded, int_range, GenError};
use test_log::test;

#[test]
fn combine_applies_the_function_to_both_outcomes() {
    let g = combine(int_range(2, 2), int_range(3, 3), |a, b| a * b);
    assert_eq!(generate_seeded(&g, 0), Ok(6));
}

#[test]
fn operands_draw_from_independent_streams() {
    let g = combine(
        int_range(0, i64::MAX - 1),
        int_range(0, i64::MAX - 1),
        |a, b| (a, b),
    );
    let mut all_equal = true;
    for seed in 0..50 {
        let (a, b) = generate_seeded(&g, seed).unwrap();
        if a != b {
            all_equal = false;
        }
    }
    assert!(!all_equal, "operand streams are aliased");
}

#[test]
fn first_failing_operand_determines_the_failure() {
    let g = combine(crate::always_fails(), int_range(0, 10), |a, b| (a, b));
    assert_eq!(
        generate_seeded(&g, 0),
        Err(GenError::Propagated {
            combinator: "combine",
            index: 0,
            reason: Box::new(GenError::InvalidIntRange { low: 1, high: 0 }),
        })
    );
}

#[test]
fn later_failures_are_reported_when_earlier_operands_succeed() {
    let g = combine(int_range(0, 10), crate::always_fails(), |a, b| (a, b));
    match generate_seeded(&g, 0).unwrap_err() {
        GenError::Propagated {
            combinator: "combine",
            index: 1,
            ..
        } => {}
        other => panic!("unexpected failure: {other:?}"),
    }
}

#[test]
fn short_circuiting_is_unobservable_through_the_source() {
    // Draws made after a combined generator are identical whether or not an
    // operand failed, because operand streams are split either way.
    let failing = combine(crate::always_fails(), int_range(0, 10), |a, b| (a, b));
    let succeeding = combine(int_range(1, 1), int_range(0, 10), |a, b| (a, b));

    let mut source = PcgSource::from_seed(11);
    let _ = failing.generate(&mut source);
    let after_failure = source.next_u64();

    let mut source = PcgSource::from_seed(11);
    let _ = succeeding.generate(&mut source);
    let after_success = source.next_u64();

    assert_eq!(after_failure, after_success);
}

#[test]
fn higher_arity_variants_combine_all_operands() {
    let g3 = combine3(
        int_range(1, 1),
        int_range(2, 2),
        int_range(3, 3),
        |a, b, c| a + b + c,
    );
    assert_eq!(generate_seeded(&g3, 0), Ok(6));

    let g4 = combine4(
        int_range(1, 1),
        int_range(2, 2),
        int_range(3, 3),
        int_range(4, 4),
        |a, b, c, d| a + b + c + d,
    );
    assert_eq!(generate_seeded(&g4, 0), Ok(10));
}

#[test]
fn higher_arity_failures_carry_the_operand_position() {
    let g3 = combine3(
        int_range(0, 10),
        int_range(0, 10),
        crate::always_fails(),
        |a, b, c| (a, b, c),
    );
    match generate_seeded(&g3, 0).unwrap_err() {
        GenError::Propagated {
            combinator: "combine",
            index: 2,
            ..
        } => {}
        other => panic!("unexpected failure: {other:?}"),
    }
}
