#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::missing_const_for_fn
)]

//! Property tests for the parameterized case registry: invocation count,
//! ordering, aggregate semantics, and report determinism.

use std::cell::RefCell;

use casewise_core::{CaseSet, CaseStatus, Registry};
use proptest::prelude::*;

// ═══════════════════════════════════════════════════════════════════════════
// DETERMINISTIC CONFIGURATION
// ═══════════════════════════════════════════════════════════════════════════

/// Create a deterministic proptest configuration for reproducible test runs.
fn deterministic_config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        max_shrink_iters: 1024,
        ..ProptestConfig::default()
    }
}

fn case_strategy() -> impl Strategy<Value = (i64, i64)> {
    (-1000_i64..1000, -1000_i64..1000)
}

fn case_list() -> impl Strategy<Value = Vec<(i64, i64)>> {
    proptest::collection::vec(case_strategy(), 1..32)
}

fn build(cases: &[(i64, i64)]) -> CaseSet<(i64, i64)> {
    let mut chain = CaseSet::uses(cases[0]);
    for case in &cases[1..] {
        chain = chain.and(*case);
    }
    chain
}

proptest! {
    #![proptest_config(deterministic_config())]

    // ═══════════════════════════════════════════════════════════════════════
    // PROPERTY: N registered cases mean exactly N invocations, in order
    // ═══════════════════════════════════════════════════════════════════════
    #[test]
    fn prop_verifier_invoked_once_per_case_in_registration_order(cases in case_list()) {
        let seen = RefCell::new(Vec::new());
        let report = build(&cases)
            .to_show("{} vs {}", |case: &(i64, i64)| {
                seen.borrow_mut().push(*case);
                Ok(())
            })
            .unwrap();

        prop_assert_eq!(&*seen.borrow(), &cases);
        prop_assert_eq!(report.case_count(), cases.len());
    }

    // ═══════════════════════════════════════════════════════════════════════
    // PROPERTY: aggregate fails iff any case fails, siblings unaffected
    // ═══════════════════════════════════════════════════════════════════════
    #[test]
    fn prop_aggregate_reflects_per_case_outcomes(cases in case_list()) {
        let report = build(&cases)
            .to_show("{} <= {}", |&(a, b): &(i64, i64)| {
                casewise_core::ensure(a <= b, format!("{a} > {b}"))
            })
            .unwrap();

        let expected_all = cases.iter().all(|&(a, b)| a <= b);
        prop_assert_eq!(report.all_passed(), expected_all);
        prop_assert_eq!(report.exit_code(), i32::from(!expected_all));

        for (outcome, &(a, b)) in report.outcomes.iter().zip(&cases) {
            let expected = if a <= b { CaseStatus::Passed } else { CaseStatus::Failed };
            prop_assert_eq!(outcome.status, expected);
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // PROPERTY: labels render each case's values positionally
    // ═══════════════════════════════════════════════════════════════════════
    #[test]
    fn prop_labels_render_values_in_positional_order(cases in case_list()) {
        let report = build(&cases)
            .to_show("{} vs {}", |_: &(i64, i64)| Ok(()))
            .unwrap();

        for (outcome, (a, b)) in report.outcomes.iter().zip(&cases) {
            prop_assert_eq!(&outcome.label, &format!("{a} vs {b}"));
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // PROPERTY: a finalized registry's stored report never changes
    // ═══════════════════════════════════════════════════════════════════════
    #[test]
    fn prop_stored_report_is_stable_across_reads(cases in case_list()) {
        let executions = RefCell::new(0_usize);
        let mut it = Registry::new();
        let mut chain = it.uses(cases[0]).unwrap();
        for case in &cases[1..] {
            chain = chain.and(*case).unwrap();
        }
        chain
            .to_show("{} vs {}", |_: &(i64, i64)| {
                *executions.borrow_mut() += 1;
                Ok(())
            })
            .unwrap();

        let first = it.report().cloned().unwrap();
        let second = it.report().cloned().unwrap();
        prop_assert_eq!(first, second);
        prop_assert_eq!(*executions.borrow(), cases.len());
    }
}
