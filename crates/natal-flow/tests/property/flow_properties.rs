use proptest::prelude::*;

use natal_catalog::builtin;
use natal_core::model::OptionId;
use natal_flow::DiagnosticFlow;

const IDS: [&str; 3] = ["a", "b", "c"];

#[derive(Debug, Clone)]
enum Op {
    Select(usize, usize),
    Advance,
    Retreat,
    Restart,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        // Indexes deliberately exceed the catalog so out-of-range selects
        // get exercised too; those are refused and must change nothing.
        (0usize..6, 0usize..3).prop_map(|(q, o)| Op::Select(q, o)),
        Just(Op::Advance),
        Just(Op::Retreat),
        Just(Op::Restart),
    ]
}

fn apply(flow: &mut DiagnosticFlow, op: &Op) {
    match op {
        Op::Select(question, option) => {
            let _ = flow.select_option(*question, OptionId::from(IDS[*option]));
        }
        Op::Advance => {
            flow.advance().unwrap();
        }
        Op::Retreat => {
            flow.retreat();
        }
        Op::Restart => flow.restart(),
    }
}

proptest! {
    #[test]
    fn index_stays_bounded_and_result_implies_completeness(
        ops in prop::collection::vec(arb_op(), 0..48),
    ) {
        let mut flow = DiagnosticFlow::new(builtin());
        let total = flow.catalog().len();

        for op in &ops {
            apply(&mut flow, op);

            prop_assert!(flow.current_index() < total);
            if flow.is_showing_result() {
                // The machine only completes once every question is answered.
                prop_assert_eq!(flow.progress(), (total, total));
            } else {
                prop_assert!(flow.result().is_none());
            }
        }
    }

    #[test]
    fn result_is_frozen_until_restart(ops in prop::collection::vec(arb_op(), 0..48)) {
        let mut flow = DiagnosticFlow::new(builtin());
        let mut frozen = None;

        for op in &ops {
            apply(&mut flow, op);

            if matches!(op, Op::Restart) {
                frozen = None;
            }
            match (&frozen, flow.result()) {
                (None, Some(result)) => frozen = Some(result.clone()),
                (Some(expected), Some(result)) => prop_assert_eq!(expected, result),
                (Some(_), None) => prop_assert!(false, "result vanished without restart"),
                (None, None) => {}
            }
        }
    }

    #[test]
    fn answers_never_disappear_except_on_restart(
        ops in prop::collection::vec(arb_op(), 0..48),
    ) {
        let mut flow = DiagnosticFlow::new(builtin());
        let mut answered = 0usize;

        for op in &ops {
            apply(&mut flow, op);

            let (now, _) = flow.progress();
            if matches!(op, Op::Restart) {
                prop_assert_eq!(now, 0);
            } else {
                prop_assert!(now >= answered);
            }
            answered = now;
        }
    }
}
