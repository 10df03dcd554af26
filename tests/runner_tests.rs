//! Tests for the value wrapper's blocks and the hierarchical runner that
//! executes them.

use verdict::{deep_equal, Failure, Runner, RunnerConfig, Subject, Test, TestResult, Value};

fn quiet_runner() -> Runner {
    Runner::with_config(RunnerConfig {
        use_colors: false,
        filter: None,
    })
}

mod wrapper_blocks {
    use super::*;

    #[test]
    fn a_passed_check_reports_nothing() {
        let cf = deep_equal(true);
        let vf = Subject::from_check(cf.apply(true));
        let mut test = Test::new();
        vf.no_error()(&mut test);
        assert!(!test.failed());
    }

    #[test]
    fn a_failed_check_reports_its_own_rendering() {
        let cf = deep_equal(true);
        let vf = Subject::from_check(cf.apply(false));
        let mut test = Test::new();
        vf.no_error()(&mut test);
        assert_eq!(
            test.failures(),
            ["values are not deep equal\nGot: bool\n    false\nExpect: bool\n    true"]
        );
    }

    #[test]
    fn named_methods_match_the_explicit_test_form() {
        let vf = Subject::of(true);
        let mut test_named = Test::new();
        vf.deep_equal(false)(&mut test_named);
        let mut test_explicit = Test::new();
        vf.test(deep_equal(false))(&mut test_explicit);
        assert!(test_named.failed());
        assert_eq!(test_named.failures(), test_explicit.failures());
    }

    #[test]
    fn error_fails_only_without_a_held_error() {
        let mut held_value = Test::new();
        Subject::of(42).error()(&mut held_value);
        assert!(held_value.failed());

        let mut held_failure = Test::new();
        Subject::from_check(deep_equal(1).apply(2)).error()(&mut held_failure);
        assert!(!held_failure.failed());

        let mut held_error_value = Test::new();
        Subject::of(Value::error("boom")).error()(&mut held_error_value);
        assert!(!held_error_value.failed());
    }

    #[test]
    fn no_error_reports_a_raw_error_value_as_its_message() {
        let mut test = Test::new();
        Subject::of(Value::error("boom")).no_error()(&mut test);
        assert_eq!(test.failures(), ["boom"]);
    }

    #[test]
    fn error_is_accepts_the_exact_failure() {
        let vf = Subject::from_check(deep_equal(true).apply(false));
        let mut test = Test::new();
        vf.error_is(Failure {
            prefix: "values are not deep equal".to_string(),
            got: "bool\n    false".to_string(),
            expect: Some("bool\n    true".to_string()),
            reject: None,
        })(&mut test);
        assert!(!test.failed());
    }

    #[test]
    fn error_is_mismatch_renders_both_sides() {
        let vf = Subject::from_check(deep_equal(true).apply(false));
        let expected = Failure {
            prefix: "some other failure".to_string(),
            got: "bool\n    true".to_string(),
            expect: None,
            reject: None,
        };
        let mut test = Test::new();
        vf.error_is(expected)(&mut test);
        assert!(test.failed());
        let message = &test.failures()[0];
        assert!(message.starts_with("failure does not match expected failure"));
        assert!(message.contains("values are not deep equal"));
        assert!(message.contains("some other failure"));
    }

    #[test]
    fn error_is_without_a_held_failure_fails() {
        let vf = Subject::from_check(deep_equal(true).apply(true));
        let mut test = Test::new();
        vf.error_is(Failure::default())(&mut test);
        assert!(test.failed());
    }

    #[test]
    fn a_check_applied_to_a_failed_subject_sees_an_error_value() {
        let vf = Subject::from_check(deep_equal(true).apply(false));
        let mut test = Test::new();
        vf.reflect_nil()(&mut test);
        assert!(test.failed());
        assert!(test.failures()[0].contains("error\n"));
    }
}

mod runner_execution {
    use super::*;

    #[test]
    fn blocks_run_under_qualified_names() {
        let mut runner = quiet_runner();
        runner.group("given check deep_equal(true)", |r| {
            let cf = deep_equal(true);
            r.group("when checking against true", |r| {
                let vf = Subject::from_check(cf.apply(true));
                r.run("then there should be no failure", vf.no_error());
            });
            r.group("when checking against false", |r| {
                let vf = Subject::from_check(cf.apply(false));
                r.run("then the failure is reported", vf.error());
            });
        });
        assert_eq!(runner.counts(), (2, 0, 0));
        match &runner.results()[0] {
            TestResult::Pass { name } => assert_eq!(
                name,
                "given check deep_equal(true)/when checking against true/then there should be no failure"
            ),
            other => panic!("expected a pass, got {:?}", other),
        }
    }

    #[test]
    fn sibling_blocks_report_independently() {
        let mut runner = quiet_runner();
        let vf = Subject::of(42);
        runner.run("equality holds", vf.deep_equal(42));
        runner.run("order does not", vf.less_than(42));
        runner.run("still runs after a failure", vf.numeric_equal(42));
        assert_eq!(runner.counts(), (2, 1, 0));
        match &runner.results()[1] {
            TestResult::Fail { message, .. } => {
                assert_eq!(message, "not < 42.000000\nGot: int\n    42")
            }
            other => panic!("expected a failure, got {:?}", other),
        }
    }

    #[test]
    fn groups_restore_their_prefix() {
        let mut runner = quiet_runner();
        runner.group("outer", |r| {
            r.run("inside", |_t| {});
        });
        runner.run("outside", |_t| {});
        let names: Vec<_> = runner
            .results()
            .iter()
            .map(|r| match r {
                TestResult::Pass { name } => name.clone(),
                other => panic!("expected passes, got {:?}", other),
            })
            .collect();
        assert_eq!(names, ["outer/inside", "outside"]);
    }

    #[test]
    fn the_filter_skips_non_matching_leaves() {
        let mut runner = Runner::with_config(RunnerConfig {
            use_colors: false,
            filter: Some("keep".to_string()),
        });
        runner.run("keep this one", |_t| {});
        runner.run("drop this one", |t| t.fail("never executed"));
        assert_eq!(runner.counts(), (1, 0, 1));
        match &runner.results()[1] {
            TestResult::Skipped { reason, .. } => {
                assert_eq!(reason, "filtered out by substring: keep")
            }
            other => panic!("expected a skip, got {:?}", other),
        }
    }

    #[test]
    fn the_filter_matches_against_the_qualified_name() {
        let mut runner = Runner::with_config(RunnerConfig {
            use_colors: false,
            filter: Some("wanted group".to_string()),
        });
        runner.group("wanted group", |r| {
            r.run("leaf", |_t| {});
        });
        runner.run("stray leaf", |_t| {});
        assert_eq!(runner.counts(), (1, 0, 1));
    }

    #[test]
    fn colorize_is_a_no_op_when_colors_are_off() {
        let config = RunnerConfig {
            use_colors: false,
            filter: None,
        };
        assert_eq!(config.colorize("PASS", "\x1b[32m"), "PASS");
        let colored = RunnerConfig {
            use_colors: true,
            filter: None,
        };
        assert_eq!(colored.colorize("PASS", "\x1b[32m"), "\x1b[32mPASS\x1b[0m");
    }
}
