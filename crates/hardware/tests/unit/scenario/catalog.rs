//! # Catalog Tests
//!
//! Every fixed scenario reproduces its literal expectation, and the full catalog passes
//! under the default configuration.

use pretty_assertions::assert_eq;
use pulsar_harness::config::HarnessConfig;
use pulsar_harness::scenario::report::{EXIT_PASS, batch_exit_code};
use pulsar_harness::scenario::{CATALOG, Check, Runner, Verdict, find};
use pulsar_harness::HarnessError;
use rstest::rstest;

use crate::common::harness::init_tracing;

fn seeded(seed: u64) -> Runner {
    init_tracing();
    let mut config = HarnessConfig::default();
    config.scenario.seed = Some(seed);
    Runner::new(config).unwrap()
}

#[rstest]
#[case::map("map", 385)]
#[case::math("math", 7)]
#[case::map_single("map_single", 2)]
#[case::twice_zero("twice_zero", 0)]
#[case::square_zero("square_zero", 0)]
fn test_fixed_scenario(#[case] name: &str, #[case] expected: i64) {
    let scenario = find(name).unwrap();
    assert!(matches!(scenario.check, Check::Fixed { expected: e, .. } if e == expected));

    let report = seeded(0).run(scenario);
    assert_eq!(report.verdict, Verdict::Passed);
    assert_eq!(report.result, Some(expected));
    assert_eq!(report.seed, None);
    assert_eq!(report.trials, 1);
    assert_eq!(report.to_string(), format!("result: {expected}\ntest passed!"));
}

#[test]
fn test_catalog_names_are_unique() {
    for (i, a) in CATALOG.iter().enumerate() {
        for b in &CATALOG[i + 1..] {
            assert_ne!(a.name, b.name);
        }
    }
}

#[test]
fn test_unknown_scenario() {
    let err = find("cube").unwrap_err();
    assert!(matches!(err, HarnessError::UnknownScenario(ref name) if name == "cube"));
}

#[test]
fn test_run_named_resolves_before_running() {
    let runner = seeded(1);
    let err = runner.run_named(&["math", "cube"]).unwrap_err();
    assert!(matches!(err, HarnessError::UnknownScenario(_)));

    let reports = runner.run_named(&["math", "map"]).unwrap();
    let names: Vec<_> = reports.iter().map(|r| r.scenario).collect();
    assert_eq!(names, ["math", "map"]);
}

#[test]
fn test_full_catalog_passes() {
    let reports = seeded(42).run_all();
    assert_eq!(reports.len(), CATALOG.len());
    for report in &reports {
        assert!(report.passed(), "{}: {}", report.scenario, report);
    }
    assert_eq!(batch_exit_code(&reports), EXIT_PASS);
}
