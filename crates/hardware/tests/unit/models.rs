//! # Behavioral Model Tests
//!
//! Kernel results through the full driver protocol, and reset idempotence: a reset device
//! is indistinguishable from a freshly reset one whatever it ran before.

use crate::common::harness::{TEST_MAX_CYCLES, TestContext, init_tracing};
use pulsar_harness::config::DriverConfig;
use pulsar_harness::device::{ClockConvention, SimulatedModel};
use pulsar_harness::models::{
    ClockedModel, Doubler, Kernel, MapIncrement, ModelKind, MultiplyAdd, Phase, Squarer,
    SumOfSquares,
};
use pulsar_harness::{Driver, HarnessError};
use rstest::rstest;

fn driver<K: Kernel>(kernel: K, convention: ClockConvention) -> Driver<ClockedModel<K>> {
    init_tracing();
    let config = DriverConfig {
        max_cycles: Some(TEST_MAX_CYCLES),
        ..DriverConfig::default()
    };
    Driver::with_config(ClockedModel::new(kernel, convention), config)
}

#[rstest]
#[case::map(ModelKind::Map, 385)]
#[case::math(ModelKind::Math, 7)]
#[case::map_single(ModelKind::MapSingle, 2)]
fn test_fixed_kernels(#[case] kind: ModelKind, #[case] expected: i64) {
    for convention in ClockConvention::ALL {
        let mut driver = TestContext::new(kind).convention(convention).reset();
        driver.go().unwrap();
        assert_eq!(driver.ret(), expected, "{kind} under {convention}");
    }
}

#[test]
fn test_names_match_registry() {
    for kind in ModelKind::ALL {
        assert_eq!(kind.build().name(), kind.name());
    }
}

#[test]
fn test_arity() {
    assert_eq!(ModelKind::Twice.build().arity(), 1);
    assert_eq!(ModelKind::Square.build().arity(), 1);
    assert_eq!(ModelKind::Map.build().arity(), 0);
    assert_eq!(ModelKind::Math.build().arity(), 0);
    assert_eq!(ModelKind::MapSingle.build().arity(), 0);
}

#[test]
fn test_argument_beyond_arity_is_rejected() {
    let mut driver = TestContext::new(ModelKind::Math).reset();
    let err = driver.set_arg(0, 1).unwrap_err();
    assert!(matches!(err, HarnessError::UnknownArgument { index: 0, arity: 0 }));
    assert!(matches!(driver.call(&[1]), Err(HarnessError::UnknownArgument { .. })));
}

#[test]
fn test_result_register_holds_until_next_go() {
    let mut driver = TestContext::new(ModelKind::Twice).reset();
    assert_eq!(driver.call(&[21]).unwrap(), 42);
    driver.pump();
    driver.pump();
    assert_eq!(driver.ret(), 42);
}

#[test]
fn test_reset_clears_return_register() {
    let mut driver = TestContext::new(ModelKind::Twice).reset();
    assert_eq!(driver.call(&[21]).unwrap(), 42);
    driver.reset();
    assert_eq!(driver.ret(), 0);
    assert!(!driver.model().done());
}

#[rstest]
fn test_reset_is_idempotent_for_map(
    #[values(ClockConvention::SingleEdge, ClockConvention::FullCycle)] convention: ClockConvention,
) {
    let mut fresh = driver(SumOfSquares::default(), convention);
    fresh.reset();
    let initial = fresh.model().snapshot();
    assert_eq!(initial.phase, Phase::Idle);

    let mut used = driver(SumOfSquares::default(), convention);
    used.reset();
    used.go().unwrap();
    assert_eq!(used.ret(), 385);
    // Without a reset the memory keeps its squared contents.
    used.go().unwrap();
    assert_eq!(used.ret(), (1..=10_i64).map(|x| x.pow(4)).sum::<i64>());

    used.reset();
    assert_eq!(used.model().snapshot(), initial);
    used.go().unwrap();
    assert_eq!(used.ret(), 385);
}

#[test]
fn test_reset_is_idempotent_for_every_kernel() {
    fn check<K: Kernel>(kernel: K, args: &[i64]) {
        let mut fresh = driver(kernel.clone(), ClockConvention::FullCycle);
        fresh.reset();
        let initial = fresh.model().snapshot();

        let mut used = driver(kernel, ClockConvention::FullCycle);
        used.reset();
        for _ in 0..3 {
            let _ = used.call(args).unwrap();
        }
        used.reset();
        used.reset();
        assert_eq!(used.model().snapshot(), initial);
    }

    check(Doubler::default(), &[17]);
    check(Squarer::default(), &[31]);
    check(SumOfSquares::default(), &[]);
    check(MultiplyAdd::default(), &[]);
    check(MapIncrement::default(), &[]);
}

#[test]
fn test_reset_during_busy_aborts_the_computation() {
    let mut driver = driver(Squarer::default(), ClockConvention::FullCycle);
    driver.reset();
    driver.set_arg(0, 999).unwrap();
    driver.model_mut().set_go(true);
    driver.cycle();
    driver.cycle();
    assert_eq!(driver.model().phase(), Phase::Busy);

    driver.reset();
    assert_eq!(driver.model().phase(), Phase::Idle);
    assert_eq!(driver.call(&[5]).unwrap(), 25);
}
