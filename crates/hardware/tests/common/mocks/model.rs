use mockall::mock;
use pulsar_harness::Result;
use pulsar_harness::device::{ClockConvention, SimulatedModel};

mock! {
    pub Model {}
    impl SimulatedModel for Model {
        fn name(&self) -> &'static str;
        fn clock_convention(&self) -> ClockConvention;
        fn set_clock(&mut self, high: bool);
        fn clock(&self) -> bool;
        fn set_reset(&mut self, high: bool);
        fn set_go(&mut self, high: bool);
        fn done(&self) -> bool;
        fn eval(&mut self);
        fn arity(&self) -> usize;
        fn set_arg(&mut self, index: usize, value: i64) -> Result<()>;
        fn ret(&self) -> i64;
    }
}

impl MockModel {
    /// A mock that answers the identification queries every driver makes.
    pub fn declaring(convention: ClockConvention) -> Self {
        let mut mock = Self::new();
        let _ = mock.expect_name().return_const("mock");
        let _ = mock.expect_clock_convention().return_const(convention);
        let _ = mock.expect_ret().return_const(0_i64);
        mock
    }
}
