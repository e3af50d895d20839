//! Scalar arithmetic kernels.
//!
//! `twice` finishes on its first busy edge. `square` is a shift-and-add multiplier that
//! retires one multiplier bit per edge, so its latency grows with the bit length of the
//! argument and an argument of zero completes immediately.

use super::handshake::Kernel;

/// `twice(x) = 2 * x`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Doubler {
    operand: i64,
}

impl Kernel for Doubler {
    fn name(&self) -> &'static str {
        "twice"
    }

    fn arity(&self) -> usize {
        1
    }

    fn reset(&mut self) {
        self.operand = 0;
    }

    fn start(&mut self, args: &[i64]) {
        self.operand = args.first().copied().unwrap_or_default();
    }

    fn step(&mut self) -> Option<i64> {
        Some(self.operand.wrapping_add(self.operand))
    }
}

/// `square(x) = x * x`, computed modulo 2^64 like a 64-bit datapath.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Squarer {
    multiplicand: u64,
    multiplier: u64,
    acc: u64,
}

impl Kernel for Squarer {
    fn name(&self) -> &'static str {
        "square"
    }

    fn arity(&self) -> usize {
        1
    }

    fn reset(&mut self) {
        *self = Self::default();
    }

    fn start(&mut self, args: &[i64]) {
        let x = args.first().copied().unwrap_or_default() as u64;
        self.multiplicand = x;
        self.multiplier = x;
        self.acc = 0;
    }

    fn step(&mut self) -> Option<i64> {
        if self.multiplier == 0 {
            return Some(self.acc as i64);
        }
        if self.multiplier & 1 == 1 {
            self.acc = self.acc.wrapping_add(self.multiplicand);
        }
        self.multiplicand <<= 1;
        self.multiplier >>= 1;
        None
    }
}
