//! Constant expression kernel.

use super::handshake::Kernel;

const ADDEND: i64 = 1;
const MULTIPLICAND: i64 = 2;
const MULTIPLIER: i64 = 3;

/// `math`: evaluates `1 + 2 * 3` (7), multiplying on the first edge and adding on the
/// second.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiplyAdd {
    product: Option<i64>,
}

impl Kernel for MultiplyAdd {
    fn name(&self) -> &'static str {
        "math"
    }

    fn arity(&self) -> usize {
        0
    }

    fn reset(&mut self) {
        self.product = None;
    }

    fn start(&mut self, _args: &[i64]) {
        self.product = None;
    }

    fn step(&mut self) -> Option<i64> {
        match self.product {
            None => {
                self.product = Some(MULTIPLICAND * MULTIPLIER);
                None
            }
            Some(product) => Some(ADDEND + product),
        }
    }
}
