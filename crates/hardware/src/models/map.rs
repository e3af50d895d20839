//! Memory-walking kernels.
//!
//! Both programs own an on-chip memory initialised at power-on. They touch one element per
//! clock edge: a map pass rewrites elements in place, then a second pass reads the result
//! out. Reset restores the initial contents, so a reset device recomputes the same answer.

use super::handshake::Kernel;

/// Initial contents of the `map` program's memory.
const SQUARES_INPUT: [i64; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];

/// Initial contents of the `map_single` program's memory.
const SINGLETON_INPUT: [i64; 1] = [1];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pass {
    Map { index: usize },
    Reduce { index: usize, acc: i64 },
}

/// `map`: squares every element of `[1, ..., 10]` in place, then returns their sum (385).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SumOfSquares {
    mem: [i64; 10],
    pass: Pass,
}

impl Default for SumOfSquares {
    fn default() -> Self {
        Self {
            mem: SQUARES_INPUT,
            pass: Pass::Map { index: 0 },
        }
    }
}

impl SumOfSquares {
    /// Returns the memory as the datapath currently sees it.
    pub const fn memory(&self) -> &[i64; 10] {
        &self.mem
    }
}

impl Kernel for SumOfSquares {
    fn name(&self) -> &'static str {
        "map"
    }

    fn arity(&self) -> usize {
        0
    }

    fn reset(&mut self) {
        *self = Self::default();
    }

    fn start(&mut self, _args: &[i64]) {
        self.pass = Pass::Map { index: 0 };
    }

    fn step(&mut self) -> Option<i64> {
        match self.pass {
            Pass::Map { index } => {
                let x = self.mem[index];
                self.mem[index] = x.wrapping_mul(x);
                self.pass = if index + 1 == self.mem.len() {
                    Pass::Reduce { index: 0, acc: 0 }
                } else {
                    Pass::Map { index: index + 1 }
                };
                None
            }
            Pass::Reduce { index, acc } => {
                let acc = acc.wrapping_add(self.mem[index]);
                if index + 1 == self.mem.len() {
                    Some(acc)
                } else {
                    self.pass = Pass::Reduce { index: index + 1, acc };
                    None
                }
            }
        }
    }
}

/// `map_single`: adds one to each element of `[1]` and returns element 0 (2).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapIncrement {
    mem: [i64; 1],
    mapped: bool,
}

impl Default for MapIncrement {
    fn default() -> Self {
        Self {
            mem: SINGLETON_INPUT,
            mapped: false,
        }
    }
}

impl Kernel for MapIncrement {
    fn name(&self) -> &'static str {
        "map_single"
    }

    fn arity(&self) -> usize {
        0
    }

    fn reset(&mut self) {
        *self = Self::default();
    }

    fn start(&mut self, _args: &[i64]) {
        self.mapped = false;
    }

    fn step(&mut self) -> Option<i64> {
        if self.mapped {
            return Some(self.mem[0]);
        }
        for x in &mut self.mem {
            *x = x.wrapping_add(1);
        }
        self.mapped = true;
        None
    }
}
