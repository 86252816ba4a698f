// --- File: random.rs ---
use rand::Rng;
use rand::rngs::StdRng;
use std::collections::VecDeque;

pub type SimRng = StdRng;

/// Source of uniform integers for the simulation.
///
/// `range(low, high)` yields a value in `[low, high)`, or `low` when the
/// range is empty.
pub trait RandomSource {
    fn range(&mut self, low: i32, high: i32) -> i32;
}

#[inline]
fn gen_in<R: Rng + ?Sized>(rng: &mut R, low: i32, high: i32) -> i32 {
    if high <= low {
        low
    } else {
        rng.gen_range(low..high)
    }
}

impl RandomSource for StdRng {
    fn range(&mut self, low: i32, high: i32) -> i32 {
        gen_in(self, low, high)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn range(&mut self, low: i32, high: i32) -> i32 {
        (**self).range(low, high)
    }
}

/// Replays a fixed sequence of draws, then repeats `fallback` forever.
///
/// Each value is clamped into the requested range, so a script of zeros
/// means "no movement" for offsets and "lowest coordinate" for placement.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    values: VecDeque<i32>,
    fallback: i32,
}

impl ScriptedRandom {
    pub fn new<I: IntoIterator<Item = i32>>(values: I, fallback: i32) -> Self {
        Self {
            values: values.into_iter().collect(),
            fallback,
        }
    }

    /// Always returns `value` (clamped per call).
    pub fn constant(value: i32) -> Self {
        Self::new(std::iter::empty(), value)
    }

    pub fn push(&mut self, value: i32) {
        self.values.push_back(value);
    }

    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn range(&mut self, low: i32, high: i32) -> i32 {
        let value = self.values.pop_front().unwrap_or(self.fallback);
        if high <= low {
            low
        } else {
            value.clamp(low, high - 1)
        }
    }
}

// --- End of File: random.rs ---
