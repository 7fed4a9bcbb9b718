//! Pseudo-random source abstraction
//!
//! Renderers only need a handful of small random numbers per tick.
//! Any `rand_core::RngCore` (for example `rand::rngs::SmallRng` seeded
//! from the hardware RNG) works as a source out of the box.

use rand_core::RngCore;

pub trait RandomSource {
    /// Next raw 32-bit value
    fn next_u32(&mut self) -> u32;

    /// Uniform-ish value in `0..bound`; returns 0 for an empty range
    fn below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        self.next_u32() % bound
    }

    /// Uniform-ish value in `low..=high`
    #[allow(clippy::cast_possible_truncation)]
    fn in_range(&mut self, low: u8, high: u8) -> u8 {
        if high <= low {
            return low;
        }
        let span = u32::from(high - low) + 1;
        low + self.below(span) as u8
    }

    #[allow(clippy::cast_possible_truncation)]
    fn next_u8(&mut self) -> u8 {
        (self.next_u32() >> 24) as u8
    }

    fn next_bool(&mut self) -> bool {
        self.next_u32() & 1 == 1
    }
}

impl<R: RngCore> RandomSource for R {
    fn next_u32(&mut self) -> u32 {
        RngCore::next_u32(self)
    }
}
