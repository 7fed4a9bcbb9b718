//! Christmas chase
//!
//! Blocks of red, green and white march toward a seam. Both halves of the
//! strip are painted from the seam outward so they move symmetrically.

use super::{Mode, RenderContext};
use crate::color::{GREEN, RED, Rgb, WHITE};
use crate::frame::FrameBuffer;
use crate::math8::is_step;
use crate::random::RandomSource;

const PALETTE: [Rgb; 3] = [RED, GREEN, WHITE];
/// Pixels per color block
const BLOCK_SIZE: usize = 4;
/// Render ticks between phase steps
const STEP_EVERY: u32 = 25;

#[derive(Debug, Clone)]
pub struct ChristmasMode {
    phase: usize,
    seam: usize,
}

impl ChristmasMode {
    pub const fn new(seam: usize) -> Self {
        Self { phase: 0, seam }
    }

    pub const fn phase(&self) -> usize {
        self.phase
    }

    /// Palette color for a distance from the seam
    pub fn color_at(&self, offset: usize) -> Rgb {
        PALETTE[(self.phase.wrapping_add(offset) / BLOCK_SIZE) % PALETTE.len()]
    }
}

impl Mode for ChristmasMode {
    #[allow(clippy::cast_possible_wrap)]
    fn render<const N: usize, R: RandomSource>(
        &mut self,
        frame: &mut FrameBuffer<N>,
        ctx: &mut RenderContext<'_, R>,
    ) {
        if N == 0 {
            return;
        }
        if ctx.tick > 0 && is_step(ctx.tick, STEP_EVERY) {
            self.phase = self.phase.wrapping_add(1);
        }

        let seam = (self.seam % N) as isize;
        for offset in 0..=N / 2 {
            let color = self.color_at(offset);
            let delta = offset as isize;
            frame.set_wrapped(seam + delta, color);
            frame.set_wrapped(seam - delta, color);
        }
    }
}
