//! Rainbow gradient
//!
//! Paints one full hue cycle across the strip and shifts it by a fixed
//! phase decrement every tick.

use super::{Mode, RenderContext};
use crate::color::hue_color;
use crate::frame::FrameBuffer;
use crate::random::RandomSource;

/// Phase decrement per tick; hue is the high byte of the phase
const PHASE_STEP: u16 = 64;

#[derive(Debug, Clone, Default)]
pub struct RainbowMode {
    phase: u16,
}

impl RainbowMode {
    pub const fn new() -> Self {
        Self { phase: 0 }
    }

    pub const fn phase(&self) -> u16 {
        self.phase
    }
}

impl Mode for RainbowMode {
    #[allow(clippy::cast_possible_truncation)]
    fn render<const N: usize, R: RandomSource>(
        &mut self,
        frame: &mut FrameBuffer<N>,
        _ctx: &mut RenderContext<'_, R>,
    ) {
        self.phase = self.phase.wrapping_sub(PHASE_STEP);
        let base_hue = (self.phase >> 8) as u8;

        for (i, pixel) in frame.pixels_mut().iter_mut().enumerate() {
            let offset = (i * 256 / N) as u8;
            *pixel = hue_color(base_hue.wrapping_add(offset));
        }
    }
}
