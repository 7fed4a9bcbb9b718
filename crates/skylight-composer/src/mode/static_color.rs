//! Static color fill
//!
//! Fills all pixels with a single color and ramps toward a new target
//! color at a bounded per-channel step.

use super::{Mode, RenderContext};
use crate::color::{Rgb, step_color};
use crate::frame::FrameBuffer;
use crate::random::RandomSource;

#[derive(Debug, Clone)]
pub struct StaticColorMode {
    /// Color currently written to the frame
    current: Rgb,
    step: u8,
    /// Frame must be refilled even without a color change
    dirty: bool,
}

impl StaticColorMode {
    pub fn new(color: Rgb, step: u8) -> Self {
        Self {
            current: color,
            step,
            dirty: true,
        }
    }

    /// Get the currently displayed color
    pub fn color(&self) -> Rgb {
        self.current
    }
}

impl Mode for StaticColorMode {
    fn render<const N: usize, R: RandomSource>(
        &mut self,
        frame: &mut FrameBuffer<N>,
        ctx: &mut RenderContext<'_, R>,
    ) {
        let next = step_color(self.current, ctx.color, self.step);
        if next == self.current && !self.dirty {
            return;
        }
        self.current = next;
        self.dirty = false;
        frame.fill(next);
    }
}
