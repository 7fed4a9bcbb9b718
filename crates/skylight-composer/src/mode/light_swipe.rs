//! Light swipe
//!
//! A white head sweeps from the first to the last pixel. Pixels behind the
//! head fade toward the new color, pixels ahead toward the previous one.
//! At the end of the strip a new random color is drawn.

use core::cmp::Ordering;

use super::{Mode, RenderContext};
use crate::color::{BLACK, Rgb, WHITE, random_bright_color, step_color};
use crate::frame::FrameBuffer;
use crate::random::RandomSource;

#[derive(Debug, Clone)]
pub struct LightSwipeMode {
    head: usize,
    previous: Rgb,
    target: Rgb,
    fade_step: u8,
}

impl LightSwipeMode {
    pub fn new<R: RandomSource>(fade_step: u8, rng: &mut R) -> Self {
        Self {
            head: 0,
            previous: BLACK,
            target: random_bright_color(rng),
            fade_step,
        }
    }

    pub const fn head(&self) -> usize {
        self.head
    }

    pub const fn previous(&self) -> Rgb {
        self.previous
    }

    pub const fn target(&self) -> Rgb {
        self.target
    }
}

impl Mode for LightSwipeMode {
    fn render<const N: usize, R: RandomSource>(
        &mut self,
        frame: &mut FrameBuffer<N>,
        ctx: &mut RenderContext<'_, R>,
    ) {
        if N == 0 {
            return;
        }

        let step = self.fade_step;
        for (i, pixel) in frame.pixels_mut().iter_mut().enumerate() {
            *pixel = match i.cmp(&self.head) {
                Ordering::Less => step_color(*pixel, self.target, step),
                Ordering::Greater => step_color(*pixel, self.previous, step),
                Ordering::Equal => WHITE,
            };
        }

        self.head += 1;
        if self.head >= N {
            self.head = 0;
            self.previous = self.target;
            self.target = random_bright_color(ctx.rng);
            log::debug!("light swipe: next color {:?}", self.target);
        }
    }
}
