//! Meteors
//!
//! Two independent particles run along the strip leaving a glowing trail.
//! The whole frame decays by a small random amount every tick.

use super::{Mode, RenderContext};
use crate::color::{Rgb, random_bright_color};
use crate::frame::FrameBuffer;
use crate::math8::is_step;
use crate::random::RandomSource;

pub const METEOR_COUNT: usize = 2;

const MIN_DECAY: u8 = 1;
const MAX_DECAY: u8 = 10;
/// Ticks per step, inclusive range
const MIN_SPEED: u8 = 1;
const MAX_SPEED: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Meteor {
    pub color: Rgb,
    pub position: usize,
    /// Ticks between steps
    pub speed: u8,
}

impl Meteor {
    fn launch<R: RandomSource>(rng: &mut R) -> Self {
        Self {
            color: random_bright_color(rng),
            position: 0,
            speed: rng.in_range(MIN_SPEED, MAX_SPEED),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MeteorsMode {
    meteors: [Meteor; METEOR_COUNT],
}

impl MeteorsMode {
    pub fn new<R: RandomSource>(rng: &mut R) -> Self {
        Self {
            meteors: core::array::from_fn(|_| Meteor::launch(rng)),
        }
    }

    pub fn meteors(&self) -> &[Meteor; METEOR_COUNT] {
        &self.meteors
    }
}

impl Mode for MeteorsMode {
    #[allow(clippy::cast_possible_wrap)]
    fn render<const N: usize, R: RandomSource>(
        &mut self,
        frame: &mut FrameBuffer<N>,
        ctx: &mut RenderContext<'_, R>,
    ) {
        if N == 0 {
            return;
        }

        let decay = ctx.rng.in_range(MIN_DECAY, MAX_DECAY);
        frame.fade_all(decay);

        for meteor in &mut self.meteors {
            if !is_step(ctx.tick, u32::from(meteor.speed)) {
                continue;
            }
            frame.add_wrapped(meteor.position as isize, meteor.color);
            meteor.position += 1;
            if meteor.position >= N {
                *meteor = Meteor::launch(ctx.rng);
            }
        }
    }
}
