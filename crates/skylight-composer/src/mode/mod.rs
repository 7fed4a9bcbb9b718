//! Renderers and the slot holding the active one
//!
//! The slot is a plain enum, so the engine needs no allocator.
//! Only the active variant's animation state exists; switching modes
//! builds a fresh variant and drops the old one.

mod bounce;
mod christmas;
mod light_swipe;
mod meteors;
mod rainbow;
mod static_color;

use crate::color::Rgb;
use crate::frame::FrameBuffer;
use crate::random::RandomSource;

pub use bounce::{
    BASE_SPEED, BounceMode, Direction, MIN_SPEED, RESPAWN_TICKS, SEGMENT_COUNT,
    Segment,
    TRAIL_LENGTH,
};
pub use christmas::ChristmasMode;
pub use light_swipe::LightSwipeMode;
pub use meteors::{METEOR_COUNT, Meteor, MeteorsMode};
pub use rainbow::RainbowMode;
pub use static_color::StaticColorMode;

const MODE_NAME_STATIC: &str = "static";
const MODE_NAME_RAINBOW: &str = "rainbow";
const MODE_NAME_CHRISTMAS: &str = "christmas";
const MODE_NAME_METEORS: &str = "meteors";
const MODE_NAME_LIGHT_SWIPE: &str = "light_swipe";
const MODE_NAME_BOUNCE: &str = "bounce";

// 0 is left undefined so an erased settings record reads as "no mode"
const MODE_ID_STATIC: u8 = 1;
const MODE_ID_RAINBOW: u8 = 2;
const MODE_ID_CHRISTMAS: u8 = 3;
const MODE_ID_METEORS: u8 = 4;
const MODE_ID_LIGHT_SWIPE: u8 = 5;
const MODE_ID_BOUNCE: u8 = 6;

/// Per-tick inputs shared by every renderer
pub struct RenderContext<'a, R: RandomSource> {
    /// Render ticks since the mode was (re)initialized
    pub tick: u32,
    /// Target color chosen by the user
    pub color: Rgb,
    pub rng: &'a mut R,
}

pub trait Mode {
    /// Rewrite the frame buffer for one render tick
    fn render<const N: usize, R: RandomSource>(
        &mut self,
        frame: &mut FrameBuffer<N>,
        ctx: &mut RenderContext<'_, R>,
    );
}

/// Tunables for the renderers
#[derive(Debug, Clone, Copy)]
pub struct ModeConfig {
    /// Per-channel step of the static color ramp
    pub color_step: u8,
    /// Per-channel step of the light swipe fade
    pub swipe_fade_step: u8,
    /// Pixel the christmas pattern mirrors around
    pub christmas_seam: usize,
}

impl Default for ModeConfig {
    fn default() -> Self {
        Self {
            color_step: 5,
            swipe_fade_step: 5,
            christmas_seam: 0,
        }
    }
}

/// Mode identifier, stored as one byte in the settings record
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ModeId {
    Static = MODE_ID_STATIC,
    Rainbow = MODE_ID_RAINBOW,
    Christmas = MODE_ID_CHRISTMAS,
    Meteors = MODE_ID_METEORS,
    LightSwipe = MODE_ID_LIGHT_SWIPE,
    Bounce = MODE_ID_BOUNCE,
}

impl ModeId {
    pub const ALL: [ModeId; 6] = [
        Self::Static,
        Self::Rainbow,
        Self::Christmas,
        Self::Meteors,
        Self::LightSwipe,
        Self::Bounce,
    ];

    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            MODE_ID_STATIC => Self::Static,
            MODE_ID_RAINBOW => Self::Rainbow,
            MODE_ID_CHRISTMAS => Self::Christmas,
            MODE_ID_METEORS => Self::Meteors,
            MODE_ID_LIGHT_SWIPE => Self::LightSwipe,
            MODE_ID_BOUNCE => Self::Bounce,
            _ => return None,
        })
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Static => MODE_NAME_STATIC,
            Self::Rainbow => MODE_NAME_RAINBOW,
            Self::Christmas => MODE_NAME_CHRISTMAS,
            Self::Meteors => MODE_NAME_METEORS,
            Self::LightSwipe => MODE_NAME_LIGHT_SWIPE,
            Self::Bounce => MODE_NAME_BOUNCE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            MODE_NAME_STATIC => Some(Self::Static),
            MODE_NAME_RAINBOW => Some(Self::Rainbow),
            MODE_NAME_CHRISTMAS => Some(Self::Christmas),
            MODE_NAME_METEORS => Some(Self::Meteors),
            MODE_NAME_LIGHT_SWIPE => Some(Self::LightSwipe),
            MODE_NAME_BOUNCE => Some(Self::Bounce),
            _ => None,
        }
    }

    /// Build freshly initialized animation state for this mode
    pub fn to_mode_slot<R: RandomSource>(
        self,
        color: Rgb,
        config: &ModeConfig,
        rng: &mut R,
    ) -> ModeSlot {
        match self {
            Self::Static => {
                ModeSlot::Static(StaticColorMode::new(color, config.color_step))
            }
            Self::Rainbow => ModeSlot::Rainbow(RainbowMode::new()),
            Self::Christmas => {
                ModeSlot::Christmas(ChristmasMode::new(config.christmas_seam))
            }
            Self::Meteors => ModeSlot::Meteors(MeteorsMode::new(rng)),
            Self::LightSwipe => ModeSlot::LightSwipe(LightSwipeMode::new(
                config.swipe_fade_step,
                rng,
            )),
            Self::Bounce => ModeSlot::Bounce(BounceMode::new()),
        }
    }
}

/// Animation state of the active renderer
#[derive(Debug, Clone)]
pub enum ModeSlot {
    Static(StaticColorMode),
    Rainbow(RainbowMode),
    Christmas(ChristmasMode),
    Meteors(MeteorsMode),
    LightSwipe(LightSwipeMode),
    Bounce(BounceMode),
}

impl Default for ModeSlot {
    fn default() -> Self {
        Self::Rainbow(RainbowMode::new())
    }
}

impl ModeSlot {
    /// Dispatch one render tick to the active renderer
    pub fn render<const N: usize, R: RandomSource>(
        &mut self,
        frame: &mut FrameBuffer<N>,
        ctx: &mut RenderContext<'_, R>,
    ) {
        match self {
            Self::Static(mode) => mode.render(frame, ctx),
            Self::Rainbow(mode) => mode.render(frame, ctx),
            Self::Christmas(mode) => mode.render(frame, ctx),
            Self::Meteors(mode) => mode.render(frame, ctx),
            Self::LightSwipe(mode) => mode.render(frame, ctx),
            Self::Bounce(mode) => mode.render(frame, ctx),
        }
    }

    pub fn mode_id(&self) -> ModeId {
        match self {
            Self::Static(_) => ModeId::Static,
            Self::Rainbow(_) => ModeId::Rainbow,
            Self::Christmas(_) => ModeId::Christmas,
            Self::Meteors(_) => ModeId::Meteors,
            Self::LightSwipe(_) => ModeId::LightSwipe,
            Self::Bounce(_) => ModeId::Bounce,
        }
    }
}
