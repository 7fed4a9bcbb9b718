use smart_leds::RGB8;
use smart_leds::hsv::{Hsv, hsv2rgb};

use crate::math8::step_toward;
use crate::random::RandomSource;

pub type Rgb = RGB8;

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
pub const WHITE: Rgb = Rgb { r: 255, g: 255, b: 255 };
pub const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
pub const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };

/// Add two colors channel by channel, saturating at 255
#[inline]
pub fn add_saturating(a: Rgb, b: Rgb) -> Rgb {
    Rgb {
        r: a.r.saturating_add(b.r),
        g: a.g.saturating_add(b.g),
        b: a.b.saturating_add(b.b),
    }
}

/// Subtract `amount` from every channel, clamping at 0
#[inline]
pub fn fade_by(color: Rgb, amount: u8) -> Rgb {
    Rgb {
        r: color.r.saturating_sub(amount),
        g: color.g.saturating_sub(amount),
        b: color.b.saturating_sub(amount),
    }
}

/// Move every channel of `current` toward `target` by at most `step`
#[inline]
pub fn step_color(current: Rgb, target: Rgb, step: u8) -> Rgb {
    Rgb {
        r: step_toward(current.r, target.r, step),
        g: step_toward(current.g, target.g, step),
        b: step_toward(current.b, target.b, step),
    }
}

#[inline]
pub fn is_black(color: Rgb) -> bool {
    color == BLACK
}

/// Fully saturated, full-value color at the given hue
#[inline]
pub fn hue_color(hue: u8) -> Rgb {
    hsv2rgb(Hsv {
        hue,
        sat: 255,
        val: 255,
    })
}

/// Pick a bright color with a random hue
pub fn random_bright_color<R: RandomSource>(rng: &mut R) -> Rgb {
    hue_color(rng.next_u8())
}

