use core::fmt::Debug;

use smart_leds::{RGB8, SmartLedsWrite, brightness};

use skylight_composer::{LedDriver, Rgb};

/// LED driver over any `smart-leds` writer
///
/// Applies the global brightness scalar on the fly while streaming the
/// frame, so the frame buffer itself is never modified.
pub struct SmartLedDriver<W> {
    writer: W,
}

impl<W> SmartLedDriver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }
}

impl<W> LedDriver for SmartLedDriver<W>
where
    W: SmartLedsWrite<Color = RGB8>,
    W::Error: Debug,
{
    fn write<const N: usize>(&mut self, colors: &[Rgb; N], level: u8) {
        let scaled = brightness(colors.iter().copied(), level);
        if let Err(e) = self.writer.write(scaled) {
            log::warn!("led: frame write failed: {:?}", e);
        }
    }
}
