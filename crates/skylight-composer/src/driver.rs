//! Output port of the engine

use crate::color::Rgb;

/// Sink for finished frames.
///
/// The frame is never pre-scaled; the driver owns the brightness math.
pub trait LedDriver {
    /// Push a full frame to the strip.
    ///
    /// `brightness` is the global scalar (0-255) the driver applies on output.
    fn write<const N: usize>(&mut self, colors: &[Rgb; N], brightness: u8);
}
