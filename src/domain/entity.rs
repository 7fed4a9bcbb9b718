use skylight_composer::{LightSnapshot, ModeId, Rgb};

use crate::config::DEFAULTS;

/// Settings persisted across power cycles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightSettings {
    pub mode: ModeId,
    pub brightness: u8,
    pub color: Rgb,
}

impl LightSettings {
    pub const fn new() -> Self {
        Self {
            mode: DEFAULTS.mode,
            brightness: DEFAULTS.brightness,
            color: DEFAULTS.color,
        }
    }
}

impl Default for LightSettings {
    fn default() -> Self {
        Self::new()
    }
}

/// Represents the light state as seen from outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightState {
    pub power: bool,
    /// Pending mode during a transition
    pub mode: ModeId,
    pub brightness: u8,
    pub color: Rgb,
}

impl LightState {
    pub const fn settings(&self) -> LightSettings {
        LightSettings {
            mode: self.mode,
            brightness: self.brightness,
            color: self.color,
        }
    }
}

impl From<LightSnapshot> for LightState {
    fn from(snapshot: LightSnapshot) -> Self {
        Self {
            power: snapshot.is_on,
            mode: snapshot.mode,
            brightness: snapshot.brightness,
            color: snapshot.color,
        }
    }
}
