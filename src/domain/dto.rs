use skylight_composer::{ModeId, Rgb};

/// Requested change to the light; unset fields stay as they are
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LightChangeIntent {
    pub power: Option<bool>,
    pub brightness: Option<u8>,
    /// Implies the static mode
    pub color: Option<Rgb>,
    pub mode: Option<ModeId>,
}

impl LightChangeIntent {
    pub const fn new() -> Self {
        Self {
            power: None,
            brightness: None,
            color: None,
            mode: None,
        }
    }

    #[must_use]
    pub const fn with_power(mut self, on: bool) -> Self {
        self.power = Some(on);
        self
    }

    #[must_use]
    pub const fn with_brightness(mut self, brightness: u8) -> Self {
        self.brightness = Some(brightness);
        self
    }

    #[must_use]
    pub const fn with_color(mut self, color: Rgb) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub const fn with_mode(mut self, mode: ModeId) -> Self {
        self.mode = Some(mode);
        self
    }

    pub const fn is_empty(&self) -> bool {
        self.power.is_none()
            && self.brightness.is_none()
            && self.color.is_none()
            && self.mode.is_none()
    }
}
