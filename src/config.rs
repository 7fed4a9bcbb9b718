use embassy_time::Duration;
use skylight_composer::mode::ModeConfig;
use skylight_composer::{EngineConfig, ModeId, Rgb};

/// Number of pixels on the strip
pub const LED_COUNT: usize = 273;

/// Offset of the settings record in the persistent storage
pub const SETTINGS_OFFSET: u32 = 0x31_0000;

#[derive(Debug, Clone, Copy)]
pub struct LightConfig {
    pub render_interval: Duration,
    pub brightness_interval: Duration,
    pub brightness_step: u8,
    pub color_step: u8,
    pub swipe_fade_step: u8,
    pub christmas_seam: usize,
}

impl LightConfig {
    pub const fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            render_interval: self.render_interval,
            brightness_interval: self.brightness_interval,
            brightness_step: self.brightness_step,
            modes: ModeConfig {
                color_step: self.color_step,
                swipe_fade_step: self.swipe_fade_step,
                christmas_seam: self.christmas_seam,
            },
        }
    }
}

pub const LIGHT: LightConfig = LightConfig {
    render_interval: Duration::from_millis(5),
    brightness_interval: Duration::from_millis(10),
    brightness_step: 5,
    color_step: 5,
    swipe_fade_step: 5,
    christmas_seam: 0,
};

/// Settings used when storage holds no record
#[derive(Debug, Clone, Copy)]
pub struct DefaultSettings {
    pub mode: ModeId,
    pub brightness: u8,
    pub color: Rgb,
}

pub const DEFAULTS: DefaultSettings = DefaultSettings {
    mode: ModeId::Rainbow,
    brightness: 255,
    color: Rgb { r: 255, g: 0, b: 0 },
};

#[derive(Debug, Clone, Copy)]
pub struct TopicConfig {
    /// Prefix shared by every command and state topic
    pub base: &'static str,
}

pub const TOPICS: TopicConfig = TopicConfig {
    base: "home/light/playroom/skylight",
};
