//! Brightness controller
//!
//! Ramps the live brightness scalar toward a target at a bounded step per
//! tick. Used for:
//! - Global brightness setting
//! - Fade-in when turning on
//! - Fade-out when turning off
//! - Fade-through-black during mode changes

use crate::math8::step_toward;

/// Default brightness step per brightness tick
pub const DEFAULT_BRIGHTNESS_STEP: u8 = 5;

/// Power state of the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerState {
    /// Powered on, rendering
    On,
    /// Power off requested, brightness still ramping down
    ShuttingDown,
    /// Off and fully dark; rendering may be skipped
    Off,
}

#[derive(Debug, Clone)]
pub struct BrightnessController {
    current: u8,
    target: u8,
    /// Last nonzero brightness, restored on power on
    saved: u8,
    step: u8,
    power: PowerState,
}

impl Default for BrightnessController {
    fn default() -> Self {
        Self::new(255, DEFAULT_BRIGHTNESS_STEP)
    }
}

impl BrightnessController {
    /// Create a powered-off controller that will restore `saved` on power on
    pub const fn new(saved: u8, step: u8) -> Self {
        Self {
            current: 0,
            target: 0,
            saved: if saved == 0 { 255 } else { saved },
            step: if step == 0 { 1 } else { step },
            power: PowerState::Off,
        }
    }

    pub const fn current(&self) -> u8 {
        self.current
    }

    pub const fn target(&self) -> u8 {
        self.target
    }

    pub const fn saved(&self) -> u8 {
        self.saved
    }

    pub const fn step(&self) -> u8 {
        self.step
    }

    pub const fn power(&self) -> PowerState {
        self.power
    }

    /// Whether power on was requested last
    pub const fn is_on(&self) -> bool {
        matches!(self.power, PowerState::On)
    }

    /// Off and dark, nothing left to render
    pub const fn is_quiescent(&self) -> bool {
        matches!(self.power, PowerState::Off) && self.current == 0
    }

    pub const fn is_ramping(&self) -> bool {
        self.current != self.target
    }

    /// Record a desired brightness, remembering it when nonzero
    pub fn set_target(&mut self, brightness: u8) {
        if brightness != 0 {
            self.saved = brightness;
        }
        self.target = brightness;
    }

    /// Remember a brightness without touching the live target
    pub fn set_saved(&mut self, brightness: u8) {
        if brightness != 0 {
            self.saved = brightness;
        }
    }

    /// Drive the target to zero without forgetting the saved value
    pub fn fade_out(&mut self) {
        self.target = 0;
    }

    /// Drive the target back to the saved value
    pub fn restore(&mut self) {
        self.target = self.saved;
    }

    pub fn power_on(&mut self) {
        self.power = PowerState::On;
        self.target = self.saved;
    }

    pub fn power_off(&mut self) {
        if self.power == PowerState::On {
            self.power = PowerState::ShuttingDown;
        }
        self.target = 0;
    }

    /// Advance one brightness tick.
    ///
    /// Returns true when the live value changed.
    pub fn tick(&mut self) -> bool {
        let changed = self.current != self.target;
        if changed {
            self.current = step_toward(self.current, self.target, self.step);
        }
        if self.power == PowerState::ShuttingDown && self.current == 0 {
            self.power = PowerState::Off;
        }
        changed
    }
}
