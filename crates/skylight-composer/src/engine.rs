//! Light Engine - Main state machine orchestrator
//!
//! The `LightEngine` owns every piece of mutable light state and is the only
//! writer of it:
//! - Steps the brightness ramp on its own cadence
//! - Sequences mode changes through a fade to black
//! - Drives the active renderer and pushes frames to the driver
//!
//! The engine never reads a clock. The caller polls [`LightEngine::tick`]
//! with the current monotonic time from a cooperative loop; ticks that are
//! not yet due return immediately.

use embassy_time::{Duration, Instant};

use crate::brightness::{BrightnessController, DEFAULT_BRIGHTNESS_STEP};
use crate::color::{RED, Rgb};
use crate::driver::LedDriver;
use crate::frame::FrameBuffer;
use crate::mode::{ModeConfig, ModeId, ModeSlot, RenderContext};
use crate::random::RandomSource;

/// Default render tick interval
const DEFAULT_RENDER_INTERVAL: Duration = Duration::from_millis(5);
/// Default brightness ramp interval
const DEFAULT_BRIGHTNESS_INTERVAL: Duration = Duration::from_millis(10);

/// Engine timing and renderer tunables
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    pub render_interval: Duration,
    pub brightness_interval: Duration,
    /// Brightness units per brightness tick
    pub brightness_step: u8,
    pub modes: ModeConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            render_interval: DEFAULT_RENDER_INTERVAL,
            brightness_interval: DEFAULT_BRIGHTNESS_INTERVAL,
            brightness_step: DEFAULT_BRIGHTNESS_STEP,
            modes: ModeConfig::default(),
        }
    }
}

/// Mode state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeState {
    /// Rendering the mode
    Idle(ModeId),
    /// Fading `from` to black, `to` takes over once the strip is dark
    Transitioning { from: ModeId, to: ModeId },
}

/// Externally observable light state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightSnapshot {
    /// Requested power state
    pub is_on: bool,
    /// Active mode, or the pending one during a transition
    pub mode: ModeId,
    /// Saved brightness
    pub brightness: u8,
    /// Brightness currently applied to the strip
    pub live_brightness: u8,
    pub color: Rgb,
}

/// Light Engine - the main orchestrator
///
/// Generic over `D: LedDriver` and `R: RandomSource` to support different
/// hardware backends.
pub struct LightEngine<D: LedDriver, R: RandomSource, const N: usize> {
    driver: D,
    rng: R,
    config: EngineConfig,
    frame: FrameBuffer<N>,
    brightness: BrightnessController,
    /// Animation state of the mode being rendered
    slot: ModeSlot,
    state: ModeState,
    /// Target color shared by the renderers
    color: Rgb,
    /// Render ticks since the slot was initialized
    tick_count: u32,
    next_render: Option<Instant>,
    next_brightness: Option<Instant>,
    /// Brightness of the last frame pushed to the driver
    last_output: Option<u8>,
}

impl<D: LedDriver, R: RandomSource, const N: usize> LightEngine<D, R, N> {
    /// Create a powered-off engine showing the default mode
    pub fn new(driver: D, rng: R, config: EngineConfig) -> Self {
        let slot = ModeSlot::default();
        Self {
            driver,
            rng,
            config,
            frame: FrameBuffer::new(),
            brightness: BrightnessController::new(
                u8::MAX,
                config.brightness_step,
            ),
            state: ModeState::Idle(slot.mode_id()),
            slot,
            color: RED,
            tick_count: 0,
            next_render: None,
            next_brightness: None,
            last_output: None,
        }
    }

    /// Load mode, brightness and color without a transition
    pub fn restore(&mut self, mode: ModeId, brightness: u8, color: Rgb) {
        self.color = color;
        self.brightness.set_saved(brightness);
        self.reset_slot(mode);
        if self.brightness.is_on() {
            self.brightness.restore();
        }
        log::info!(
            "light restored: mode={} brightness={} color={},{},{}",
            mode.as_str(),
            self.brightness.saved(),
            color.r,
            color.g,
            color.b
        );
    }

    pub fn power_on(&mut self) {
        self.brightness.power_on();
        // A pending transition keeps the strip dark until it completes
        if self.is_transitioning() {
            self.brightness.fade_out();
        }
        log::info!("light power on");
    }

    pub fn power_off(&mut self) {
        self.brightness.power_off();
        log::info!("light power off");
    }

    /// Remember a brightness; the live target follows only when on and idle
    pub fn set_brightness(&mut self, brightness: u8) {
        if self.brightness.is_on() && !self.is_transitioning() {
            self.brightness.set_target(brightness);
        } else {
            self.brightness.set_saved(brightness);
        }
    }

    /// Set the target color and switch to the static mode
    pub fn set_color(&mut self, color: Rgb) {
        self.color = color;
        self.request_mode(ModeId::Static);
    }

    /// Fade through black to `mode` unless it is already active or pending
    pub fn request_mode(&mut self, mode: ModeId) {
        if mode == self.mode() {
            return;
        }
        let from = self.slot.mode_id();
        self.state = ModeState::Transitioning { from, to: mode };
        self.brightness.fade_out();
        log::info!("mode transition {} -> {}", from.as_str(), mode.as_str());
    }

    /// Pending mode during a transition, otherwise the active one
    pub fn mode(&self) -> ModeId {
        match self.state {
            ModeState::Idle(mode) => mode,
            ModeState::Transitioning { to, .. } => to,
        }
    }

    /// Mode whose animation is currently rendered
    pub fn current_mode(&self) -> ModeId {
        self.slot.mode_id()
    }

    pub fn snapshot(&self) -> LightSnapshot {
        LightSnapshot {
            is_on: self.brightness.is_on(),
            mode: self.mode(),
            brightness: self.brightness.saved(),
            live_brightness: self.brightness.current(),
            color: self.color,
        }
    }

    pub fn frame(&self) -> &FrameBuffer<N> {
        &self.frame
    }

    pub fn brightness(&self) -> &BrightnessController {
        &self.brightness
    }

    pub fn state(&self) -> ModeState {
        self.state
    }

    pub fn slot(&self) -> &ModeSlot {
        &self.slot
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Advance the engine to `now`.
    ///
    /// Steps brightness when due, evaluates the transition guard, then
    /// renders and outputs a frame when the render tick is due. Returns
    /// true when a frame was pushed to the driver.
    pub fn tick(&mut self, now: Instant) -> bool {
        let interval = self.config.brightness_interval;
        if is_due(&mut self.next_brightness, now, interval) {
            self.brightness.tick();
        }
        self.update_state();

        if !is_due(&mut self.next_render, now, self.config.render_interval) {
            return false;
        }

        if self.brightness.is_quiescent() {
            // One dark frame after shutdown, then nothing until power on
            if self.last_output == Some(0) {
                return false;
            }
            self.output();
            return true;
        }

        let mut ctx = RenderContext {
            tick: self.tick_count,
            color: self.color,
            rng: &mut self.rng,
        };
        self.slot.render(&mut self.frame, &mut ctx);
        self.tick_count = self.tick_count.wrapping_add(1);
        self.output();
        true
    }

    const fn is_transitioning(&self) -> bool {
        matches!(self.state, ModeState::Transitioning { .. })
    }

    /// Complete a pending transition once the strip is dark
    fn update_state(&mut self) {
        let ModeState::Transitioning { to, .. } = self.state else {
            return;
        };
        if self.brightness.current() != 0 {
            return;
        }
        self.reset_slot(to);
        if self.brightness.is_on() {
            self.brightness.restore();
        }
        log::debug!("mode transition complete: {}", to.as_str());
    }

    fn reset_slot(&mut self, mode: ModeId) {
        self.slot =
            mode.to_mode_slot(self.color, &self.config.modes, &mut self.rng);
        self.state = ModeState::Idle(mode);
        self.frame.clear();
        self.tick_count = 0;
    }

    fn output(&mut self) {
        let brightness = self.brightness.current();
        self.driver.write(self.frame.pixels(), brightness);
        self.last_output = Some(brightness);
    }
}

/// Check a cadence deadline, scheduling the next one when it has passed
fn is_due(
    next: &mut Option<Instant>,
    now: Instant,
    interval: Duration,
) -> bool {
    match *next {
        Some(at) if now < at => false,
        _ => {
            *next = Some(now + interval);
            true
        }
    }
}
