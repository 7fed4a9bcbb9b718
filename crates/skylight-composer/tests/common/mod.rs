//! Shared helpers for the composer integration tests

#![allow(dead_code)]

use embassy_time::Instant;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use skylight_composer::{EngineConfig, LedDriver, LightEngine, Rgb};

pub const LEDS: usize = 32;

/// One frame pushed to the driver
#[derive(Debug, Clone)]
pub struct Written {
    pub pixels: Vec<Rgb>,
    pub brightness: u8,
}

/// Driver that keeps every frame it is asked to output
#[derive(Debug, Default)]
pub struct RecordingDriver {
    pub frames: Vec<Written>,
}

impl LedDriver for RecordingDriver {
    fn write<const N: usize>(&mut self, colors: &[Rgb; N], brightness: u8) {
        self.frames.push(Written {
            pixels: colors.to_vec(),
            brightness,
        });
    }
}

pub type TestEngine = LightEngine<RecordingDriver, SmallRng, LEDS>;

pub fn rng() -> SmallRng {
    SmallRng::seed_from_u64(0x5eed)
}

pub fn engine() -> TestEngine {
    LightEngine::new(RecordingDriver::default(), rng(), EngineConfig::default())
}

/// Steps the engine through simulated time, 5 ms per call
pub struct Clock {
    now_ms: u64,
}

impl Clock {
    pub const fn new() -> Self {
        Self { now_ms: 0 }
    }

    pub fn step(&mut self, engine: &mut TestEngine) -> bool {
        let pushed = engine.tick(Instant::from_millis(self.now_ms));
        self.now_ms += 5;
        pushed
    }

    pub fn run(&mut self, engine: &mut TestEngine, ticks: usize) {
        for _ in 0..ticks {
            self.step(engine);
        }
    }

    /// Tick until `done` holds, failing after `limit` ticks
    pub fn run_until(
        &mut self,
        engine: &mut TestEngine,
        limit: usize,
        done: impl Fn(&TestEngine) -> bool,
    ) -> usize {
        for ticks in 0..limit {
            if done(engine) {
                return ticks;
            }
            self.step(engine);
        }
        panic!("condition not reached within {limit} ticks");
    }
}

/// Engine powered on and settled at full brightness in `mode`
pub fn settled(
    mode: skylight_composer::ModeId,
    color: Rgb,
) -> (TestEngine, Clock) {
    let mut engine = engine();
    let mut clock = Clock::new();
    engine.restore(mode, 255, color);
    engine.power_on();
    clock.run_until(&mut engine, 1000, |e| e.brightness().current() == 255);
    (engine, clock)
}
