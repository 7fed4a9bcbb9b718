//! Test doubles for the light application

#![allow(dead_code)]

use core::convert::Infallible;

use embassy_time::Instant;
use embedded_storage::{ReadStorage, Storage};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use skylight::app::usecases::LightUsecases;
use skylight::controllers::MqttLightController;
use skylight::domain::ports::{PublishError, StatePublisher};
use skylight::infrastructure::drivers::SmartLedDriver;
use skylight::infrastructure::repositories::SettingsStorage;
use skylight_composer::{EngineConfig, LightEngine};
use smart_leds::{RGB8, SmartLedsWrite};

pub const LEDS: usize = 16;
pub const BASE: &str = "home/light/test";
pub const OFFSET: u32 = 0x40;

/// In-memory storage backend, erased to 0xFF like flash
#[derive(Debug)]
pub struct MemoryStorage {
    pub bytes: Vec<u8>,
    pub writes: usize,
    pub fail: bool,
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self {
            bytes: vec![0xFF; 256],
            writes: 0,
            fail: false,
        }
    }
}

#[derive(Debug)]
pub struct DriverFailure;

impl ReadStorage for MemoryStorage {
    type Error = DriverFailure;

    fn read(
        &mut self,
        offset: u32,
        bytes: &mut [u8],
    ) -> Result<(), Self::Error> {
        if self.fail {
            return Err(DriverFailure);
        }
        let from = offset as usize;
        bytes.copy_from_slice(&self.bytes[from..from + bytes.len()]);
        Ok(())
    }

    fn capacity(&self) -> usize {
        self.bytes.len()
    }
}

impl Storage for MemoryStorage {
    fn write(&mut self, offset: u32, bytes: &[u8]) -> Result<(), Self::Error> {
        if self.fail {
            return Err(DriverFailure);
        }
        let from = offset as usize;
        self.bytes[from..from + bytes.len()].copy_from_slice(bytes);
        self.writes += 1;
        Ok(())
    }
}

/// Publisher that keeps every message
#[derive(Debug, Default)]
pub struct RecordingPublisher {
    pub messages: Vec<(String, String, bool)>,
}

impl RecordingPublisher {
    /// Last payload published on `topic`
    pub fn last(&self, topic: &str) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|(t, _, _)| t == topic)
            .map(|(_, payload, _)| payload.as_str())
    }
}

impl StatePublisher for RecordingPublisher {
    fn publish(
        &mut self,
        topic: &str,
        payload: &str,
        retain: bool,
    ) -> Result<(), PublishError> {
        self.messages
            .push((topic.to_owned(), payload.to_owned(), retain));
        Ok(())
    }
}

/// Strip that keeps every frame it receives
#[derive(Debug, Default)]
pub struct RecordingStrip {
    pub frames: Vec<Vec<RGB8>>,
}

impl SmartLedsWrite for RecordingStrip {
    type Error = Infallible;
    type Color = RGB8;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        self.frames.push(iterator.into_iter().map(Into::into).collect());
        Ok(())
    }
}

pub type TestDriver = SmartLedDriver<RecordingStrip>;
pub type TestEngine = LightEngine<TestDriver, SmallRng, LEDS>;
pub type TestStorage = SettingsStorage<MemoryStorage>;
pub type TestUsecases = LightUsecases<TestEngine, TestStorage>;
pub type TestController = MqttLightController<TestUsecases, RecordingPublisher>;

pub fn test_engine() -> TestEngine {
    LightEngine::new(
        SmartLedDriver::new(RecordingStrip::default()),
        SmallRng::seed_from_u64(7),
        EngineConfig::default(),
    )
}

pub fn usecases(storage: MemoryStorage) -> TestUsecases {
    LightUsecases::new(test_engine(), SettingsStorage::new(storage, OFFSET))
}

/// Booted controller on top of `storage`
pub fn controller(storage: MemoryStorage) -> TestController {
    let mut usecases = usecases(storage);
    usecases.boot();
    MqttLightController::new(usecases, RecordingPublisher::default(), BASE)
}

pub fn topic(entity: &str) -> String {
    format!("{BASE}/{entity}")
}

pub fn command(entity: &str) -> String {
    format!("{BASE}/{entity}/set")
}

pub fn storage_writes(controller: &TestController) -> usize {
    controller.usecases().persistence().storage().writes
}

/// Run the light for `ticks` render intervals starting at `from_ms`
pub fn run(controller: &mut TestController, from_ms: u64, ticks: u64) -> u64 {
    for i in 0..ticks {
        controller.poll(Instant::from_millis(from_ms + i * 5));
    }
    from_ms + ticks * 5
}
