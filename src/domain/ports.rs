use core::fmt;

use embassy_time::Instant;

use crate::domain::dto::LightChangeIntent;
use crate::domain::entity::{LightSettings, LightState};

/// Error type for the settings storage operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageError {
    /// The storage driver rejected the read or write
    DriverError,
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::DriverError => write!(f, "Storage driver error"),
        }
    }
}

/// Error type for the state publishing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishError {
    /// The transport did not accept the message
    Transport,
    /// Topic or payload does not fit the buffer
    BufferTooSmall,
}

impl fmt::Display for PublishError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PublishError::Transport => write!(f, "Transport rejected message"),
            PublishError::BufferTooSmall => write!(f, "Buffer too small"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightError {
    /// The change was applied but could not be persisted
    PersistenceError(StorageError),
}

impl fmt::Display for LightError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LightError::PersistenceError(e) => {
                write!(f, "Persistence error: {}", e)
            }
        }
    }
}

/// Reader interface for the settings record
pub trait SettingsReader {
    /// Read the stored settings, `None` when nothing valid was stored
    fn read_settings(
        &mut self,
    ) -> Result<Option<LightSettings>, StorageError>;
}

/// Writer interface for the settings record
pub trait SettingsWriter {
    fn write_settings(
        &mut self,
        settings: &LightSettings,
    ) -> Result<(), StorageError>;
}

/// Trait for the settings persistence handler
pub trait SettingsHandler: SettingsReader + SettingsWriter {}

impl<T: SettingsReader + SettingsWriter> SettingsHandler for T {}

/// Outgoing side of the command transport
pub trait StatePublisher {
    /// Publish a payload on a topic
    fn publish(
        &mut self,
        topic: &str,
        payload: &str,
        retain: bool,
    ) -> Result<(), PublishError>;
}

/// Reader interface for the light state
pub trait LightStateReader {
    fn get_light_state(&self) -> LightState;
}

/// Applier interface for the light intent
pub trait LightStateChanger {
    fn apply_light_intent(&mut self, intent: LightChangeIntent);

    /// Load settings directly, without a transition
    fn restore_settings(&mut self, settings: LightSettings);
}

/// Periodic driver of the light output
pub trait LightTicker {
    /// Advance the light to `now`, returns true when a frame was output
    fn tick(&mut self, now: Instant) -> bool;
}

/// Trait for the light usecases state handler
pub trait LightStateHandler:
    LightStateReader + LightStateChanger + LightTicker
{
}

impl<T> LightStateHandler for T where
    T: LightStateReader + LightStateChanger + LightTicker
{
}

/// Port interface for the light usecases
pub trait LightUsecasesPort: LightStateReader {
    /// Apply the intent and persist the resulting settings
    fn apply_intent_and_persist(
        &mut self,
        intent: LightChangeIntent,
    ) -> Result<(), LightError>;

    /// Drive the light output, returns true when a frame was output
    fn poll(&mut self, now: Instant) -> bool;
}
