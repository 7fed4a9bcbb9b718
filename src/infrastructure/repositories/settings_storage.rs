use bytemuck::{Pod, Zeroable};
use embedded_storage::Storage;
use skylight_composer::{ModeId, Rgb};

use crate::domain::entity::LightSettings;
use crate::domain::ports::{SettingsReader, SettingsWriter, StorageError};

/// Settings record as laid out in storage.
///
/// A mode byte that is not a known mode (0 after a wipe, 0xFF on erased
/// flash) marks the record as empty.
#[derive(Debug, Clone, Copy, Zeroable, Pod)]
#[repr(C)]
struct PersistentSettings {
    mode: u8,
    brightness: u8,
    color: [u8; 3],
}

pub const SETTINGS_RECORD_SIZE: usize = size_of::<PersistentSettings>();

impl From<&LightSettings> for PersistentSettings {
    fn from(settings: &LightSettings) -> Self {
        Self {
            mode: settings.mode.as_raw(),
            brightness: settings.brightness,
            color: [settings.color.r, settings.color.g, settings.color.b],
        }
    }
}

impl PersistentSettings {
    fn to_settings(self) -> Option<LightSettings> {
        let mode = ModeId::from_raw(self.mode)?;
        Some(LightSettings {
            mode,
            brightness: self.brightness,
            color: Rgb {
                r: self.color[0],
                g: self.color[1],
                b: self.color[2],
            },
        })
    }
}

/// Settings repository over any `embedded-storage` device
pub struct SettingsStorage<S: Storage> {
    storage: S,
    offset: u32,
}

impl<S: Storage> SettingsStorage<S> {
    pub fn new(storage: S, offset: u32) -> Self {
        Self { storage, offset }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_inner(self) -> S {
        self.storage
    }
}

impl<S: Storage> SettingsReader for SettingsStorage<S> {
    fn read_settings(&mut self) -> Result<Option<LightSettings>, StorageError> {
        let mut buffer = [0u8; SETTINGS_RECORD_SIZE];
        self.storage
            .read(self.offset, &mut buffer)
            .map_err(|_| StorageError::DriverError)?;

        let record: PersistentSettings = bytemuck::pod_read_unaligned(&buffer);
        let settings = record.to_settings();
        if settings.is_none() {
            log::info!(
                "settings: no stored record (mode byte {:#04x})",
                record.mode
            );
        }
        Ok(settings)
    }
}

impl<S: Storage> SettingsWriter for SettingsStorage<S> {
    fn write_settings(
        &mut self,
        settings: &LightSettings,
    ) -> Result<(), StorageError> {
        let record = PersistentSettings::from(settings);
        self.storage
            .write(self.offset, bytemuck::bytes_of(&record))
            .map_err(|_| StorageError::DriverError)
    }
}
