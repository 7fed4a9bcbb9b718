mod settings_storage;

pub use settings_storage::{SETTINGS_RECORD_SIZE, SettingsStorage};
