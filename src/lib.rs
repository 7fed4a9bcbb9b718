#![no_std]

//! Skylight - addressable strip light with a remote command surface
//!
//! Layers, leaves first:
//! - `config` - compile-time configuration
//! - `domain` - entities, intents and ports
//! - `app` - light usecases (apply, persist, boot)
//! - `controllers` - command topic parsing and state echo
//! - `infrastructure` - settings repository, LED driver adapter and the
//!   composer engine as the light state handler
//!
//! A firmware main loop wires them together:
//!
//! ```ignore
//! let driver = SmartLedDriver::new(strip);
//! let engine: LightEngine<_, _, LED_COUNT> =
//!     LightEngine::new(driver, rng, LIGHT.engine_config());
//! let settings = SettingsStorage::new(flash, SETTINGS_OFFSET);
//! let mut usecases = LightUsecases::new(engine, settings);
//! usecases.boot();
//! let mut controller =
//!     MqttLightController::new(usecases, publisher, TOPICS.base);
//! loop {
//!     if let Some((topic, payload)) = transport.poll() {
//!         let _ = controller.handle_message(topic, payload);
//!     }
//!     controller.poll(Instant::now());
//! }
//! ```

pub mod app;
pub mod config;
pub mod controllers;
pub mod domain;
pub mod infrastructure;
