#![no_std]

//! Skylight composer - pixel animation and brightness state machine
//!
//! Architecture layers:
//! - `driver` - Hardware abstraction ([`LedDriver`] trait)
//! - `random` - Pseudo-random source abstraction ([`RandomSource`] trait)
//! - `frame` - Fixed-length wrapped frame buffer
//! - `brightness` - Stepped brightness ramp and power state
//! - `mode` - Renderer implementations and [`ModeSlot`] enum
//! - `engine` - Main state machine orchestrator
//!
//! The engine is generic over `LedDriver` and `RandomSource`, allowing
//! different hardware backends.

pub mod brightness;
pub mod color;
pub mod driver;
pub mod engine;
pub mod frame;
pub mod math8;
pub mod mode;
pub mod random;

pub use brightness::{BrightnessController, PowerState};
pub use color::Rgb;
pub use driver::LedDriver;
pub use engine::{EngineConfig, LightEngine, LightSnapshot, ModeState};
pub use frame::FrameBuffer;
pub use mode::{ModeId, ModeSlot, RenderContext};
pub use random::RandomSource;
