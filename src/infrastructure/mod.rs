//! Infrastructure layer - Port implementations
//!
//! This module contains concrete implementations of the domain ports on top
//! of the composer engine and the `embedded-storage` / `smart-leds` traits.

pub mod drivers;
pub mod repositories;
mod services;
