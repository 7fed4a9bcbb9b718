//! Domain layer - entities, intents and the ports the application talks through

pub mod dto;
pub mod entity;
pub mod ports;
