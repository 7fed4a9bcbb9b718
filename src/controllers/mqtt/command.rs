//! Command payload parsing
//!
//! Payloads are plain text. Numbers outside 0-255 are clamped; anything
//! that is not a number, has the wrong arity or names an unknown mode is
//! rejected.

use core::fmt;

use skylight_composer::{ModeId, Rgb};

use super::topic::{Entity, parse_command_topic};
use crate::domain::dto::LightChangeIntent;

const PAYLOAD_ON: &str = "ON";
const PAYLOAD_OFF: &str = "OFF";

/// Parsed light command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Power(bool),
    Color(Rgb),
    Mode(ModeId),
    Brightness(u8),
}

impl From<Command> for LightChangeIntent {
    fn from(command: Command) -> Self {
        let intent = LightChangeIntent::new();
        match command {
            Command::Power(on) => intent.with_power(on),
            Command::Color(color) => intent.with_color(color),
            Command::Mode(mode) => intent.with_mode(mode),
            Command::Brightness(level) => intent.with_brightness(level),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// Topic is not one of the command topics
    UnknownTopic,
    /// Power payload is neither ON nor OFF
    InvalidPower,
    /// Color payload is not three comma separated numbers
    InvalidColor,
    /// Brightness payload is not a number
    InvalidBrightness,
    /// Mode name is not known
    UnknownMode,
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::UnknownTopic => write!(f, "Unknown command topic"),
            CommandError::InvalidPower => write!(f, "Invalid power payload"),
            CommandError::InvalidColor => write!(f, "Invalid color payload"),
            CommandError::InvalidBrightness => {
                write!(f, "Invalid brightness payload")
            }
            CommandError::UnknownMode => write!(f, "Unknown mode"),
        }
    }
}

/// Parse a message received on `topic` under `base`
pub fn parse_command(
    base: &str,
    topic: &str,
    payload: &str,
) -> Result<Command, CommandError> {
    let entity =
        parse_command_topic(base, topic).ok_or(CommandError::UnknownTopic)?;
    match entity {
        Entity::Switch => parse_power(payload).map(Command::Power),
        Entity::Rgb => parse_color(payload).map(Command::Color),
        Entity::Effect => parse_mode(payload).map(Command::Mode),
        Entity::Brightness => {
            parse_brightness(payload).map(Command::Brightness)
        }
    }
}

pub fn parse_power(payload: &str) -> Result<bool, CommandError> {
    let payload = payload.trim();
    if payload.eq_ignore_ascii_case(PAYLOAD_ON) {
        Ok(true)
    } else if payload.eq_ignore_ascii_case(PAYLOAD_OFF) {
        Ok(false)
    } else {
        Err(CommandError::InvalidPower)
    }
}

/// Parse `"r,g,b"`
pub fn parse_color(payload: &str) -> Result<Rgb, CommandError> {
    let mut parts = payload.trim().split(',');
    let mut channel = || {
        parts
            .next()
            .and_then(parse_clamped)
            .ok_or(CommandError::InvalidColor)
    };
    let color = Rgb {
        r: channel()?,
        g: channel()?,
        b: channel()?,
    };
    if parts.next().is_some() {
        return Err(CommandError::InvalidColor);
    }
    Ok(color)
}

pub fn parse_brightness(payload: &str) -> Result<u8, CommandError> {
    parse_clamped(payload).ok_or(CommandError::InvalidBrightness)
}

pub fn parse_mode(payload: &str) -> Result<ModeId, CommandError> {
    ModeId::parse_from_str(payload.trim()).ok_or(CommandError::UnknownMode)
}

/// Parse a decimal integer and clamp it to a channel value
fn parse_clamped(value: &str) -> Option<u8> {
    let value: i64 = value.trim().parse().ok()?;
    u8::try_from(value.clamp(0, i64::from(u8::MAX))).ok()
}
