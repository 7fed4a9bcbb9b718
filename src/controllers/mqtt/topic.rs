//! Topic generation utilities

use heapless::String;

use crate::domain::ports::PublishError;

/// Topic buffer size
pub const TOPIC_SIZE: usize = 64;

const SET_SUFFIX: &str = "/set";

/// Light attributes exposed as separate topics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Switch,
    Rgb,
    Effect,
    Brightness,
}

impl Entity {
    pub const ALL: [Entity; 4] =
        [Self::Switch, Self::Rgb, Self::Effect, Self::Brightness];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Switch => "switch",
            Self::Rgb => "rgb",
            Self::Effect => "effect",
            Self::Brightness => "brightness",
        }
    }

    fn parse_from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|entity| entity.as_str() == s)
    }
}

/// Generate a state topic for an entity
///
/// Format: `{base}/{entity}`
pub fn state_topic(
    base: &str,
    entity: Entity,
) -> Result<String<TOPIC_SIZE>, PublishError> {
    let mut topic = String::new();
    topic
        .push_str(base)
        .and_then(|()| topic.push('/'))
        .and_then(|()| topic.push_str(entity.as_str()))
        .map_err(|()| PublishError::BufferTooSmall)?;
    Ok(topic)
}

/// Generate a command topic for an entity
///
/// Format: `{base}/{entity}/set`
pub fn command_topic(
    base: &str,
    entity: Entity,
) -> Result<String<TOPIC_SIZE>, PublishError> {
    let mut topic = state_topic(base, entity)?;
    topic
        .push_str(SET_SUFFIX)
        .map_err(|()| PublishError::BufferTooSmall)?;
    Ok(topic)
}

/// Match a command topic back to its entity
pub fn parse_command_topic(base: &str, topic: &str) -> Option<Entity> {
    let entity = topic
        .strip_prefix(base)?
        .strip_prefix('/')?
        .strip_suffix(SET_SUFFIX)?;
    Entity::parse_from_str(entity)
}
