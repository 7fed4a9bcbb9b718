//! Light controller for the MQTT command surface
//!
//! Translates messages on the command topics into light intents and echoes
//! the resulting state on the retained state topics. The transport itself
//! lives outside; it hands messages to [`MqttLightController::handle_message`]
//! and publishes through a [`StatePublisher`].

mod command;
mod topic;

use core::fmt::Write;

use embassy_time::Instant;
use heapless::String;

use crate::domain::ports::{LightUsecasesPort, PublishError, StatePublisher};

pub use command::{
    Command, CommandError, parse_brightness, parse_color, parse_command,
    parse_mode, parse_power,
};
pub use topic::{
    Entity, TOPIC_SIZE, command_topic, parse_command_topic, state_topic,
};

/// Payload buffer size, fits `"255,255,255"`
const PAYLOAD_SIZE: usize = 16;

pub struct MqttLightController<U: LightUsecasesPort, P: StatePublisher> {
    usecases: U,
    publisher: P,
    base: &'static str,
}

impl<U: LightUsecasesPort, P: StatePublisher> MqttLightController<U, P> {
    pub fn new(usecases: U, publisher: P, base: &'static str) -> Self {
        Self {
            usecases,
            publisher,
            base,
        }
    }

    /// Topics the transport has to subscribe to
    pub fn command_topics(
        &self,
    ) -> Result<[String<TOPIC_SIZE>; 4], PublishError> {
        Ok([
            command_topic(self.base, Entity::Switch)?,
            command_topic(self.base, Entity::Rgb)?,
            command_topic(self.base, Entity::Effect)?,
            command_topic(self.base, Entity::Brightness)?,
        ])
    }

    /// Handle an incoming message.
    ///
    /// Malformed commands are dropped without any state change. Accepted
    /// commands are applied, persisted and echoed.
    pub fn handle_message(
        &mut self,
        topic: &str,
        payload: &str,
    ) -> Result<Command, CommandError> {
        let command =
            parse_command(self.base, topic, payload).inspect_err(|e| {
                log::warn!("mqtt: ignoring '{}' on {}: {}", payload, topic, e);
            })?;
        log::info!("mqtt: command {:?}", command);

        // The light keeps the new state even when it could not be stored
        if let Err(e) = self.usecases.apply_intent_and_persist(command.into()) {
            log::debug!("mqtt: state applied but not saved: {}", e);
        }

        if let Err(e) = self.publish_state() {
            log::warn!("mqtt: error publishing state: {}", e);
        }
        Ok(command)
    }

    /// Republish the full state after the transport (re)connected
    pub fn on_connect(&mut self) -> Result<(), PublishError> {
        self.publish_state()
    }

    /// Drive the light output
    pub fn poll(&mut self, now: Instant) -> bool {
        self.usecases.poll(now)
    }

    pub fn publish_state(&mut self) -> Result<(), PublishError> {
        let state = self.usecases.get_light_state();

        self.publish(Entity::Switch, if state.power { "ON" } else { "OFF" })?;

        let mut payload: String<PAYLOAD_SIZE> = String::new();
        let color = state.color;
        write!(payload, "{},{},{}", color.r, color.g, color.b)
            .map_err(|_| PublishError::BufferTooSmall)?;
        self.publish(Entity::Rgb, &payload)?;

        self.publish(Entity::Effect, state.mode.as_str())?;

        payload.clear();
        write!(payload, "{}", state.brightness)
            .map_err(|_| PublishError::BufferTooSmall)?;
        self.publish(Entity::Brightness, &payload)
    }

    pub fn usecases(&self) -> &U {
        &self.usecases
    }

    pub fn usecases_mut(&mut self) -> &mut U {
        &mut self.usecases
    }

    pub fn publisher(&self) -> &P {
        &self.publisher
    }

    fn publish(
        &mut self,
        entity: Entity,
        payload: &str,
    ) -> Result<(), PublishError> {
        let topic = state_topic(self.base, entity)?;
        self.publisher.publish(&topic, payload, true)
    }
}
