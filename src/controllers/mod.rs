pub mod mqtt;

pub use mqtt::MqttLightController;
