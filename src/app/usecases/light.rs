use embassy_time::Instant;

use crate::domain::{
    dto::LightChangeIntent,
    entity::{LightSettings, LightState},
    ports::{
        LightError, LightStateHandler, LightStateReader, LightUsecasesPort,
        SettingsHandler,
    },
};

pub struct LightUsecases<S: LightStateHandler, P: SettingsHandler> {
    state: S,
    persistence: P,
}

impl<S: LightStateHandler, P: SettingsHandler> LightUsecases<S, P> {
    pub fn new(state: S, persistence: P) -> Self {
        Self { state, persistence }
    }

    /// Restore stored settings (or defaults) and fade the light in.
    ///
    /// Returns the settings that were applied.
    pub fn boot(&mut self) -> LightSettings {
        let settings = match self.persistence.read_settings() {
            Ok(Some(settings)) => settings,
            Ok(None) => {
                log::info!("light: no stored settings, using defaults");
                LightSettings::default()
            }
            Err(e) => {
                log::warn!("light: error reading settings: {}", e);
                LightSettings::default()
            }
        };

        self.state.restore_settings(settings);
        self.state
            .apply_light_intent(LightChangeIntent::new().with_power(true));
        settings
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }
}

impl<S, P> LightStateReader for LightUsecases<S, P>
where
    S: LightStateHandler,
    P: SettingsHandler,
{
    fn get_light_state(&self) -> LightState {
        self.state.get_light_state()
    }
}

impl<S, P> LightUsecasesPort for LightUsecases<S, P>
where
    S: LightStateHandler,
    P: SettingsHandler,
{
    fn apply_intent_and_persist(
        &mut self,
        intent: LightChangeIntent,
    ) -> Result<(), LightError> {
        if intent.is_empty() {
            return Ok(());
        }

        self.state.apply_light_intent(intent);
        let settings = self.state.get_light_state().settings();
        self.persistence.write_settings(&settings).map_err(|e| {
            log::warn!("light: error persisting settings: {}", e);
            LightError::PersistenceError(e)
        })
    }

    fn poll(&mut self, now: Instant) -> bool {
        self.state.tick(now)
    }
}
