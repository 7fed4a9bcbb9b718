//! Light engine as the application's light state handler

use embassy_time::Instant;
use skylight_composer::{LedDriver, LightEngine, RandomSource};

use crate::domain::dto::LightChangeIntent;
use crate::domain::entity::{LightSettings, LightState};
use crate::domain::ports::{LightStateChanger, LightStateReader, LightTicker};

impl<D, R, const N: usize> LightStateReader for LightEngine<D, R, N>
where
    D: LedDriver,
    R: RandomSource,
{
    fn get_light_state(&self) -> LightState {
        self.snapshot().into()
    }
}

impl<D, R, const N: usize> LightStateChanger for LightEngine<D, R, N>
where
    D: LedDriver,
    R: RandomSource,
{
    fn apply_light_intent(&mut self, intent: LightChangeIntent) {
        if let Some(brightness) = intent.brightness {
            self.set_brightness(brightness);
        }

        // A color always implies the static mode
        if let Some(color) = intent.color {
            self.set_color(color);
        } else if let Some(mode) = intent.mode {
            self.request_mode(mode);
        }

        match intent.power {
            Some(true) => self.power_on(),
            Some(false) => self.power_off(),
            None => {}
        }
    }

    fn restore_settings(&mut self, settings: LightSettings) {
        self.restore(settings.mode, settings.brightness, settings.color);
    }
}

impl<D, R, const N: usize> LightTicker for LightEngine<D, R, N>
where
    D: LedDriver,
    R: RandomSource,
{
    fn tick(&mut self, now: Instant) -> bool {
        LightEngine::tick(self, now)
    }
}
