//! System Indicator Module
//!
//! Drives the two indicator lights. Each light is a plain digital output,
//! high when lit.
use embassy_rp::gpio::{Level, Output};
use rc_car_control::indicator::Indicators;

/// Red and green indicator lights
pub struct IndicatorLights {
    red: Output<'static>,
    green: Output<'static>,
}

impl IndicatorLights {
    /// Takes both outputs, which should start low
    pub fn new(red: Output<'static>, green: Output<'static>) -> Self {
        Self { red, green }
    }

    /// Sets both lights at once
    pub fn show(&mut self, indicators: Indicators) {
        self.red.set_level(Level::from(indicators.red));
        self.green.set_level(Level::from(indicators.green));
    }
}
