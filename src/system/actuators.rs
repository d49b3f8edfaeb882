//! Actuator Module
//!
//! Owns every output of the vehicle: the ESC, the steering servo, the
//! auxiliary servo and the indicator lights.
//!
//! All outputs are put into their neutral state as soon as they are created,
//! before any input is read. The ESC needs to see a neutral pulse for a while
//! after power-up before it arms.

use crate::system::indicator::IndicatorLights;
use crate::system::resources::ActuatorResources;
use crate::system::servo::{self, Servo};
use embassy_rp::gpio::{Level, Output};
use embassy_rp::pwm::Pwm;
use rc_car_control::Actuation;
use rc_car_control::auxiliary::AuxPosition;

pub struct Actuators {
    esc: Servo,
    steering: Servo,
    aux: Servo,
    lights: IndicatorLights,
}

impl Actuators {
    /// Configures all outputs and commands neutral
    pub fn new(r: ActuatorResources) -> Self {
        let config = servo::frame_config();

        let esc = Servo::new(
            Pwm::new_output_a(r.esc_slice, r.esc_pin, config.clone()),
            config.clone(),
        );
        let steering = Servo::new(
            Pwm::new_output_a(r.steering_slice, r.steering_pin, config.clone()),
            config.clone(),
        );
        let aux = Servo::new(
            Pwm::new_output_a(r.aux_slice, r.aux_pin, config.clone()),
            config,
        );
        let lights = IndicatorLights::new(
            Output::new(r.red_led_pin, Level::Low),
            Output::new(r.green_led_pin, Level::Low),
        );

        let mut actuators = Self {
            esc,
            steering,
            aux,
            lights,
        };
        actuators.apply(Actuation::NEUTRAL);
        actuators.set_aux(AuxPosition::Inactive);
        actuators
    }

    /// Writes the outputs of one control path iteration
    pub fn apply(&mut self, actuation: Actuation) {
        self.esc.write_us(actuation.esc_us);
        self.steering.write_angle(actuation.steering_deg);
        self.lights.show(actuation.indicators);
    }

    pub fn set_aux(&mut self, position: AuxPosition) {
        self.aux.write_angle(position.angle());
    }
}
