//! Hardware Resource Management
//!
//! Assigns the RP2350 pins and peripherals to the tasks that own them.
//!
//! # Resource Groups
//! - Receiver: throttle and steering inputs, sampled by the control loop
//! - Mode channel: edge-captured receiver channel selecting manual/autonomous
//! - Aux channel: edge-captured receiver channel driving the release servo
//! - Actuators: ESC, steering servo and aux servo PWM outputs, indicator lights
//! - Serial: UART receive line from the autonomy computer
//!
//! Every PWM output sits on channel A of its own slice so each actuator can be
//! updated without touching the others.

use assign_resources::assign_resources;
use embassy_rp::Peri;
use embassy_rp::bind_interrupts;
use embassy_rp::peripherals::{self, UART0};
use embassy_rp::uart::BufferedInterruptHandler;

assign_resources! {
    /// Receiver channels sampled by pulse-width measurement
    receiver: ReceiverResources {
        throttle_pin: PIN_16,
        steering_pin: PIN_17,
    },
    /// Receiver channel selecting the drive mode
    mode_channel: ModeChannelResources {
        pin: PIN_18,
    },
    /// Receiver channel driving the auxiliary actuator
    aux_channel: AuxChannelResources {
        pin: PIN_19,
    },
    /// ESC, servos and indicator lights
    actuators: ActuatorResources {
        esc_slice: PWM_SLICE3,
        esc_pin: PIN_6,
        steering_slice: PWM_SLICE4,
        steering_pin: PIN_8,
        aux_slice: PWM_SLICE5,
        aux_pin: PIN_10,
        red_led_pin: PIN_14,
        green_led_pin: PIN_15,
    },
    /// Serial link from the autonomy computer, receive only
    serial: SerialResources {
        uart: UART0,
        rx_pin: PIN_1,
    },
}

bind_interrupts!(pub struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});
