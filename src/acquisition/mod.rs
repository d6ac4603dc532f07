//! Sensor acquisition subsystem
//!
//! Two independent components run inside one periodic task plus one
//! asynchronous interrupt path:
//!
//! - [`AdcAverager`] drains the hardware-filled circular sample buffer each
//!   cycle, averages new samples per channel, and re-arms the ring on
//!   desynchronization.
//! - [`PwmDecoder`] runs on every input-pin transition and converts high-pulse
//!   durations into normalized 16-bit values.
//!
//! [`AcquisitionTask`] wires both to the GPIO bank, the ADC ring, and the
//! communications link. The decoder is the only state shared across execution
//! contexts; it lives behind a [`crate::core::traits::SharedState`].

pub mod adc;
pub mod pins;
pub mod pwm;
pub mod stats;
pub mod task;

pub use adc::{AdcAverager, DrainOutcome};
pub use pins::{DigitalPinSet, InputPins};
pub use pwm::{PulseCalibration, PwmDecoder};
pub use stats::AcquisitionStats;
pub use task::{handle_pin_change, AcquisitionTask};

/// Number of PWM-decoded digital input pins
pub const NUM_INPUT_PINS: usize = 4;

/// Number of digital output pins
pub const NUM_OUTPUT_PINS: usize = 4;

/// Number of analog channels sampled in round-robin order
pub const NUM_ADC_CHANNELS: usize = 4;

/// Raw samples taken per channel per nominal cycle
pub const ADC_OVERSAMPLE_RATE: usize = 16;

/// Ring capacity: two cycles of headroom over the oversampled frame, and a
/// power of two so the cursor wraps by masking
pub const ADC_BUFFER_SIZE: usize = NUM_ADC_CHANNELS * ADC_OVERSAMPLE_RATE * 2 * 2;

/// Largest raw sample treated as in range (12-bit conversion less guard bits);
/// anything outside [0, SAMPLE_MAX] is saturated, never propagated raw
pub const SAMPLE_MAX: i16 = 2047;

/// Channel slot: pitot (primary pressure) input
pub const ADC_PITOT: usize = 0;

/// Channel slot: battery current sense
pub const ADC_BATTERY_I: usize = 1;

/// Channel slot: battery voltage sense
pub const ADC_BATTERY_V: usize = 2;

/// Channel slot: auxiliary/range input
pub const ADC_AUX: usize = 3;
