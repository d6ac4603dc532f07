//! Communications collaborator interface
//!
//! The acquisition core neither frames packets nor talks to the link
//! hardware; it exchanges values with the communications module through this
//! trait once per control cycle. Output-pin commands flow in, computed sensor
//! values flow out.

use crate::acquisition::NUM_INPUT_PINS;

#[cfg(any(test, feature = "mock"))]
mod mock;

#[cfg(any(test, feature = "mock"))]
pub use mock::MockComms;

/// Interface to the communications module
///
/// One value slot per setter; the communications module folds the latest
/// values into its next outbound packet. All calls are non-blocking and
/// complete in bounded time.
pub trait CommsLink {
    /// Output-pin command from the last received packet (read once per cycle)
    fn output_pin_command(&self) -> u8;

    /// Publish the sampled digital input pin levels
    fn set_input_pin_state(&mut self, levels: u8);

    /// Publish the decoded PWM input values
    fn set_pwm_values(&mut self, values: [u16; NUM_INPUT_PINS]);

    /// Publish the averaged pitot (primary pressure) channel
    fn set_pitot(&mut self, value: u16);

    /// Publish the averaged battery current and voltage channels
    fn set_current_voltage(&mut self, current: u16, voltage: u16);

    /// Publish the averaged auxiliary channel
    fn set_auxiliary(&mut self, value: u16);
}
