//! Mock communications link for testing

use super::CommsLink;
use crate::acquisition::NUM_INPUT_PINS;

/// Mock communications link
///
/// Records everything the acquisition core publishes so tests can assert on
/// it, and lets tests script the inbound output-pin command. PWM publishes
/// are kept as a bounded history to verify per-cycle behavior.
#[derive(Debug, Default)]
pub struct MockComms {
    output_command: u8,
    pub input_pin_state: u8,
    pub pitot: u16,
    pub current: u16,
    pub voltage: u16,
    pub auxiliary: u16,
    pub pwm_history: heapless::Vec<[u16; NUM_INPUT_PINS], 16>,
}

impl MockComms {
    /// Create a mock link with a zero output-pin command
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the output-pin command the next cycle will read
    pub fn set_output_command(&mut self, command: u8) {
        self.output_command = command;
    }

    /// Most recently published PWM values
    pub fn last_pwm_values(&self) -> Option<&[u16; NUM_INPUT_PINS]> {
        self.pwm_history.last()
    }
}

impl CommsLink for MockComms {
    fn output_pin_command(&self) -> u8 {
        self.output_command
    }

    fn set_input_pin_state(&mut self, levels: u8) {
        self.input_pin_state = levels;
    }

    fn set_pwm_values(&mut self, values: [u16; NUM_INPUT_PINS]) {
        if self.pwm_history.is_full() {
            self.pwm_history.remove(0);
        }
        let _ = self.pwm_history.push(values);
    }

    fn set_pitot(&mut self, value: u16) {
        self.pitot = value;
    }

    fn set_current_voltage(&mut self, current: u16, voltage: u16) {
        self.current = current;
        self.voltage = voltage;
    }

    fn set_auxiliary(&mut self, value: u16) {
        self.auxiliary = value;
    }
}
