//! Mock GPIO bank implementation for testing

use crate::platform::{traits::GpioBankInterface, Result};

/// Mock GPIO bank implementation
///
/// Tracks input levels, driven output levels, and a simulated monotonic
/// counter for test verification. Tests set input levels and advance the
/// counter explicitly.
#[derive(Debug)]
pub struct MockGpioBank {
    input_levels: u8,
    output_levels: u8,
    counter: u32,
}

impl MockGpioBank {
    /// Create a new mock bank with all pins low and the counter at zero
    pub fn new() -> Self {
        Self {
            input_levels: 0,
            output_levels: 0,
            counter: 0,
        }
    }

    /// Simulate external signals on the input pins
    pub fn set_input_levels(&mut self, levels: u8) {
        self.input_levels = levels;
    }

    /// Advance the simulated monotonic counter (wrapping)
    pub fn advance_counter(&mut self, ticks: u32) {
        self.counter = self.counter.wrapping_add(ticks);
    }

    /// Place the counter at an absolute tick value
    pub fn set_counter(&mut self, ticks: u32) {
        self.counter = ticks;
    }

    /// Last levels driven onto the output pins
    pub fn output_levels(&self) -> u8 {
        self.output_levels
    }
}

impl Default for MockGpioBank {
    fn default() -> Self {
        Self::new()
    }
}

impl GpioBankInterface for MockGpioBank {
    fn read_pin_levels(&self) -> u8 {
        self.input_levels
    }

    fn write_pin_levels(&mut self, levels: u8) -> Result<()> {
        self.output_levels = levels;
        Ok(())
    }

    fn read_monotonic_counter(&self) -> u32 {
        self.counter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_gpio_levels() {
        let mut gpio = MockGpioBank::new();
        assert_eq!(gpio.read_pin_levels(), 0);

        gpio.set_input_levels(0b1010);
        assert_eq!(gpio.read_pin_levels(), 0b1010);

        gpio.write_pin_levels(0b0011).unwrap();
        assert_eq!(gpio.output_levels(), 0b0011);
    }

    #[test]
    fn test_mock_gpio_counter_wraps() {
        let mut gpio = MockGpioBank::new();
        gpio.set_counter(u32::MAX - 1);
        gpio.advance_counter(3);
        assert_eq!(gpio.read_monotonic_counter(), 1);
    }
}
