//! Digital pin tables and masks

use super::{NUM_INPUT_PINS, NUM_OUTPUT_PINS};

bitflags::bitflags! {
    /// Monitored digital input pins
    ///
    /// GPIN0 doubles as the payload presence detect (pulled up, active low);
    /// all four lines are still edge-timestamped by the PWM decoder.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct InputPins: u8 {
        const GPIN0 = 1 << 0;
        const GPIN1 = 1 << 1;
        const GPIN2 = 1 << 2;
        const GPIN3 = 1 << 3;
    }
}

/// Logical-to-physical pin tables, read-only after construction
///
/// Board bring-up configures directions and pulls for these pins before the
/// acquisition core starts; the core itself only carries the mapping.
#[derive(Debug, Clone, Copy)]
pub struct DigitalPinSet {
    outputs: [u32; NUM_OUTPUT_PINS],
    inputs: [u32; NUM_INPUT_PINS],
}

impl DigitalPinSet {
    /// Build the pin tables from physical pin identifiers
    pub const fn new(outputs: [u32; NUM_OUTPUT_PINS], inputs: [u32; NUM_INPUT_PINS]) -> Self {
        Self { outputs, inputs }
    }

    /// Physical pin identifier for logical output `index`
    pub fn output_pin(&self, index: usize) -> u32 {
        self.outputs[index]
    }

    /// Physical pin identifier for logical input `index`
    pub fn input_pin(&self, index: usize) -> u32 {
        self.inputs[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_mask_covers_low_nibble() {
        assert_eq!(InputPins::all().bits(), 0x0f);
    }

    #[test]
    fn test_pin_tables() {
        let pins = DigitalPinSet::new([10, 11, 12, 13], [20, 21, 22, 23]);
        assert_eq!(pins.output_pin(2), 12);
        assert_eq!(pins.input_pin(0), 20);
    }
}
