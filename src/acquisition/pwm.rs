//! PWM edge decoder
//!
//! Each input-pin transition raises an asynchronous edge event carrying a
//! snapshot of the pin levels; the decoder timestamps the event against the
//! free-running counter and, on a high-to-low transition, converts the
//! elapsed high time into a normalized 16-bit value.
//!
//! The timestamp is captured once per event and shared by every channel that
//! changed in it, so simultaneous transitions on multiple lines never drift
//! apart. Every edge (rising or falling) becomes the reference point for the
//! next interval, which lets a spurious noise edge self-correct within one
//! pulse period instead of corrupting all later measurements.

use super::{InputPins, NUM_INPUT_PINS};

/// Pulse-width thresholds in counter ticks
///
/// The defaults map a ~0.85 ms to ~2.15 ms high time onto [0, 65535] at the
/// board's counter clock; they are a board/clock calibration parameter, not
/// part of the algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PulseCalibration {
    /// High times at or below this many ticks decode to 0
    pub min_ticks: u32,
    /// High times at or above this many ticks decode to 65535
    pub max_ticks: u32,
}

impl PulseCalibration {
    /// Stock calibration for the board's counter clock
    pub const DEFAULT: Self = Self {
        min_ticks: 42829,
        max_ticks: 108264,
    };
}

impl Default for PulseCalibration {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Per-channel decoder state
///
/// Written only by the edge path; `value` is read by the periodic task.
/// Both fields are word-sized, so cross-context reads need no lock of their
/// own.
#[derive(Debug, Clone, Copy, Default)]
struct PwmChannelState {
    /// Counter value at the most recent edge on this channel
    rising_timestamp: u32,
    /// Last computed normalized pulse width
    value: u16,
}

/// Edge-triggered pulse-width decoder for the monitored input pins
#[derive(Debug)]
pub struct PwmDecoder {
    calibration: PulseCalibration,
    /// Previously observed pin levels, masked to the monitored inputs
    last_levels: u8,
    channels: [PwmChannelState; NUM_INPUT_PINS],
}

impl PwmDecoder {
    /// Create a decoder with all levels low and all values zero
    pub const fn new(calibration: PulseCalibration) -> Self {
        Self {
            calibration,
            last_levels: 0,
            channels: [PwmChannelState {
                rising_timestamp: 0,
                value: 0,
            }; NUM_INPUT_PINS],
        }
    }

    /// Process one edge event
    ///
    /// `levels` is the pin-level snapshot delivered with the event and `now`
    /// the counter value captured once for it. A snapshot identical to the
    /// last observed levels is a tolerated no-op.
    pub fn on_edge(&mut self, levels: u8, now: u32) {
        let changed = levels ^ self.last_levels;
        if changed == 0 {
            return;
        }

        for (i, channel) in self.channels.iter_mut().enumerate() {
            if changed & (1 << i) == 0 {
                continue;
            }

            // Previous level high means this edge completes one pulse
            if self.last_levels & (1 << i) != 0 {
                let delta = now.wrapping_sub(channel.rising_timestamp);
                channel.value = if delta <= self.calibration.min_ticks {
                    0
                } else if delta >= self.calibration.max_ticks {
                    u16::MAX
                } else {
                    ((delta - self.calibration.min_ticks) & 0xffff) as u16
                };
            }

            // Either direction: this edge starts the next interval
            channel.rising_timestamp = now;
        }

        self.last_levels = levels & InputPins::all().bits();
    }

    /// Last computed value for every channel
    pub fn values(&self) -> [u16; NUM_INPUT_PINS] {
        let mut values = [0; NUM_INPUT_PINS];
        for (value, channel) in values.iter_mut().zip(&self.channels) {
            *value = channel.value;
        }
        values
    }

    /// Last computed value for one channel
    pub fn value(&self, channel: usize) -> u16 {
        self.channels[channel].value
    }
}

impl Default for PwmDecoder {
    fn default() -> Self {
        Self::new(PulseCalibration::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T_LOW: u32 = PulseCalibration::DEFAULT.min_ticks;
    const T_HIGH: u32 = PulseCalibration::DEFAULT.max_ticks;

    fn pulse(decoder: &mut PwmDecoder, channel: usize, t0: u32, width: u32) {
        decoder.on_edge(1 << channel, t0);
        decoder.on_edge(0, t0.wrapping_add(width));
    }

    #[test]
    fn test_pulse_inside_range_maps_linearly() {
        let mut decoder = PwmDecoder::default();
        pulse(&mut decoder, 1, 1000, T_LOW + 5000);
        assert_eq!(decoder.value(1), 5000);
    }

    #[test]
    fn test_short_pulse_decodes_to_zero() {
        let mut decoder = PwmDecoder::default();
        pulse(&mut decoder, 0, 500, T_LOW);
        assert_eq!(decoder.value(0), 0);

        pulse(&mut decoder, 0, 90_000, T_LOW - 1);
        assert_eq!(decoder.value(0), 0);
    }

    #[test]
    fn test_long_pulse_saturates() {
        let mut decoder = PwmDecoder::default();
        pulse(&mut decoder, 2, 0, T_HIGH);
        assert_eq!(decoder.value(2), u16::MAX);

        pulse(&mut decoder, 2, 500_000, T_HIGH + 12345);
        assert_eq!(decoder.value(2), u16::MAX);
    }

    #[test]
    fn test_range_boundaries() {
        let mut decoder = PwmDecoder::default();
        pulse(&mut decoder, 3, 0, T_LOW + 1);
        assert_eq!(decoder.value(3), 1);

        pulse(&mut decoder, 3, 300_000, T_HIGH - 1);
        assert_eq!(decoder.value(3), (T_HIGH - 1 - T_LOW) as u16);
    }

    #[test]
    fn test_counter_wraparound_pulse() {
        let mut decoder = PwmDecoder::default();
        let t0 = u32::MAX - 100;
        pulse(&mut decoder, 0, t0, T_LOW + 700);
        assert_eq!(decoder.value(0), 700);
    }

    #[test]
    fn test_simultaneous_edges_share_timestamp() {
        let mut decoder = PwmDecoder::default();
        // Both lines rise in one event, fall in another
        decoder.on_edge(0b0110, 10_000);
        decoder.on_edge(0b0000, 10_000 + T_LOW + 300);
        assert_eq!(decoder.value(1), 300);
        assert_eq!(decoder.value(2), 300);
    }

    #[test]
    fn test_identical_snapshot_is_a_no_op() {
        let mut decoder = PwmDecoder::default();
        decoder.on_edge(0b0001, 100);
        let before = decoder.values();
        decoder.on_edge(0b0001, 50_000);
        assert_eq!(decoder.values(), before);

        // The rising reference is untouched by the no-op
        decoder.on_edge(0b0000, 100 + T_LOW + 42);
        assert_eq!(decoder.value(0), 42);
    }

    #[test]
    fn test_rising_edge_resets_reference() {
        let mut decoder = PwmDecoder::default();
        // Noise: a short low glitch between two rising edges
        decoder.on_edge(0b0001, 1000);
        decoder.on_edge(0b0000, 1100);
        decoder.on_edge(0b0001, 1200);
        // The next falling edge measures from the latest rising edge
        decoder.on_edge(0b0000, 1200 + T_LOW + 900);
        assert_eq!(decoder.value(0), 900);
    }

    #[test]
    fn test_unmonitored_bits_are_masked_from_state() {
        let mut decoder = PwmDecoder::default();
        decoder.on_edge(0b1001_0001, 500);
        // Only the low nibble is retained as the observed state
        decoder.on_edge(0b0000_0000, 500 + T_LOW + 10);
        assert_eq!(decoder.value(0), 10);
    }
}
