//! Mock ADC ring-transfer implementation for testing

use crate::platform::traits::AdcRingInterface;

/// Mock ADC ring implementation
///
/// Simulates the DMA-filled circular sample buffer: tests push interleaved
/// samples, the write position wraps at capacity, and the remaining-transfer
/// count mirrors what the hardware descriptor would report. `N` must be a
/// power of two, matching the real ring.
#[derive(Debug)]
pub struct MockAdcRing<const N: usize> {
    buffer: [i16; N],
    write_pos: usize,
    enabled: bool,
    rearm_count: u32,
}

impl<const N: usize> MockAdcRing<N> {
    /// Create a new mock ring, enabled, with an empty buffer
    pub fn new() -> Self {
        assert!(N.is_power_of_two());
        Self {
            buffer: [0; N],
            write_pos: 0,
            enabled: true,
            rearm_count: 0,
        }
    }

    /// Simulate the hardware writing one sample at the current position
    ///
    /// Ignored while the peripheral is disabled, as real conversions would be.
    pub fn push_sample(&mut self, sample: i16) {
        if !self.enabled {
            return;
        }
        self.buffer[self.write_pos] = sample;
        self.write_pos = (self.write_pos + 1) & (N - 1);
    }

    /// Push one interleaved frame (one sample per channel)
    pub fn push_frame(&mut self, frame: &[i16]) {
        for &sample in frame {
            self.push_sample(sample);
        }
    }

    /// Push `count` samples all holding `value`
    pub fn push_constant(&mut self, value: i16, count: usize) {
        for _ in 0..count {
            self.push_sample(value);
        }
    }

    /// Number of times the ring transfer has been reprogrammed
    pub fn rearm_count(&self) -> u32 {
        self.rearm_count
    }

    /// Whether the peripheral is currently enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl<const N: usize> Default for MockAdcRing<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> AdcRingInterface for MockAdcRing<N> {
    fn samples(&self) -> &[i16] {
        &self.buffer
    }

    fn remaining_transfer_count(&self) -> usize {
        N - self.write_pos
    }

    fn reconfigure_ring_transfer(&mut self) {
        self.write_pos = 0;
        self.rearm_count += 1;
    }

    fn disable_peripheral(&mut self) {
        self.enabled = false;
    }

    fn enable_peripheral(&mut self) {
        self.enabled = true;
    }
}
