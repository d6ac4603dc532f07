//! ADC averaging engine
//!
//! The DMA hardware appends interleaved samples (channel 0, 1, 2, 3, 0, ...)
//! to the circular buffer continuously; this engine tracks its own read
//! cursor, averages whatever arrived since the previous cycle, and repairs
//! the ring when the cursors desynchronize.
//!
//! Desynchronization has two faces with one symptom: after a cold start the
//! software cursor sits ahead of any real data (no new samples), and after a
//! scheduling hiccup the hardware can wrap the buffer before it is drained
//! (cursor distance implausibly large). The ring has no validity flag, so
//! both are detected by the cursor-distance heuristic and repaired the same
//! way, with a full re-arm from the buffer base.

use super::{NUM_ADC_CHANNELS, SAMPLE_MAX};
use crate::platform::traits::AdcRingInterface;

/// Result of one drain pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DrainOutcome {
    /// Per-channel averages scaled to [0, 32768]
    pub averages: [u16; NUM_ADC_CHANNELS],
    /// Samples consumed this cycle
    pub consumed: usize,
    /// Whether the ring was re-armed instead of drained
    pub rearmed: bool,
}

/// Self-healing consumer for the hardware-filled sample ring
#[derive(Debug)]
pub struct AdcAverager {
    /// Index of the next unread sample
    cursor: usize,
}

impl AdcAverager {
    /// Create an averager with its cursor at the buffer base
    pub const fn new() -> Self {
        Self { cursor: 0 }
    }

    /// Drain new samples and average them per channel
    ///
    /// Called once per control cycle. Returns zeroed averages and processes
    /// nothing on the cycle a re-arm occurs; channels with no samples report
    /// zero.
    pub fn drain_and_average<A: AdcRingInterface>(&mut self, adc: &mut A) -> DrainOutcome {
        let capacity = adc.samples().len();
        debug_assert!(capacity.is_power_of_two());

        // The remaining-transfer count is the hardware write cursor's
        // complement; `filled` is the write cursor modulo capacity.
        let filled = capacity - adc.remaining_transfer_count();
        debug_assert!(filled <= capacity);

        // Unread samples, accounting for one buffer wraparound
        let available = if filled >= self.cursor {
            filled - self.cursor
        } else {
            (capacity - self.cursor) + filled
        };

        if available == 0 || available > capacity * 7 / 8 {
            // Stalled or overrun: the cursors can no longer be trusted.
            // Re-arm the ring from the base and skip this cycle.
            self.cursor = 0;
            self.rearm(adc);
            crate::log_warn!("adc ring desynchronized, re-armed");
            return DrainOutcome {
                averages: [0; NUM_ADC_CHANNELS],
                consumed: 0,
                rearmed: true,
            };
        }

        let mut totals = [0u32; NUM_ADC_CHANNELS];
        let mut counts = [0u16; NUM_ADC_CHANNELS];

        for _ in 0..available {
            let channel = self.cursor % NUM_ADC_CHANNELS;
            // A per-channel count past capacity/4 means the drain loop itself
            // is broken, not the hardware.
            debug_assert!((counts[channel] as usize) <= capacity / NUM_ADC_CHANNELS);

            let sample = adc.samples()[self.cursor].clamp(0, SAMPLE_MAX);
            totals[channel] += sample as u32;
            counts[channel] += 1;
            self.cursor = (self.cursor + 1) & (capacity - 1);
        }

        let mut averages = [0u16; NUM_ADC_CHANNELS];
        for channel in 0..NUM_ADC_CHANNELS {
            if counts[channel] > 0 {
                // Scale the averaged 12-bit value up to [0, 32768]
                let scaled = (totals[channel] << 4) / counts[channel] as u32;
                debug_assert!(scaled <= 32768);
                averages[channel] = scaled as u16;
            }
        }

        DrainOutcome {
            averages,
            consumed: available,
            rearmed: false,
        }
    }

    /// Reprogram the ring transfer from the buffer base with full capacity
    ///
    /// The reconfiguration touches multiple DMA control registers, so it runs
    /// with interrupts suppressed; the peripheral is gated off around it.
    fn rearm<A: AdcRingInterface>(&mut self, adc: &mut A) {
        adc.disable_peripheral();
        critical_section::with(|_cs| {
            adc.reconfigure_ring_transfer();
        });
        adc.enable_peripheral();
    }
}

impl Default for AdcAverager {
    fn default() -> Self {
        Self::new()
    }
}
