//! ADC ring-transfer interface trait
//!
//! The ADC peripheral and its DMA channel are modeled as a black box that
//! appends interleaved samples (channel 0, 1, 2, 3, 0, 1, ...) to a circular
//! buffer and exposes a remaining-transfer count as the write-cursor proxy.
//! The averaging engine owns the read cursor and never sees raw registers.

/// ADC ring-transfer interface trait
///
/// Platform implementations must provide this interface for the hardware-filled
/// sample ring.
///
/// # Safety Invariants
///
/// - The sample buffer capacity must be a power of two
/// - `reconfigure_ring_transfer` must only be called with the peripheral
///   disabled, inside a critical section (the re-arm touches multiple control
///   registers that must appear atomic to a concurrent edge interrupt)
pub trait AdcRingInterface {
    /// Borrow the circular sample buffer
    ///
    /// The hardware writes interleaved signed samples into this buffer in
    /// wraparound order. The slice length is the ring capacity.
    fn samples(&self) -> &[i16];

    /// Number of transfers remaining before the DMA descriptor reloads
    ///
    /// Counts down from the ring capacity as the hardware fills the buffer;
    /// `capacity - remaining` is the hardware write cursor modulo capacity.
    fn remaining_transfer_count(&self) -> usize;

    /// Reprogram the ring transfer from the buffer base with full capacity
    ///
    /// Discards any in-flight transfer state. Must be called with the
    /// peripheral disabled, inside a critical section.
    fn reconfigure_ring_transfer(&mut self);

    /// Disable the ADC peripheral (stops DMA requests)
    fn disable_peripheral(&mut self);

    /// Enable the ADC peripheral (resumes conversions and DMA requests)
    fn enable_peripheral(&mut self);
}
