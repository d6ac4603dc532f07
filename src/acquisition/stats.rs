//! Acquisition diagnostics counters

/// Running counters for the acquisition cycle
///
/// Ring desynchronization is repaired automatically and never surfaced as an
/// error; these counters make it observable for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AcquisitionStats {
    /// Control cycles executed
    pub cycles: u32,
    /// Raw ADC samples consumed across all cycles
    pub samples_consumed: u32,
    /// Ring re-arms performed (stall or overrun detections)
    pub rearms: u32,
}

impl AcquisitionStats {
    /// Fresh counters, all zero
    pub const fn new() -> Self {
        Self {
            cycles: 0,
            samples_consumed: 0,
            rearms: 0,
        }
    }
}
