//! Platform abstraction traits
//!
//! This module defines the traits that platform implementations must provide.

pub mod adc;
pub mod gpio;

// Re-export trait interfaces
pub use adc::AdcRingInterface;
pub use gpio::GpioBankInterface;
