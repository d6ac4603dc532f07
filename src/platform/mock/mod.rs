//! Mock platform implementation for testing
//!
//! This module provides mock implementations of platform traits that can be
//! used for unit testing without requiring actual hardware.
//!
//! # Feature Gate
//!
//! This module is available in two contexts:
//! - During test builds (`#[cfg(test)]`)
//! - When the `mock` feature is enabled
//!
//! # Example
//!
//! ```ignore
//! use ioboard::platform::mock::MockGpioBank;
//! use ioboard::platform::traits::GpioBankInterface;
//!
//! let mut gpio = MockGpioBank::new();
//! gpio.set_input_levels(0b0101);
//! assert_eq!(gpio.read_pin_levels(), 0b0101);
//! ```

#![cfg(any(test, feature = "mock"))]

mod adc;
mod gpio;

pub use adc::MockAdcRing;
pub use gpio::MockGpioBank;
