//! GPIO bank interface trait
//!
//! The acquisition core treats the board's general-purpose pins as one small
//! bank addressed by logical bitmasks, plus the free-running cycle counter the
//! PWM decoder timestamps edges against. Pin-to-pad routing and direction
//! setup happen during board bring-up, outside this crate.

use crate::platform::Result;

/// GPIO bank interface trait
///
/// Platform implementations must provide this interface for pin-level I/O.
///
/// # Safety Invariants
///
/// - Pins must be configured (direction, pulls) before use
/// - Only one owner per bank instance
/// - `read_pin_levels` and `read_monotonic_counter` must be safe to call from
///   interrupt context
pub trait GpioBankInterface {
    /// Read the current input pin levels as a bitmask
    ///
    /// Bit `i` reflects logical input pin `i`. Unmonitored bits read as zero.
    fn read_pin_levels(&self) -> u8;

    /// Drive the output pins from a bitmask
    ///
    /// Bit `i` drives logical output pin `i`. Bits beyond the output pin
    /// count are ignored.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Gpio(GpioError::InvalidMode)` if the bank's
    /// output pins are not configured as outputs.
    fn write_pin_levels(&mut self, levels: u8) -> Result<()>;

    /// Read the free-running monotonic counter
    ///
    /// The counter increments at a fixed clock rate and wraps at `u32::MAX`.
    /// Consumers must use wrapping subtraction when computing intervals.
    fn read_monotonic_counter(&self) -> u32;
}
