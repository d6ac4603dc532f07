//! Platform abstraction layer
//!
//! Hardware is reached exclusively through the traits in this module. The
//! acquisition algorithms are generic over them, so the same code runs against
//! real peripherals on the board and against the mock implementations in host
//! tests.

pub mod error;
pub mod traits;

// Mock implementations (test builds, or with the `mock` feature)
#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{PlatformError, Result};
pub use traits::{AdcRingInterface, GpioBankInterface};
