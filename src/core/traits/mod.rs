//! Platform-agnostic infrastructure traits
//!
//! The `SharedState` trait abstracts over synchronization mechanisms so the
//! edge-interrupt path and the periodic task can share the PWM decoder state
//! without the algorithms knowing which lock (if any) guards it:
//!
//! - `EmbassyState<T>` for embedded targets, using Embassy's critical-section
//!   Mutex (`embassy` feature)
//! - `MockState<T>` for host testing, using RefCell (single-threaded)

pub mod sync;

// Re-export traits and mock implementations (always available)
pub use sync::{MockState, SharedState};

// Re-export Embassy implementations when the embassy feature is enabled
#[cfg(feature = "embassy")]
pub use sync::EmbassyState;
