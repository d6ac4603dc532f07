#![cfg_attr(not(test), no_std)]

//! ioboard - Sensor acquisition core for a flight-controller I/O board
//!
//! This library digitizes four analog channels through a hardware-filled ring
//! buffer and decodes up to four PWM inputs from edge timestamps, publishing
//! averaged/normalized values to the communications layer every control cycle.
//! Hardware is reached only through the platform traits, so the algorithms run
//! unchanged against the mock platform in host tests.

// Platform abstraction layer (GPIO bank, ADC ring DMA)
pub mod platform;

// Logging and shared-state infrastructure
pub mod core;

// Communications collaborator interface
pub mod communication;

// ADC averaging engine, PWM edge decoder, and the periodic cycle
pub mod acquisition;
