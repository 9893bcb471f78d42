//! Drives a chip8 emulator core from the handful of inputs a watch offers.
//!
//! Gestures are translated per program into keypad keys
//! ([`mapping`], [`resolver`]) and handed to the core by the [`driver`],
//! which also steps the cpu and refreshes the display on two independent
//! schedules.
pub mod definitions;
pub mod devices;
pub mod driver;
pub mod input;
pub mod mapping;
pub mod resolver;
pub mod timer;
mod error;

// reexporting for convinience
pub use driver::{Driver, Timings};
pub use error::*;
pub use mapping::{supported_programs, Program};
pub use resolver::resolve;
