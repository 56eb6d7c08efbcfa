//! Single ADC, multiple inputs.
//!
//! One ADC instance is configured once, then a single channel is re-bound to
//! each input pin in turn, read, converted to millivolts and printed as one
//! comma separated row per scan round on the debug console.
//!
//! Everything that touches real hardware sits behind the [`hal`] traits so the
//! scan logic builds and tests on the host. The firmware binary binds them to
//! an actual board.
#![cfg_attr(not(test), no_std)]

// Must stay first so the log macros are visible to every module below.
#[macro_use]
mod fmt;

pub mod channel;
pub mod config;
pub mod console;
pub mod convert;
pub mod error;
pub mod hal;
pub mod policy;
pub mod row;
pub mod scanner;

#[cfg(test)]
mod mock;

pub use channel::ScopedChannel;
pub use config::{AdcConfig, ChannelConfig, INPUT_COUNT};
pub use console::SerialConsole;
pub use error::{Error, FailureKind};
pub use hal::{AdcDriver, Platform, Status, Vminus};
pub use policy::{FailurePolicy, HaltOnFailure, Recovery};
pub use row::{ParseRowError, Row};
pub use scanner::Scanner;
