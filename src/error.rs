use core::fmt;

use crate::hal::Status;

/// Broad class of a failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FailureKind {
    /// Board, console or ADC bring-up.
    BringUp,
    /// Binding a channel to one input pin.
    Channel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    Watchdog(Status),
    Board(Status),
    Console(Status),
    AdcInit(Status),
    AdcConfig(Status),
    /// Channel for input `index` (0-based, declaration order) could not be bound.
    Channel { index: usize, status: Status },
}

impl Error {
    pub fn kind(&self) -> FailureKind {
        match self {
            Error::Channel { .. } => FailureKind::Channel,
            _ => FailureKind::BringUp,
        }
    }

    /// Status code reported by the driver.
    pub fn status(&self) -> Status {
        match *self {
            Error::Watchdog(status)
            | Error::Board(status)
            | Error::Console(status)
            | Error::AdcInit(status)
            | Error::AdcConfig(status)
            | Error::Channel { status, .. } => status,
        }
    }
}

/// Formats the diagnostic line printed before halting, without terminator.
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Watchdog(status) => write!(f, "Watchdog init failed: {}", status),
            Error::Board(status) => write!(f, "Board init failed: {}", status),
            Error::Console(status) => write!(f, "Console init failed: {}", status),
            Error::AdcInit(status) => write!(f, "ADC init failed: {}", status),
            Error::AdcConfig(status) => write!(f, "ADC config failed: {}", status),
            Error::Channel { index, status } => {
                write!(f, "ADC Channel {} init failed: {}", index, status)
            }
        }
    }
}
