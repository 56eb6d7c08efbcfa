use crate::error::Error;

/// What the scan loop does after a failed round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Recovery {
    /// Leave the loop and hand the error to the caller.
    Halt,
    /// Wait out the scan delay and start the next round.
    NextRound,
}

/// Decides how the scan loop reacts to a failure. The diagnostic has already
/// been printed when this is consulted.
pub trait FailurePolicy {
    fn on_failure(&mut self, error: &Error) -> Recovery;
}

/// Stop at the first failure.
#[derive(Clone, Copy, Debug, Default)]
pub struct HaltOnFailure;

impl FailurePolicy for HaltOnFailure {
    fn on_failure(&mut self, _error: &Error) -> Recovery {
        Recovery::Halt
    }
}

impl<F> FailurePolicy for F
where
    F: FnMut(&Error) -> Recovery,
{
    fn on_failure(&mut self, error: &Error) -> Recovery {
        self(error)
    }
}
