//! Hardware seams.
//!
//! The scan only ever talks to the board through these two traits. A board
//! crate implements them over its vendor HAL; tests implement them over
//! recorded fakes.

use core::fmt;

use crate::config::{AdcConfig, ChannelConfig};

/// Numeric status code returned by a failing driver call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Status(pub u32);

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Negative input of a channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Vminus<P> {
    /// Measure against ground.
    Ground,
    /// Measure the difference to another pin.
    Pin(P),
}

/// An ADC peripheral with one configuration and any number of transient
/// channel bindings.
pub trait AdcDriver {
    /// Physical pin identifier.
    type Pin: Copy;
    /// Live binding of the ADC to one input pin.
    type Channel;

    /// Apply peripheral wide settings.
    fn configure(&mut self, config: &AdcConfig<Self::Pin>) -> Result<(), Status>;

    /// Bind a channel to `vplus`, measured against `vminus`.
    fn channel_init_diff(
        &mut self,
        vplus: Self::Pin,
        vminus: Vminus<Self::Pin>,
        config: &ChannelConfig,
    ) -> Result<Self::Channel, Status>;

    /// Convert once and return the result in microvolts.
    fn read_uv(&mut self, channel: &mut Self::Channel) -> i32;

    /// Release a channel binding.
    fn channel_free(&mut self, channel: Self::Channel);
}

/// Board bring-up: clocks, interrupts, debug console and the ADC block.
pub trait Platform {
    type Adc: AdcDriver;
    type Console: fmt::Write;

    /// Parts with a secure boot flow keep the watchdog running after reset.
    const SECURE: bool = false;

    /// Stop the watchdog so it does not reset the part. Only called on
    /// [`Platform::SECURE`] parts.
    fn disable_watchdog(&mut self) -> Result<(), Status> {
        Ok(())
    }

    /// Bring up clocks and board peripherals.
    fn init(&mut self) -> Result<(), Status>;

    fn enable_interrupts(&mut self);

    /// Open the debug console.
    fn init_console(&mut self, baud_rate: u32) -> Result<Self::Console, Status>;

    /// Reserve the ADC block that can reach `pin`.
    fn init_adc(&mut self, pin: <Self::Adc as AdcDriver>::Pin) -> Result<Self::Adc, Status>;
}
