use crate::config::ChannelConfig;
use crate::hal::{AdcDriver, Status, Vminus};

/// A channel bound to one input pin for the duration of a single read.
///
/// Holding the ADC mutably means only one of these can be alive at a time.
/// The binding is released when the value is dropped, whichever way the
/// caller leaves the scope.
pub struct ScopedChannel<'a, A: AdcDriver> {
    adc: &'a mut A,
    channel: Option<A::Channel>,
}

impl<'a, A: AdcDriver> ScopedChannel<'a, A> {
    pub fn acquire(
        adc: &'a mut A,
        vplus: A::Pin,
        vminus: Vminus<A::Pin>,
        config: &ChannelConfig,
    ) -> Result<Self, Status> {
        let channel = adc.channel_init_diff(vplus, vminus, config)?;
        Ok(Self {
            adc,
            channel: Some(channel),
        })
    }

    /// One conversion, in microvolts.
    pub fn read_uv(&mut self) -> i32 {
        let Self { adc, channel } = self;
        channel.as_mut().map_or(0, |channel| adc.read_uv(channel))
    }
}

impl<A: AdcDriver> Drop for ScopedChannel<'_, A> {
    fn drop(&mut self) {
        if let Some(channel) = self.channel.take() {
            self.adc.channel_free(channel);
        }
    }
}
