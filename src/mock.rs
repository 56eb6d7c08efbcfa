//! Recorded fakes for the hardware seams.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::blocking::serial;

use crate::config::{AdcConfig, ChannelConfig};
use crate::hal::{AdcDriver, Platform, Status, Vminus};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Configure,
    Acquire(u8),
    Read(u8),
    Free(u8),
}

#[derive(Debug)]
pub struct FakeChannel {
    pin: u8,
}

/// ADC that hands out queued samples and can fail the n-th acquisition.
#[derive(Debug, Default)]
pub struct FakeAdc {
    pub events: Vec<Event>,
    pub configs: Vec<AdcConfig<u8>>,
    pub channel_configs: Vec<(Vminus<u8>, ChannelConfig)>,
    /// Channels currently bound.
    pub live: usize,
    pub max_live: usize,
    samples: VecDeque<i32>,
    acquisitions: usize,
    fail_acquire: Vec<(usize, Status)>,
    fail_configure: Option<Status>,
}

impl FakeAdc {
    pub fn new(samples: impl IntoIterator<Item = i32>) -> Self {
        Self {
            samples: samples.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Fail acquisition number `nth` (0-based, counted across rounds).
    pub fn fail_acquire(mut self, nth: usize, status: Status) -> Self {
        self.fail_acquire.push((nth, status));
        self
    }

    pub fn fail_configure(mut self, status: Status) -> Self {
        self.fail_configure = Some(status);
        self
    }
}

impl AdcDriver for FakeAdc {
    type Pin = u8;
    type Channel = FakeChannel;

    fn configure(&mut self, config: &AdcConfig<u8>) -> Result<(), Status> {
        self.events.push(Event::Configure);
        self.configs.push(*config);
        match self.fail_configure {
            Some(status) => Err(status),
            None => Ok(()),
        }
    }

    fn channel_init_diff(
        &mut self,
        vplus: u8,
        vminus: Vminus<u8>,
        config: &ChannelConfig,
    ) -> Result<FakeChannel, Status> {
        self.events.push(Event::Acquire(vplus));
        self.channel_configs.push((vminus, *config));
        let nth = self.acquisitions;
        self.acquisitions += 1;
        if let Some(&(_, status)) = self.fail_acquire.iter().find(|(at, _)| *at == nth) {
            return Err(status);
        }
        self.live += 1;
        self.max_live = self.max_live.max(self.live);
        Ok(FakeChannel { pin: vplus })
    }

    fn read_uv(&mut self, channel: &mut FakeChannel) -> i32 {
        self.events.push(Event::Read(channel.pin));
        self.samples.pop_front().unwrap_or(0)
    }

    fn channel_free(&mut self, channel: FakeChannel) {
        self.events.push(Event::Free(channel.pin));
        self.live -= 1;
    }
}

/// Console whose output stays readable after the writer has been moved away.
#[derive(Clone, Debug, Default)]
pub struct SharedConsole(Rc<RefCell<String>>);

impl SharedConsole {
    pub fn contents(&self) -> String {
        self.0.borrow().clone()
    }
}

impl fmt::Write for SharedConsole {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.borrow_mut().push_str(s);
        Ok(())
    }
}

/// Platform recording its bring-up calls. `SECURE` selects the watchdog path.
#[derive(Debug, Default)]
pub struct FakePlatform<const S: bool = false> {
    pub calls: Vec<&'static str>,
    pub console: SharedConsole,
    pub baud_rate: Option<u32>,
    pub adc_pin: Option<u8>,
    pub watchdog_status: Option<Status>,
    pub init_status: Option<Status>,
    pub console_status: Option<Status>,
    pub adc_status: Option<Status>,
    pub adc: Option<FakeAdc>,
}

impl<const S: bool> FakePlatform<S> {
    pub fn with_adc(adc: FakeAdc) -> Self {
        Self {
            adc: Some(adc),
            ..Self::default()
        }
    }
}

fn status_to_result(status: Option<Status>) -> Result<(), Status> {
    match status {
        Some(status) => Err(status),
        None => Ok(()),
    }
}

impl<const S: bool> Platform for FakePlatform<S> {
    type Adc = FakeAdc;
    type Console = SharedConsole;

    const SECURE: bool = S;

    fn disable_watchdog(&mut self) -> Result<(), Status> {
        self.calls.push("watchdog");
        status_to_result(self.watchdog_status)
    }

    fn init(&mut self) -> Result<(), Status> {
        self.calls.push("init");
        status_to_result(self.init_status)
    }

    fn enable_interrupts(&mut self) {
        self.calls.push("interrupts");
    }

    fn init_console(&mut self, baud_rate: u32) -> Result<SharedConsole, Status> {
        self.calls.push("console");
        self.baud_rate = Some(baud_rate);
        status_to_result(self.console_status)?;
        Ok(self.console.clone())
    }

    fn init_adc(&mut self, pin: u8) -> Result<FakeAdc, Status> {
        self.calls.push("adc");
        self.adc_pin = Some(pin);
        status_to_result(self.adc_status)?;
        Ok(self.adc.take().unwrap_or_default())
    }
}

#[derive(Debug, Default)]
pub struct FakeDelay {
    pub delays_ms: Vec<u32>,
}

impl DelayMs<u32> for FakeDelay {
    fn delay_ms(&mut self, ms: u32) {
        self.delays_ms.push(ms);
    }
}

#[derive(Debug, Default)]
pub struct FakeSerial {
    pub bytes: Vec<u8>,
    pub flushes: usize,
    fail: bool,
}

impl FakeSerial {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

impl serial::Write<u8> for FakeSerial {
    type Error = ();

    fn bwrite_all(&mut self, buffer: &[u8]) -> Result<(), ()> {
        if self.fail {
            return Err(());
        }
        self.bytes.extend_from_slice(buffer);
        Ok(())
    }

    fn bflush(&mut self) -> Result<(), ()> {
        self.flushes += 1;
        Ok(())
    }
}
