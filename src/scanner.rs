//! Bring-up and the scan loop.

use core::fmt::{self, Write};

use embedded_hal::blocking::delay::DelayMs;

use crate::channel::ScopedChannel;
use crate::config::{
    AdcConfig, BANNER, CLEAR_SCREEN, CONSOLE_BAUD_RATE, ChannelConfig, INPUT_COUNT,
    SCAN_DELAY_MS,
};
use crate::convert::micro_to_milli;
use crate::error::Error;
use crate::hal::{AdcDriver, Platform, Vminus};
use crate::policy::{FailurePolicy, Recovery};
use crate::row::{FIELD_WIDTH, Row};

/// Owns the ADC instance and the console for the life of the program and
/// samples a fixed list of input pins through one re-bound channel.
pub struct Scanner<A: AdcDriver, C, const N: usize = INPUT_COUNT> {
    adc: A,
    console: C,
    pins: [A::Pin; N],
    channel_config: ChannelConfig,
}

impl<A, C, const N: usize> Scanner<A, C, N>
where
    A: AdcDriver,
    C: Write,
{
    /// Wrap an ADC that is already initialised and configured.
    pub fn new(adc: A, console: C, pins: [A::Pin; N]) -> Self {
        const { assert!(N > 0, "at least one input pin is required") };

        Self {
            adc,
            console,
            pins,
            channel_config: ChannelConfig::DEFAULT,
        }
    }

    /// Bring the platform up, print the banner and configure the ADC on the
    /// block reachable from the first input pin.
    ///
    /// Errors after the console is up are printed to it before returning.
    pub fn bring_up<P>(platform: &mut P, pins: [A::Pin; N]) -> Result<Self, Error>
    where
        P: Platform<Adc = A, Console = C>,
    {
        const { assert!(N > 0, "at least one input pin is required") };

        if P::SECURE {
            platform.disable_watchdog().map_err(Error::Watchdog)?;
        }
        platform.init().map_err(Error::Board)?;
        platform.enable_interrupts();

        let mut console = platform
            .init_console(CONSOLE_BAUD_RATE)
            .map_err(Error::Console)?;
        checked(write!(console, "{}{}\r\n", CLEAR_SCREEN, BANNER));
        info!("console up at {} baud", CONSOLE_BAUD_RATE);

        let mut adc = match platform.init_adc(pins[0]) {
            Ok(adc) => adc,
            Err(status) => return Err(report(&mut console, Error::AdcInit(status))),
        };
        if let Err(status) = adc.configure(&AdcConfig::DEFAULT) {
            return Err(report(&mut console, Error::AdcConfig(status)));
        }
        info!("ADC configured, scanning {} inputs", N);

        Ok(Self::new(adc, console, pins))
    }

    /// Sample every input once, in declaration order, without printing.
    ///
    /// Stops at the first channel that cannot be bound; inputs after it are
    /// not touched in this round.
    pub fn scan_round(&mut self) -> Result<Row<N>, Error> {
        self.sample(|_, _, _| {})
    }

    /// One round with output. Each value goes out as soon as its pin is read,
    /// followed by `,` for all but the last pin; `\r\n` ends a complete row.
    /// A failing pin leaves the fields read so far on the line and appends the
    /// diagnostic.
    pub fn scan_and_report(&mut self) -> Result<Row<N>, Error> {
        let result = self.sample(|console, index, millivolts| {
            let separator = if index + 1 < N { "," } else { "" };
            checked(write!(
                console,
                "{:>width$}{}",
                millivolts,
                separator,
                width = FIELD_WIDTH
            ));
        });
        match result {
            Ok(row) => {
                checked(self.console.write_str("\r\n"));
                trace!("row {}", row);
                Ok(row)
            }
            Err(error) => Err(report(&mut self.console, error)),
        }
    }

    /// Scan forever with [`SCAN_DELAY_MS`] between rounds until `policy`
    /// asks to halt, then return the error that stopped it.
    pub fn run<D, F>(&mut self, delay: &mut D, policy: &mut F) -> Error
    where
        D: DelayMs<u32>,
        F: FailurePolicy,
    {
        loop {
            if let Err(error) = self.scan_and_report() {
                match policy.on_failure(&error) {
                    Recovery::Halt => return error,
                    Recovery::NextRound => warn!("skipping round after failure"),
                }
            }
            delay.delay_ms(SCAN_DELAY_MS);
        }
    }

    pub fn adc(&self) -> &A {
        &self.adc
    }

    fn sample<E>(&mut self, mut emit: E) -> Result<Row<N>, Error>
    where
        E: FnMut(&mut C, usize, i32),
    {
        let Self {
            adc,
            console,
            pins,
            channel_config,
        } = self;

        let mut millivolts = [0; N];
        for (index, (&pin, slot)) in pins.iter().zip(millivolts.iter_mut()).enumerate() {
            let mut channel = ScopedChannel::acquire(&mut *adc, pin, Vminus::Ground, channel_config)
                .map_err(|status| Error::Channel { index, status })?;
            *slot = micro_to_milli(channel.read_uv());
            emit(console, index, *slot);
        }
        Ok(Row::new(millivolts))
    }
}

fn report<C: Write>(console: &mut C, error: Error) -> Error {
    error!("{}", error);
    checked(writeln!(console, "{}", error));
    error
}

/// The console is output only; a failed write is logged and otherwise ignored.
fn checked(result: fmt::Result) {
    if result.is_err() {
        warn!("console write failed");
    }
}
