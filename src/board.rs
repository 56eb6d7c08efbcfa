//! Nucleo-F401RE binding of the scan.
//!
//! Inputs are the Arduino header pins A0..A4, all on ADC1:
//! - A0: PA0 (ADC1_IN0)
//! - A1: PA1 (ADC1_IN1)
//! - A2: PA4 (ADC1_IN4)
//! - A3: PB0 (ADC1_IN8)
//! - A4: PC1 (ADC1_IN11)
//!
//! The debug console is USART2 TX on PA2, routed to the ST-LINK virtual COM
//! port.

use adc_scan::config::{AdcConfig, ChannelConfig, INPUT_COUNT, Vneg, Vref};
use adc_scan::convert::{acquisition_cycles, raw_to_microvolts};
use adc_scan::{AdcDriver, Platform, SerialConsole, Status, Vminus};
use defmt::{debug, info, trace};
use embassy_stm32::adc::{Adc, AdcChannel, AnyAdcChannel, Resolution, SampleTime};
use embassy_stm32::mode::Blocking;
use embassy_stm32::peripherals::{ADC1, PA2, USART2};
use embassy_stm32::usart::{Config as UartConfig, UartTx};
use embassy_stm32::Config;

/// ADC kernel clock: 16 MHz HSI on APB2, divided by two by the driver.
const ADC_CLOCK_HZ: u32 = 8_000_000;

/// Analog supply, in microvolts.
const VDDA_UV: i32 = 3_300_000;

/// Selectable sample times and their length in ADC clock cycles, shortest first.
const SAMPLE_TIMES: [(u32, SampleTime); 8] = [
    (3, SampleTime::CYCLES3),
    (15, SampleTime::CYCLES15),
    (28, SampleTime::CYCLES28),
    (56, SampleTime::CYCLES56),
    (84, SampleTime::CYCLES84),
    (112, SampleTime::CYCLES112),
    (144, SampleTime::CYCLES144),
    (480, SampleTime::CYCLES480),
];

/// Status codes reported by this board.
pub mod status {
    use adc_scan::Status;

    /// `init` was called twice.
    pub const ALREADY_INITIALISED: Status = Status(0x0001);
    /// A peripheral was requested before `init` or after it was handed out.
    pub const NOT_AVAILABLE: Status = Status(0x0002);
    /// USART2 rejected the requested configuration.
    pub const CONSOLE_CONFIG: Status = Status(0x0003);
    /// The ADC cannot do what the configuration asks for.
    pub const UNSUPPORTED_CONFIG: Status = Status(0x0101);
    /// Resolution other than 6, 8, 10 or 12 bits.
    pub const BAD_RESOLUTION: Status = Status(0x0102);
    /// Negative input on a pin; this ADC only measures against ground.
    pub const NO_DIFFERENTIAL: Status = Status(0x0103);
    /// Requested acquisition time is longer than the longest sample time.
    pub const ACQUISITION_TOO_LONG: Status = Status(0x0104);
}

/// Analog input on the Arduino header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, defmt::Format)]
pub enum Input {
    A0 = 0,
    A1 = 1,
    A2 = 2,
    A3 = 3,
    A4 = 4,
}

/// Scan order.
pub const INPUT_PINS: [Input; INPUT_COUNT] = [Input::A0, Input::A1, Input::A2, Input::A3, Input::A4];

/// Peripherals handed out during bring-up.
pub struct Nucleo {
    config: Option<Config>,
    console: Option<(USART2, PA2)>,
    adc: Option<(ADC1, [AnyAdcChannel<ADC1>; INPUT_COUNT])>,
}

impl Nucleo {
    pub fn new(config: Config) -> Self {
        Self {
            config: Some(config),
            console: None,
            adc: None,
        }
    }
}

impl Platform for Nucleo {
    type Adc = NucleoAdc;
    type Console = SerialConsole<UartTx<'static, Blocking>>;

    fn init(&mut self) -> Result<(), Status> {
        let config = self.config.take().ok_or(status::ALREADY_INITIALISED)?;
        let p = embassy_stm32::init(config);

        self.console = Some((p.USART2, p.PA2));
        self.adc = Some((
            p.ADC1,
            [
                p.PA0.degrade_adc(),
                p.PA1.degrade_adc(),
                p.PA4.degrade_adc(),
                p.PB0.degrade_adc(),
                p.PC1.degrade_adc(),
            ],
        ));
        info!("Clocks and peripherals initialized");
        Ok(())
    }

    fn enable_interrupts(&mut self) {
        // SAFETY: nothing here runs inside a critical section.
        unsafe { cortex_m::interrupt::enable() };
    }

    fn init_console(&mut self, baud_rate: u32) -> Result<Self::Console, Status> {
        let (usart2, pa2) = self.console.take().ok_or(status::NOT_AVAILABLE)?;

        let mut uart_config = UartConfig::default();
        uart_config.baudrate = baud_rate;
        let tx = UartTx::new_blocking(usart2, pa2, uart_config)
            .map_err(|_| status::CONSOLE_CONFIG)?;

        info!("Console on USART2 ({} baud)", baud_rate);
        Ok(SerialConsole::new(tx))
    }

    fn init_adc(&mut self, pin: Input) -> Result<NucleoAdc, Status> {
        let (adc1, inputs) = self.adc.take().ok_or(status::NOT_AVAILABLE)?;
        debug!("ADC1 selected for {}", pin);

        Ok(NucleoAdc {
            adc: Adc::new(adc1),
            inputs,
            resolution_bits: 12,
        })
    }
}

/// ADC1 with the five header inputs pre-routed.
pub struct NucleoAdc {
    adc: Adc<'static, ADC1>,
    inputs: [AnyAdcChannel<ADC1>; INPUT_COUNT],
    resolution_bits: u8,
}

/// Binding of ADC1 to one header input.
pub struct NucleoChannel {
    input: Input,
    sample_time: SampleTime,
}

impl AdcDriver for NucleoAdc {
    type Pin = Input;
    type Channel = NucleoChannel;

    fn configure(&mut self, config: &AdcConfig<Input>) -> Result<(), Status> {
        if config.continuous_scanning
            || config.average_count != 1
            || config.vref != Vref::Vdda
            || config.vneg != Vneg::Vssa
            || config.ext_vref.is_some()
            || config.bypass_pin.is_some()
        {
            return Err(status::UNSUPPORTED_CONFIG);
        }

        let resolution = match config.resolution {
            12 => Resolution::BITS12,
            10 => Resolution::BITS10,
            8 => Resolution::BITS8,
            6 => Resolution::BITS6,
            _ => return Err(status::BAD_RESOLUTION),
        };
        self.adc.set_resolution(resolution);
        self.resolution_bits = config.resolution;

        info!("ADC1: {} bit, VDDA reference", config.resolution);
        Ok(())
    }

    fn channel_init_diff(
        &mut self,
        vplus: Input,
        vminus: Vminus<Input>,
        config: &ChannelConfig,
    ) -> Result<NucleoChannel, Status> {
        if vminus != Vminus::Ground {
            return Err(status::NO_DIFFERENTIAL);
        }
        if config.enable_averaging || !config.enabled {
            return Err(status::UNSUPPORTED_CONFIG);
        }

        let cycles = acquisition_cycles(config.min_acquisition_ns, ADC_CLOCK_HZ);
        let sample_time = SAMPLE_TIMES
            .iter()
            .find(|(length, _)| *length >= cycles)
            .map(|&(_, sample_time)| sample_time)
            .ok_or(status::ACQUISITION_TOO_LONG)?;

        Ok(NucleoChannel {
            input: vplus,
            sample_time,
        })
    }

    fn read_uv(&mut self, channel: &mut NucleoChannel) -> i32 {
        self.adc.set_sample_time(channel.sample_time);
        let raw = self.adc.blocking_read(&mut self.inputs[channel.input as usize]);
        raw_to_microvolts(raw, self.resolution_bits, VDDA_UV)
    }

    fn channel_free(&mut self, channel: NucleoChannel) {
        // Routing lives in the sequence registers and is rewritten on every read.
        trace!("{} released", channel.input);
    }
}
