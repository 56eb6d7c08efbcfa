//! Compile-time configuration of the scan.
//!
//! Nothing here is adjustable at runtime. The pin map itself belongs to the
//! board; this module only fixes how many inputs a round covers.

/// Number of input pins sampled per scan round.
pub const INPUT_COUNT: usize = 5;

/// Microvolts per millivolt.
pub const MICRO_TO_MILLI_CONV_RATIO: i32 = 1000;

/// Minimum acquisition time of every channel, in nanoseconds.
pub const ACQUISITION_TIME_NS: u32 = 1000;

/// Pause between two scan rounds, in milliseconds.
pub const SCAN_DELAY_MS: u32 = 50;

/// Debug console baud rate.
pub const CONSOLE_BAUD_RATE: u32 = 115_200;

/// ANSI clear screen followed by cursor home.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[;H";

/// First line printed after the console comes up.
pub const BANNER: &str = "PSoC6 ADC Read Example - Single ADC, Multiple Inputs";

/// Reference used for single ended conversions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Vref {
    /// Internal bandgap reference
    Internal,
    /// Reference supplied on an external pin
    External,
    /// Analog supply rail
    Vdda,
    /// Half the analog supply rail
    VddaDiv2,
}

/// Negative reference for single ended conversions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Vneg {
    /// Analog ground
    Vssa,
    /// Same as the positive reference
    Vref,
}

/// Peripheral wide ADC settings, shared by every channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdcConfig<P> {
    pub continuous_scanning: bool,
    pub average_count: u16,
    pub vref: Vref,
    pub vneg: Vneg,
    pub resolution: u8,
    /// External reference pin, if any.
    pub ext_vref: Option<P>,
    /// Reference bypass capacitor pin, if any.
    pub bypass_pin: Option<P>,
}

impl<P> AdcConfig<P> {
    /// Single conversions, no averaging, 12 bits between ground and supply.
    pub const DEFAULT: Self = Self {
        continuous_scanning: false,
        average_count: 1,
        vref: Vref::Vdda,
        vneg: Vneg::Vssa,
        resolution: 12,
        ext_vref: None,
        bypass_pin: None,
    };
}

/// Settings of a single channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelConfig {
    pub enable_averaging: bool,
    pub min_acquisition_ns: u32,
    /// Sample this channel when the ADC performs a scan.
    pub enabled: bool,
}

impl ChannelConfig {
    pub const DEFAULT: Self = Self {
        enable_averaging: false,
        min_acquisition_ns: ACQUISITION_TIME_NS,
        enabled: true,
    };
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
