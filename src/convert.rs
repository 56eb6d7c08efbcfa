//! Unit conversions between raw codes, microvolts, millivolts and cycles.

use crate::config::MICRO_TO_MILLI_CONV_RATIO;

/// Microvolts to millivolts, truncating toward zero.
pub const fn micro_to_milli(microvolts: i32) -> i32 {
    microvolts / MICRO_TO_MILLI_CONV_RATIO
}

/// Scale a raw conversion result of `resolution_bits` against a reference of
/// `vref_uv` microvolts.
pub fn raw_to_microvolts(raw: u16, resolution_bits: u8, vref_uv: i32) -> i32 {
    let full_scale = (1i64 << resolution_bits.min(16)) - 1;
    if full_scale <= 0 {
        return 0;
    }
    (raw as i64 * vref_uv as i64 / full_scale) as i32
}

/// ADC clock cycles needed to cover `acquisition_ns`, rounded up.
pub fn acquisition_cycles(acquisition_ns: u32, adc_clock_hz: u32) -> u32 {
    let cycles = (acquisition_ns as u64 * adc_clock_hz as u64).div_ceil(1_000_000_000);
    cycles.min(u32::MAX as u64) as u32
}
