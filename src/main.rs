#![no_std]
#![no_main]

mod board;

use adc_scan::config::SCAN_DELAY_MS;
use adc_scan::{Error, HaltOnFailure, Scanner};
use defmt::info;
use embassy_executor::Spawner;
use embassy_stm32::Config;
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use board::{INPUT_PINS, Nucleo};

defmt::timestamp!("{=u64}", { embassy_time::Instant::now().as_millis() });

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("=== ADC scan: single ADC, multiple inputs ===");

    let mut nucleo = Nucleo::new(Config::default());
    let mut scanner = match Scanner::bring_up(&mut nucleo, INPUT_PINS) {
        Ok(scanner) => scanner,
        Err(error) => halt(error),
    };

    info!("Scanning {} every {} ms", INPUT_PINS, SCAN_DELAY_MS);

    let error = scanner.run(&mut Delay, &mut HaltOnFailure);
    halt(error)
}

/// Stop here for the debugger; there is no recovery path.
fn halt(error: Error) -> ! {
    defmt::panic!("halted: {}", error)
}
