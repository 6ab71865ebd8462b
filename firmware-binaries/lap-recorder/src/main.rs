// SPDX-FileCopyrightText: 2025 Google LLC
//
// SPDX-License-Identifier: Apache-2.0
#![no_std]
#![cfg_attr(not(test), no_main)]

use log::{error, LevelFilter};
use ufmt::uwriteln;

use stopwatch_hal::lap_memory::LapMemory;
use stopwatch_hal::stopwatch::Stopwatch;
use stopwatch_hal::uart::Uart;
use stopwatch_sys::delay::BusyWaitDelay;
use stopwatch_sys::lap_store::{LapStore, MAX_LAPS};
use stopwatch_sys::recorder::{LapRecorder, LAP_PERIOD_MS};
use stopwatch_sys::uart_log;

#[cfg(not(test))]
use riscv_rt::entry;

// Peripheral and memory addresses fixed by the SoC build.
const UART_BASE: *mut u32 = 0xf000_1000 as *mut u32;
const STOPWATCH_BASE: *mut u32 = 0xf000_1800 as *mut u32;
const LAP_MEMORY_BASE: *mut u8 = 0x4000_0000 as *mut u8;

/// Spin iterations per millisecond. Tuned for the 50 MHz system clock;
/// retune when the clock or the optimization level changes.
const DELAY_ITERS_PER_MS: u32 = 10_000;

#[cfg_attr(not(test), entry)]
fn main() -> ! {
    // Initialize peripherals.
    let mut uart = unsafe { Uart::new(UART_BASE) };
    let device = unsafe { Stopwatch::new(STOPWATCH_BASE) };
    // The bottom of main RAM is reserved for lap records; nothing else
    // in the image is linked there.
    let memory = unsafe { LapMemory::<MAX_LAPS>::new(LAP_MEMORY_BASE) };

    uwriteln!(uart, "lap recorder up").unwrap();
    unsafe { uart_log::init(uart.clone(), LevelFilter::Info) };

    let store = LapStore::new(memory);
    let delay = BusyWaitDelay::new(DELAY_ITERS_PER_MS);
    let mut recorder = LapRecorder::new(device, delay, store, LAP_PERIOD_MS);

    recorder.run_to_halt();

    loop {
        continue;
    }
}

#[panic_handler]
fn panic_handler(info: &core::panic::PanicInfo) -> ! {
    match info.location() {
        Some(loc) => error!("panic at {}:{}", loc.file(), loc.line()),
        None => error!("panic without location information"),
    }

    loop {
        continue;
    }
}
