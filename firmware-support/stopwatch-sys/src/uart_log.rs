// SPDX-FileCopyrightText: 2025 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

//! A `log` backend that writes over the UART.

use stopwatch_hal::uart::Uart;

// The logger formats with core::fmt because ufmt formatting is not
// compatible with (dependencies of) the log crate.
use core::fmt::Write;
use core::ptr::addr_of_mut;
use log::LevelFilter;

/// The global logger instance. Install it with [`init`].
///
/// # Safety
///
/// Only sound with a single thread of execution; the underlying `Uart`
/// is not `Send` or `Sync`.
pub static mut LOGGER: UartLogger = UartLogger {
    uart: None,
    display_level: LevelFilter::Trace,
};

/// Wrapper for `Uart` to be used as a logger with the `log` crate.
pub struct UartLogger {
    uart: Option<Uart>,
    /// Show the level prefix for records at or below this level.
    pub display_level: LevelFilter,
}

/// Wire the global logger to `uart` and install it.
///
/// # Safety
///
/// Must be called before any logging, from the sole thread of
/// execution, at most once.
pub unsafe fn init(uart: Uart, max_level: LevelFilter) {
    let logger = &mut *addr_of_mut!(LOGGER);
    logger.uart = Some(uart);
    log::set_logger_racy(logger).ok();
    log::set_max_level_racy(max_level);
}

impl log::Log for UartLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        unsafe {
            match &mut (*addr_of_mut!(LOGGER)).uart {
                Some(uart) => {
                    if record.level() <= self.display_level {
                        write!(uart, "{} | ", record.level()).ok();
                    }
                    writeln!(uart, "{}", record.args()).ok();
                }
                None => panic!("logger not wired to a UART"),
            }
        }
    }

    fn flush(&self) {}
}

unsafe impl core::marker::Send for UartLogger {}
unsafe impl core::marker::Sync for UartLogger {}
