// SPDX-FileCopyrightText: 2025 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

//! Driver for the stopwatch CSR block.
//!
//! The peripheral exposes one 32-bit CSR per field, in gateware
//! declaration order: `start`, `pause`, `stop`, `reset`, then the
//! read-only `minutes`, `seconds` and `ticks` counters (a tick is a
//! hundredth of a second). Control registers are edge-triggered: the
//! hardware acts on a 1-then-0 pulse, so each command below asserts and
//! immediately de-asserts its register.

/// Word offsets of the CSRs relative to the block's base address.
const START: usize = 0;
const PAUSE: usize = 1;
const STOP: usize = 2;
const RESET: usize = 3;
const MINUTES: usize = 4;
const SECONDS: usize = 5;
const TICKS: usize = 6;

/// The operations the stopwatch hardware supports.
///
/// Commands are fire-and-forget; there is no error channel back from
/// the hardware. The three time fields are read sequentially, not
/// atomically, so callers accept sub-tick skew between them.
///
/// The control loop is generic over this trait so that host tests can
/// drive it with a simulated device.
pub trait StopwatchDevice {
    /// Zero the elapsed time and return the device to its initial,
    /// not-counting state.
    fn reset(&mut self);

    /// Begin (or resume) counting.
    fn start(&mut self);

    /// Freeze the count without clearing it; `start` resumes.
    fn pause(&mut self);

    /// Stop counting. The elapsed time stays frozen at its last value.
    fn stop(&mut self);

    /// Elapsed whole minutes, truncated to 8 bits.
    fn minutes(&self) -> u8;

    /// Elapsed seconds within the current minute, truncated to 8 bits.
    fn seconds(&self) -> u8;

    /// Elapsed hundredths of a second within the current second,
    /// truncated to 8 bits.
    fn ticks(&self) -> u8;
}

/// The memory-mapped stopwatch peripheral.
pub struct Stopwatch {
    base_addr: *mut u32,
}

impl Stopwatch {
    /// Create a new `Stopwatch` from the CSR block's base address.
    ///
    /// # Safety
    ///
    /// `base_addr` must point to the stopwatch CSR block of the SoC
    /// this code runs on, with all seven registers mapped.
    pub const unsafe fn new(base_addr: *mut u32) -> Stopwatch {
        Stopwatch { base_addr }
    }

    /// Emit a rising-then-falling edge on a control register.
    fn pulse(&mut self, word_offset: usize) {
        unsafe {
            let reg = self.base_addr.add(word_offset);
            reg.write_volatile(1);
            reg.write_volatile(0);
        }
    }

    fn read_field(&self, word_offset: usize) -> u8 {
        unsafe { self.base_addr.add(word_offset).read_volatile() as u8 }
    }
}

impl StopwatchDevice for Stopwatch {
    fn reset(&mut self) {
        self.pulse(RESET);
    }

    fn start(&mut self) {
        self.pulse(START);
    }

    fn pause(&mut self) {
        self.pulse(PAUSE);
    }

    fn stop(&mut self) {
        self.pulse(STOP);
    }

    fn minutes(&self) -> u8 {
        self.read_field(MINUTES)
    }

    fn seconds(&self) -> u8 {
        self.read_field(SECONDS)
    }

    fn ticks(&self) -> u8 {
        self.read_field(TICKS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Seven words standing in for the CSR block.
    fn fake_block() -> [u32; 7] {
        [0; 7]
    }

    #[test]
    fn field_reads_truncate_to_eight_bits() {
        let mut block = fake_block();
        block[MINUTES] = 0x0000_0102;
        block[SECONDS] = 59;
        block[TICKS] = 0xffff_ffff;

        let sw = unsafe { Stopwatch::new(block.as_mut_ptr()) };
        assert_eq!(sw.minutes(), 0x02);
        assert_eq!(sw.seconds(), 59);
        assert_eq!(sw.ticks(), 0xff);
    }

    #[test]
    fn pulses_leave_control_registers_deasserted() {
        let mut block = fake_block();
        let mut sw = unsafe { Stopwatch::new(block.as_mut_ptr()) };
        sw.reset();
        sw.start();
        sw.pause();
        sw.stop();
        drop(sw);
        assert_eq!(block[..4], [0, 0, 0, 0]);
    }
}
