// SPDX-FileCopyrightText: 2025 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

//! Raw-memory arena for lap records.
//!
//! Laps live at the bottom of general-purpose RAM as consecutive
//! 3-byte records, no header and no length field. The running process
//! is the only thing that knows how many slots are filled.

use ufmt::derive::uDebug;
use ufmt::uDisplay;
use ufmt::uWrite;
use ufmt::uwrite;

/// Bytes per stored record: `[minutes, seconds, ticks]`.
pub const LAP_RECORD_SIZE: usize = 3;

/// One captured instant of elapsed time.
///
/// Each field is an 8-bit truncating capture of the device's wider
/// internal counter; no range validation is performed, the hardware is
/// trusted to emit representable values.
#[derive(uDebug, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LapRecord {
    pub minutes: u8,
    pub seconds: u8,
    pub ticks: u8,
}

impl LapRecord {
    pub const ZERO: LapRecord = LapRecord {
        minutes: 0,
        seconds: 0,
        ticks: 0,
    };

    pub const fn to_bytes(self) -> [u8; LAP_RECORD_SIZE] {
        [self.minutes, self.seconds, self.ticks]
    }

    pub const fn from_bytes(bytes: [u8; LAP_RECORD_SIZE]) -> LapRecord {
        LapRecord {
            minutes: bytes[0],
            seconds: bytes[1],
            ticks: bytes[2],
        }
    }

    /// The whole capture expressed in ticks, for ordering comparisons.
    pub const fn total_ticks(self) -> u32 {
        self.minutes as u32 * 6000 + self.seconds as u32 * 100 + self.ticks as u32
    }
}

impl uDisplay for LapRecord {
    fn fmt<W>(&self, f: &mut ufmt::Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        uwrite!(f, "{}:", self.minutes)?;
        if self.seconds < 10 {
            uwrite!(f, "0")?;
        }
        uwrite!(f, "{}.", self.seconds)?;
        if self.ticks < 10 {
            uwrite!(f, "0")?;
        }
        uwrite!(f, "{}", self.ticks)
    }
}

/// A fixed-capacity region of raw memory holding up to `CAPACITY`
/// consecutive lap records.
///
/// Slot access is bounds-checked; an out-of-range slot reads as `None`
/// and writes are refused. The arena itself keeps no count of filled
/// slots, that is the store's job.
pub struct LapMemory<const CAPACITY: usize> {
    base: *mut u8,
}

impl<const CAPACITY: usize> LapMemory<CAPACITY> {
    /// Create a new `LapMemory` over the region starting at `base`.
    ///
    /// # Safety
    ///
    /// `base` must point to at least `CAPACITY * LAP_RECORD_SIZE` bytes
    /// of memory that nothing else in the program reads or writes for
    /// the lifetime of this value.
    pub const unsafe fn new(base: *mut u8) -> Self {
        LapMemory { base }
    }

    pub const fn capacity(&self) -> usize {
        CAPACITY
    }

    /// Write `record` into `slot`. Returns whether the write happened;
    /// an out-of-range slot is left untouched.
    pub fn write_record(&mut self, slot: usize, record: LapRecord) -> bool {
        if slot >= CAPACITY {
            return false;
        }
        let bytes = record.to_bytes();
        for (i, byte) in bytes.iter().enumerate() {
            unsafe {
                self.base.add(slot * LAP_RECORD_SIZE + i).write_volatile(*byte);
            }
        }
        true
    }

    /// Read the record in `slot`, or `None` if the slot is out of
    /// range.
    pub fn read_record(&self, slot: usize) -> Option<LapRecord> {
        if slot >= CAPACITY {
            return None;
        }
        let mut bytes = [0u8; LAP_RECORD_SIZE];
        for (i, byte) in bytes.iter_mut().enumerate() {
            unsafe {
                *byte = self.base.add(slot * LAP_RECORD_SIZE + i).read_volatile();
            }
        }
        Some(LapRecord::from_bytes(bytes))
    }
}
