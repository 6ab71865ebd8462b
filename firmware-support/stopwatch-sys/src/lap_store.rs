// SPDX-FileCopyrightText: 2025 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

//! State machinery for accumulating lap captures in memory.

use stopwatch_hal::lap_memory::{LapMemory, LapRecord};
use stopwatch_hal::stopwatch::StopwatchDevice;
use ufmt::derive::uDebug;

/// Number of lap slots in the production arena.
pub const MAX_LAPS: usize = 16;

/// What happened to an append.
///
/// Appending into a full store is not a failure: the capture is
/// discarded and the store left unchanged. The variant exists so tests
/// can assert on the intent; the production caller discards it.
#[derive(uDebug, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    Stored,
    AtCapacity,
}

/// What a read found.
#[derive(uDebug, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadOutcome {
    Stored(LapRecord),
    OutOfRange,
}

impl ReadOutcome {
    /// Collapse to the record value, with the zero record standing in
    /// for anything that was never written. A caller cannot tell an
    /// out-of-range read from a legitimately all-zero capture; that
    /// ambiguity is part of the contract.
    pub fn record_or_zero(self) -> LapRecord {
        match self {
            ReadOutcome::Stored(record) => record,
            ReadOutcome::OutOfRange => LapRecord::ZERO,
        }
    }
}

/// An append-only, bounded sequence of lap records backed by a raw
/// memory arena.
///
/// `append_current` is the only mutator; records are never deleted,
/// reordered or overwritten.
pub struct LapStore<const CAPACITY: usize> {
    memory: LapMemory<CAPACITY>,
    count: usize,
}

impl<const CAPACITY: usize> LapStore<CAPACITY> {
    pub fn new(memory: LapMemory<CAPACITY>) -> Self {
        LapStore { memory, count: 0 }
    }

    /// Capture the device's current time fields into the next free
    /// slot. At capacity the capture is discarded and the store is left
    /// unchanged.
    ///
    /// The three fields are read back-to-back, not atomically; a lap
    /// can carry sub-tick skew between them.
    pub fn append_current<D: StopwatchDevice>(&mut self, device: &D) -> AppendOutcome {
        if self.count >= CAPACITY {
            return AppendOutcome::AtCapacity;
        }

        let record = LapRecord {
            minutes: device.minutes(),
            seconds: device.seconds(),
            ticks: device.ticks(),
        };

        // count < CAPACITY, so the slot is in range.
        if self.memory.write_record(self.count, record) {
            self.count += 1;
            AppendOutcome::Stored
        } else {
            AppendOutcome::AtCapacity
        }
    }

    /// Read the record at `index`. Indices at or beyond the current
    /// count are out of range, including slots that exist in the arena
    /// but were never filled.
    pub fn read(&self, index: usize) -> ReadOutcome {
        if index >= self.count {
            return ReadOutcome::OutOfRange;
        }
        match self.memory.read_record(index) {
            Some(record) => ReadOutcome::Stored(record),
            None => ReadOutcome::OutOfRange,
        }
    }

    /// Number of stored records. Monotonically non-decreasing, bounded
    /// by the capacity.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_full(&self) -> bool {
        self.count >= CAPACITY
    }

    pub const fn capacity(&self) -> usize {
        CAPACITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stopwatch_hal::lap_memory::LAP_RECORD_SIZE;

    /// A device whose fields never change.
    struct FixedDevice {
        minutes: u8,
        seconds: u8,
        ticks: u8,
    }

    impl StopwatchDevice for FixedDevice {
        fn reset(&mut self) {}
        fn start(&mut self) {}
        fn pause(&mut self) {}
        fn stop(&mut self) {}

        fn minutes(&self) -> u8 {
            self.minutes
        }

        fn seconds(&self) -> u8 {
            self.seconds
        }

        fn ticks(&self) -> u8 {
            self.ticks
        }
    }

    #[test]
    fn append_fills_slots_in_order() {
        let mut backing = [0u8; 4 * LAP_RECORD_SIZE];
        let memory = unsafe { LapMemory::<4>::new(backing.as_mut_ptr()) };
        let mut store = LapStore::new(memory);
        let device = FixedDevice {
            minutes: 7,
            seconds: 8,
            ticks: 9,
        };

        assert!(store.is_empty());
        assert_eq!(store.append_current(&device), AppendOutcome::Stored);
        assert_eq!(store.len(), 1);
        assert_eq!(
            store.read(0),
            ReadOutcome::Stored(LapRecord {
                minutes: 7,
                seconds: 8,
                ticks: 9,
            })
        );
    }

    #[test]
    fn unfilled_slots_read_as_out_of_range() {
        let mut backing = [0u8; 4 * LAP_RECORD_SIZE];
        let memory = unsafe { LapMemory::<4>::new(backing.as_mut_ptr()) };
        let mut store = LapStore::new(memory);
        let device = FixedDevice {
            minutes: 1,
            seconds: 2,
            ticks: 3,
        };

        store.append_current(&device);

        // Slot 1 exists in the arena but was never filled.
        assert_eq!(store.read(1), ReadOutcome::OutOfRange);
        assert_eq!(store.read(1).record_or_zero(), LapRecord::ZERO);
        assert_eq!(store.read(usize::MAX), ReadOutcome::OutOfRange);
    }

    #[test]
    fn appends_at_capacity_are_discarded() {
        let mut backing = [0u8; 2 * LAP_RECORD_SIZE];
        let memory = unsafe { LapMemory::<2>::new(backing.as_mut_ptr()) };
        let mut store = LapStore::new(memory);
        let device = FixedDevice {
            minutes: 0,
            seconds: 30,
            ticks: 0,
        };

        assert_eq!(store.append_current(&device), AppendOutcome::Stored);
        assert_eq!(store.append_current(&device), AppendOutcome::Stored);
        assert!(store.is_full());
        assert_eq!(store.append_current(&device), AppendOutcome::AtCapacity);
        assert_eq!(store.len(), 2);
    }
}
