// SPDX-FileCopyrightText: 2025 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

//! The top-level control loop: reset and start the stopwatch, capture a
//! lap every period, stop once the lap memory is full.

use crate::delay::DelaySource;
use crate::lap_store::LapStore;
use log::{debug, info};
use stopwatch_hal::stopwatch::StopwatchDevice;
use ufmt::derive::uDebug;

/// Fixed inter-lap period.
pub const LAP_PERIOD_MS: u32 = 5000;

/// Where the control loop currently is.
///
/// `Init` resets and starts the hardware, then every cycle runs
/// `Wait → Capture → Check` until the store fills up, at which point
/// `Check` stops the hardware and the loop parks in `Halted` for good.
/// There is no restart path out of `Halted`.
#[derive(uDebug, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Init,
    Wait,
    Capture,
    Check,
    Halted,
}

/// Sequences the stopwatch device, the delay source and the lap store.
///
/// Everything runs on the single execution context; no operation
/// overlaps another.
pub struct LapRecorder<D, W, const CAPACITY: usize> {
    device: D,
    delay: W,
    store: LapStore<CAPACITY>,
    period_ms: u32,
    phase: Phase,
}

impl<D, W, const CAPACITY: usize> LapRecorder<D, W, CAPACITY>
where
    D: StopwatchDevice,
    W: DelaySource,
{
    pub fn new(device: D, delay: W, store: LapStore<CAPACITY>, period_ms: u32) -> Self {
        LapRecorder {
            device,
            delay,
            store,
            period_ms,
            phase: Phase::Init,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn store(&self) -> &LapStore<CAPACITY> {
        &self.store
    }

    /// Execute the current phase and return the phase the loop moved
    /// to. `Halted` is absorbing.
    pub fn step(&mut self) -> Phase {
        self.phase = match self.phase {
            Phase::Init => {
                self.device.reset();
                self.device.start();
                info!("stopwatch reset and started");
                Phase::Wait
            }
            Phase::Wait => {
                self.delay.delay_ms(self.period_ms);
                Phase::Capture
            }
            Phase::Capture => {
                // The outcome is deliberately discarded: appending into
                // a full store is a designed no-op, not a failure.
                let _ = self.store.append_current(&self.device);

                // Read back the slot we just filled. Nothing consumes
                // the result yet; a display or serial reporter would
                // hook in here.
                let last = self
                    .store
                    .read(self.store.len().wrapping_sub(1))
                    .record_or_zero();
                debug!(
                    "lap {}: {:02}:{:02}.{:02}",
                    self.store.len(),
                    last.minutes,
                    last.seconds,
                    last.ticks
                );
                Phase::Check
            }
            Phase::Check => {
                if self.store.is_full() {
                    self.device.stop();
                    info!("lap memory full after {} laps, stopwatch stopped", self.store.len());
                    Phase::Halted
                } else {
                    Phase::Wait
                }
            }
            Phase::Halted => Phase::Halted,
        };
        self.phase
    }

    /// Run the loop to its terminal state.
    pub fn run_to_halt(&mut self) {
        while self.step() != Phase::Halted {}
    }
}
