// SPDX-FileCopyrightText: 2025 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

//! Best-effort millisecond delays.
//!
//! The SoC has no timer peripheral wired up for the firmware, so pacing
//! is a calibrated busy-wait. Accuracy drifts with the optimization
//! level and the actual clock frequency; that imprecision is part of
//! the contract, not something to fix here.

/// A source of blocking millisecond delays.
///
/// The control loop is generic over this trait so that host tests can
/// substitute simulated time for the spin loop.
pub trait DelaySource {
    /// Block the (sole) execution context for approximately `ms`
    /// milliseconds. Not cancellable.
    fn delay_ms(&mut self, ms: u32);
}

/// Busy-wait delay calibrated as spin iterations per millisecond.
///
/// The calibration value is tied to the deployment's clock frequency
/// and is supplied by whoever builds the firmware image.
pub struct BusyWaitDelay {
    iters_per_ms: u32,
}

impl BusyWaitDelay {
    pub const fn new(iters_per_ms: u32) -> Self {
        BusyWaitDelay { iters_per_ms }
    }
}

impl DelaySource for BusyWaitDelay {
    fn delay_ms(&mut self, ms: u32) {
        for _ in 0..ms {
            for _ in 0..self.iters_per_ms {
                core::hint::spin_loop();
            }
        }
    }
}
