// SPDX-FileCopyrightText: 2025 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

#![no_std]

pub mod lap_memory;
pub mod stopwatch;
pub mod uart;
