// SPDX-FileCopyrightText: 2025 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

#![no_std]

pub mod delay;
pub mod lap_store;
pub mod recorder;
pub mod uart_log;
