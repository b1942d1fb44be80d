// SPDX-FileCopyrightText: 2022 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

#![no_std]

pub mod character_device;
pub mod emitter;
pub mod output_port;

#[cfg(feature = "panic-handler")]
pub mod panic_handler;
