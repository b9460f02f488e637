// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 P47H Team <https://p47h.com>

//! # access-wasm
//!
//! WASM bindings for the clinic access engine.
//! This is the cdylib the dashboard loads to answer permission queries and
//! build its navigation menu without a server round-trip.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod validation;

use wasm_bindgen::prelude::*;

pub use client::WasmAccessClient;
pub use validation::{validate_policy, validate_policy_table};

/// Initialize the WASM module (sets panic hook for debugging)
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
