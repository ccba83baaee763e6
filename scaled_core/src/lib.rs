// Copyright 2023-, Semiotic AI, Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Settlement batch encoding
//!
//! The settlement contract's `post()` entry point takes no named
//! arguments: its payload length depends on how many updates are being
//! settled, so generic ABI encoding cannot express it. This crate owns
//! the manual wire format instead: [`Batch`] validates that every update
//! in a settlement names the same initiating party and packs the batch,
//! together with the aggregated BLS signature, into the exact calldata
//! the contract parses.
//!
//! Everything here is pure. No signing or network calls happen in this
//! crate, and identical inputs always produce identical bytes.

mod batch;
mod error;

pub use batch::{Batch, MAX_BATCH_UPDATES};
pub use error::BatchError;
