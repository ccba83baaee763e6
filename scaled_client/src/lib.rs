// Copyright 2023-, Semiotic AI, Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Chain client for the scaled payment-channel scheme
//!
//! One [`ScaledClient`] binds a transaction sender, a BLS signer, and a
//! signature aggregator to one settlement/router contract pair and
//! exposes one operation per contract capability: registration, funding,
//! the two-step withdrawal flow, read-only account queries, and the
//! aggregated settlement [`post`](ScaledClient::post).
//!
//! The client holds no state beyond its configuration and performs no
//! retries: chain failures surface to the caller unchanged, and the only
//! operation that waits for inclusion is
//! [`register`](ScaledClient::register).

mod client;
mod contracts;
mod error;
mod sender;

pub use client::{ClientConfig, ScaledClient};
pub use contracts::Account;
pub use error::{ChainError, Error, Result};
pub use sender::{ProviderSender, TransactionSender};
