// Copyright 2023-, Semiotic AI, Inc.
// SPDX-License-Identifier: Apache-2.0

use std::result::Result as StdResult;

use scaled_bls::SigningError;
use scaled_core::BatchError;
use thiserror::Error as ThisError;

/// Failures surfaced by the network or by contract execution.
///
/// Never retried here; the caller decides whether to re-submit, abort,
/// or alert a human.
#[derive(ThisError, Debug)]
pub enum ChainError {
    #[error(transparent)]
    Rpc(#[from] alloy::transports::RpcError<alloy::transports::TransportErrorKind>),
    #[error(transparent)]
    PendingTransaction(#[from] alloy::providers::PendingTransactionError),
}

/// Client operation errors.
///
/// Local validation failures ([`Error::Batch`], [`Error::ZeroAmount`])
/// are raised before any side effect occurs.
#[derive(ThisError, Debug)]
pub enum Error {
    #[error(transparent)]
    Batch(#[from] BatchError),
    #[error(transparent)]
    Signing(#[from] SigningError),
    #[error(transparent)]
    Chain(#[from] ChainError),
    #[error("could not decode contract return data:\n{0}")]
    Decode(#[from] alloy::sol_types::Error),
    #[error("amount must be non-zero")]
    ZeroAmount,
}

pub type Result<T> = StdResult<T, Error>;
