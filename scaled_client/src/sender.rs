// Copyright 2023-, Semiotic AI, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Transaction submission capability.

use alloy::{
    primitives::{Address, Bytes, TxHash},
    providers::Provider,
    rpc::types::TransactionRequest,
};
use async_trait::async_trait;

use crate::error::ChainError;

/// Narrow interface to the signer/provider pair bound to one session.
///
/// Production code uses [`ProviderSender`]; the client's tests
/// substitute a recording double to observe submissions without a
/// network.
#[async_trait]
pub trait TransactionSender: Send + Sync {
    /// The externally-owned address transactions are sent from.
    fn address(&self) -> Address;

    /// Submits `tx`, returning as soon as the network has accepted it.
    /// Inclusion is not awaited.
    async fn send(&self, tx: TransactionRequest) -> Result<TxHash, ChainError>;

    /// Submits `tx` and returns only once it is included in a block.
    async fn send_confirmed(&self, tx: TransactionRequest) -> Result<TxHash, ChainError>;

    /// Executes `tx` as a read-only call, returning the raw return data.
    async fn call(&self, tx: TransactionRequest) -> Result<Bytes, ChainError>;
}

/// [`TransactionSender`] backed by an alloy provider with a wallet
/// filler attached.
#[derive(Debug, Clone)]
pub struct ProviderSender<P> {
    provider: P,
    address: Address,
}

impl<P> ProviderSender<P> {
    /// `address` must be the default signer address of the wallet
    /// attached to `provider`.
    pub fn new(provider: P, address: Address) -> Self {
        Self { provider, address }
    }
}

#[async_trait]
impl<P: Provider + Send + Sync> TransactionSender for ProviderSender<P> {
    fn address(&self) -> Address {
        self.address
    }

    async fn send(&self, tx: TransactionRequest) -> Result<TxHash, ChainError> {
        let pending = self.provider.send_transaction(tx).await?;
        Ok(*pending.tx_hash())
    }

    async fn send_confirmed(&self, tx: TransactionRequest) -> Result<TxHash, ChainError> {
        let pending = self.provider.send_transaction(tx).await?;
        Ok(pending.watch().await?)
    }

    async fn call(&self, tx: TransactionRequest) -> Result<Bytes, ChainError> {
        Ok(self.provider.call(tx).await?)
    }
}
