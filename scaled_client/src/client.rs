// Copyright 2023-, Semiotic AI, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Session facade over the settlement and router contracts.

use alloy::{
    network::TransactionBuilder,
    primitives::{Address, Bytes, TxHash, U256},
    rpc::types::TransactionRequest,
    sol_types::SolCall,
};
use log::{debug, info};
use scaled_bls::{BlsSigner, SignatureAggregator};
use scaled_core::Batch;
use scaled_receipt::Update;

use crate::{
    contracts::{self, Account},
    error::{Error, Result},
    sender::TransactionSender,
};

/// Addresses binding one client session to its on-chain collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientConfig {
    /// Settlement ("state") contract address.
    pub state: Address,
    /// Router (collateral) contract address.
    pub router: Address,
}

/// Client for one participant of the scaled payment-channel scheme.
///
/// Binds a [`TransactionSender`], a [`BlsSigner`], and a
/// [`SignatureAggregator`] to one settlement/router pair. Sessions are
/// plain values with no process-global state, so any number of
/// independent clients can coexist.
///
/// Every mutating operation returns the hash of the submitted
/// transaction. Only [`register`](Self::register) waits for inclusion
/// before returning; everything else returns at submission and leaves
/// confirmation tracking to the caller.
pub struct ScaledClient<S, B, A> {
    sender: S,
    bls_signer: B,
    aggregator: A,
    config: ClientConfig,
}

impl<S, B, A> ScaledClient<S, B, A>
where
    S: TransactionSender,
    B: BlsSigner,
    A: SignatureAggregator,
{
    pub fn new(sender: S, bls_signer: B, aggregator: A, config: ClientConfig) -> Self {
        Self {
            sender,
            bls_signer,
            aggregator,
            config,
        }
    }

    /// Binds the sender's address to its BLS public key on the
    /// settlement contract.
    ///
    /// Signs the raw address bytes with the BLS signer as proof of key
    /// possession. This is the one call that waits for inclusion:
    /// nothing else is worth submitting until registration is mined.
    pub async fn register(&self) -> Result<TxHash> {
        let address = self.sender.address();
        let signature = self.bls_signer.sign(address.as_slice())?;
        let input = contracts::registerCall {
            user_address: address,
            bls_public_key: self.bls_signer.pubkey().0,
            signature: signature.into(),
        }
        .abi_encode();

        info!("registering {address} with the settlement contract");
        let hash = self
            .sender
            .send_confirmed(request(self.config.state, input.into()))
            .await?;
        Ok(hash)
    }

    /// Moves `amount` of token collateral into the router for
    /// `user_index`.
    ///
    /// The router must already hold an allowance covering `amount`; see
    /// [`approve`](Self::approve).
    pub async fn fund_account(&self, user_index: u64, amount: u128) -> Result<TxHash> {
        let input = contracts::fundAccountCall {
            to_index: user_index,
            amount: non_zero(amount)?,
        }
        .abi_encode();
        self.submit(self.config.router, input.into()).await
    }

    /// Moves `amount` of token collateral into the router as security
    /// for `user_index`.
    pub async fn deposit_security(&self, user_index: u64, amount: u128) -> Result<TxHash> {
        let input = contracts::depositSecurityCall {
            to_index: user_index,
            amount: non_zero(amount)?,
        }
        .abi_encode();
        self.submit(self.config.router, input.into()).await
    }

    /// Signs and submits a withdrawal intent over the account's next
    /// nonce.
    ///
    /// The nonce is read before signing. If a concurrent settlement
    /// bumps it before this transaction lands, the contract rejects the
    /// intent and the caller must re-initiate; there is no retry here.
    pub async fn init_withdraw(&self, user_index: u64, amount: u128) -> Result<TxHash> {
        let amount = non_zero(amount)?;
        let account = self.get_account(user_index).await?;

        let mut message = Vec::with_capacity(4 + 16);
        message.extend_from_slice(&(account.nonce + 1).to_be_bytes());
        message.extend_from_slice(&amount.to_be_bytes());
        let signature = self.bls_signer.sign(&message)?;

        let input = contracts::initWithdrawCall {
            index: user_index,
            amount,
            signature: signature.into(),
        }
        .abi_encode();
        self.submit(self.config.state, input.into()).await
    }

    /// Finalizes a previously initiated withdrawal once the on-chain
    /// delay has passed.
    pub async fn process_withdrawal(&self, user_index: u64) -> Result<TxHash> {
        let input = contracts::processWithdrawalCall { index: user_index }.abi_encode();
        self.submit(self.config.state, input.into()).await
    }

    /// Settles a batch of bilaterally signed receipts in one aggregated
    /// post.
    ///
    /// Validates the batch, aggregates both parties' signatures in
    /// batch order, and submits the packed calldata as a raw zero-value
    /// transaction to the settlement contract. A batch that fails
    /// validation never reaches the aggregator or the network.
    pub async fn post(&self, a_index: u64, updates: &[Update]) -> Result<TxHash> {
        let batch = Batch::new(a_index, updates)?;
        let aggregated = self.aggregator.aggregate(&batch.signatures());
        let calldata = batch.encode_post(&aggregated);

        info!("posting {} updates for account {a_index}", updates.len());
        self.submit(self.config.state, calldata).await
    }

    /// Reads `user_index`'s balance and counters from the settlement
    /// contract.
    pub async fn get_account(&self, user_index: u64) -> Result<Account> {
        let input = contracts::accountsCall { index: user_index }.abi_encode();
        let raw = self
            .sender
            .call(request(self.config.state, input.into()))
            .await?;
        let ret = contracts::accountsCall::abi_decode_returns(&raw)?;
        Ok(Account {
            balance: ret.balance,
            nonce: ret.nonce,
            post_nonce: ret.post_nonce,
        })
    }

    /// Reads the collateral token's address from the settlement
    /// contract.
    pub async fn get_token(&self) -> Result<Address> {
        let input = contracts::tokenCall {}.abi_encode();
        let raw = self
            .sender
            .call(request(self.config.state, input.into()))
            .await?;
        Ok(contracts::tokenCall::abi_decode_returns(&raw)?)
    }

    /// Grants the router an allowance over the collateral token.
    ///
    /// Separate from funding on purpose: allowance and deposit are two
    /// transactions on two contracts.
    pub async fn approve(&self, amount: U256) -> Result<TxHash> {
        let token = self.get_token().await?;
        let input = contracts::approveCall {
            spender: self.config.router,
            amount,
        }
        .abi_encode();
        self.submit(token, input.into()).await
    }

    async fn submit(&self, to: Address, input: Bytes) -> Result<TxHash> {
        let hash = self.sender.send(request(to, input)).await?;
        debug!("submitted transaction {hash}");
        Ok(hash)
    }
}

fn request(to: Address, input: Bytes) -> TransactionRequest {
    TransactionRequest::default()
        .with_to(to)
        .with_input(input)
        .with_value(U256::ZERO)
}

fn non_zero(amount: u128) -> Result<u128> {
    if amount == 0 {
        return Err(Error::ZeroAmount);
    }
    Ok(amount)
}
