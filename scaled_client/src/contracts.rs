// Copyright 2023-, Semiotic AI, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Call encodings for the settlement, router, and token contracts.
//!
//! `post()` is deliberately absent: its payload layout depends on the
//! batch length, so its calldata is packed by [`scaled_core::Batch`]
//! instead of being declared here.

use alloy::sol;
use serde::{Deserialize, Serialize};

sol! {
    // Settlement ("state") contract.
    function register(address user_address, uint256[4] bls_public_key, uint256[2] signature);
    function accounts(uint64 index) returns (uint128 balance, uint32 nonce, uint32 post_nonce);
    function token() returns (address);
    function initWithdraw(uint64 index, uint128 amount, uint256[2] signature);
    function processWithdrawal(uint64 index);

    // Router (collateral) contract.
    function fundAccount(uint64 to_index, uint128 amount);
    function depositSecurity(uint64 to_index, uint128 amount);

    // ERC-20 allowance grant naming the router as spender.
    function approve(address spender, uint256 amount) returns (bool ok);
}

/// The settlement contract's view of one account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub balance: u128,
    /// Withdrawal-intent counter; each `initWithdraw` signs over the
    /// next value.
    pub nonce: u32,
    /// Settlement counter, bumped by every accepted post.
    pub post_nonce: u32,
}
