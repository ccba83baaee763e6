// Copyright 2023-, Semiotic AI, Inc.
// SPDX-License-Identifier: Apache-2.0

use alloy::{primitives::Bytes, sol, sol_types::SolCall};
use scaled_bls::G1Point;
use scaled_receipt::Update;

use crate::error::BatchError;

sol! {
    /// Settlement entry point reached through manually packed calldata.
    /// Only the selector is derived from this declaration.
    function post();
}

/// Largest update count the 2-byte wire count field can carry.
pub const MAX_BATCH_UPDATES: usize = u16::MAX as usize;

/// Per-update payload width: `b_index` (8 bytes) plus `amount` (16 bytes).
const UPDATE_WIDTH: usize = 8 + 16;

/// A validated, ordered batch of updates sharing one initiating party.
///
/// Construction performs every check the client can make locally: the
/// batch is non-empty, fits the wire count field, and every update's
/// receipt names `a_index` as initiator. A `Batch` that exists can
/// always be encoded.
#[derive(Debug, Clone, Copy)]
pub struct Batch<'a> {
    a_index: u64,
    updates: &'a [Update],
}

impl<'a> Batch<'a> {
    /// Validates `updates` against the declared initiating party.
    ///
    /// # Errors
    ///
    /// Returns [`BatchError::Empty`] for a zero-length batch,
    /// [`BatchError::TooLarge`] above [`MAX_BATCH_UPDATES`] entries, and
    /// [`BatchError::Inconsistent`] naming the first offending position
    /// when any receipt disagrees with `a_index`.
    pub fn new(a_index: u64, updates: &'a [Update]) -> Result<Self, BatchError> {
        if updates.is_empty() {
            return Err(BatchError::Empty);
        }
        if updates.len() > MAX_BATCH_UPDATES {
            return Err(BatchError::TooLarge {
                len: updates.len(),
            });
        }
        for (position, update) in updates.iter().enumerate() {
            if update.receipt.a_index != a_index {
                return Err(BatchError::Inconsistent {
                    position,
                    expected: a_index,
                    found: update.receipt.a_index,
                });
            }
        }
        Ok(Self { a_index, updates })
    }

    pub fn a_index(&self) -> u64 {
        self.a_index
    }

    pub fn updates(&self) -> &'a [Update] {
        self.updates
    }

    /// Both parties' signatures in aggregation order: the initiator's
    /// immediately followed by the receiver's, per update, in batch
    /// order.
    ///
    /// On-chain verification reconstructs the same ordered list of
    /// public keys, so this order and the encoder's update order must
    /// match exactly.
    pub fn signatures(&self) -> Vec<G1Point> {
        let mut signatures = Vec::with_capacity(self.updates.len() * 2);
        for update in self.updates {
            signatures.push(update.a_signature);
            signatures.push(update.b_signature);
        }
        signatures
    }

    /// Packs the batch and its aggregated signature into `post()`
    /// calldata.
    ///
    /// Layout, every field big-endian and fixed width: the 4-byte
    /// `post()` selector, `a_index` as 8 bytes, the update count as
    /// 2 bytes, the aggregated signature's x then y coordinate as
    /// 32 bytes each, then per update in batch order `b_index` as
    /// 8 bytes followed by `amount` as 16 bytes.
    pub fn encode_post(&self, aggregated: &G1Point) -> Bytes {
        let mut out = Vec::with_capacity(4 + 8 + 2 + 64 + UPDATE_WIDTH * self.updates.len());
        out.extend_from_slice(&postCall::SELECTOR);
        out.extend_from_slice(&self.a_index.to_be_bytes());
        out.extend_from_slice(&(self.updates.len() as u16).to_be_bytes());
        out.extend_from_slice(&aggregated.x.to_be_bytes::<32>());
        out.extend_from_slice(&aggregated.y.to_be_bytes::<32>());
        for update in self.updates {
            out.extend_from_slice(&update.receipt.b_index.to_be_bytes());
            out.extend_from_slice(&update.receipt.amount.to_be_bytes());
        }
        out.into()
    }
}
