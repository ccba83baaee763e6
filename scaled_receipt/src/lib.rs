// Copyright 2023-, Semiotic AI, Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Receipt and update model
//!
//! Passive data describing one off-chain payment between two account
//! indices, and the bilaterally signed form of it that a settlement post
//! consumes. No behavior lives here; validation of sequence numbers and
//! expiry happens in the parties' channel logic before an [`Update`]
//! reaches this crate, and signature verification happens on-chain.

use alloy::sol;
use scaled_bls::G1Point;
use serde::{Deserialize, Serialize};

sol! {
    /// One debit from account `a_index` to account `b_index`.
    ///
    /// Immutable once created; equality is value equality over all
    /// fields.
    #[derive(Debug, Serialize, Deserialize, Eq, PartialEq)]
    struct Receipt {
        /// Paying (initiating) account index.
        uint64 a_index;
        /// Receiving account index.
        uint64 b_index;
        /// Value transferred.
        uint128 amount;
        /// Block number after which the receipt is void. Advisory here;
        /// enforcement is the settlement contract's job.
        uint64 expires_by;
        /// Per-account-pair sequence number guarding off-chain replay
        /// and reordering. Assumed pre-validated by the caller.
        uint64 seq_no;
    }
}

/// A [`Receipt`] plus both parties' BLS signatures over its canonical
/// encoding.
///
/// Both signatures must cover the same receipt content; this crate does
/// not verify that, the settlement contract does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Update {
    pub receipt: Receipt,
    /// The initiating party's signature.
    pub a_signature: G1Point,
    /// The receiving party's signature.
    pub b_signature: G1Point,
}

impl Update {
    pub fn new(receipt: Receipt, a_signature: G1Point, b_signature: G1Point) -> Self {
        Self {
            receipt,
            a_signature,
            b_signature,
        }
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::U256;
    use rstest::*;

    use super::*;

    #[fixture]
    fn receipt() -> Receipt {
        Receipt {
            a_index: 7,
            b_index: 42,
            amount: 1000,
            expires_by: 12_000,
            seq_no: 3,
        }
    }

    #[rstest]
    fn receipt_equality_is_value_equality(receipt: Receipt) {
        let same = receipt.clone();
        assert_eq!(receipt, same);

        let mut different = receipt.clone();
        different.seq_no += 1;
        assert_ne!(receipt, different);
    }

    #[rstest]
    fn update_carries_both_signatures(receipt: Receipt) {
        let a_signature = G1Point {
            x: U256::from(1u64),
            y: U256::from(2u64),
        };
        let b_signature = G1Point {
            x: U256::from(3u64),
            y: U256::from(4u64),
        };
        let update = Update::new(receipt.clone(), a_signature, b_signature);
        assert_eq!(update.receipt, receipt);
        assert_ne!(update.a_signature, update.b_signature);
    }
}
