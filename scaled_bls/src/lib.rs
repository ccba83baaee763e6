// Copyright 2023-, Semiotic AI, Inc.
// SPDX-License-Identifier: Apache-2.0

//! # BLS capability interfaces
//!
//! The scaled client never performs pairing-curve math itself. Key
//! generation, signing, and point aggregation belong to an external BLS
//! library, and this crate defines the narrow interfaces the rest of the
//! workspace consumes: [`BlsSigner`], [`BlsSignerFactory`], and
//! [`SignatureAggregator`], together with the curve-point value types the
//! settlement contract understands.
//!
//! Signatures live on G1 and are carried as two 256-bit field elements;
//! public keys live on G2 and are carried as four. Both match the word
//! layout the settlement contract's `register` entry point takes.
//!
//! Deterministic stand-ins for every trait live in the [`mock`] module
//! and are what the workspace tests run against.

use alloy::primitives::{B256, U256};
use serde::{Deserialize, Serialize};

#[cfg(feature = "mock")]
pub mod mock;

/// Errors returned by BLS signing capabilities.
#[derive(thiserror::Error, Debug)]
pub enum SigningError {
    /// The signer has no key material to sign with.
    #[error("no key material available to the BLS signer")]
    MissingKeyMaterial,
    /// The underlying BLS library failed.
    #[error("BLS backend failure:\n{source_error_message}")]
    Backend { source_error_message: String },
}

/// A point on G1: one BLS signature, individual or aggregated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct G1Point {
    pub x: U256,
    pub y: U256,
}

impl From<G1Point> for [U256; 2] {
    fn from(point: G1Point) -> Self {
        [point.x, point.y]
    }
}

impl From<[U256; 2]> for G1Point {
    fn from(words: [U256; 2]) -> Self {
        Self {
            x: words[0],
            y: words[1],
        }
    }
}

/// A point on G2: a BLS public key, as the four words the settlement
/// contract's `register` entry point expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct G2Point(pub [U256; 4]);

/// A signer bound to one protocol domain separator and one secret key.
///
/// Signing covers arbitrary byte strings; hashing the message to the
/// curve is the backend's job.
pub trait BlsSigner {
    /// The public key matching this signer's secret.
    fn pubkey(&self) -> G2Point;

    /// Signs `message`, yielding a G1 point.
    fn sign(&self, message: &[u8]) -> Result<G1Point, SigningError>;
}

/// Produces [`BlsSigner`]s for a protocol domain separator.
///
/// Factories are plain values; nothing here is process-global, so tests
/// can hold several independent factories at once.
pub trait BlsSignerFactory {
    type Signer: BlsSigner;

    /// Creates a signer for `domain`, keyed by `secret` or by fresh
    /// random key material when `secret` is `None`.
    fn create(&self, domain: &[u8], secret: Option<B256>) -> Result<Self::Signer, SigningError>;
}

/// Combines individual signatures into one aggregate signature point.
pub trait SignatureAggregator {
    /// Aggregates `signatures` in the order given.
    ///
    /// Order is load-bearing: on-chain verification reconstructs the
    /// same ordered list of public keys. Callers pass at least one
    /// signature; batches are validated non-empty before aggregation.
    fn aggregate(&self, signatures: &[G1Point]) -> G1Point;
}
