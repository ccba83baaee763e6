// Copyright 2023-, Semiotic AI, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Deterministic stand-ins for the external BLS library.
//!
//! These produce keccak-derived pseudo-points rather than real curve
//! points. They keep the trait contracts (determinism, order-sensitive
//! aggregation) so encoder output can be asserted byte-for-byte in tests
//! without a pairing library in the dependency tree.

use alloy::primitives::{keccak256, B256, U256};
use rand::{rng, Rng};

use crate::{BlsSigner, BlsSignerFactory, G1Point, G2Point, SignatureAggregator, SigningError};

fn point_from(preimage: &[u8]) -> G1Point {
    let x = keccak256(preimage);
    let y = keccak256(x);
    G1Point {
        x: U256::from_be_bytes(x.0),
        y: U256::from_be_bytes(y.0),
    }
}

/// [`BlsSigner`] double producing keccak-derived points.
#[derive(Debug, Clone)]
pub struct MockBlsSigner {
    domain: Vec<u8>,
    secret: B256,
}

impl MockBlsSigner {
    pub fn new(domain: &[u8], secret: B256) -> Self {
        Self {
            domain: domain.to_vec(),
            secret,
        }
    }

    pub fn random(domain: &[u8]) -> Self {
        Self::new(domain, B256::from(rng().random::<[u8; 32]>()))
    }
}

impl BlsSigner for MockBlsSigner {
    fn pubkey(&self) -> G2Point {
        let mut words = [U256::ZERO; 4];
        for (i, word) in words.iter_mut().enumerate() {
            let mut preimage = self.secret.to_vec();
            preimage.push(i as u8);
            *word = U256::from_be_bytes(keccak256(&preimage).0);
        }
        G2Point(words)
    }

    fn sign(&self, message: &[u8]) -> Result<G1Point, SigningError> {
        let mut preimage = self.domain.clone();
        preimage.extend_from_slice(self.secret.as_slice());
        preimage.extend_from_slice(message);
        Ok(point_from(&preimage))
    }
}

/// [`BlsSignerFactory`] double handing out [`MockBlsSigner`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockBlsSignerFactory;

impl BlsSignerFactory for MockBlsSignerFactory {
    type Signer = MockBlsSigner;

    fn create(&self, domain: &[u8], secret: Option<B256>) -> Result<MockBlsSigner, SigningError> {
        Ok(match secret {
            Some(secret) => MockBlsSigner::new(domain, secret),
            None => MockBlsSigner::random(domain),
        })
    }
}

/// [`SignatureAggregator`] double folding points through keccak.
///
/// The fold keeps aggregation order-sensitive, like the real scheme.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockAggregator;

impl SignatureAggregator for MockAggregator {
    fn aggregate(&self, signatures: &[G1Point]) -> G1Point {
        let mut acc = G1Point {
            x: U256::ZERO,
            y: U256::ZERO,
        };
        for signature in signatures {
            let mut preimage = Vec::with_capacity(128);
            preimage.extend_from_slice(&acc.x.to_be_bytes::<32>());
            preimage.extend_from_slice(&acc.y.to_be_bytes::<32>());
            preimage.extend_from_slice(&signature.x.to_be_bytes::<32>());
            preimage.extend_from_slice(&signature.y.to_be_bytes::<32>());
            acc = point_from(&preimage);
        }
        acc
    }
}
