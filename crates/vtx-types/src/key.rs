// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Groth16 verifying key for BN254.

use crate::curve::{G1Point, G2Point};
use crate::error::{Error, Result};
use sha2::{Digest, Sha256};

/// Output of the one-time setup, shared read-only by every verification.
///
/// `ic` is a unified vector: `ic[0]` is the constant term and `ic[1..]`
/// weight the public inputs, so a key always carries at least one entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifyingKey {
    alpha: G1Point,
    beta: G2Point,
    gamma: G2Point,
    delta: G2Point,
    ic: Vec<G1Point>,
}

impl VerifyingKey {
    pub fn new(
        alpha: G1Point,
        beta: G2Point,
        gamma: G2Point,
        delta: G2Point,
        ic: Vec<G1Point>,
    ) -> Result<Self> {
        if ic.is_empty() {
            return Err(Error::Decode("verifying key has no ic[0] term".into()));
        }
        Ok(Self {
            alpha,
            beta,
            gamma,
            delta,
            ic,
        })
    }

    pub fn alpha(&self) -> G1Point {
        self.alpha
    }

    pub fn beta(&self) -> G2Point {
        self.beta
    }

    pub fn gamma(&self) -> G2Point {
        self.gamma
    }

    pub fn delta(&self) -> G2Point {
        self.delta
    }

    pub fn ic(&self) -> &[G1Point] {
        &self.ic
    }

    /// Number of public inputs this key was set up for.
    pub fn num_public_inputs(&self) -> usize {
        self.ic.len() - 1
    }

    /// key_id = sha256(alpha ++ beta ++ gamma ++ delta ++ ic[0..n]), each point
    /// in its big-endian coordinate encoding.
    pub fn key_id(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(self.alpha.to_bytes());
        hasher.update(self.beta.to_bytes());
        hasher.update(self.gamma.to_bytes());
        hasher.update(self.delta.to_bytes());
        for p in &self.ic {
            hasher.update(p.to_bytes());
        }
        hasher.finalize().into()
    }

    pub fn key_id_hex(&self) -> String {
        hex::encode(self.key_id())
    }
}
