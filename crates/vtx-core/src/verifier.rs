// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Groth16 verifier over BN254 pairings

use crate::pairing::multi_pairing_is_identity;
use crate::prepared::PreparedVerifyingKey;
use std::sync::Arc;
use vtx_types::wire::decode_inputs;
use vtx_types::{linear_combination, Error, G1Point, Proof, PublicInputs, VerifyingKey, WireProof};

/// Why a proof was not accepted.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("invalid proof: {0}")]
    InvalidProof(Error),

    #[error("invalid public input: {0}")]
    InvalidInput(Error),

    #[error("expected {expected} public inputs, got {actual}")]
    InputLengthMismatch { expected: usize, actual: usize },

    #[error("pairing equation does not hold")]
    PairingCheckFailed,
}

/// Terminal state of a verification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected(Rejection),
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Verdict::Accepted => None,
            Verdict::Rejected(r) => Some(r),
        }
    }
}

impl From<Verdict> for bool {
    fn from(verdict: Verdict) -> bool {
        verdict.is_accepted()
    }
}

fn reject(reason: Rejection) -> Verdict {
    log::debug!("proof rejected: {reason}");
    Verdict::Rejected(reason)
}

/// vk_x = IC[0] + Σ inputs[i] · IC[i+1]
fn input_combination(vk: &VerifyingKey, inputs: &PublicInputs) -> Result<G1Point, Rejection> {
    let expected = vk.num_public_inputs();
    let mismatch = Rejection::InputLengthMismatch {
        expected,
        actual: inputs.len(),
    };
    if inputs.len() != expected {
        return Err(mismatch);
    }
    let (constant, weights) = vk.ic().split_at(1);
    let sum = linear_combination(weights, inputs.as_slice()).map_err(|_| mismatch)?;
    Ok(constant[0] + sum)
}

/// Verify a Groth16 proof without any precomputation.
///
/// Algorithm:
/// 1. Check `inputs.len() == IC.len() - 1`
/// 2. Compute vk_x = IC[0] + MSM(IC[1..], inputs)
/// 3. Check: e(-A,B) * e(alpha,beta) * e(vk_x,gamma) * e(C,delta) == 1
///    as one combined Miller loop and one final exponentiation
pub fn verify_groth16(vk: &VerifyingKey, proof: &Proof, inputs: &PublicInputs) -> Verdict {
    let vk_x = match input_combination(vk, inputs) {
        Ok(p) => p,
        Err(r) => return reject(r),
    };
    let pairs = [
        (-proof.a, proof.b),
        (vk.alpha(), vk.beta()),
        (vk_x, vk.gamma()),
        (proof.c, vk.delta()),
    ];
    if multi_pairing_is_identity(&pairs) {
        Verdict::Accepted
    } else {
        reject(Rejection::PairingCheckFailed)
    }
}

/// Verifier bound to one prepared key. `Send + Sync`; share it behind an
/// `Arc` and call it from as many threads as needed.
#[derive(Debug)]
pub struct Verifier {
    pvk: PreparedVerifyingKey,
}

impl Verifier {
    pub fn new(vk: Arc<VerifyingKey>) -> Self {
        Self {
            pvk: PreparedVerifyingKey::new(vk),
        }
    }

    pub fn vk(&self) -> &VerifyingKey {
        self.pvk.vk()
    }

    pub fn prepared(&self) -> &PreparedVerifyingKey {
        &self.pvk
    }

    pub fn verify(&self, proof: &Proof, inputs: &PublicInputs) -> Verdict {
        let vk_x = match input_combination(self.pvk.vk(), inputs) {
            Ok(p) => p,
            Err(r) => return reject(r),
        };
        if self.pvk.equation_holds(&proof.a, &proof.b, &vk_x, &proof.c) {
            Verdict::Accepted
        } else {
            reject(Rejection::PairingCheckFailed)
        }
    }

    /// Decode the hex wire form, then verify. Decode failures are verdicts,
    /// not errors.
    pub fn verify_wire<S: AsRef<str>>(&self, proof: &WireProof, inputs: &[S]) -> Verdict {
        let proof = match proof.decode() {
            Ok(p) => p,
            Err(e) => return reject(Rejection::InvalidProof(e)),
        };
        let inputs = match decode_inputs(inputs) {
            Ok(pi) => pi,
            Err(e) => return reject(Rejection::InvalidInput(e)),
        };
        self.verify(&proof, &inputs)
    }

    /// Verify several proofs against the same prepared key.
    pub fn verify_batch<'a, I>(&self, items: I) -> Vec<Verdict>
    where
        I: IntoIterator<Item = (&'a Proof, &'a PublicInputs)>,
    {
        items
            .into_iter()
            .map(|(proof, inputs)| self.verify(proof, inputs))
            .collect()
    }
}

/// `verifyTx(proof, input) -> bool`
pub fn verify_tx<S: AsRef<str>>(verifier: &Verifier, proof: &WireProof, inputs: &[S]) -> bool {
    verifier.verify_wire(proof, inputs).is_accepted()
}
