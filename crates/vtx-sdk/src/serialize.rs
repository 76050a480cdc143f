// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Arkworks → vtx conversion.
//!
//! Turns keys and proofs produced by `ark-groth16` over BN254 into the
//! validated vtx types and the hex wire/file forms. Every point goes back
//! through the on-curve and subgroup checks.
//!
//! # Example
//!
//! ```rust,no_run
//! use vtx_sdk::serialize::{proof_file_from_ark, vk_from_ark};
//!
//! # fn example(
//! #     vk: &ark_groth16::VerifyingKey<ark_bn254::Bn254>,
//! #     proof: &ark_groth16::Proof<ark_bn254::Bn254>,
//! #     inputs: &[ark_bn254::Fr],
//! # ) -> vtx_sdk::SdkResult<()> {
//! let key = vk_from_ark(vk)?;
//! let file = proof_file_from_ark(proof, inputs)?;
//! // file.proof.a, file.inputs: 0x-prefixed big-endian hex
//! # Ok(())
//! # }
//! ```

use crate::error::{SdkError, SdkResult};
use crate::prooffile::ProofFile;
use ark_bn254::{Bn254, Fr};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use vtx_types::{Error, G1Point, G2Point, Proof, PublicInputs, Scalar, VerifyingKey};

pub fn vk_from_ark(vk: &ark_groth16::VerifyingKey<Bn254>) -> SdkResult<VerifyingKey> {
    let ic = vk
        .gamma_abc_g1
        .iter()
        .map(|p| G1Point::from_affine(*p))
        .collect::<Result<Vec<_>, _>>()
        .map_err(SdkError::Key)?;
    VerifyingKey::new(
        G1Point::from_affine(vk.alpha_g1).map_err(SdkError::Key)?,
        G2Point::from_affine(vk.beta_g2).map_err(SdkError::Key)?,
        G2Point::from_affine(vk.gamma_g2).map_err(SdkError::Key)?,
        G2Point::from_affine(vk.delta_g2).map_err(SdkError::Key)?,
        ic,
    )
    .map_err(SdkError::Key)
}

/// Decode a key stored with arkworks' compressed canonical encoding, the
/// format `ark-groth16` tooling writes to disk.
pub fn vk_from_ark_bytes(bytes: &[u8]) -> SdkResult<VerifyingKey> {
    let vk = ark_groth16::VerifyingKey::<Bn254>::deserialize_compressed(bytes)
        .map_err(|e| SdkError::Key(Error::Decode(e.to_string())))?;
    vk_from_ark(&vk)
}

pub fn vk_to_ark_bytes(vk: &ark_groth16::VerifyingKey<Bn254>) -> SdkResult<Vec<u8>> {
    let mut bytes = Vec::with_capacity(vk.compressed_size());
    vk.serialize_compressed(&mut bytes)
        .map_err(|e| SdkError::Other(anyhow::anyhow!("serialize verifying key: {e}")))?;
    Ok(bytes)
}

pub fn proof_from_ark(proof: &ark_groth16::Proof<Bn254>) -> SdkResult<Proof> {
    Ok(Proof::new(
        G1Point::from_affine(proof.a).map_err(SdkError::Proof)?,
        G2Point::from_affine(proof.b).map_err(SdkError::Proof)?,
        G1Point::from_affine(proof.c).map_err(SdkError::Proof)?,
    ))
}

pub fn inputs_from_ark(inputs: &[Fr]) -> PublicInputs {
    inputs.iter().copied().map(Scalar::from_inner).collect()
}

pub fn proof_file_from_ark(proof: &ark_groth16::Proof<Bn254>, inputs: &[Fr]) -> SdkResult<ProofFile> {
    Ok(ProofFile::new(&proof_from_ark(proof)?, &inputs_from_ark(inputs)))
}
