// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Proof JSON files: `{"proof": {"a", "b", "c"}, "inputs": [..]}`.

use crate::error::{read_file, write_file, SdkError, SdkResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use vtx_types::wire::{decode_inputs, encode_inputs};
use vtx_types::{Proof, PublicInputs, WireProof};

/// A proof and its public inputs, still in wire form.
///
/// Kept undecoded so a malformed file can still be handed to the verifier
/// and reported as a rejection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofFile {
    pub proof: WireProof,
    pub inputs: Vec<String>,
}

impl ProofFile {
    pub fn new(proof: &Proof, inputs: &PublicInputs) -> Self {
        Self {
            proof: WireProof::from(proof),
            inputs: encode_inputs(inputs),
        }
    }

    /// Decode both parts, failing on the first invalid value.
    pub fn decode(&self) -> SdkResult<(Proof, PublicInputs)> {
        let proof = self.proof.decode().map_err(SdkError::Proof)?;
        let inputs = decode_inputs(&self.inputs).map_err(SdkError::Proof)?;
        Ok((proof, inputs))
    }
}

pub fn parse_proof(json: &str) -> SdkResult<ProofFile> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_proof(path: &Path) -> SdkResult<ProofFile> {
    parse_proof(&read_file(path)?)
}

pub fn save_proof(path: &Path, file: &ProofFile) -> SdkResult<()> {
    let json = serde_json::to_string_pretty(file)?;
    write_file(path, json)
}
