// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Reference circuit used to mint real Groth16 keys and proofs over BN254.
//!
//! [`RecordCircuit`] exposes `n` public inputs and proves that every one of
//! them is nonzero by witnessing its inverse. It exists so the verifier can
//! be exercised against proofs from an independent prover.

use ark_bn254::{Bn254, Fr};
use ark_groth16::{Groth16, PreparedVerifyingKey, Proof, ProvingKey, VerifyingKey};
use ark_r1cs_std::{alloc::AllocVar, fields::fp::FpVar, fields::FieldVar};
use ark_relations::r1cs::{
    ConstraintSynthesizer, ConstraintSystem, ConstraintSystemRef, OptimizationGoal, SynthesisError,
    SynthesisMode,
};
use ark_snark::SNARK;
use ark_std::rand::{CryptoRng, RngCore};

/// "Every public input `xᵢ` has an inverse"
#[derive(Clone, Debug)]
pub struct RecordCircuit {
    num_inputs: usize,
    values: Option<Vec<Fr>>,
}

impl RecordCircuit {
    /// Shape-only instance for setup and constraint counting.
    pub fn empty(num_inputs: usize) -> Self {
        Self {
            num_inputs,
            values: None,
        }
    }

    pub fn with_values(values: Vec<Fr>) -> Self {
        Self {
            num_inputs: values.len(),
            values: Some(values),
        }
    }
}

impl ConstraintSynthesizer<Fr> for RecordCircuit {
    fn generate_constraints(self, cs: ConstraintSystemRef<Fr>) -> Result<(), SynthesisError> {
        for i in 0..self.num_inputs {
            let x = FpVar::new_input(cs.clone(), || {
                self.values
                    .as_ref()
                    .and_then(|v| v.get(i).copied())
                    .ok_or(SynthesisError::AssignmentMissing)
            })?;
            // x · x⁻¹ == 1
            let _ = x.inverse()?;
        }
        Ok(())
    }
}

/// Circuit-specific Groth16 setup for `num_inputs` public inputs.
pub fn setup<R: RngCore + CryptoRng>(
    num_inputs: usize,
    rng: &mut R,
) -> Result<(ProvingKey<Bn254>, VerifyingKey<Bn254>), SynthesisError> {
    Groth16::<Bn254>::circuit_specific_setup(RecordCircuit::empty(num_inputs), rng)
}

/// Prove the circuit for the given public values.
pub fn prove<R: RngCore + CryptoRng>(
    pk: &ProvingKey<Bn254>,
    values: &[Fr],
    rng: &mut R,
) -> Result<Proof<Bn254>, SynthesisError> {
    Groth16::<Bn254>::prove(pk, RecordCircuit::with_values(values.to_vec()), rng)
}

/// Verify with arkworks' own verifier; the cross-check for vtx-core.
pub fn verify_offchain(vk: &VerifyingKey<Bn254>, proof: &Proof<Bn254>, values: &[Fr]) -> bool {
    let pvk = PreparedVerifyingKey::from(vk.clone());
    Groth16::<Bn254>::verify_with_processed_vk(&pvk, values, proof).unwrap_or(false)
}

pub fn constraint_count(num_inputs: usize) -> Result<usize, SynthesisError> {
    let cs = ConstraintSystem::<Fr>::new_ref();
    cs.set_optimization_goal(OptimizationGoal::Constraints);
    cs.set_mode(SynthesisMode::Setup);
    RecordCircuit::empty(num_inputs).generate_constraints(cs.clone())?;
    Ok(cs.num_constraints())
}
