// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! vtx-types: field, curve, proof and key types for Groth16 over BN254

pub mod curve;
pub mod error;
pub mod field;
pub mod key;
pub mod proof;
pub mod wire;

pub use curve::{linear_combination, CurvePoint, G1Point, G2Point, PairingGroup};
pub use error::{Error, Group, PointFault, Result};
pub use field::{FieldElement, Fp, Fp2, Scalar};
pub use key::VerifyingKey;
pub use proof::{Proof, PublicInputs};
pub use wire::WireProof;
