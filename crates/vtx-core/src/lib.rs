// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! vtx-core: Groth16 proof verification engine over BN254
//!
//! Verification is a pure, single-pass function of
//! `(verifying key, proof, public inputs)` that ends in [`Verdict::Accepted`]
//! or [`Verdict::Rejected`]. Malformed input never panics; it is a rejection
//! with a [`Rejection`] reason.

mod pairing;
mod prepared;
mod verifier;

pub use pairing::{multi_pairing, multi_pairing_is_identity, pairing, Gt};
pub use prepared::PreparedVerifyingKey;
pub use verifier::{verify_groth16, verify_tx, Rejection, Verdict, Verifier};

pub use vtx_types;
