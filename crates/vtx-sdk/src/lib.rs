// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! # vtx-sdk
//!
//! File formats and glue around the `vtx-core` verifier.
//!
//! ## Crate layout
//!
//! | Module | Purpose |
//! |---|---|
//! | *crate root* | Re-exports the vtx types (`VerifyingKey`, `Proof`, `WireProof`, …) |
//! | [`keyfile`] | Verifying-key JSON load/save with validation |
//! | [`prooffile`] | Proof + public-input JSON load/save |
//! | [`serialize`] | Arkworks (`ark-groth16`, BN254) keys and proofs → vtx types |
//! | [`config`] | `VTX_VK_PATH` resolution |
//! | [`error`] | [`SdkError`] |
//!
//! ## Typical flow
//!
//! ```rust,no_run
//! use std::path::Path;
//! use vtx_sdk::{keyfile, prooffile};
//!
//! # fn example() -> vtx_sdk::SdkResult<()> {
//! let vk = keyfile::load_vk(Path::new("vk.json"))?;
//! let file = prooffile::load_proof(Path::new("proof.json"))?;
//! // hand `vk` to vtx_core::Verifier and `file.proof`/`file.inputs` to verify_wire
//! # let _ = (vk, file);
//! # Ok(())
//! # }
//! ```

pub use vtx_types::{Proof, PublicInputs, VerifyingKey, WireProof};

pub mod config;
pub mod error;
pub mod keyfile;
pub mod prooffile;
pub mod serialize;

pub use error::{SdkError, SdkResult};
