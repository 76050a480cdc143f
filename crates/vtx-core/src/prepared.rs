// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Key-derived values computed once and shared by every verification.

use crate::pairing::{miller_then_exponentiate, pairing, G1Prepared, G2Prepared, Gt};
use core::fmt;
use std::sync::Arc;
use vtx_types::{G1Point, G2Point, VerifyingKey};

/// Read-only cache over a [`VerifyingKey`]: `e(α, β)` and the Miller-loop
/// line coefficients of `-γ` and `-δ`.
///
/// With these, the Groth16 equation
/// `e(-A,B)·e(α,β)·e(vk_x,γ)·e(C,δ) == 1` becomes
/// `FE(ML(A,B)·ML(vk_x,-γ)·ML(C,-δ)) == e(α,β)`, still one combined Miller
/// loop and one final exponentiation per proof.
pub struct PreparedVerifyingKey {
    vk: Arc<VerifyingKey>,
    alpha_beta: Gt,
    gamma_neg: G2Prepared,
    delta_neg: G2Prepared,
}

impl PreparedVerifyingKey {
    pub fn new(vk: Arc<VerifyingKey>) -> Self {
        let alpha_beta = pairing(&vk.alpha(), &vk.beta());
        let gamma_neg = G2Prepared::from((-vk.gamma()).into_affine());
        let delta_neg = G2Prepared::from((-vk.delta()).into_affine());
        log::info!(
            "prepared verifying key {} ({} public inputs)",
            vk.key_id_hex(),
            vk.num_public_inputs()
        );
        Self {
            vk,
            alpha_beta,
            gamma_neg,
            delta_neg,
        }
    }

    pub fn vk(&self) -> &VerifyingKey {
        &self.vk
    }

    pub fn shared_vk(&self) -> Arc<VerifyingKey> {
        Arc::clone(&self.vk)
    }

    pub fn alpha_beta(&self) -> Gt {
        self.alpha_beta
    }

    pub(crate) fn equation_holds(&self, a: &G1Point, b: &G2Point, vk_x: &G1Point, c: &G1Point) -> bool {
        let g1 = vec![
            G1Prepared::from(a.into_affine()),
            G1Prepared::from(vk_x.into_affine()),
            G1Prepared::from(c.into_affine()),
        ];
        let g2 = vec![
            G2Prepared::from(b.into_affine()),
            self.gamma_neg.clone(),
            self.delta_neg.clone(),
        ];
        miller_then_exponentiate(g1, g2).is_some_and(|gt| gt == self.alpha_beta)
    }
}

impl fmt::Debug for PreparedVerifyingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreparedVerifyingKey")
            .field("key_id", &self.vk.key_id_hex())
            .field("num_public_inputs", &self.vk.num_public_inputs())
            .finish_non_exhaustive()
    }
}
