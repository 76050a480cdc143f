// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Optimal-ate pairing on BN254, used only for product-equality checks.

use ark_bn254::{Bn254, Fq12};
use ark_ec::pairing::Pairing;
use ark_ff::{Field, One};
use core::ops::Mul;
use vtx_types::{G1Point, G2Point};

pub type G1Prepared = <Bn254 as Pairing>::G1Prepared;
pub type G2Prepared = <Bn254 as Pairing>::G2Prepared;

/// Element of the target group GT ⊂ Fq12*, written multiplicatively.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gt(Fq12);

impl Gt {
    pub fn identity() -> Self {
        Self(Fq12::ONE)
    }

    pub fn is_identity(&self) -> bool {
        self.0.is_one()
    }

    pub fn into_inner(self) -> Fq12 {
        self.0
    }
}

impl Mul for Gt {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

/// `e(P, Q)`: one Miller loop and one final exponentiation.
pub fn pairing(p: &G1Point, q: &G2Point) -> Gt {
    Gt(Bn254::pairing(p.into_affine(), q.into_affine()).0)
}

/// `∏ e(Pᵢ, Qᵢ)` with a single shared Miller loop and a single final
/// exponentiation. `None` only if the Miller loop output is zero.
pub fn multi_pairing(pairs: &[(G1Point, G2Point)]) -> Option<Gt> {
    let (g1, g2): (Vec<G1Prepared>, Vec<G2Prepared>) = pairs
        .iter()
        .map(|(p, q)| (G1Prepared::from(p.into_affine()), G2Prepared::from(q.into_affine())))
        .unzip();
    miller_then_exponentiate(g1, g2)
}

/// True iff `∏ e(Pᵢ, Qᵢ) == 1` in GT.
pub fn multi_pairing_is_identity(pairs: &[(G1Point, G2Point)]) -> bool {
    multi_pairing(pairs).is_some_and(|gt| gt.is_identity())
}

pub(crate) fn miller_then_exponentiate(g1: Vec<G1Prepared>, g2: Vec<G2Prepared>) -> Option<Gt> {
    let ml = Bn254::multi_miller_loop(g1, g2);
    Bn254::final_exponentiation(ml).map(|out| Gt(out.0))
}
