// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Hex wire format of the `verifyTx(proof, input)` call surface.
//!
//! Every value is `0x` followed by exactly 64 hex digits (32 bytes,
//! big-endian); any other width is a decode error:
//!
//! ```text
//! proof = [ A: [x, y],
//!           B: [[x.c0, x.c1], [y.c0, y.c1]],
//!           C: [x, y] ]
//! input = [x_1, .., x_n]
//! ```
//!
//! B lists the real part of each Fp2 coordinate first. A proof may be given
//! as that positional triple or as an object `{ "a", "b", "c" }`; it is
//! always written back as the object form.

use crate::curve::{G1Point, G2Point};
use crate::error::Result;
use crate::field::{Fp, Fp2};
use crate::proof::{Proof, PublicInputs};
use serde::{Deserialize, Serialize};

pub type WireG1 = [String; 2];
pub type WireG2 = [[String; 2]; 2];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WireProofRepr")]
pub struct WireProof {
    pub a: WireG1,
    pub b: WireG2,
    pub c: WireG1,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireProofRepr {
    Named { a: WireG1, b: WireG2, c: WireG1 },
    Positional(WireG1, WireG2, WireG1),
}

impl From<WireProofRepr> for WireProof {
    fn from(repr: WireProofRepr) -> Self {
        match repr {
            WireProofRepr::Named { a, b, c } | WireProofRepr::Positional(a, b, c) => {
                Self { a, b, c }
            }
        }
    }
}

impl WireProof {
    /// Decode and validate all three points.
    pub fn decode(&self) -> Result<Proof> {
        Ok(Proof::new(
            decode_g1(&self.a)?,
            decode_g2(&self.b)?,
            decode_g1(&self.c)?,
        ))
    }
}

impl From<&Proof> for WireProof {
    fn from(proof: &Proof) -> Self {
        Self {
            a: encode_g1(&proof.a),
            b: encode_g2(&proof.b),
            c: encode_g1(&proof.c),
        }
    }
}

pub fn decode_g1(w: &WireG1) -> Result<G1Point> {
    G1Point::from_coordinates(Fp::from_hex(&w[0])?, Fp::from_hex(&w[1])?)
}

pub fn decode_g2(w: &WireG2) -> Result<G2Point> {
    let x = Fp2::new(Fp::from_hex(&w[0][0])?, Fp::from_hex(&w[0][1])?);
    let y = Fp2::new(Fp::from_hex(&w[1][0])?, Fp::from_hex(&w[1][1])?);
    G2Point::from_coordinates(x, y)
}

pub fn encode_g1(p: &G1Point) -> WireG1 {
    let (x, y) = p.coordinates();
    [x.to_hex(), y.to_hex()]
}

pub fn encode_g2(p: &G2Point) -> WireG2 {
    let (x, y) = p.coordinates();
    [
        [x.c0().to_hex(), x.c1().to_hex()],
        [y.c0().to_hex(), y.c1().to_hex()],
    ]
}

pub fn decode_inputs<S: AsRef<str>>(inputs: &[S]) -> Result<PublicInputs> {
    PublicInputs::from_hex(inputs)
}

pub fn encode_inputs(inputs: &PublicInputs) -> Vec<String> {
    inputs.to_hex()
}
