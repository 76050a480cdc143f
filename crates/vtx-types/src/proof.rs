// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Groth16 proof and public-input vector.

use crate::curve::{G1Point, G2Point};
use crate::error::Result;
use crate::field::Scalar;

/// Groth16 proof for BN254. Points are validated on construction of the
/// individual [`G1Point`]/[`G2Point`] values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Proof {
    pub a: G1Point,
    pub b: G2Point,
    pub c: G1Point,
}

impl Proof {
    pub fn new(a: G1Point, b: G2Point, c: G1Point) -> Self {
        Self { a, b, c }
    }
}

/// Ordered public inputs; each entry is a reduced scalar-field element.
///
/// The expected length is a property of the verifying key
/// (`ic.len() - 1`), not of this type.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PublicInputs(Vec<Scalar>);

impl PublicInputs {
    pub fn new(values: Vec<Scalar>) -> Self {
        Self(values)
    }

    pub fn from_u64s(values: &[u64]) -> Self {
        values.iter().copied().map(Scalar::from_u64).collect()
    }

    /// Decode full-width `0x` hex strings, refusing any value `>= r`.
    pub fn from_hex<S: AsRef<str>>(values: &[S]) -> Result<Self> {
        values
            .iter()
            .map(|s| Scalar::from_hex(s.as_ref()))
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }

    pub fn to_hex(&self) -> Vec<String> {
        self.0.iter().map(Scalar::to_hex).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Scalar] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Scalar> {
        self.0.iter()
    }
}

impl FromIterator<Scalar> for PublicInputs {
    fn from_iter<I: IntoIterator<Item = Scalar>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
