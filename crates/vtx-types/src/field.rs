// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Prime-field and quadratic-extension elements for BN254.
//!
//! [`FieldElement`] wraps an arkworks prime field and only ever holds a
//! fully reduced value. Two instantiations matter to the verifier:
//!
//! - [`Fp`]: the base field `Fq`, used for curve coordinates.
//! - [`Scalar`]: the scalar field `Fr`, used for public inputs.
//!
//! # Byte order
//!
//! `from_bytes`/`to_bytes` use 32-byte **big-endian**, the same layout as
//! the `0x`-prefixed hex literals of the proof wire format. Values `>= p`
//! are refused with [`Error::OutOfRange`], never reduced.

use crate::error::{Error, Result};
use ark_bn254::{Fq, Fq2, Fr};
use ark_ff::{AdditiveGroup, BigInt, Field, PrimeField};
use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

/// Width of a serialized field element.
pub const FIELD_BYTES: usize = 32;

/// Element of a 254-bit prime field, always in `[0, p)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FieldElement<F>(F);

/// BN254 base field element.
pub type Fp = FieldElement<Fq>;

/// BN254 scalar field element.
pub type Scalar = FieldElement<Fr>;

impl<F: PrimeField<BigInt = BigInt<4>>> FieldElement<F> {
    pub fn zero() -> Self {
        Self(F::ZERO)
    }

    pub fn one() -> Self {
        Self(F::ONE)
    }

    pub fn from_u64(value: u64) -> Self {
        Self(F::from(value))
    }

    pub fn from_inner(value: F) -> Self {
        Self(value)
    }

    pub fn into_inner(self) -> F {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == F::ZERO
    }

    pub fn square(&self) -> Self {
        Self(self.0.square())
    }

    /// Multiplicative inverse; zero has none.
    pub fn inverse(&self) -> Result<Self> {
        self.0.inverse().map(Self).ok_or(Error::NotInvertible)
    }

    /// `self^exp` where `exp` is given as little-endian u64 limbs.
    pub fn pow(&self, exp: impl AsRef<[u64]>) -> Self {
        Self(self.0.pow(exp))
    }

    /// Decode a 32-byte big-endian integer, refusing anything `>= p`.
    pub fn from_bytes(bytes: &[u8; FIELD_BYTES]) -> Result<Self> {
        let mut limbs = [0u64; 4];
        for (i, chunk) in bytes.rchunks(8).enumerate() {
            let mut buf = [0u8; 8];
            buf.copy_from_slice(chunk);
            limbs[i] = u64::from_be_bytes(buf);
        }
        F::from_bigint(BigInt::new(limbs))
            .map(Self)
            .ok_or(Error::OutOfRange)
    }

    pub fn to_bytes(&self) -> [u8; FIELD_BYTES] {
        let limbs = self.0.into_bigint().0;
        let mut out = [0u8; FIELD_BYTES];
        for (i, limb) in limbs.iter().enumerate() {
            let end = FIELD_BYTES - 8 * i;
            out[end - 8..end].copy_from_slice(&limb.to_be_bytes());
        }
        out
    }

    /// Parse the wire form: `0x` followed by exactly 64 hex digits.
    ///
    /// Any other width is a [`Error::Decode`], so every value has a single
    /// accepted encoding up to digit case.
    pub fn from_hex(s: &str) -> Result<Self> {
        let digits = s
            .strip_prefix("0x")
            .ok_or_else(|| Error::Decode(format!("field element {s:?} lacks 0x prefix")))?;
        if digits.len() != 2 * FIELD_BYTES {
            return Err(Error::Decode(format!(
                "hex field element has {} digits, expected {}",
                digits.len(),
                2 * FIELD_BYTES
            )));
        }
        let mut bytes = [0u8; FIELD_BYTES];
        hex::decode_to_slice(digits, &mut bytes).map_err(|e| Error::Decode(e.to_string()))?;
        Self::from_bytes(&bytes)
    }

    /// `0x` + 64 lowercase hex digits.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.to_bytes()))
    }
}

impl<F: PrimeField<BigInt = BigInt<4>>> fmt::Display for FieldElement<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl<F: PrimeField<BigInt = BigInt<4>>> From<u64> for FieldElement<F> {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl<F: PrimeField> Add for FieldElement<F> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl<F: PrimeField> Sub for FieldElement<F> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl<F: PrimeField> Mul for FieldElement<F> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

impl<F: PrimeField> Neg for FieldElement<F> {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

/// Element `c0 + c1·u` of `Fq[u]/(u² + 1)`, the G2 coordinate field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Fp2(Fq2);

impl Fp2 {
    pub fn new(c0: Fp, c1: Fp) -> Self {
        Self(Fq2::new(c0.into_inner(), c1.into_inner()))
    }

    pub fn from_inner(value: Fq2) -> Self {
        Self(value)
    }

    pub fn into_inner(self) -> Fq2 {
        self.0
    }

    /// Real part.
    pub fn c0(&self) -> Fp {
        FieldElement(self.0.c0)
    }

    /// Coefficient of `u`.
    pub fn c1(&self) -> Fp {
        FieldElement(self.0.c1)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == Fq2::ZERO
    }

    pub fn inverse(&self) -> Result<Self> {
        self.0.inverse().map(Self).ok_or(Error::NotInvertible)
    }
}

impl Add for Fp2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Fp2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Mul for Fp2 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

impl Neg for Fp2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}
