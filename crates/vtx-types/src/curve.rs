// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Validated affine points on BN254 G1 and on its sextic twist (G2).
//!
//! A [`CurvePoint`] can only be obtained through a constructor that checks
//! the curve equation and prime-order subgroup membership, or as the result
//! of group operations on points that already passed those checks. Code
//! that holds a `G1Point`/`G2Point` therefore never re-validates.
//!
//! The point at infinity is encoded as all-zero coordinates, which is not a
//! solution of either curve equation (`b = 3` on G1, `b' = 3/(9+u)` on G2).

use crate::error::{Error, Group, PointFault, Result};
use crate::field::{Fp, Fp2, Scalar, FIELD_BYTES};
use ark_bn254::{g1, g2, Fr};
use ark_ec::short_weierstrass::{Affine, Projective, SWCurveConfig};
use ark_ec::{AffineRepr, CurveGroup, VariableBaseMSM};
use ark_ff::{AdditiveGroup, BitIteratorBE, PrimeField, Zero};
use core::fmt;
use core::ops::{Add, Neg, Sub};

/// Curve configurations the verifier accepts points for.
pub trait PairingGroup: SWCurveConfig<ScalarField = Fr> {
    const GROUP: Group;
}

impl PairingGroup for g1::Config {
    const GROUP: Group = Group::G1;
}

impl PairingGroup for g2::Config {
    const GROUP: Group = Group::G2;
}

pub struct CurvePoint<P: PairingGroup>(Affine<P>);

pub type G1Point = CurvePoint<g1::Config>;
pub type G2Point = CurvePoint<g2::Config>;

/// Serialized G1 point: `x || y`, big-endian.
pub const G1_BYTES: usize = 2 * FIELD_BYTES;

/// Serialized G2 point: `x.c0 || x.c1 || y.c0 || y.c1`, big-endian.
pub const G2_BYTES: usize = 4 * FIELD_BYTES;

impl<P: PairingGroup> CurvePoint<P> {
    pub fn identity() -> Self {
        Self(Affine::identity())
    }

    pub fn generator() -> Self {
        Self(P::GENERATOR)
    }

    /// Validate an arkworks affine point.
    pub fn from_affine(point: Affine<P>) -> Result<Self> {
        if !point.is_on_curve() {
            return Err(Error::InvalidPoint {
                group: P::GROUP,
                fault: PointFault::NotOnCurve,
            });
        }
        if !point.is_in_correct_subgroup_assuming_on_curve() {
            return Err(Error::InvalidPoint {
                group: P::GROUP,
                fault: PointFault::NotInSubgroup,
            });
        }
        Ok(Self(point))
    }

    pub fn into_affine(self) -> Affine<P> {
        self.0
    }

    pub fn is_identity(&self) -> bool {
        self.0.infinity
    }

    pub fn is_on_curve(&self) -> bool {
        self.0.is_on_curve()
    }

    /// Subgroup membership, using the curve's endomorphism shortcut where
    /// arkworks provides one (G2). Equivalent to `[r]P == O`.
    pub fn is_in_correct_subgroup(&self) -> bool {
        self.0.is_on_curve() && self.0.is_in_correct_subgroup_assuming_on_curve()
    }

    pub fn double(&self) -> Self {
        Self(self.0.into_group().double().into_affine())
    }

    /// Left-to-right double-and-add. Not constant time: proof data is public.
    pub fn scalar_mul(&self, k: &Scalar) -> Self {
        let mut acc = Projective::<P>::zero();
        for bit in BitIteratorBE::without_leading_zeros(k.into_inner().into_bigint()) {
            acc.double_in_place();
            if bit {
                acc += self.0;
            }
        }
        Self(acc.into_affine())
    }
}

/// `Σ scalars[i] · bases[i]` via a variable-base MSM.
pub fn linear_combination<P: PairingGroup>(
    bases: &[CurvePoint<P>],
    scalars: &[Scalar],
) -> Result<CurvePoint<P>> {
    if bases.len() != scalars.len() {
        return Err(Error::InputLengthMismatch {
            expected: bases.len(),
            actual: scalars.len(),
        });
    }
    let bases: Vec<Affine<P>> = bases.iter().map(|p| p.0).collect();
    let scalars: Vec<Fr> = scalars.iter().map(|s| s.into_inner()).collect();
    let sum = Projective::<P>::msm(&bases, &scalars).map_err(|_| Error::InputLengthMismatch {
        expected: bases.len(),
        actual: scalars.len(),
    })?;
    Ok(CurvePoint(sum.into_affine()))
}

impl G1Point {
    /// Build from affine coordinates; `(0, 0)` is the point at infinity.
    pub fn from_coordinates(x: Fp, y: Fp) -> Result<Self> {
        if x.is_zero() && y.is_zero() {
            return Ok(Self::identity());
        }
        Self::from_affine(Affine::new_unchecked(x.into_inner(), y.into_inner()))
    }

    pub fn coordinates(&self) -> (Fp, Fp) {
        if self.0.infinity {
            return (Fp::zero(), Fp::zero());
        }
        (Fp::from_inner(self.0.x), Fp::from_inner(self.0.y))
    }

    pub fn from_bytes(bytes: &[u8; G1_BYTES]) -> Result<Self> {
        let (x, y) = bytes.split_at(FIELD_BYTES);
        Self::from_coordinates(Fp::from_bytes(&word(x))?, Fp::from_bytes(&word(y))?)
    }

    pub fn to_bytes(&self) -> [u8; G1_BYTES] {
        let (x, y) = self.coordinates();
        let mut out = [0u8; G1_BYTES];
        out[..FIELD_BYTES].copy_from_slice(&x.to_bytes());
        out[FIELD_BYTES..].copy_from_slice(&y.to_bytes());
        out
    }
}

impl G2Point {
    /// Build from affine coordinates; all-zero is the point at infinity.
    pub fn from_coordinates(x: Fp2, y: Fp2) -> Result<Self> {
        if x.is_zero() && y.is_zero() {
            return Ok(Self::identity());
        }
        Self::from_affine(Affine::new_unchecked(x.into_inner(), y.into_inner()))
    }

    pub fn coordinates(&self) -> (Fp2, Fp2) {
        if self.0.infinity {
            return (Fp2::default(), Fp2::default());
        }
        (Fp2::from_inner(self.0.x), Fp2::from_inner(self.0.y))
    }

    pub fn from_bytes(bytes: &[u8; G2_BYTES]) -> Result<Self> {
        let w = |i: usize| Fp::from_bytes(&word(&bytes[i * FIELD_BYTES..(i + 1) * FIELD_BYTES]));
        let x = Fp2::new(w(0)?, w(1)?);
        let y = Fp2::new(w(2)?, w(3)?);
        Self::from_coordinates(x, y)
    }

    pub fn to_bytes(&self) -> [u8; G2_BYTES] {
        let (x, y) = self.coordinates();
        let mut out = [0u8; G2_BYTES];
        for (i, c) in [x.c0(), x.c1(), y.c0(), y.c1()].iter().enumerate() {
            out[i * FIELD_BYTES..(i + 1) * FIELD_BYTES].copy_from_slice(&c.to_bytes());
        }
        out
    }
}

fn word(chunk: &[u8]) -> [u8; FIELD_BYTES] {
    let mut out = [0u8; FIELD_BYTES];
    out.copy_from_slice(chunk);
    out
}

impl<P: PairingGroup> Clone for CurvePoint<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: PairingGroup> Copy for CurvePoint<P> {}

impl<P: PairingGroup> PartialEq for CurvePoint<P> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<P: PairingGroup> Eq for CurvePoint<P> {}

impl<P: PairingGroup> fmt::Debug for CurvePoint<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}Point({})", P::GROUP, self.0)
    }
}

impl<P: PairingGroup> Add for CurvePoint<P> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self((self.0.into_group() + rhs.0).into_affine())
    }
}

impl<P: PairingGroup> Sub for CurvePoint<P> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self((self.0.into_group() - rhs.0).into_affine())
    }
}

impl<P: PairingGroup> Neg for CurvePoint<P> {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bn254::{Fq, Fq2, G2Affine};
    use ark_ff::{Field, UniformRand};
    use ark_std::rand::{rngs::StdRng, SeedableRng};

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    /// An on-curve twist point outside the r-torsion: the G2 cofactor is
    /// huge, so the first x with a square root almost surely lands there.
    fn off_subgroup_g2() -> G2Affine {
        (1u64..)
            .filter_map(|k| G2Affine::get_point_from_x_unchecked(Fq2::new(Fq::from(k), Fq::ONE), false))
            .find(|p| !p.is_in_correct_subgroup_assuming_on_curve())
            .unwrap()
    }

    #[test]
    fn generators_are_valid() {
        assert!(G1Point::generator().is_on_curve());
        assert!(G1Point::generator().is_in_correct_subgroup());
        assert!(G2Point::generator().is_on_curve());
        assert!(G2Point::generator().is_in_correct_subgroup());
    }

    #[test]
    fn g1_generator_coordinates() {
        let (x, y) = G1Point::generator().coordinates();
        assert_eq!(x, Fp::from_u64(1));
        assert_eq!(y, Fp::from_u64(2));
    }

    #[test]
    fn zero_coordinates_are_identity() {
        let p = G1Point::from_coordinates(Fp::zero(), Fp::zero()).unwrap();
        assert!(p.is_identity());
        let q = G2Point::from_coordinates(Fp2::default(), Fp2::default()).unwrap();
        assert!(q.is_identity());
        assert_eq!(p.coordinates(), (Fp::zero(), Fp::zero()));
    }

    #[test]
    fn off_curve_g1_rejected() {
        let err = G1Point::from_coordinates(Fp::from_u64(1), Fp::from_u64(3)).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidPoint {
                group: Group::G1,
                fault: PointFault::NotOnCurve
            }
        );
    }

    #[test]
    fn off_curve_g2_rejected() {
        let (x, y) = G2Point::generator().coordinates();
        let err = G2Point::from_coordinates(x, y + Fp2::new(Fp::one(), Fp::zero())).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidPoint {
                group: Group::G2,
                fault: PointFault::NotOnCurve
            }
        );
    }

    #[test]
    fn off_subgroup_g2_rejected() {
        let p = off_subgroup_g2();
        assert!(p.is_on_curve());
        let err = G2Point::from_coordinates(Fp2::from_inner(p.x), Fp2::from_inner(p.y)).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidPoint {
                group: Group::G2,
                fault: PointFault::NotInSubgroup
            }
        );
    }

    #[test]
    fn subgroup_shortcut_agrees_with_order_multiplication() {
        let order = Fr::MODULUS;
        assert!(G2Point::generator().into_affine().mul_bigint(order).is_zero());
        assert!(!off_subgroup_g2().mul_bigint(order).is_zero());
    }

    #[test]
    fn scalar_mul_matches_arkworks() {
        let mut rng = rng();
        for _ in 0..4 {
            let k = Fr::rand(&mut rng);
            let ours = G1Point::generator().scalar_mul(&Scalar::from_inner(k));
            let theirs = (g1::Config::GENERATOR * k).into_affine();
            assert_eq!(ours.into_affine(), theirs);

            let ours = G2Point::generator().scalar_mul(&Scalar::from_inner(k));
            let theirs = (g2::Config::GENERATOR * k).into_affine();
            assert_eq!(ours.into_affine(), theirs);
        }
    }

    #[test]
    fn scalar_mul_edge_cases() {
        let g = G1Point::generator();
        assert!(g.scalar_mul(&Scalar::zero()).is_identity());
        assert_eq!(g.scalar_mul(&Scalar::one()), g);
        assert_eq!(g.scalar_mul(&-Scalar::one()), -g);
        assert!(G1Point::identity().scalar_mul(&Scalar::from_u64(5)).is_identity());
    }

    #[test]
    fn group_law() {
        let g = G2Point::generator();
        assert_eq!(g + g, g.double());
        assert_eq!(g.double(), g.scalar_mul(&Scalar::from_u64(2)));
        assert!((g + -g).is_identity());
        assert_eq!(g + G2Point::identity(), g);
        assert_eq!(g.double() - g, g);
    }

    #[test]
    fn bytes_roundtrip_generators() {
        let g1 = G1Point::generator().scalar_mul(&Scalar::from_u64(11));
        assert_eq!(G1Point::from_bytes(&g1.to_bytes()).unwrap(), g1);
        let g2 = G2Point::generator().scalar_mul(&Scalar::from_u64(13));
        assert_eq!(G2Point::from_bytes(&g2.to_bytes()).unwrap(), g2);
        assert!(G1Point::from_bytes(&[0u8; G1_BYTES]).unwrap().is_identity());
    }

    #[test]
    fn linear_combination_matches_scalar_mul() {
        let g = G1Point::generator();
        let h = g.scalar_mul(&Scalar::from_u64(9));
        let got = linear_combination(&[g, h], &[Scalar::from_u64(2), Scalar::from_u64(3)]).unwrap();
        assert_eq!(got, g.scalar_mul(&Scalar::from_u64(29)));
    }

    #[test]
    fn linear_combination_length_mismatch() {
        let err = linear_combination(&[G1Point::generator()], &[]).unwrap_err();
        assert_eq!(err, Error::InputLengthMismatch { expected: 1, actual: 0 });
    }
}
