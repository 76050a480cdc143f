// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Error taxonomy shared by every decode and validation step.

use core::fmt;

/// Which source group a point was decoded for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Group {
    G1,
    G2,
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Group::G1 => f.write_str("G1"),
            Group::G2 => f.write_str("G2"),
        }
    }
}

/// Reason a coordinate pair was refused as a curve point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointFault {
    NotOnCurve,
    NotInSubgroup,
}

impl fmt::Display for PointFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointFault::NotOnCurve => f.write_str("not on curve"),
            PointFault::NotInSubgroup => f.write_str("not in prime-order subgroup"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("decode: {0}")]
    Decode(String),

    #[error("field element out of range")]
    OutOfRange,

    #[error("invalid {group} point: {fault}")]
    InvalidPoint { group: Group, fault: PointFault },

    #[error("expected {expected} public inputs, got {actual}")]
    InputLengthMismatch { expected: usize, actual: usize },

    #[error("zero has no multiplicative inverse")]
    NotInvertible,
}

pub type Result<T> = core::result::Result<T, Error>;
