// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Verifying-key JSON files.
//!
//! ```json
//! {
//!   "curve": "bn128",
//!   "alpha": ["0x..", "0x.."],
//!   "beta":  [["0x..", "0x.."], ["0x..", "0x.."]],
//!   "gamma": [["0x..", "0x.."], ["0x..", "0x.."]],
//!   "delta": [["0x..", "0x.."], ["0x..", "0x.."]],
//!   "gamma_abc": [["0x..", "0x.."], ...]
//! }
//! ```
//!
//! Points use the same encoding as the proof wire format. `ic` is accepted
//! in place of `gamma_abc`. Every point is validated when the file is
//! turned into a [`VerifyingKey`].
//!
//! A path ending in `.bin` is read as an arkworks compressed key instead.

use crate::error::{read_bytes, read_file, write_file, SdkError, SdkResult};
use crate::serialize::vk_from_ark_bytes;
use serde::{Deserialize, Serialize};
use std::path::Path;
use vtx_types::wire::{decode_g1, decode_g2, encode_g1, encode_g2, WireG1, WireG2};
use vtx_types::VerifyingKey;

const CURVE_NAMES: [&str; 3] = ["bn128", "bn254", "alt_bn128"];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyingKeyFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curve: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    pub alpha: WireG1,
    pub beta: WireG2,
    pub gamma: WireG2,
    pub delta: WireG2,
    #[serde(alias = "ic")]
    pub gamma_abc: Vec<WireG1>,
}

impl VerifyingKeyFile {
    /// Check the header fields and decode every point.
    pub fn to_key(&self) -> SdkResult<VerifyingKey> {
        if let Some(curve) = &self.curve {
            if !CURVE_NAMES.contains(&curve.to_ascii_lowercase().as_str()) {
                return Err(SdkError::Config(format!("unsupported curve {curve:?}")));
            }
        }
        if let Some(protocol) = &self.protocol {
            if !protocol.eq_ignore_ascii_case("groth16") {
                return Err(SdkError::Config(format!("unsupported protocol {protocol:?}")));
            }
        }
        let ic = self
            .gamma_abc
            .iter()
            .map(decode_g1)
            .collect::<Result<Vec<_>, _>>()
            .map_err(SdkError::Key)?;
        VerifyingKey::new(
            decode_g1(&self.alpha).map_err(SdkError::Key)?,
            decode_g2(&self.beta).map_err(SdkError::Key)?,
            decode_g2(&self.gamma).map_err(SdkError::Key)?,
            decode_g2(&self.delta).map_err(SdkError::Key)?,
            ic,
        )
        .map_err(SdkError::Key)
    }
}

impl From<&VerifyingKey> for VerifyingKeyFile {
    fn from(vk: &VerifyingKey) -> Self {
        Self {
            curve: Some("bn128".into()),
            protocol: Some("groth16".into()),
            alpha: encode_g1(&vk.alpha()),
            beta: encode_g2(&vk.beta()),
            gamma: encode_g2(&vk.gamma()),
            delta: encode_g2(&vk.delta()),
            gamma_abc: vk.ic().iter().map(encode_g1).collect(),
        }
    }
}

pub fn parse_vk(json: &str) -> SdkResult<VerifyingKey> {
    let file: VerifyingKeyFile = serde_json::from_str(json)?;
    file.to_key()
}

pub fn load_vk(path: &Path) -> SdkResult<VerifyingKey> {
    let vk = if path.extension().is_some_and(|ext| ext == "bin") {
        vk_from_ark_bytes(&read_bytes(path)?)?
    } else {
        parse_vk(&read_file(path)?)?
    };
    log::debug!(
        "loaded verifying key {} from {}",
        vk.key_id_hex(),
        path.display()
    );
    Ok(vk)
}

pub fn save_vk(path: &Path, vk: &VerifyingKey) -> SdkResult<()> {
    let json = serde_json::to_string_pretty(&VerifyingKeyFile::from(vk))?;
    write_file(path, json)
}
