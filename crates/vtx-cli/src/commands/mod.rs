pub mod inspect;
pub mod verify;

use std::path::PathBuf;

use anyhow::Result;
use vtx_sdk::{config, keyfile, SdkError, VerifyingKey};

use crate::output;

/// Resolve `--vk` / `$VTX_VK_PATH` and load the key, with a hint on failure.
pub(crate) fn load_key(vk: Option<PathBuf>) -> Result<(PathBuf, VerifyingKey)> {
    let path = config::resolve_vk_path(vk).map_err(|e| {
        output::fail_with_hint(&e.to_string(), "vtx verify --vk vk.json proof.json")
    })?;
    match keyfile::load_vk(&path) {
        Ok(key) => Ok((path, key)),
        Err(e @ SdkError::Io { .. }) => Err(output::fail_with_hint(
            &e.to_string(),
            &format!("check the path or set {}", config::VK_PATH_ENV),
        )),
        Err(e) => Err(output::fail_with_hint(
            &format!("invalid verifying key {}: {e}", path.display()),
            "expected {\"alpha\", \"beta\", \"gamma\", \"delta\", \"gamma_abc\"} over BN254",
        )),
    }
}
