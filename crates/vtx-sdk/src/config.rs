// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Environment configuration.

use crate::error::{SdkError, SdkResult};
use std::path::PathBuf;

/// Environment variable naming the default verifying-key file.
pub const VK_PATH_ENV: &str = "VTX_VK_PATH";

/// Explicit path wins, then `VTX_VK_PATH`.
pub fn resolve_vk_path(explicit: Option<PathBuf>) -> SdkResult<PathBuf> {
    resolve_with(explicit, std::env::var(VK_PATH_ENV).ok())
}

fn resolve_with(explicit: Option<PathBuf>, env_value: Option<String>) -> SdkResult<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    match env_value.filter(|v| !v.trim().is_empty()) {
        Some(v) => Ok(PathBuf::from(v)),
        None => Err(SdkError::Config(format!(
            "no verifying key given; pass --vk or set {VK_PATH_ENV}"
        ))),
    }
}
