use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;
use vtx_sdk::keyfile::VerifyingKeyFile;

use crate::output;

pub fn run(vk: Option<PathBuf>) -> Result<()> {
    let (path, key) = super::load_key(vk)?;
    let file = VerifyingKeyFile::from(&key);

    if output::is_json() {
        output::json_output(serde_json::json!({
            "path": path.display().to_string(),
            "key_id": key.key_id_hex(),
            "public_inputs": key.num_public_inputs(),
            "key": file,
        }))?;
    } else {
        output::label("key", &path.display().to_string());
        output::label("status", &"valid".green().to_string());
        output::label("key_id", &key.key_id_hex());
        output::label("public inputs", &key.num_public_inputs().to_string());
        output::label("alpha", &file.alpha.join(", "));
        output::label("ic[0]", &file.gamma_abc[0].join(", "));
    }
    Ok(())
}
