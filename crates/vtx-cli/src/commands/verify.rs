use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use vtx_core::{Verdict, Verifier};
use vtx_sdk::prooffile;

use crate::output;

/// Outcome for one proof file.
#[derive(Debug, PartialEq, Eq)]
pub struct Report {
    pub path: PathBuf,
    pub accepted: bool,
    pub reason: Option<String>,
}

impl Report {
    fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "path": self.path.display().to_string(),
            "accepted": self.accepted,
            "reason": self.reason,
        })
    }
}

/// Load and verify one file. Unreadable or malformed files are reported as
/// rejections, never abort the run.
pub fn check(verifier: &Verifier, path: &Path) -> Report {
    let (accepted, reason) = match prooffile::load_proof(path) {
        Ok(file) => match verifier.verify_wire(&file.proof, &file.inputs) {
            Verdict::Accepted => (true, None),
            Verdict::Rejected(r) => (false, Some(r.to_string())),
        },
        Err(e) => (false, Some(e.to_string())),
    };
    log::info!(
        "{}: {}",
        path.display(),
        if accepted { "accepted" } else { "rejected" }
    );
    Report {
        path: path.to_path_buf(),
        accepted,
        reason,
    }
}

/// Returns whether every proof was accepted.
pub fn run(vk: Option<PathBuf>, proofs: &[PathBuf]) -> Result<bool> {
    let (_, key) = super::load_key(vk)?;
    let key_id = key.key_id_hex();
    let verifier = Verifier::new(Arc::new(key));

    let pb = output::progress(proofs.len());
    let mut reports = Vec::with_capacity(proofs.len());
    for path in proofs {
        pb.set_message(path.display().to_string());
        reports.push(check(&verifier, path));
        pb.inc(1);
    }
    pb.finish_and_clear();

    let accepted = reports.iter().filter(|r| r.accepted).count();
    if output::is_json() {
        output::json_output(serde_json::json!({
            "key_id": key_id,
            "accepted": accepted,
            "rejected": reports.len() - accepted,
            "results": reports.iter().map(Report::to_json).collect::<Vec<_>>(),
        }))?;
    } else {
        for r in &reports {
            match &r.reason {
                None => output::success(&format!("✓ {}", r.path.display())),
                Some(reason) => output::error_msg(&format!("✗ {}: {reason}", r.path.display())),
            }
        }
        output::label(
            "summary",
            &format!("{accepted}/{} accepted (key {})", reports.len(), &key_id[..16]).bold().to_string(),
        );
    }
    Ok(accepted == reports.len())
}
