mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "vtx", about = "Groth16 proof verifier for BN254", version)]
struct Cli {
    /// Machine-readable JSON on stdout
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Verify one or more proof files against a verifying key
    Verify {
        /// Verifying key: JSON, or arkworks compressed `.bin` (defaults to $VTX_VK_PATH)
        #[arg(long)]
        vk: Option<PathBuf>,
        /// Proof files: {"proof": {...}, "inputs": [...]}
        #[arg(required = true)]
        proofs: Vec<PathBuf>,
    },
    /// Validate a verifying key and print its summary
    Inspect {
        /// Verifying key: JSON, or arkworks compressed `.bin` (defaults to $VTX_VK_PATH)
        #[arg(long)]
        vk: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();
    let cli = Cli::parse();
    output::set_json_mode(cli.json);

    let all_accepted = match cli.command {
        Cmd::Verify { vk, proofs } => commands::verify::run(vk, &proofs)?,
        Cmd::Inspect { vk } => {
            commands::inspect::run(vk)?;
            true
        }
    };
    Ok(if all_accepted {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
