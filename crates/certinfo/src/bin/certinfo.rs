// SPDX-FileCopyrightText: 2025-2026 TII (SSRC) and the Ghaf contributors
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;
use std::process::ExitCode;

use certinfo::config::CertFileConfig;
use certinfo::status::Status;
use clap::Parser;
use tracing::debug;

#[derive(Debug, Parser)]
#[command(name = "certinfo")]
#[command(version, about = "Show serial, issuer, subject and validity of a PEM certificate", long_about = None)]
struct Cli {
    /// PEM encoded certificate file, `CERTINFO_FILE` when omitted
    cert: Option<PathBuf>,

    /// Print the certificate record as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Print only the numeric status and its message
    #[arg(long, default_value_t = false, conflicts_with = "json")]
    status: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    certinfo::trace_init()?;
    let cli = Cli::parse();
    debug!("CLI is {cli:#?}");

    let config = cli
        .cert
        .map_or_else(CertFileConfig::from_env, CertFileConfig::with_cert_file);
    let (status, info) = config.query_status();

    if cli.status {
        println!("{} {}", status.code(), status);
    } else if status != Status::Success {
        eprintln!("{status}");
    } else if cli.json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("{info}");
    }

    Ok(ExitCode::from(u8::try_from(status.code())?))
}
