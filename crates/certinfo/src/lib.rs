// SPDX-FileCopyrightText: 2025-2026 TII (SSRC) and the Ghaf contributors
// SPDX-License-Identifier: Apache-2.0

use anyhow::Context;

pub mod config;
pub mod error;
pub mod global;
pub mod info;
pub mod query;
pub mod status;

pub use config::CertFileConfig;
pub use error::CertInfoError;
pub use global::{get_cert_info, set_cert_file};
pub use info::CertificateInfo;
pub use status::{Status, err_msg};

/// Init logging
///
/// # Errors
///
/// Will return `Err` if failed to initialize logging
pub fn trace_init() -> anyhow::Result<()> {
    use std::env;
    use tracing::Level;
    use tracing_subscriber::{EnvFilter, Layer, filter::LevelFilter, layer::SubscriberExt};

    let env_filter =
        EnvFilter::try_from_env("CERTINFO_LOG").unwrap_or_else(|_| EnvFilter::from("info"));
    let is_debug_log_level = env_filter
        .max_level_hint()
        .map_or_else(|| false, |level| level >= Level::DEBUG);

    let output = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(is_debug_log_level)
        .with_file(is_debug_log_level)
        .with_line_number(is_debug_log_level);

    let output = if is_debug_log_level {
        output.pretty().boxed()
    } else {
        output.boxed()
    };

    // journald only when started by systemd
    let journald = match env::var("INVOCATION_ID") {
        Err(_) => None,
        Ok(_) => tracing_journald::layer().ok(),
    };

    let subscriber = tracing_subscriber::registry()
        .with(journald.with_filter(LevelFilter::INFO))
        .with(output.with_filter(env_filter));

    tracing::subscriber::set_global_default(subscriber)
        .context("tracing shouldn't already have been set up")?;
    Ok(())
}
