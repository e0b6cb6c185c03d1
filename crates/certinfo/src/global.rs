// SPDX-FileCopyrightText: 2025-2026 TII (SSRC) and the Ghaf contributors
// SPDX-License-Identifier: Apache-2.0

//! Process-wide certificate path with integer status codes.
//!
//! For callers that configure the path once and query it from anywhere.
//! Code that can own a [`CertFileConfig`] should use that instead.

use std::sync::{PoisonError, RwLock};

use crate::config::CertFileConfig;
use crate::info::CertificateInfo;
use crate::query;

static CERT_FILE: RwLock<String> = RwLock::new(String::new());

/// Replace the process-wide certificate path.
pub fn set_cert_file(path: impl Into<String>) {
    let path = path.into();
    *CERT_FILE.write().unwrap_or_else(PoisonError::into_inner) = path;
}

#[must_use]
pub fn cert_file() -> String {
    CERT_FILE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Query the process-wide certificate path.
///
/// Returns status `0` with the record, or a non-zero status (see
/// [`crate::status::err_msg`]) with an empty record.
#[must_use]
pub fn get_cert_info() -> (i32, CertificateInfo) {
    let config = CertFileConfig::with_cert_file(cert_file());
    let (status, info) = query::get_cert_info_status(&config);
    (status.code(), info)
}
