// SPDX-FileCopyrightText: 2025-2026 TII (SSRC) and the Ghaf contributors
// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};

use crate::error::CertInfoError;
use crate::info::CertificateInfo;
use crate::query;
use crate::status::Status;

pub const CERT_FILE_ENV: &str = "CERTINFO_FILE";

/// Location of the certificate to inspect.
///
/// Nothing is validated when the path is set, every check happens at query time.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CertFileConfig {
    cert_file: Option<PathBuf>,
}

impl CertFileConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_cert_file(path: impl Into<PathBuf>) -> Self {
        Self {
            cert_file: Some(path.into()),
        }
    }

    /// Build from `CERTINFO_FILE`, unset when the variable is missing or not unicode.
    #[must_use]
    pub fn from_env() -> Self {
        std::env::var(CERT_FILE_ENV).map_or_else(|_| Self::new(), Self::with_cert_file)
    }

    pub fn set_cert_file(&mut self, path: impl Into<PathBuf>) {
        self.cert_file = Some(path.into());
    }

    /// Configured path, `None` when unset or empty.
    #[must_use]
    pub fn cert_file(&self) -> Option<&Path> {
        self.cert_file
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
    }

    /// # Errors
    ///
    /// Will return `Err` if no path is configured or any pipeline stage fails
    pub fn query(&self) -> Result<CertificateInfo, CertInfoError> {
        query::get_cert_info(self)
    }

    #[must_use]
    pub fn query_status(&self) -> (Status, CertificateInfo) {
        query::get_cert_info_status(self)
    }
}
