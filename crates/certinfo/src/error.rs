// SPDX-FileCopyrightText: 2025-2026 TII (SSRC) and the Ghaf contributors
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use thiserror::Error;
use x509_parser::error::{PEMError, X509Error};
use x509_parser::nom;

use crate::status::Status;

#[derive(Error, Debug)]
pub enum CertInfoError {
    #[error("certificate file path is not set")]
    NotConfigured,

    #[error("certificate file {} does not exist", .0.display())]
    NotFound(PathBuf),

    #[error("reading {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("PEM decode: {0}")]
    PemDecode(#[source] nom::Err<PEMError>),

    #[error("X.509 parse: {0}")]
    X509Parse(#[source] nom::Err<X509Error>),
}

impl CertInfoError {
    #[must_use]
    pub fn status(&self) -> Status {
        match self {
            Self::NotConfigured => Status::PathNotSet,
            Self::NotFound(_) => Status::FileNotFound,
            Self::Read { .. } => Status::ReadFailed,
            Self::PemDecode(_) => Status::PemDecodeFailed,
            Self::X509Parse(_) => Status::X509ParseFailed,
        }
    }
}
