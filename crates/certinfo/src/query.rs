// SPDX-FileCopyrightText: 2025-2026 TII (SSRC) and the Ghaf contributors
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, warn};
use x509_parser::parse_x509_certificate;
use x509_parser::error::PEMError;
use x509_parser::nom;
use x509_parser::pem::{Pem, parse_x509_pem};

use crate::config::CertFileConfig;
use crate::error::CertInfoError;
use crate::info::CertificateInfo;
use crate::status::Status;

/// Inspect the configured certificate file.
///
/// # Errors
///
/// Will return `Err` naming the first stage that failed: missing configuration,
/// missing file, read, PEM decode or X.509 parse
pub fn get_cert_info(config: &CertFileConfig) -> Result<CertificateInfo, CertInfoError> {
    let path = config.cert_file().ok_or(CertInfoError::NotConfigured)?;
    if !cert_exists(path) {
        debug!("Certificate file {} does not exist", path.display());
        return Err(CertInfoError::NotFound(path.to_path_buf()));
    }
    let data = read_certificate(path)?;
    inspect_pem(&data)
}

/// Status code flavour of [`get_cert_info`], failures come with an empty record.
#[must_use]
pub fn get_cert_info_status(config: &CertFileConfig) -> (Status, CertificateInfo) {
    match get_cert_info(config) {
        Ok(info) => (Status::Success, info),
        Err(e) => (e.status(), CertificateInfo::default()),
    }
}

/// Decode the first PEM block of `data` and project its certificate.
///
/// Any following blocks (rest of a chain) are ignored.
///
/// # Errors
///
/// Will return `Err` if there is no PEM block or its payload is not an X.509 certificate
pub fn inspect_pem(data: &[u8]) -> Result<CertificateInfo, CertInfoError> {
    let pem = decode_first_pem(data).map_err(|e| {
        warn!("Failed to decode certificate PEM: {e}");
        CertInfoError::PemDecode(e)
    })?;
    debug!("Decoded PEM block {} ({} bytes)", pem.label, pem.contents.len());
    let (_, cert) = parse_x509_certificate(&pem.contents).map_err(|e| {
        warn!("Failed to parse X.509 certificate: {e}");
        CertInfoError::X509Parse(e)
    })?;
    Ok(CertificateInfo::from(&cert))
}

const PEM_BEGIN: &[u8] = b"-----BEGIN ";

/// First armor block that decodes, malformed candidates are skipped.
///
/// Markers are located on raw bytes so that non UTF-8 content around the
/// armor does not stop the scan.
fn decode_first_pem(data: &[u8]) -> Result<Pem, nom::Err<PEMError>> {
    let mut first_err = None;
    let starts = data
        .windows(PEM_BEGIN.len())
        .enumerate()
        .filter_map(|(i, w)| (w == PEM_BEGIN).then_some(i));
    for start in starts {
        match parse_x509_pem(&data[start..]) {
            Ok((_, pem)) => return Ok(pem),
            Err(e) => {
                debug!("Skipping malformed PEM block at offset {start}: {e}");
                first_err.get_or_insert(e);
            }
        }
    }
    Err(first_err.unwrap_or(nom::Err::Error(PEMError::MissingHeader)))
}

// Only a definite "not found" counts as missing, other metadata errors are
// left for the reader to report
fn cert_exists(path: &Path) -> bool {
    !matches!(fs::metadata(path), Err(e) if e.kind() == ErrorKind::NotFound)
}

fn read_certificate(path: &Path) -> Result<Vec<u8>, CertInfoError> {
    fs::read(path).map_err(|source| {
        warn!("Failed to read certificate file {}: {source}", path.display());
        CertInfoError::Read {
            path: path.to_path_buf(),
            source,
        }
    })
}
