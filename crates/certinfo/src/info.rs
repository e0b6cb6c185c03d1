// SPDX-FileCopyrightText: 2025-2026 TII (SSRC) and the Ghaf contributors
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use serde::{Deserialize, Serialize};
use time::format_description::FormatItem;
use time::macros::format_description;
use time::UtcOffset;
use x509_parser::certificate::X509Certificate;
use x509_parser::der_parser::oid::Oid;
use x509_parser::objects::{oid2sn, oid_registry};
use x509_parser::time::ASN1Time;

const TIMESTAMP_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second] +0000 UTC");

/// Selected certificate fields, rendered as strings.
///
/// The default value is the empty record returned alongside every failure status.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CertificateInfo {
    pub serial_number: String,
    pub issuer: String,
    pub subject: String,
    pub not_before: String,
    pub not_after: String,
    pub signature_algorithm: String,
}

impl CertificateInfo {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl From<&X509Certificate<'_>> for CertificateInfo {
    fn from(cert: &X509Certificate<'_>) -> Self {
        let validity = cert.validity();
        Self {
            serial_number: cert.tbs_certificate.serial.to_string(),
            issuer: cert.issuer().to_string(),
            subject: cert.subject().to_string(),
            not_before: format_time(&validity.not_before),
            not_after: format_time(&validity.not_after),
            signature_algorithm: algorithm_name(&cert.signature_algorithm.algorithm),
        }
    }
}

impl fmt::Display for CertificateInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Serial Number:       {}", self.serial_number)?;
        writeln!(f, "Issuer:              {}", self.issuer)?;
        writeln!(f, "Subject:             {}", self.subject)?;
        writeln!(f, "Not Before:          {}", self.not_before)?;
        writeln!(f, "Not After:           {}", self.not_after)?;
        write!(f, "Signature Algorithm: {}", self.signature_algorithm)
    }
}

// ASN1Time's own rendering is the fallback, formatting only fails for years
// outside the four digit range
fn format_time(t: &ASN1Time) -> String {
    t.to_datetime()
        .to_offset(UtcOffset::UTC)
        .format(TIMESTAMP_FORMAT)
        .unwrap_or_else(|_| t.to_string())
}

fn algorithm_name(oid: &Oid<'_>) -> String {
    oid2sn(oid, oid_registry()).map_or_else(|_| oid.to_id_string(), str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert!(CertificateInfo::default().is_empty());
        let info = CertificateInfo {
            serial_number: "1".into(),
            ..CertificateInfo::default()
        };
        assert!(!info.is_empty());
    }

    #[test]
    fn test_format_time() -> anyhow::Result<()> {
        let t = ASN1Time::from_timestamp(1_629_763_200)?;
        assert_eq!(format_time(&t), "2021-08-24 00:00:00 +0000 UTC");
        Ok(())
    }

    #[test]
    fn test_json_field_names() -> anyhow::Result<()> {
        let info = CertificateInfo {
            serial_number: "123456".into(),
            signature_algorithm: "ecdsa-with-SHA256".into(),
            ..CertificateInfo::default()
        };
        let json = serde_json::to_value(&info)?;
        assert_eq!(json["SerialNumber"], "123456");
        assert_eq!(json["SignatureAlgorithm"], "ecdsa-with-SHA256");
        assert_eq!(json["NotAfter"], "");
        let back: CertificateInfo = serde_json::from_value(json)?;
        assert_eq!(back, info);
        Ok(())
    }

    #[test]
    fn test_unknown_algorithm_falls_back_to_oid() {
        let oid = Oid::from(&[1, 3, 6, 1, 4, 1, 99999, 1]).unwrap();
        assert_eq!(algorithm_name(&oid), "1.3.6.1.4.1.99999.1");
    }
}
