// SPDX-FileCopyrightText: 2025-2026 TII (SSRC) and the Ghaf contributors
// SPDX-License-Identifier: Apache-2.0

#![allow(dead_code)]

use rcgen::{Certificate, CertificateParams, DistinguishedName, DnType, SerialNumber, date_time_ymd};

pub const NOT_BEFORE: &str = "2024-01-01 00:00:00 +0000 UTC";
pub const NOT_AFTER: &str = "2034-01-01 00:00:00 +0000 UTC";

/// Self-signed ECDSA P-256 certificate with the given big-endian serial.
pub fn self_signed_pem(serial: &[u8], common_name: &str) -> anyhow::Result<String> {
    let mut params = CertificateParams::new(vec!["localhost".to_string()]);
    params.serial_number = Some(SerialNumber::from_slice(serial));

    let mut dn = DistinguishedName::new();
    dn.push(DnType::CommonName, common_name);
    dn.push(DnType::OrganizationName, "Ghaf");
    params.distinguished_name = dn;

    params.not_before = date_time_ymd(2024, 1, 1);
    params.not_after = date_time_ymd(2034, 1, 1);

    let cert = Certificate::from_params(params)?;
    Ok(cert.serialize_pem()?)
}

// 123456 as big-endian bytes
pub const SERIAL_123456: &[u8] = &[0x01, 0xe2, 0x40];
