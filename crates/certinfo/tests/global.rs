// SPDX-FileCopyrightText: 2025-2026 TII (SSRC) and the Ghaf contributors
// SPDX-License-Identifier: Apache-2.0

// Single test: the configured path is process-wide state

mod common;

use std::fs;

use certinfo::{err_msg, get_cert_info, set_cert_file};
use common::{SERIAL_123456, self_signed_pem};

#[test]
fn test_process_wide_path() -> anyhow::Result<()> {
    let (status, info) = get_cert_info();
    assert_eq!(status, 1);
    assert!(info.is_empty());
    assert_eq!(err_msg(status), "certificate file path is not set");

    set_cert_file("missing.pem");
    let (status, info) = get_cert_info();
    assert_eq!(status, 2);
    assert!(info.is_empty());

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("test.pem");
    fs::write(&path, self_signed_pem(SERIAL_123456, "global")?)?;

    set_cert_file(path.to_string_lossy());
    let (status, info) = get_cert_info();
    assert_eq!(status, 0);
    assert_eq!(info.serial_number, "123456");
    assert_eq!(get_cert_info(), (status, info));

    set_cert_file("");
    assert_eq!(get_cert_info().0, 1);
    Ok(())
}
