// SPDX-FileCopyrightText: 2025-2026 TII (SSRC) and the Ghaf contributors
// SPDX-License-Identifier: Apache-2.0

use strum::{EnumIter, IntoStaticStr};

pub const UNKNOWN_ERROR: &str = "unknown error";

/// Outcome of a certificate query.
///
/// Numeric codes are a stable contract shared with callers that only see the
/// integer, so variants must never be renumbered.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Status {
    Success = 0,
    PathNotSet = 1,
    FileNotFound = 2,
    ReadFailed = 3,
    PemDecodeFailed = 4,
    X509ParseFailed = 5,
}

impl Status {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    #[must_use]
    pub fn from_code(code: i32) -> Option<Self> {
        #![allow(clippy::enum_glob_use)]
        use Status::*;
        match code {
            0 => Some(Success),
            1 => Some(PathNotSet),
            2 => Some(FileNotFound),
            3 => Some(ReadFailed),
            4 => Some(PemDecodeFailed),
            5 => Some(X509ParseFailed),
            _ => None,
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::PathNotSet => "certificate file path is not set",
            Self::FileNotFound => "certificate file does not exist",
            Self::ReadFailed => "failed to read certificate file",
            Self::PemDecodeFailed => "failed to decode PEM block",
            Self::X509ParseFailed => "failed to parse X.509 certificate",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Human readable message for a numeric status code.
///
/// Total over `i32`: codes outside the known range map to [`UNKNOWN_ERROR`].
#[must_use]
pub fn err_msg(code: i32) -> &'static str {
    Status::from_code(code).map_or(UNKNOWN_ERROR, Status::message)
}
