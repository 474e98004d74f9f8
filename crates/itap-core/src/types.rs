// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the iTap native host.

use serde::{Deserialize, Serialize};

/// Minimum Android API level for the runtime location feature.
///
/// API 26 is Android 8.0 "Oreo", where background location limits and the
/// permission flow the app relies on first behave correctly.
pub const ANDROID_LOCATION_MIN_API: u32 = 26;

/// Minimum iOS major version for the runtime location feature.
///
/// iOS 13 introduced the "Allow Once" / provisional "Always" authorisation
/// flow the app is written against.
pub const IOS_LOCATION_MIN_MAJOR: u64 = 13;

/// Which native host the process is running on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    Android,
    Ios,
    /// Desktop / CI build with no native mobile SDK available.
    Desktop,
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Android => write!(f, "Android"),
            Self::Ios => write!(f, "iOS"),
            Self::Desktop => write!(f, "Desktop"),
        }
    }
}

/// Operating system version as reported by the native host.
///
/// Read fresh from the OS on every capability query — never cached, never
/// persisted. Android identifies releases by a single integer API level;
/// iOS by a major.minor.patch triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OsVersion {
    /// Android `Build.VERSION.SDK_INT`.
    AndroidApi(u32),
    /// iOS `NSOperatingSystemVersion`.
    Ios { major: u64, minor: u64, patch: u64 },
}

impl OsVersion {
    /// Which platform this version belongs to.
    pub fn platform(&self) -> Platform {
        match self {
            Self::AndroidApi(_) => Platform::Android,
            Self::Ios { .. } => Platform::Ios,
        }
    }

    /// Whether this OS version meets the minimum for the location feature.
    ///
    /// The gate decides whether the app requests location permissions at
    /// all, so it must track the thresholds exactly: Android API 26+,
    /// iOS 13+.
    pub fn meets_location_baseline(&self) -> bool {
        match self {
            Self::AndroidApi(level) => *level >= ANDROID_LOCATION_MIN_API,
            Self::Ios { major, .. } => *major >= IOS_LOCATION_MIN_MAJOR,
        }
    }
}

impl std::fmt::Display for OsVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AndroidApi(level) => write!(f, "Android API {level}"),
            Self::Ios {
                major,
                minor,
                patch,
            } => write!(f, "iOS {major}.{minor}.{patch}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn android_at_threshold_passes() {
        assert!(OsVersion::AndroidApi(26).meets_location_baseline());
    }

    #[test]
    fn android_below_threshold_fails() {
        assert!(!OsVersion::AndroidApi(25).meets_location_baseline());
    }

    #[test]
    fn ios_at_threshold_passes() {
        let v = OsVersion::Ios {
            major: 13,
            minor: 0,
            patch: 0,
        };
        assert!(v.meets_location_baseline());
    }

    #[test]
    fn ios_below_threshold_fails() {
        let v = OsVersion::Ios {
            major: 12,
            minor: 4,
            patch: 9,
        };
        assert!(!v.meets_location_baseline());
    }

    #[test]
    fn ios_minor_and_patch_do_not_matter() {
        // 12.9.9 is still below 13; 13.0.0 is enough.
        let below = OsVersion::Ios {
            major: 12,
            minor: 9,
            patch: 9,
        };
        let at = OsVersion::Ios {
            major: 13,
            minor: 0,
            patch: 0,
        };
        assert!(!below.meets_location_baseline());
        assert!(at.meets_location_baseline());
    }

    #[test]
    fn gate_is_idempotent() {
        let v = OsVersion::AndroidApi(28);
        let first = v.meets_location_baseline();
        for _ in 0..10 {
            assert_eq!(v.meets_location_baseline(), first);
        }
    }

    #[test]
    fn platform_matches_variant() {
        assert_eq!(OsVersion::AndroidApi(30).platform(), Platform::Android);
        let v = OsVersion::Ios {
            major: 17,
            minor: 2,
            patch: 1,
        };
        assert_eq!(v.platform(), Platform::Ios);
    }
}
