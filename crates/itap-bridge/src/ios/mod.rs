// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// iOS platform bridge via objc2.
//
// Requires compilation with the iOS SDK (Xcode). The OS version comes from
// `NSProcessInfo.processInfo.operatingSystemVersion`, a Foundation-only read
// that is safe from any thread — no UIKit, no main-thread requirement.
//
// This module is cfg-gated to `target_os = "ios"` and will not compile on
// other platforms.

#![cfg(target_os = "ios")]

use objc2_foundation::NSProcessInfo;

use itap_core::error::Result;
use itap_core::types::OsVersion;

use crate::traits::*;

/// iOS implementation of the iTap platform bridge.
///
/// Zero-sized; all state lives in Foundation's process-info singleton.
pub struct IosBridge;

impl IosBridge {
    pub fn new() -> Self {
        Self
    }
}

impl Default for IosBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformBridge for IosBridge {
    fn platform_name(&self) -> &str {
        "iOS"
    }
}

impl NativeOsVersion for IosBridge {
    /// Read `NSProcessInfo.operatingSystemVersion`.
    ///
    /// Available since iOS 8; the struct fields are `NSInteger` and are
    /// never negative for a shipped OS release.
    fn os_version(&self) -> Result<OsVersion> {
        let info = NSProcessInfo::processInfo();
        let v = info.operatingSystemVersion();

        tracing::debug!(
            major = v.majorVersion,
            minor = v.minorVersion,
            patch = v.patchVersion,
            "iOS: read operatingSystemVersion"
        );

        Ok(OsVersion::Ios {
            major: u64::try_from(v.majorVersion).unwrap_or(0),
            minor: u64::try_from(v.minorVersion).unwrap_or(0),
            patch: u64::try_from(v.patchVersion).unwrap_or(0),
        })
    }
}
