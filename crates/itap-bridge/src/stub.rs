// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stub bridge for desktop/CI builds where native mobile APIs are unavailable.
//
// Every trait method returns `PlatformUnavailable` — real implementations live
// in the `ios` and `android` modules.

use itap_core::error::{ItapError, Result};
use itap_core::types::OsVersion;

use crate::traits::*;

/// No-op bridge returned on non-mobile platforms.
pub struct StubBridge;

impl PlatformBridge for StubBridge {
    fn platform_name(&self) -> &str {
        "Desktop (stub)"
    }
}

impl NativeOsVersion for StubBridge {
    fn os_version(&self) -> Result<OsVersion> {
        tracing::warn!("NativeOsVersion::os_version called on stub bridge");
        Err(ItapError::PlatformUnavailable)
    }
}
