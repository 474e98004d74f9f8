// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-agnostic trait definitions for native capabilities.
//
// The bridge's only duty today is reporting the host OS version; the trait
// split keeps room for further native reads without touching callers.

use itap_core::error::Result;
use itap_core::types::OsVersion;

/// Unified bridge that groups all native capabilities.
///
/// Platforms without a native SDK (desktop, CI) return
/// `ItapError::PlatformUnavailable` from the stub implementation.
pub trait PlatformBridge: NativeOsVersion + Send + Sync {
    /// Human-readable platform name (e.g. "iOS", "Android").
    fn platform_name(&self) -> &str;
}

/// Read the operating system version from the native host.
pub trait NativeOsVersion {
    /// Query the OS for its version identifier.
    ///
    /// A pure read of ambient OS metadata — no side effects, and the value
    /// never changes within a running process.
    fn os_version(&self) -> Result<OsVersion>;
}
