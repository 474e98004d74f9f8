// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The location capability gate, bound to its method channel.
//
// Answers the UI layer's single question: "does this OS version support the
// location feature?" The version is read fresh from the bridge on every
// call; the comparison itself lives on `OsVersion` in itap-core.

use std::sync::Arc;

use serde_json::Value;
use tracing::info;

use itap_bridge::traits::PlatformBridge;

use crate::channel::{MethodCall, MethodCallHandler, MethodResult};

/// Method name the UI layer sends; matched exactly.
pub const REQUIRE_LOCATION_METHOD: &str = "requireLocation";

/// Error code reported when the bridge cannot read an OS version.
///
/// Only reachable on the desktop stub — the mobile bridges' version read
/// cannot fail once the process is running.
pub const BRIDGE_UNAVAILABLE_CODE: &str = "bridge_unavailable";

/// Handler for the `requireLocation` capability query.
pub struct RequireLocationHandler {
    bridge: Arc<dyn PlatformBridge>,
}

impl RequireLocationHandler {
    pub fn new(bridge: Arc<dyn PlatformBridge>) -> Self {
        Self { bridge }
    }
}

impl MethodCallHandler for RequireLocationHandler {
    fn on_method_call(&self, call: &MethodCall) -> MethodResult {
        if call.method != REQUIRE_LOCATION_METHOD {
            return MethodResult::NotImplemented;
        }

        match self.bridge.os_version() {
            Ok(version) => {
                let supported = version.meets_location_baseline();
                info!(%version, supported, "location capability query");
                MethodResult::Success(Value::Bool(supported))
            }
            Err(e) => MethodResult::Error {
                code: BRIDGE_UNAVAILABLE_CODE.into(),
                message: e.to_string(),
            },
        }
    }
}
