// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// iTap — Native host entry point.
//
// Initialises logging, builds the platform bridge, registers the capability
// query handler on its channel, and answers the query once. On a real device
// the embedding framework drives the dispatch; this binary stands in for
// that loop so the exchange can be exercised end to end.

use std::sync::Arc;

use itap_bridge::traits::PlatformBridge;
use itap_channel::{MethodCall, MethodChannelRegistry, MethodResult, RequireLocationHandler};
use itap_core::error::{ItapError, Result};
use itap_core::AppConfig;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("iTap host starting");

    if let Err(e) = run() {
        tracing::error!(error = %e, "iTap host failed");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = AppConfig::default();
    let channel = config.require_location_channel();

    let bridge: Arc<dyn PlatformBridge> = Arc::from(itap_bridge::platform_bridge());
    tracing::info!(platform = bridge.platform_name(), "platform bridge ready");

    let registry = MethodChannelRegistry::new();
    registry.register(&channel, Arc::new(RequireLocationHandler::new(bridge)));

    let call = MethodCall::new(itap_channel::REQUIRE_LOCATION_METHOD);
    match registry.dispatch(&channel, &call)? {
        MethodResult::Success(value) => {
            tracing::info!(%channel, %value, "capability query answered");
        }
        MethodResult::NotImplemented => {
            // Unreachable with the handler registered above.
            tracing::warn!(%channel, "handler reported not implemented");
        }
        MethodResult::Error { code, message } => {
            tracing::warn!(%channel, code, message, "capability query failed");
            if config.fail_on_stub_bridge {
                return Err(ItapError::PlatformUnavailable);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Exercises the real platform bridge. On desktop CI the stub answers,
    // so the query surfaces a bridge error rather than a boolean.
    #[test]
    #[cfg(not(any(target_os = "ios", target_os = "android")))]
    fn desktop_host_wires_the_channel() {
        let config = AppConfig::default();
        let channel = config.require_location_channel();

        let bridge: Arc<dyn PlatformBridge> = Arc::from(itap_bridge::platform_bridge());
        let registry = MethodChannelRegistry::new();
        registry.register(&channel, Arc::new(RequireLocationHandler::new(bridge)));

        let result = registry
            .dispatch(
                &channel,
                &MethodCall::new(itap_channel::REQUIRE_LOCATION_METHOD),
            )
            .unwrap();
        assert!(matches!(result, MethodResult::Error { .. }));
    }

    #[test]
    #[cfg(not(any(target_os = "ios", target_os = "android")))]
    fn unknown_method_is_not_implemented_through_the_host_wiring() {
        let config = AppConfig::default();
        let channel = config.require_location_channel();

        let bridge: Arc<dyn PlatformBridge> = Arc::from(itap_bridge::platform_bridge());
        let registry = MethodChannelRegistry::new();
        registry.register(&channel, Arc::new(RequireLocationHandler::new(bridge)));

        let result = registry
            .dispatch(&channel, &MethodCall::new("foo"))
            .unwrap();
        assert_eq!(result, MethodResult::NotImplemented);
    }
}
