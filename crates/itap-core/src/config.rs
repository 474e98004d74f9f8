// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.

use serde::{Deserialize, Serialize};

/// Reverse-DNS namespace the original app registers its channels under.
pub const DEFAULT_CHANNEL_NAMESPACE: &str = "com.irs.itap";

/// Host-side application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Namespace prefixed to every channel name. Caller and handler must
    /// agree on the full name exactly, so this is configured in one place.
    pub channel_namespace: String,
    /// Whether the host binary exits with an error when only the desktop
    /// stub bridge is available (no native OS version to read).
    pub fail_on_stub_bridge: bool,
}

impl AppConfig {
    /// Full channel name for the location capability query.
    pub fn require_location_channel(&self) -> String {
        format!("{}/requireLocation", self.channel_namespace)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            channel_namespace: DEFAULT_CHANNEL_NAMESPACE.into(),
            fail_on_stub_bridge: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_namespace_yields_exact_channel_literal() {
        let config = AppConfig::default();
        assert_eq!(
            config.require_location_channel(),
            "com.irs.itap/requireLocation"
        );
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = AppConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.channel_namespace, config.channel_namespace);
        assert_eq!(back.fail_on_stub_bridge, config.fail_on_stub_bridge);
    }
}
