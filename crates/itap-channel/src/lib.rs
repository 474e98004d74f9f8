// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// iTap — Named method channels between the native host and the embedded UI.
//
// The embedding framework owns transport and delivery; this crate supplies
// the channel registry and the handlers bound to it.

pub mod channel;
pub mod gate;

pub use channel::{MethodCall, MethodCallHandler, MethodChannelRegistry, MethodResult};
pub use gate::{REQUIRE_LOCATION_METHOD, RequireLocationHandler};
