// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Method-channel plumbing: call/result types and the named-channel registry.
//
// Mirrors the host framework's method-channel contract: a call carries a
// method name plus an optional argument payload, and the handler answers
// with exactly one of success, not-implemented, or error. Not-implemented
// is an in-band sentinel so the caller can tell "operation unknown" apart
// from any legitimate result value.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use itap_core::error::{ItapError, Result};

/// A single request from the embedded UI layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodCall {
    /// Method name, matched exactly by handlers.
    pub method: String,
    /// Argument payload; `Value::Null` when the method takes none.
    #[serde(default)]
    pub arguments: Value,
}

impl MethodCall {
    /// A call with no arguments.
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            arguments: Value::Null,
        }
    }

    /// A call carrying an argument payload.
    pub fn with_arguments(method: impl Into<String>, arguments: Value) -> Self {
        Self {
            method: method.into(),
            arguments,
        }
    }
}

/// The handler's answer to a [`MethodCall`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MethodResult {
    /// The method succeeded with this value.
    Success(Value),
    /// The handler does not recognise the method name. Distinct from any
    /// success value — never conflated with `Success(Value::Bool(false))`.
    NotImplemented,
    /// The method is recognised but could not produce a value.
    Error { code: String, message: String },
}

impl MethodResult {
    /// The success payload, if this is a success.
    pub fn value(&self) -> Option<&Value> {
        match self {
            Self::Success(v) => Some(v),
            _ => None,
        }
    }
}

/// A handler bound to one named channel.
///
/// Invoked synchronously by the embedding framework's dispatch; concurrent
/// invocations are independent, so implementations must be `Send + Sync`
/// and side-effect-free.
pub trait MethodCallHandler: Send + Sync {
    fn on_method_call(&self, call: &MethodCall) -> MethodResult;
}

/// Named channel → handler map.
///
/// Registration happens once at startup; dispatch is read-only thereafter,
/// hence the read-mostly `RwLock`.
pub struct MethodChannelRegistry {
    channels: RwLock<HashMap<String, Arc<dyn MethodCallHandler>>>,
}

impl MethodChannelRegistry {
    pub fn new() -> Self {
        Self {
            channels: RwLock::new(HashMap::new()),
        }
    }

    /// Bind a handler to a channel name.
    ///
    /// Registering on an already-bound name replaces the previous handler,
    /// matching the host framework's `setMethodCallHandler` semantics.
    pub fn register(&self, channel: impl Into<String>, handler: Arc<dyn MethodCallHandler>) {
        let channel = channel.into();
        tracing::debug!(channel = %channel, "registering method channel handler");
        self.channels
            .write()
            .expect("channel registry lock poisoned")
            .insert(channel, handler);
    }

    /// Deliver a call to the handler bound to `channel`.
    ///
    /// An unregistered channel is a transport-level error, distinct from the
    /// in-band [`MethodResult::NotImplemented`] a handler returns for a
    /// method name it does not know.
    pub fn dispatch(&self, channel: &str, call: &MethodCall) -> Result<MethodResult> {
        let handler = {
            let channels = self
                .channels
                .read()
                .expect("channel registry lock poisoned");
            channels
                .get(channel)
                .cloned()
                .ok_or_else(|| ItapError::ChannelNotRegistered(channel.to_string()))?
        };

        tracing::debug!(channel = %channel, method = %call.method, "dispatching method call");
        Ok(handler.on_method_call(call))
    }
}

impl Default for MethodChannelRegistry {
    fn default() -> Self {
        Self::new()
    }
}
