// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Android platform bridge via JNI.
//
// Requires the Android NDK and targets `aarch64-linux-android` or
// `armv7-linux-androideabi`. The OS version is read from the static field
// `android.os.Build$VERSION.SDK_INT` through JNI calls into the ART runtime.

#![cfg(target_os = "android")]

use jni::JNIEnv;

use itap_core::error::{ItapError, Result};
use itap_core::types::OsVersion;

use crate::traits::*;

/// Obtain a [`JNIEnv`] handle from the global Android context.
///
/// Calls `ndk_context::android_context()` to retrieve the `JavaVM*` pointer
/// set by `android_main` or `ANativeActivity_onCreate`, then attaches the
/// current thread if it is not already attached.
fn jni_env() -> Result<JNIEnv<'static>> {
    let ctx = ndk_context::android_context();
    // SAFETY: `ctx.vm()` returns the `JavaVM*` set by the NDK glue code.
    // The pointer is guaranteed valid for the lifetime of the process.
    let vm = unsafe { jni::JavaVM::from_raw(ctx.vm().cast()) }
        .map_err(|e| ItapError::Bridge(format!("failed to obtain JavaVM: {e}")))?;
    vm.attach_current_thread()
        .map_err(|e| ItapError::Bridge(format!("failed to attach JNI thread: {e}")))
}

/// Convenience: map any `jni::errors::Error` into `ItapError::Bridge`.
fn jni_err(context: &str, e: jni::errors::Error) -> ItapError {
    ItapError::Bridge(format!("{context}: {e}"))
}

/// Android implementation of the iTap platform bridge.
///
/// All methods go through JNI to call the Android SDK. The struct is
/// zero-sized; all state lives on the Java side.
pub struct AndroidBridge;

impl AndroidBridge {
    /// Create a new Android bridge.
    ///
    /// This does **not** touch JNI — the first JNI call happens lazily when
    /// a trait method is invoked.
    pub fn new() -> Self {
        Self
    }
}

impl Default for AndroidBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformBridge for AndroidBridge {
    fn platform_name(&self) -> &str {
        "Android"
    }
}

impl NativeOsVersion for AndroidBridge {
    /// Read `android.os.Build$VERSION.SDK_INT`.
    ///
    /// SDK_INT is a plain static int set by the framework at boot; reading
    /// it cannot trigger a Java exception beyond class-lookup failure.
    fn os_version(&self) -> Result<OsVersion> {
        let mut env = jni_env()?;

        let version_class = env
            .find_class("android/os/Build$VERSION")
            .map_err(|e| jni_err("find_class(Build$VERSION)", e))?;

        let sdk_int = env
            .get_static_field(version_class, "SDK_INT", "I")
            .map_err(|e| jni_err("get_static_field(SDK_INT)", e))?
            .i()
            .map_err(|e| jni_err("SDK_INT->i", e))?;

        tracing::debug!(sdk_int, "Android: read Build.VERSION.SDK_INT");

        // SDK_INT has been positive since API 1; a bogus read maps to 0.
        Ok(OsVersion::AndroidApi(u32::try_from(sdk_int).unwrap_or(0)))
    }
}
