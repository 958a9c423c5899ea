//! Environment variable loading.
//!
//! An empty value counts as unset everywhere in this module, so `PRJ_ID=`
//! behaves exactly like an absent `PRJ_ID`.

use std::env;
use std::ffi::{OsStr, OsString};

/// Read a variable as raw OS bytes. Empty values are treated as unset.
///
/// Used for path and id overrides, which must not be trimmed or re-encoded.
pub fn env_os_verbatim(key: &str) -> Option<OsString> {
    env::var_os(key).filter(|s| !s.is_empty())
}

/// Read a variable, trimming surrounding whitespace. Blank values are `None`.
pub fn env_optional(key: &str) -> Option<String> {
    env::var(key).ok().and_then(|s| {
        let s = s.trim().to_string();
        if s.is_empty() {
            None
        } else {
            Some(s)
        }
    })
}

/// Parse a boolean variable: 0/false/no/off are false, anything else set is true.
pub fn env_bool(key: &str, default: bool) -> bool {
    match env::var(key).ok().as_deref() {
        Some(s) => !matches!(
            s.trim().to_lowercase().as_str(),
            "0" | "false" | "no" | "off"
        ),
        None => default,
    }
}

// ─── Centralized env::set_var / remove_var ──────────────────────────────────
//
// Every write to the process environment goes through these two functions.
//
// SAFETY contract: callers must not run them concurrently with other threads
// reading the environment (call before spawning threads).

/// Set a single environment variable.
#[allow(unsafe_code, unused_unsafe)]
pub fn set_env_var<V: AsRef<OsStr>>(key: &str, value: V) {
    unsafe { env::set_var(key, value) };
}

/// Remove a single environment variable.
#[allow(unsafe_code, unused_unsafe)]
pub fn remove_env_var(key: &str) {
    unsafe { env::remove_var(key) };
}
