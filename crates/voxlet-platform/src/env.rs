//! Environment variable abstraction.
//!
//! Settings overrides are read through [`Environment`]. The native
//! implementation reads the process environment; [`MemoryEnvironment`] is a
//! fixed map used by the wasm build (populated from compile-time values) and
//! by tests.

use std::collections::HashMap;

/// Read-only access to environment-style key/value configuration.
pub trait Environment {
    /// Get the value of a variable, or `None` if it is not set.
    fn get_var(&self, name: &str) -> Option<String>;
}

/// Process environment via [`std::env`].
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeEnvironment;

impl Environment for NativeEnvironment {
    fn get_var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Fixed in-memory variable map.
#[derive(Debug, Default, Clone)]
pub struct MemoryEnvironment {
    vars: HashMap<String, String>,
}

impl MemoryEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion.
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    /// Insert `value` under `name` only when present. Convenient for
    /// `option_env!` values.
    pub fn with_optional(self, name: &str, value: Option<&str>) -> Self {
        match value {
            Some(v) => self.with_var(name, v),
            None => self,
        }
    }
}

impl Environment for MemoryEnvironment {
    fn get_var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}
