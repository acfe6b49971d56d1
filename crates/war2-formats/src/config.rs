//! Configuration for archive and map readers

use serde::{Deserialize, Serialize};

/// Reader configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatsConfig {
    /// Enable memory-mapped I/O for archives
    pub enable_mmap: bool,

    /// Reject allow-flags that violate their reserved-bit invariant
    ///
    /// When disabled, offending masks are kept as-is and a warning is logged.
    pub strict_allow_flags: bool,
}

impl Default for FormatsConfig {
    fn default() -> Self {
        Self {
            enable_mmap: true,
            strict_allow_flags: true,
        }
    }
}

impl FormatsConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable memory-mapped archives
    #[must_use]
    pub const fn with_mmap(mut self, enable: bool) -> Self {
        self.enable_mmap = enable;
        self
    }

    /// Enable or disable strict allow-flag validation
    #[must_use]
    pub const fn with_strict_allow_flags(mut self, strict: bool) -> Self {
        self.strict_allow_flags = strict;
        self
    }
}
