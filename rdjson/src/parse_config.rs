// SPDX-License-Identifier: Apache-2.0

/// Nesting limit used when no other is configured.
///
/// Matches the JSON_checker default of 20 levels counted from 0.
pub const DEFAULT_MAX_DEPTH: usize = 19;

/// Per-call parser settings. Immutable for the duration of one parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseConfig {
    /// Deepest container nesting level accepted; the root is level 0.
    pub max_depth: usize,
    /// When true a repeated object key overwrites the earlier value.
    pub allow_duplicate_keys: bool,
}

impl ParseConfig {
    pub const fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            allow_duplicate_keys: false,
        }
    }

    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub const fn with_duplicate_keys(mut self, allow: bool) -> Self {
        self.allow_duplicate_keys = allow;
        self
    }
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ParseConfig::default();
        assert_eq!(config.max_depth, 19);
        assert!(!config.allow_duplicate_keys);
    }

    #[test]
    fn test_builder() {
        let config = ParseConfig::new()
            .with_max_depth(3)
            .with_duplicate_keys(true);
        assert_eq!(
            config,
            ParseConfig {
                max_depth: 3,
                allow_duplicate_keys: true
            }
        );
    }
}
