//! # Overlap Validation Module
//!
//! Detects route patterns that are registered more than once.
//!
//! Version ranges declared on unrelated handlers can still collide on the
//! same literal pattern: a handler serving `/a` for versions 1 to 3 and
//! another serving `/a` for version 3 both produce `/v3/a`. A request for
//! that path would be dispatched to whichever handler the router happens to
//! prefer, so the check runs once over the whole table, after every
//! handler is registered, and start-up stops at the first duplicate.
//!
//! Patterns are compared as exact strings. `/v1/{id}` and `/v1/{name}` are
//! different strings and pass, even though they match the same requests.
//!
//! The host registers its error page under a reserved path several times on
//! purpose. That path is exempt.
//!
//! ## Usage
//!
//! ```rust
//! use dynamic_version_url::overlap::OverlapValidator;
//!
//! let validator = OverlapValidator::default();
//! let table = ["/v1/a", "/v2/a", "/v3/a", "/v3/a"];
//!
//! let err = validator.validate(table).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "Ambiguous version mapping found with the following URL: /v3/a"
//! );
//! ```

use crate::error::OverlapError;
use crate::runtime_config::DEFAULT_ERROR_PATH;
use std::collections::HashSet;
use tracing::{debug, error};


/// Whole-table duplicate pattern check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlapValidator {
    error_path: String,
}

impl OverlapValidator {
    /// Create a validator that exempts `error_path`.
    #[must_use]
    pub fn new(error_path: impl Into<String>) -> Self {
        Self {
            error_path: error_path.into(),
        }
    }

    #[must_use]
    pub fn error_path(&self) -> &str {
        &self.error_path
    }

    /// Scan every final pattern in table order.
    ///
    /// # Errors
    ///
    /// Returns [`OverlapError`] naming the first pattern seen twice. Scanning
    /// stops there; later duplicates are not collected.
    pub fn validate<I, S>(&self, patterns: I) -> Result<(), OverlapError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen: HashSet<String> = HashSet::new();

        for pattern in patterns {
            let pattern = pattern.as_ref();
            if pattern == self.error_path {
                continue;
            }
            if !seen.insert(pattern.to_string()) {
                error!(pattern = %pattern, "Ambiguous version mapping");
                return Err(OverlapError {
                    pattern: pattern.to_string(),
                });
            }
        }

        debug!(unique_patterns = seen.len(), "Route table has no overlapping patterns");
        Ok(())
    }
}

impl Default for OverlapValidator {
    fn default() -> Self {
        Self::new(DEFAULT_ERROR_PATH)
    }
}

/// Validate with the default error-path exemption.
///
/// # Errors
///
/// See [`OverlapValidator::validate`].
pub fn validate<I, S>(patterns: I) -> Result<(), OverlapError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    OverlapValidator::default().validate(patterns)
}
