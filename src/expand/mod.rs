//! # Path Expansion Module
//!
//! Turns one handler's version range into concrete route patterns.
//!
//! ## Overview
//!
//! The host router resolves every handler to a set of base patterns before
//! versioning runs, e.g. a controller prefix `/api` and a declared template
//! `/a` give the base pattern `/api/a`. For each version in the handler's
//! range the expander replaces the trailing template of every base pattern
//! with `/{prefix}{version}{template}`:
//!
//! ```text
//! base /api/a, template /a, prefix v, versions [2, 4]
//!   -> /api/v2/a, /api/v3/a, /api/v4/a
//! ```
//!
//! Everything in front of the template (controller and application prefixes,
//! path variables) is preserved untouched.
//!
//! ## Ordering
//!
//! Output is version-major, then template in declaration order, then base
//! pattern in sorted order. Identical inputs always produce identical output.
//! Collisions are left in place; [`crate::overlap`] reports them globally.
//!
//! ## Suffix matching
//!
//! The template is matched literally against the end of the base pattern,
//! so placeholders such as `{id}` are compared as plain text and copied into
//! the output unchanged. A pair whose base does not end with the template is
//! skipped. With path aliases (`[/a, /b]`) this is the normal case for half of
//! the pairs; [`unmatched_bases`] reports bases that no template matched.
//!
//! ## Example
//!
//! ```rust
//! use dynamic_version_url::expand::PathExpander;
//! use dynamic_version_url::version::VersionSpec;
//! use std::collections::BTreeSet;
//!
//! let expander = PathExpander::new("v");
//! let bases = BTreeSet::from(["/pathVariable/{pv}".to_string()]);
//! let templates = vec!["/pathVariable/{pv}".to_string()];
//!
//! let patterns = expander.expand(&bases, VersionSpec::single(2), &templates);
//! assert_eq!(patterns, vec!["/v2/pathVariable/{pv}"]);
//! ```

use crate::version::VersionSpec;
use std::collections::BTreeSet;
use tracing::debug;


/// Inserts a version segment ahead of each handler template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathExpander {
    prefix: String,
}

impl PathExpander {
    /// Create an expander that writes `/{prefix}{version}` segments.
    ///
    /// The prefix is an opaque literal; an empty prefix gives `/3/a`.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Expand a handler's base patterns over its version range.
    ///
    /// # Arguments
    ///
    /// * `base_patterns` - Patterns the host resolved for the handler
    /// * `spec` - Version range; a reversed range yields nothing
    /// * `templates` - Declared path templates in declaration order
    ///
    /// # Returns
    ///
    /// Versioned patterns ordered by version, then template, then base.
    /// Pairs whose base does not end with the template are left out.
    #[must_use]
    pub fn expand(
        &self,
        base_patterns: &BTreeSet<String>,
        spec: VersionSpec,
        templates: &[String],
    ) -> Vec<String> {
        let mut patterns = Vec::with_capacity(spec.len() * templates.len() * base_patterns.len());

        for version in spec.versions() {
            for template in templates {
                let replacement = self.segment_for(version, template);
                for base in base_patterns {
                    match replace_suffix(base, template, &replacement) {
                        Some(versioned) => patterns.push(versioned),
                        None => debug!(
                            base = %base,
                            template = %template,
                            version,
                            "Base pattern does not end with template, pair skipped"
                        ),
                    }
                }
            }
        }

        patterns
    }

    /// `/{prefix}{version}{template}`
    fn segment_for(&self, version: u32, template: &str) -> String {
        let mut segment = String::with_capacity(1 + self.prefix.len() + 10 + template.len());
        segment.push('/');
        segment.push_str(&self.prefix);
        segment.push_str(&version.to_string());
        segment.push_str(template);
        segment
    }
}

impl Default for PathExpander {
    fn default() -> Self {
        Self::new(crate::runtime_config::DEFAULT_VERSION_PREFIX)
    }
}

/// Replace the trailing `template` of `base` with `replacement`.
///
/// Only the end of `base` is considered; an earlier occurrence of the same
/// text is never rewritten. Returns `None` when `base` does not end with
/// `template`.
#[must_use]
pub fn replace_suffix(base: &str, template: &str, replacement: &str) -> Option<String> {
    base.strip_suffix(template).map(|head| {
        let mut versioned = String::with_capacity(head.len() + replacement.len());
        versioned.push_str(head);
        versioned.push_str(replacement);
        versioned
    })
}

/// Base patterns that end with none of the templates.
///
/// These would silently disappear during expansion, so the builder turns
/// them into an error for versioned handlers.
#[must_use]
pub fn unmatched_bases<'a>(base_patterns: &'a BTreeSet<String>, templates: &[String]) -> Vec<&'a str> {
    base_patterns
        .iter()
        .filter(|base| !templates.iter().any(|t| base.ends_with(t.as_str())))
        .map(String::as_str)
        .collect()
}
