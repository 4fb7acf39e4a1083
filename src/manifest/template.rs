//! Path template checks and host-side prefix joining.

use crate::error::ConfigurationError;
use once_cell::sync::Lazy;
use regex::Regex;

/// A `{name}` placeholder with no nested braces.
static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"\{([^{}]*)\}").expect("placeholder regex is valid")
});

/// Prepend `/` when the author left it out.
#[must_use]
pub fn normalize_template(template: &str) -> String {
    if template.starts_with('/') {
        template.to_string()
    } else {
        format!("/{template}")
    }
}

/// Check that a template is non-empty, every placeholder is balanced, and
/// each placeholder is a whole path segment (`/items/{id}`, not `/file.{ext}`).
///
/// # Errors
///
/// [`ConfigurationError::InvalidTemplate`] naming the first problem found.
pub fn validate_template(template: &str, handler: &str) -> Result<(), ConfigurationError> {
    let invalid = |reason: &'static str| ConfigurationError::InvalidTemplate {
        template: template.to_string(),
        handler: handler.to_string(),
        reason,
    };

    if template.is_empty() {
        return Err(invalid("template is empty"));
    }

    for captures in PLACEHOLDER.captures_iter(template) {
        if captures.get(1).map_or(true, |name| name.as_str().trim().is_empty()) {
            return Err(invalid("placeholder has no name"));
        }
    }

    let remainder = PLACEHOLDER.replace_all(template, "");
    if remainder.contains('{') || remainder.contains('}') {
        return Err(invalid("unbalanced or nested placeholder braces"));
    }

    // The matcher only binds parameters to complete segments.
    let partial = template.split('/').any(|segment| {
        segment.contains('{')
            && PLACEHOLDER
                .find(segment)
                .map_or(true, |m| m.as_str() != segment)
    });
    if partial {
        return Err(invalid("placeholder must fill a whole path segment"));
    }

    Ok(())
}

/// Join a controller prefix and a handler template the way the host does.
///
/// A trailing `/` on the prefix is dropped, a missing leading `/` is added,
/// and an empty template maps to the prefix itself (or `/`).
#[must_use]
pub fn combine(prefix: Option<&str>, template: &str) -> String {
    let prefix = prefix
        .map(|p| p.trim_end_matches('/'))
        .filter(|p| !p.is_empty())
        .map(normalize_template)
        .unwrap_or_default();

    match (prefix.is_empty(), template.is_empty()) {
        (true, true) => "/".to_string(),
        (false, true) => prefix,
        (_, false) => {
            let mut joined = prefix;
            joined.push_str(&normalize_template(template));
            joined
        }
    }
}
