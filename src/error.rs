//! Error taxonomy for route-table construction.
//!
//! Every error here is a configuration-time failure: a mistake in the
//! application's own route declarations. None of them are retried or
//! recovered from. They surface from [`crate::builder::RouteTableBuilder`]
//! and abort start-up before the table is handed to the router.

use std::fmt;

/// Render a list the way diagnostics print declared values: `[1, 5, 9]`.
pub(crate) struct BracketList<'a, T>(pub &'a [T]);

impl<T: fmt::Display> fmt::Display for BracketList<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (idx, item) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("]")
    }
}

/// A handler declared version metadata that cannot be normalized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    /// The declaration carried no version bound at all.
    #[error("No versions specified on {handler} with path {}.", BracketList(.paths))]
    NoVersions {
        /// Declaration (annotation) name and handler identifier
        handler: String,
        /// Path templates declared alongside the versions
        paths: Vec<String>,
    },

    /// More than two bounds were declared.
    #[error(
        "Too many versions ({}) specified on {handler} with path {}.",
        BracketList(.versions),
        BracketList(.paths)
    )]
    TooManyVersions {
        /// The raw declaration, unmodified
        versions: Vec<u32>,
        handler: String,
        paths: Vec<String>,
    },

    /// A `[min, max]` pair was declared with `min > max`.
    #[error(
        "Reversed versions ({}) specified on {handler} with path {}; the oldest version must come first.",
        BracketList(.versions),
        BracketList(.paths)
    )]
    ReversedBounds {
        versions: Vec<u32>,
        handler: String,
        paths: Vec<String>,
    },

    /// A path template is empty or has unbalanced placeholder braces.
    #[error("Invalid path template '{template}' on {handler}: {reason}")]
    InvalidTemplate {
        template: String,
        handler: String,
        reason: &'static str,
    },
}

/// A base pattern computed by the host does not end with any declared template.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "Base pattern '{base}' of {handler} does not end with any declared path {}.",
    BracketList(.templates)
)]
pub struct SuffixMismatchError {
    pub handler: String,
    pub base: String,
    pub templates: Vec<String>,
}

/// Two registered patterns are textually identical.
///
/// The Display form is relied on by tooling and must not change.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Ambiguous version mapping found with the following URL: {pattern}")]
pub struct OverlapError {
    /// The first duplicate encountered in table order
    pub pattern: String,
}

/// Failure while turning declarations into a validated route table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    SuffixMismatch(#[from] SuffixMismatchError),

    #[error(transparent)]
    Overlap(#[from] OverlapError),

    /// A versioned handler expanded to no patterns and would vanish from the table.
    #[error("Handler {handler} declares versions {versions} but produced no versioned routes.")]
    EmptyVersionedRoutes { handler: String, versions: String },
}

/// Failure while reading or resolving a route manifest.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("Failed to read manifest file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse YAML manifest: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON manifest: {0}")]
    Json(#[from] serde_json::Error),

    /// A handler entry is structurally valid but semantically inconsistent.
    #[error("Invalid declaration at {location}: {message}")]
    Declaration { location: String, message: String },
}

/// Top-level error for callers that go from manifest to router in one call.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error(transparent)]
    Build(#[from] BuildError),
}

impl From<ConfigurationError> for Error {
    fn from(err: ConfigurationError) -> Self {
        Error::Build(err.into())
    }
}

impl From<OverlapError> for Error {
    fn from(err: OverlapError) -> Self {
        Error::Build(err.into())
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
