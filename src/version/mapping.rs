use http::Method;
use std::collections::BTreeSet;
use std::fmt;

/// Verb-specific versioned mapping a handler can be declared with.
///
/// One variant per HTTP verb shortcut plus a generic form carrying its own
/// method. Everything a variant means is captured by [`VersionMapping::method`]
/// and [`VersionMapping::name`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionMapping {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    /// Generic mapping with an explicit method
    Request { method: Method },
}

impl VersionMapping {
    /// HTTP method the mapping registers under.
    #[must_use]
    pub fn method(&self) -> Method {
        match self {
            VersionMapping::Get => Method::GET,
            VersionMapping::Post => Method::POST,
            VersionMapping::Put => Method::PUT,
            VersionMapping::Patch => Method::PATCH,
            VersionMapping::Delete => Method::DELETE,
            VersionMapping::Request { method } => method.clone(),
        }
    }

    /// Declaration name as it appears in manifests and diagnostics.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            VersionMapping::Get => "get_version_mapping",
            VersionMapping::Post => "post_version_mapping",
            VersionMapping::Put => "put_version_mapping",
            VersionMapping::Patch => "patch_version_mapping",
            VersionMapping::Delete => "delete_version_mapping",
            VersionMapping::Request { .. } => "request_version_mapping",
        }
    }
}

/// How a handler's route was declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    /// Versions declared inline on a verb-specific mapping
    Versioned(VersionMapping),
    /// Plain mapping with versions declared by a separate marker
    Indirect { method: Method },
    /// Plain mapping, no version metadata
    Plain { method: Method },
}

impl Declaration {
    #[must_use]
    pub fn method(&self) -> Method {
        match self {
            Declaration::Versioned(mapping) => mapping.method(),
            Declaration::Indirect { method } | Declaration::Plain { method } => method.clone(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Declaration::Versioned(mapping) => mapping.name(),
            Declaration::Indirect { .. } => "version_mapping",
            Declaration::Plain { .. } => "mapping",
        }
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A handler's route declaration after host-side resolution.
///
/// This is the normalized shape the builder consumes: the method is fixed,
/// the path alias rule has been applied, and the host has already computed
/// the base patterns (controller prefix joined with each template).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerDeclaration {
    /// Owning controller (used only for diagnostics)
    pub controller: String,
    /// Handler name registered with the router
    pub name: String,
    pub declaration: Declaration,
    /// Path templates in declaration order
    pub templates: Vec<String>,
    /// Raw version bounds; `None` for an unversioned handler
    pub versions: Option<Vec<u32>>,
    /// Patterns the host resolved before versioning, kept sorted
    pub base_patterns: BTreeSet<String>,
}

impl HandlerDeclaration {
    #[must_use]
    pub fn method(&self) -> Method {
        self.declaration.method()
    }

    /// `get_version_mapping on Controller::handler`
    #[must_use]
    pub fn identifier(&self) -> String {
        if self.controller.is_empty() {
            format!("{} on {}", self.declaration, self.name)
        } else {
            format!("{} on {}::{}", self.declaration, self.controller, self.name)
        }
    }

    #[must_use]
    pub fn is_versioned(&self) -> bool {
        self.versions.is_some()
    }
}
