//! # Route Table Builder
//!
//! Registers resolved handler declarations with the [`Router`], replacing the
//! base patterns of versioned handlers with their per-version patterns, and
//! validates the finished table.
//!
//! ## Flow
//!
//! ```text
//! HandlerDeclaration ──► VersionSpec::from_declared ──► PathExpander::expand
//!                                                              │
//!        unversioned handlers: base patterns unchanged         ▼
//!        ─────────────────────────────────────────────► Router::register
//!                                                              │
//!                                      finish() ──► OverlapValidator::validate
//! ```
//!
//! ## Failure policy
//!
//! Every failure aborts the build; there is no partially registered table to
//! fall back on.
//!
//! - Malformed version bounds → [`ConfigurationError`](crate::error::ConfigurationError)
//! - A base pattern that ends with none of the handler's templates would be
//!   dropped by the expander → [`SuffixMismatchError`]
//! - A versioned handler that expands to nothing would vanish from the table
//!   → [`BuildError::EmptyVersionedRoutes`]
//! - Two identical patterns anywhere in the table → [`OverlapError`](crate::error::OverlapError)
//!
//! ## Example
//!
//! ```rust
//! use dynamic_version_url::builder::RouteTableBuilder;
//! use dynamic_version_url::runtime_config::VersionConfig;
//! use dynamic_version_url::version::{Declaration, HandlerDeclaration, VersionMapping};
//! use http::Method;
//! use std::collections::BTreeSet;
//!
//! let mut builder = RouteTableBuilder::new(&VersionConfig::default());
//! builder.register(&HandlerDeclaration {
//!     controller: "Demo".into(),
//!     name: "a".into(),
//!     declaration: Declaration::Versioned(VersionMapping::Get),
//!     templates: vec!["/a".into()],
//!     versions: Some(vec![1, 2]),
//!     base_patterns: BTreeSet::from(["/api/a".to_string()]),
//! })?;
//!
//! let router = builder.finish()?;
//! assert_eq!(router.all_patterns(), vec!["/api/v1/a", "/api/v2/a"]);
//! # Ok::<(), dynamic_version_url::error::BuildError>(())
//! ```

use crate::error::{BuildError, Error, SuffixMismatchError};
use crate::expand::{unmatched_bases, PathExpander};
use crate::manifest::{resolve, Manifest};
use crate::overlap::OverlapValidator;
use crate::router::{RouteEntry, Router};
use crate::runtime_config::VersionConfig;
use crate::version::{HandlerDeclaration, VersionSpec};
use http::Method;
use std::sync::Arc;
use tracing::{info, warn};


/// Handler names the host uses for its reserved error routes.
pub const ERROR_HANDLERS: [&str; 2] = ["error", "error_html"];

/// Accumulates registrations, then validates them as a whole.
pub struct RouteTableBuilder {
    expander: PathExpander,
    validator: OverlapValidator,
    router: Router,
}

impl RouteTableBuilder {
    #[must_use]
    pub fn new(config: &VersionConfig) -> Self {
        Self {
            expander: PathExpander::new(config.prefix.as_str()),
            validator: OverlapValidator::new(config.error_path.as_str()),
            router: Router::new(),
        }
    }

    /// Register one handler.
    ///
    /// Versioned handlers are registered under their expanded patterns,
    /// unversioned handlers under their base patterns.
    ///
    /// # Errors
    ///
    /// See the module-level failure policy. Nothing is registered for the
    /// handler when an error is returned.
    pub fn register(&mut self, handler: &HandlerDeclaration) -> Result<Arc<RouteEntry>, BuildError> {
        let patterns = patterns_for(&self.expander, handler)?;
        Ok(self
            .router
            .register(handler.method(), handler.name.as_str(), patterns))
    }

    /// Register handlers in order, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// The first error returned by [`RouteTableBuilder::register`].
    pub fn register_all<'a, I>(&mut self, handlers: I) -> Result<(), BuildError>
    where
        I: IntoIterator<Item = &'a HandlerDeclaration>,
    {
        for handler in handlers {
            self.register(handler)?;
        }
        Ok(())
    }

    /// Register the host's error page the way the host does: twice, once per
    /// response flavor, on the reserved error path.
    pub fn register_error_routes(&mut self) {
        let error_path = self.validator.error_path().to_string();
        let [first, rest @ ..] = ERROR_HANDLERS;
        self.router
            .register(Method::GET, first, vec![error_path.clone()]);
        for handler in rest {
            self.router
                .register_variant(Method::GET, handler, vec![error_path.clone()]);
        }
    }

    /// The table as registered so far, not yet validated.
    #[must_use]
    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Validate the complete table and hand it over.
    ///
    /// # Errors
    ///
    /// [`BuildError::Overlap`] naming the first duplicate pattern.
    pub fn finish(self) -> Result<Router, BuildError> {
        let patterns = self.router.all_patterns();
        self.validator.validate(&patterns)?;

        info!(
            routes_count = self.router.len(),
            patterns_count = patterns.len(),
            version_prefix = %self.expander.prefix(),
            "Route table built and validated"
        );

        Ok(self.router)
    }
}

/// Resolve a manifest and build its validated route table.
///
/// The reserved error routes are registered first when the manifest asks
/// for them, then every handler in manifest order.
///
/// # Errors
///
/// Any manifest resolution or build failure.
pub fn build_router(manifest: &Manifest, config: &VersionConfig) -> Result<Router, Error> {
    let declarations = resolve(manifest)?;
    let mut builder = RouteTableBuilder::new(config);
    if manifest.error_routes {
        builder.register_error_routes();
    }
    builder.register_all(&declarations)?;
    Ok(builder.finish()?)
}

/// Final patterns for one handler.
///
/// # Errors
///
/// See the module-level failure policy.
pub fn patterns_for(
    expander: &PathExpander,
    handler: &HandlerDeclaration,
) -> Result<Vec<String>, BuildError> {
    let Some(versions) = handler.versions.as_deref() else {
        return Ok(handler.base_patterns.iter().cloned().collect());
    };

    let identifier = handler.identifier();
    let spec = VersionSpec::from_declared(versions, &identifier, &handler.templates)?;

    if let Some(base) = unmatched_bases(&handler.base_patterns, &handler.templates)
        .first()
        .copied()
    {
        warn!(
            handler = %identifier,
            base = %base,
            templates = ?handler.templates,
            "Base pattern matches no declared template"
        );
        return Err(SuffixMismatchError {
            handler: identifier,
            base: base.to_string(),
            templates: handler.templates.clone(),
        }
        .into());
    }

    let patterns = expander.expand(&handler.base_patterns, spec, &handler.templates);
    if patterns.is_empty() {
        warn!(handler = %identifier, versions = %spec, "Versioned handler produced no routes");
        return Err(BuildError::EmptyVersionedRoutes {
            handler: identifier,
            versions: spec.to_string(),
        });
    }

    Ok(patterns)
}
