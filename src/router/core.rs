//! Route table and request matcher.

use http::Method;
use smallvec::SmallVec;
use std::collections::HashSet;
use std::io::{self, Write};
use std::sync::Arc;
use tracing::{debug, warn};

use super::radix::{RadixRouter, RouteTarget};

/// Maximum number of path parameters before heap allocation.
pub const MAX_INLINE_PARAMS: usize = 8;

/// Stack-allocated parameter storage for matched requests.
///
/// Names are `Arc<str>` shared with the tree; values come from the request.
pub type ParamVec = SmallVec<[(Arc<str>, String); MAX_INLINE_PARAMS]>;

/// One registration: a handler and every pattern it answers on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub method: Method,
    pub handler_name: String,
    /// Final patterns in registration order, without repeats
    pub patterns: Vec<String>,
}

/// Result of successfully matching a request path to a route
#[derive(Debug, Clone)]
pub struct RouteMatch {
    /// The registration that owns the matched pattern
    pub entry: Arc<RouteEntry>,
    /// The pattern that matched (e.g. `/api/v3/a`)
    pub pattern: Arc<str>,
    /// Path parameters extracted from the URL (e.g., `{pv}` → `("pv", "aap")`)
    pub path_params: ParamVec,
}

impl RouteMatch {
    #[must_use]
    pub fn handler_name(&self) -> &str {
        &self.entry.handler_name
    }

    /// Get a path parameter by name
    ///
    /// Uses "last write wins" semantics when a name repeats at different depths.
    #[inline]
    #[must_use]
    pub fn get_path_param(&self, name: &str) -> Option<&str> {
        self.path_params
            .iter()
            .rfind(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v.as_str())
    }
}

/// The route table the builder registers into.
///
/// Keeps registrations in order (for validation and listing) and a radix
/// tree (for matching requests).
#[derive(Clone, Default)]
pub struct Router {
    radix_router: RadixRouter,
    entries: Vec<Arc<RouteEntry>>,
}

impl Router {
    #[must_use]
    pub fn new() -> Self {
        Self {
            radix_router: RadixRouter::new(),
            entries: Vec::new(),
        }
    }

    /// Register a handler under `method` for each of `patterns`.
    ///
    /// Repeats inside one registration collapse to the first occurrence.
    /// Repeats across registrations are kept in the table so that the
    /// overlap check can see them; for matching, the first registration of a
    /// `(method, pattern)` pair wins and the later one is logged at `warn`.
    pub fn register(
        &mut self,
        method: Method,
        handler_name: impl Into<String>,
        patterns: impl IntoIterator<Item = String>,
    ) -> Arc<RouteEntry> {
        self.insert_entry(method, handler_name.into(), patterns, true)
    }

    /// Register another handler flavor on patterns that already have one.
    ///
    /// Used for the host's error page, which is registered once per response
    /// flavor on the same path. The first flavor keeps answering requests and
    /// the shared slot is not reported as a conflict.
    pub fn register_variant(
        &mut self,
        method: Method,
        handler_name: impl Into<String>,
        patterns: impl IntoIterator<Item = String>,
    ) -> Arc<RouteEntry> {
        self.insert_entry(method, handler_name.into(), patterns, false)
    }

    fn insert_entry(
        &mut self,
        method: Method,
        handler_name: String,
        patterns: impl IntoIterator<Item = String>,
        report_conflicts: bool,
    ) -> Arc<RouteEntry> {
        let mut seen = HashSet::new();
        let patterns: Vec<String> = patterns
            .into_iter()
            .filter(|p| seen.insert(p.clone()))
            .collect();

        let entry = Arc::new(RouteEntry {
            method: method.clone(),
            handler_name,
            patterns,
        });

        for pattern in &entry.patterns {
            let target = RouteTarget {
                entry: Arc::clone(&entry),
                pattern: Arc::from(pattern.as_str()),
            };
            if self.radix_router.insert(method.clone(), target) {
                debug!(
                    method = %method,
                    pattern = %pattern,
                    handler_name = %entry.handler_name,
                    "Route registered"
                );
            } else if report_conflicts {
                warn!(
                    method = %method,
                    pattern = %pattern,
                    handler_name = %entry.handler_name,
                    "Pattern already registered for this method"
                );
            } else {
                debug!(
                    method = %method,
                    pattern = %pattern,
                    handler_name = %entry.handler_name,
                    "Variant registered on a shared pattern"
                );
            }
        }

        self.entries.push(Arc::clone(&entry));
        entry
    }

    /// Registrations in table order.
    #[must_use]
    pub fn entries(&self) -> &[Arc<RouteEntry>] {
        &self.entries
    }

    /// Every registered pattern in table order, repeats included.
    #[must_use]
    pub fn all_patterns(&self) -> Vec<&str> {
        self.entries
            .iter()
            .flat_map(|entry| entry.patterns.iter().map(String::as_str))
            .collect()
    }

    /// Number of registrations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Match an HTTP request to a registered pattern.
    ///
    /// # Returns
    ///
    /// * `Some(RouteMatch)` - If a matching route is found
    /// * `None` - If no route matches (results in 404)
    #[must_use]
    pub fn route(&self, method: Method, path: &str) -> Option<RouteMatch> {
        match self.radix_router.route(&method, path) {
            Some((target, path_params)) => {
                debug!(
                    method = %method,
                    path = %path,
                    handler_name = %target.entry.handler_name,
                    route_pattern = %target.pattern,
                    path_params = ?path_params,
                    "Route matched"
                );
                Some(RouteMatch {
                    entry: target.entry,
                    pattern: target.pattern,
                    path_params,
                })
            }
            None => {
                debug!(method = %method, path = %path, "No route matched");
                None
            }
        }
    }

    /// Write one `METHOD pattern -> handler` line per registered pattern.
    ///
    /// # Errors
    ///
    /// Propagates write failures from `out`.
    pub fn dump_routes<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for entry in &self.entries {
            for pattern in &entry.patterns {
                writeln!(out, "{} {} -> {}", entry.method, pattern, entry.handler_name)?;
            }
        }
        Ok(())
    }
}
