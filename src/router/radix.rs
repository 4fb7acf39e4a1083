//! Radix tree used to dispatch requests against the registered patterns.
//!
//! The tree is built by splitting patterns into segments:
//! - Each node represents a path segment
//! - Static segments (e.g., `v3`) match exactly
//! - Parameter segments (e.g., `{id}`) match any single segment
//! - Targets are stored at terminal nodes, keyed by HTTP method
//!
//! Static children are tried before parameter children, so `/v1/items/new`
//! beats `/v1/items/{id}` for the request `/v1/items/new`.
//!
//! Insertion keeps the first target registered for a `(method, pattern)`
//! pair. A table with such a duplicate never reaches serving anyway: the
//! overlap check rejects it after registration.

use http::Method;
use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;

use super::core::{ParamVec, RouteEntry};

/// What a terminal node dispatches to.
#[derive(Debug, Clone)]
pub(crate) struct RouteTarget {
    pub entry: Arc<RouteEntry>,
    /// The registered pattern that produced this node
    pub pattern: Arc<str>,
}

#[derive(Clone, Default)]
struct RadixNode {
    /// The path segment this node represents (without leading /)
    segment: Cow<'static, str>,
    /// Targets stored when a pattern ends here, per HTTP method
    targets: HashMap<Method, RouteTarget>,
    /// Parameter name if this segment is a path parameter (e.g., "{id}" -> Some("id"))
    param_name: Option<Arc<str>>,
    /// Static children
    children: Vec<RadixNode>,
    /// Parameter children, one per distinct parameter name at this position
    /// (e.g. /users/{id}/posts and /users/{user_id}/comments)
    param_children: Vec<RadixNode>,
}

impl RadixNode {
    fn new(segment: Cow<'static, str>) -> Self {
        Self {
            segment,
            ..Self::default()
        }
    }

    fn new_param(param_name: &str) -> Self {
        Self {
            param_name: Some(Arc::from(param_name)),
            ..Self::default()
        }
    }

    /// Insert a target; returns false if one already existed for the method.
    fn insert(&mut self, segments: &[&str], method: Method, target: RouteTarget) -> bool {
        let Some((segment, remaining)) = segments.split_first() else {
            if self.targets.contains_key(&method) {
                return false;
            }
            self.targets.insert(method, target);
            return true;
        };

        if let Some(param_name) = segment
            .strip_prefix('{')
            .and_then(|s| s.strip_suffix('}'))
        {
            if let Some(child) = self
                .param_children
                .iter_mut()
                .find(|c| c.param_name.as_deref() == Some(param_name))
            {
                return child.insert(remaining, method, target);
            }

            let mut child = RadixNode::new_param(param_name);
            let inserted = child.insert(remaining, method, target);
            self.param_children.push(child);
            return inserted;
        }

        if let Some(child) = self.children.iter_mut().find(|c| c.segment == *segment) {
            return child.insert(remaining, method, target);
        }

        let mut child = RadixNode::new(Cow::Owned((*segment).to_string()));
        let inserted = child.insert(remaining, method, target);
        self.children.push(child);
        inserted
    }

    fn search(&self, segments: &[&str], method: &Method, params: &mut ParamVec) -> Option<RouteTarget> {
        let Some((segment, remaining)) = segments.split_first() else {
            return self.targets.get(method).cloned();
        };

        for child in &self.children {
            if child.segment == *segment {
                if let Some(target) = child.search(remaining, method, params) {
                    return Some(target);
                }
            }
        }

        for param_child in &self.param_children {
            if let Some(param_name) = &param_child.param_name {
                params.push((Arc::clone(param_name), (*segment).to_string()));
                if let Some(target) = param_child.search(remaining, method, params) {
                    return Some(target);
                }
                // Backtrack
                params.pop();
            }
        }

        None
    }
}

/// Segment tree over every registered pattern.
#[derive(Clone, Default)]
pub(crate) struct RadixRouter {
    root: RadixNode,
}

impl RadixRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `target` under `method` and its pattern.
    ///
    /// Returns `false` when the `(method, pattern)` slot was already taken;
    /// the earlier target is kept.
    pub fn insert(&mut self, method: Method, target: RouteTarget) -> bool {
        let pattern = Arc::clone(&target.pattern);
        let segments = split_segments(&pattern);
        self.root.insert(&segments, method, target)
    }

    /// Find the target for a request path and collect `{param}` values.
    pub fn route(&self, method: &Method, path: &str) -> Option<(RouteTarget, ParamVec)> {
        let segments = split_segments(path);
        let mut params = ParamVec::new();
        let target = self.root.search(&segments, method, &mut params)?;
        Some((target, params))
    }
}

fn split_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}
