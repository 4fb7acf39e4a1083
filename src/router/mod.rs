//! # Router Module
//!
//! The route table that versioned patterns are registered into, and the
//! matcher that dispatches requests against it.
//!
//! ## Overview
//!
//! The router is responsible for:
//! - Holding every registration in order, so the whole table can be listed
//!   and checked for overlapping patterns
//! - Matching incoming `(method, path)` pairs to a registration
//! - Extracting `{param}` values from the matched pattern
//!
//! It knows nothing about versions: by the time a pattern reaches
//! [`Router::register`] the version segment is already part of it.
//!
//! ## Example
//!
//! ```rust
//! use dynamic_version_url::router::Router;
//! use http::Method;
//!
//! let mut router = Router::new();
//! router.register(
//!     Method::GET,
//!     "pv",
//!     vec!["/v2/pathVariable/{pv}".to_string()],
//! );
//!
//! let matched = router.route(Method::GET, "/v2/pathVariable/aap").unwrap();
//! assert_eq!(matched.handler_name(), "pv");
//! assert_eq!(matched.get_path_param("pv"), Some("aap"));
//! ```

mod core;
mod radix;
#[cfg(test)]
mod tests;

pub use self::core::{ParamVec, RouteEntry, RouteMatch, Router, MAX_INLINE_PARAMS};
