//! # dynamic-version-url
//!
//! Versioned route expansion and overlap detection for HTTP route tables.
//!
//! ## Overview
//!
//! A handler declares one version (`[4]`) or an inclusive range (`[1, 3]`)
//! alongside its path templates. When the route table is built, each base
//! pattern the host produced (controller prefix joined with a template) is
//! rewritten once per version by inserting a `/{prefix}{n}` segment in front
//! of the template:
//!
//! ```text
//! /api/a   with versions [1, 3]   ─►   /api/v1/a   /api/v2/a   /api/v3/a
//! ```
//!
//! After every handler is registered, the whole table is checked: if two
//! registrations produced the same pattern the build fails with
//! `Ambiguous version mapping found with the following URL: <pattern>`.
//!
//! ## Architecture
//!
//! - **[`version`]** - version bounds and handler declarations
//! - **[`expand`]** - base pattern × version → versioned pattern
//! - **[`overlap`]** - duplicate detection over the finished table
//! - **[`builder`]** - registration policy tying the above together
//! - **[`router`]** - radix-tree route table with path parameters
//! - **[`manifest`]** - YAML/JSON description of controllers and handlers
//! - **[`runtime_config`]** - version prefix and reserved error path
//! - **[`hot_reload`]** - live table that rebuilds on manifest changes
//! - **[`logging`]** - structured `tracing` setup
//! - **[`cli`]** - `check`, `routes`, `resolve`, and `watch` commands
//!
//! ## Quick Start
//!
//! ```rust
//! use dynamic_version_url::{build_router, manifest_from_yaml, VersionConfig};
//! use http::Method;
//!
//! let manifest = manifest_from_yaml(r#"
//! controllers:
//!   - name: Orders
//!     prefix: /api
//!     handlers:
//!       - name: list_orders
//!         path: /orders
//!         versions: [1, 2]
//! "#)?;
//!
//! let router = build_router(&manifest, &VersionConfig::default())?;
//! let matched = router.route(Method::GET, "/api/v2/orders").expect("route exists");
//! assert_eq!(matched.handler_name(), "list_orders");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod builder;
pub mod cli;
pub mod error;
pub mod expand;
pub mod hot_reload;
pub mod logging;
pub mod manifest;
pub mod overlap;
pub mod router;
pub mod runtime_config;
pub mod version;

pub use builder::{build_router, RouteTableBuilder};
pub use error::{BuildError, ConfigurationError, Error, OverlapError, SuffixMismatchError};
pub use expand::PathExpander;
pub use manifest::{load_manifest, manifest_from_yaml, Manifest};
pub use overlap::OverlapValidator;
pub use router::{RouteMatch, Router};
pub use runtime_config::VersionConfig;
pub use version::{Declaration, HandlerDeclaration, VersionMapping, VersionSpec};
