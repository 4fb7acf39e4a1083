//! # CLI Module
//!
//! Command-line access to route table construction.
//!
//! ## Commands
//!
//! ### `check`
//!
//! Build and validate the table; exits non-zero with the diagnostic on failure:
//!
//! ```bash
//! dynamic-version-url check --manifest demos/routes.yaml
//! ```
//!
//! ### `routes`
//!
//! Print the expanded table, one `METHOD pattern -> handler` line per pattern:
//!
//! ```bash
//! dynamic-version-url routes --manifest demos/routes.yaml --prefix v
//! ```
//!
//! ### `resolve`
//!
//! Match a single request:
//!
//! ```bash
//! dynamic-version-url resolve --manifest demos/routes.yaml --method GET --path /api/v3/a
//! ```
//!
//! ### `watch`
//!
//! Rebuild the table on every manifest change, keeping the last valid one:
//!
//! ```bash
//! dynamic-version-url watch --manifest demos/routes.yaml
//! ```
//!
//! Every command also takes `--config <FILE>` (YAML with a `version:`
//! section) and `--prefix <PREFIX>`.

mod commands;


pub use commands::{build, load_config, run, run_cli, Cli, Commands, ManifestArgs};
