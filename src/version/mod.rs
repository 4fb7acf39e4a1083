//! # Version Module
//!
//! Normalizes what a handler author declared about API versions into the
//! shape the path expander works with.
//!
//! A handler declares either one version (`[3]`) or an inclusive range
//! (`[1, 9]`). [`VersionSpec::from_declared`] turns that raw list into an
//! `oldest`/`newest` pair, rejecting anything else with a
//! [`ConfigurationError`](crate::error::ConfigurationError).
//!
//! The different ways of attaching version metadata to a handler (one
//! verb-specific mapping per HTTP method, a generic request mapping, or a
//! separate version marker on a plain mapping) are collapsed into the closed
//! [`Declaration`] enum at load time, so nothing downstream branches on the
//! declaration style.

mod mapping;
mod spec;

pub use mapping::{Declaration, HandlerDeclaration, VersionMapping};
pub use spec::VersionSpec;
