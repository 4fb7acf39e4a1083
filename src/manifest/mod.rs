//! # Manifest Module
//!
//! Host-side route declarations: which controllers exist, their path
//! prefixes, and how each handler is mapped.
//!
//! ## Format
//!
//! ```yaml
//! controllers:
//!   - name: GetVersionController
//!     prefix: /api
//!     handlers:
//!       - name: a2
//!         mapping: get           # get | post | put | patch | delete | request
//!         path: /a               # a single path or a list of aliases
//!         versions: [2, 9]       # one version or an inclusive [oldest, newest] pair
//!       - name: d
//!         mapping: get
//!         path: /d               # no versions: registered unchanged
//!       - name: report
//!         mapping: request
//!         method: OPTIONS        # required for `request`, rejected otherwise
//!         value: /report         # `value` is used when `path` is empty
//!         version_mapping: 2     # versions attached by a separate marker
//! ```
//!
//! ## Resolution
//!
//! [`resolve`] turns each entry into a [`HandlerDeclaration`]:
//!
//! - the mapping and optional `method` fix the HTTP method
//! - `path` is used when non-empty, `value` otherwise
//! - templates get a leading `/` and are checked for balanced placeholders
//! - base patterns are the controller prefix joined with each template
//!
//! Version bounds are kept exactly as written; normalizing them is the
//! builder's job so that bad bounds are reported with the full handler
//! context.
//!
//! [`HandlerDeclaration`]: crate::version::HandlerDeclaration

mod load;
mod template;
#[cfg(test)]
mod tests;
mod types;

pub use load::{load_declarations, load_manifest, manifest_from_yaml, resolve};
pub use template::{combine, normalize_template, validate_template};
pub use types::{ControllerSpec, HandlerSpec, Manifest, MappingKind};
