use crate::error::{BracketList, ConfigurationError};
use std::fmt;
use std::ops::RangeInclusive;

/// Inclusive range of API versions a handler serves.
///
/// Built from a declaration with [`VersionSpec::from_declared`], which
/// guarantees `oldest <= newest`. A value built by hand with reversed bounds
/// is still accepted by the expander and simply yields no versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VersionSpec {
    /// First version served (inclusive)
    pub oldest: u32,
    /// Last version served (inclusive)
    pub newest: u32,
}

impl VersionSpec {
    /// A handler that serves exactly one version.
    #[must_use]
    pub const fn single(version: u32) -> Self {
        Self {
            oldest: version,
            newest: version,
        }
    }

    /// A handler that serves `oldest..=newest`. Bounds are not checked.
    #[must_use]
    pub const fn range(oldest: u32, newest: u32) -> Self {
        Self { oldest, newest }
    }

    /// Normalize a raw version declaration.
    ///
    /// # Arguments
    ///
    /// * `versions` - The bounds exactly as declared (one or two elements)
    /// * `handler` - Identifier used in diagnostics (declaration name and handler)
    /// * `paths` - Declared path templates, only used in diagnostics
    ///
    /// # Errors
    ///
    /// * [`ConfigurationError::NoVersions`] for an empty declaration
    /// * [`ConfigurationError::TooManyVersions`] for three or more bounds
    /// * [`ConfigurationError::ReversedBounds`] for `[max, min]`
    pub fn from_declared(
        versions: &[u32],
        handler: &str,
        paths: &[String],
    ) -> Result<Self, ConfigurationError> {
        match *versions {
            [version] => Ok(Self::single(version)),
            [oldest, newest] if oldest <= newest => Ok(Self::range(oldest, newest)),
            [_, _] => Err(ConfigurationError::ReversedBounds {
                versions: versions.to_vec(),
                handler: handler.to_string(),
                paths: paths.to_vec(),
            }),
            [] => Err(ConfigurationError::NoVersions {
                handler: handler.to_string(),
                paths: paths.to_vec(),
            }),
            _ => Err(ConfigurationError::TooManyVersions {
                versions: versions.to_vec(),
                handler: handler.to_string(),
                paths: paths.to_vec(),
            }),
        }
    }

    /// Versions in ascending order, both bounds included.
    #[must_use]
    pub fn versions(&self) -> RangeInclusive<u32> {
        self.oldest..=self.newest
    }

    /// Number of versions served; zero for a reversed range.
    #[must_use]
    pub fn len(&self) -> usize {
        if self.oldest > self.newest {
            0
        } else {
            (self.newest - self.oldest) as usize + 1
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for VersionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.oldest == self.newest {
            write!(f, "{}", BracketList(&[self.oldest]))
        } else {
            write!(f, "{}", BracketList(&[self.oldest, self.newest]))
        }
    }
}
