use serde::{Deserialize, Deserializer};

/// Route manifest: the host-side description of every controller.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Register the host's reserved error routes (default: true)
    #[serde(default = "default_true")]
    pub error_routes: bool,
    #[serde(default)]
    pub controllers: Vec<ControllerSpec>,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            error_routes: true,
            controllers: Vec::new(),
        }
    }
}

/// A group of handlers sharing a path prefix.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ControllerSpec {
    pub name: String,
    /// Class-level prefix joined in front of every handler path
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default)]
    pub handlers: Vec<HandlerSpec>,
}

/// One handler entry as written in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HandlerSpec {
    pub name: String,
    #[serde(default)]
    pub mapping: MappingKind,
    /// Explicit method; only valid (and required) with `mapping: request`
    #[serde(default)]
    pub method: Option<String>,
    /// Path templates; take precedence over `value` when non-empty
    #[serde(default, deserialize_with = "one_or_many")]
    pub path: Vec<String>,
    /// Path templates used when `path` is empty
    #[serde(default, deserialize_with = "one_or_many")]
    pub value: Vec<String>,
    /// Versions declared inline on the mapping
    #[serde(default, alias = "version", deserialize_with = "optional_one_or_many")]
    pub versions: Option<Vec<u32>>,
    /// Versions declared by a separate marker on a plain mapping
    #[serde(default, deserialize_with = "optional_one_or_many")]
    pub version_mapping: Option<Vec<u32>>,
}

/// Mapping shortcut named in the manifest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MappingKind {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Request,
}

fn default_true() -> bool {
    true
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> From<OneOrMany<T>> for Vec<T> {
    fn from(value: OneOrMany<T>) -> Self {
        match value {
            OneOrMany::One(item) => vec![item],
            OneOrMany::Many(items) => items,
        }
    }
}

/// Accept `path: /a` as well as `path: [/a, /b]`.
fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    OneOrMany::deserialize(deserializer).map(Vec::from)
}

fn optional_one_or_many<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<OneOrMany<T>>::deserialize(deserializer).map(|v| v.map(Vec::from))
}
