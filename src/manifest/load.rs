use super::template::{combine, normalize_template, validate_template};
use super::types::{ControllerSpec, HandlerSpec, Manifest, MappingKind};
use crate::error::{Error, ManifestError};
use crate::version::{Declaration, HandlerDeclaration, VersionMapping};
use http::Method;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::debug;

/// Read a manifest file; `.yaml`/`.yml` is parsed as YAML, anything else as JSON.
///
/// # Errors
///
/// I/O and parse failures as [`ManifestError`].
pub fn load_manifest(path: &Path) -> Result<Manifest, ManifestError> {
    let content = std::fs::read_to_string(path)?;
    let is_yaml = path
        .extension()
        .map(|ext| ext == "yaml" || ext == "yml")
        .unwrap_or(false);

    if is_yaml {
        manifest_from_yaml(&content)
    } else {
        Ok(serde_json::from_str(&content)?)
    }
}

/// Parse a YAML manifest held in memory.
///
/// # Errors
///
/// [`ManifestError::Yaml`] on malformed input or unknown keys.
pub fn manifest_from_yaml(content: &str) -> Result<Manifest, ManifestError> {
    if content.trim().is_empty() {
        return Ok(Manifest::default());
    }
    Ok(serde_yaml::from_str(content)?)
}

/// Load a manifest file and resolve every handler in it.
///
/// # Errors
///
/// See [`load_manifest`] and [`resolve`].
pub fn load_declarations(path: &Path) -> Result<Vec<HandlerDeclaration>, Error> {
    let manifest = load_manifest(path)?;
    resolve(&manifest)
}

/// Resolve every handler into the normalized form the builder consumes.
///
/// Handlers keep manifest order: controllers in order, handlers in order
/// within each controller.
///
/// # Errors
///
/// * [`ManifestError::Declaration`] for inconsistent entries (missing method
///   on a `request` mapping, versions declared twice, ...)
/// * [`ConfigurationError::InvalidTemplate`](crate::error::ConfigurationError::InvalidTemplate)
///   for malformed path templates
pub fn resolve(manifest: &Manifest) -> Result<Vec<HandlerDeclaration>, Error> {
    let mut declarations = Vec::new();
    for controller in &manifest.controllers {
        for handler in &controller.handlers {
            declarations.push(resolve_handler(controller, handler)?);
        }
    }
    debug!(handlers = declarations.len(), "Manifest resolved");
    Ok(declarations)
}

fn resolve_handler(
    controller: &ControllerSpec,
    handler: &HandlerSpec,
) -> Result<HandlerDeclaration, Error> {
    let location = format!("{}::{}", controller.name, handler.name);
    let declaration_error = |message: String| ManifestError::Declaration {
        location: location.clone(),
        message,
    };

    let method = resolve_method(handler).map_err(declaration_error)?;

    let (declaration, versions) = match (&handler.versions, &handler.version_mapping) {
        (Some(_), Some(_)) => {
            return Err(declaration_error(
                "versions and version_mapping are mutually exclusive".to_string(),
            )
            .into())
        }
        (Some(versions), None) => (
            Declaration::Versioned(version_mapping(handler.mapping, method)),
            Some(versions.clone()),
        ),
        (None, Some(versions)) => (Declaration::Indirect { method }, Some(versions.clone())),
        (None, None) => (Declaration::Plain { method }, None),
    };

    // `path` wins over `value` when both are given.
    let raw_templates = if handler.path.is_empty() {
        &handler.value
    } else {
        &handler.path
    };

    if versions.is_some() && raw_templates.is_empty() {
        return Err(declaration_error("versioned handler declares no path".to_string()).into());
    }

    let mut declared = HandlerDeclaration {
        controller: controller.name.clone(),
        name: handler.name.clone(),
        declaration,
        templates: Vec::with_capacity(raw_templates.len()),
        versions,
        base_patterns: BTreeSet::new(),
    };
    let identifier = declared.identifier();

    for raw in raw_templates {
        validate_template(raw, &identifier)?;
        declared.templates.push(normalize_template(raw));
    }

    let prefix = controller.prefix.as_deref();
    declared.base_patterns = if declared.templates.is_empty() {
        BTreeSet::from([combine(prefix, "")])
    } else {
        declared
            .templates
            .iter()
            .map(|template| combine(prefix, template))
            .collect()
    };

    Ok(declared)
}

fn resolve_method(handler: &HandlerSpec) -> Result<Method, String> {
    match (handler.mapping, handler.method.as_deref()) {
        (MappingKind::Request, Some(method)) => Method::from_bytes(method.to_uppercase().as_bytes())
            .map_err(|_| format!("invalid HTTP method '{method}'")),
        (MappingKind::Request, None) => Err("request mapping requires a method".to_string()),
        (_, Some(_)) => Err("method is only allowed on request mappings".to_string()),
        (MappingKind::Get, None) => Ok(Method::GET),
        (MappingKind::Post, None) => Ok(Method::POST),
        (MappingKind::Put, None) => Ok(Method::PUT),
        (MappingKind::Patch, None) => Ok(Method::PATCH),
        (MappingKind::Delete, None) => Ok(Method::DELETE),
    }
}

fn version_mapping(kind: MappingKind, method: Method) -> VersionMapping {
    match kind {
        MappingKind::Get => VersionMapping::Get,
        MappingKind::Post => VersionMapping::Post,
        MappingKind::Put => VersionMapping::Put,
        MappingKind::Patch => VersionMapping::Patch,
        MappingKind::Delete => VersionMapping::Delete,
        MappingKind::Request => VersionMapping::Request { method },
    }
}
