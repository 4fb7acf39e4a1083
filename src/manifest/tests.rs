#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Unit tests for manifest parsing and resolution

use super::{load_declarations, load_manifest, manifest_from_yaml, resolve, MappingKind};
use crate::error::{ConfigurationError, Error, ManifestError};
use crate::version::{Declaration, VersionMapping};
use http::Method;
use std::collections::BTreeSet;
use std::io::Write;
use tempfile::NamedTempFile;

fn resolve_yaml(content: &str) -> Result<Vec<crate::version::HandlerDeclaration>, Error> {
    resolve(&manifest_from_yaml(content).unwrap())
}

#[test]
fn test_parse_single_and_list_values() {
    let manifest = manifest_from_yaml(
        r#"
controllers:
  - name: C
    handlers:
      - name: one
        path: /a
        version: 2
      - name: many
        mapping: post
        path: [/a, /b]
        versions: [1, 3]
"#,
    )
    .unwrap();

    let handlers = &manifest.controllers[0].handlers;
    assert_eq!(handlers[0].mapping, MappingKind::Get);
    assert_eq!(handlers[0].path, vec!["/a"]);
    assert_eq!(handlers[0].versions, Some(vec![2]));
    assert_eq!(handlers[1].mapping, MappingKind::Post);
    assert_eq!(handlers[1].path, vec!["/a", "/b"]);
    assert_eq!(handlers[1].versions, Some(vec![1, 3]));
    assert!(manifest.error_routes);
}

#[test]
fn test_unknown_keys_rejected() {
    let err = manifest_from_yaml(
        r#"
controllers:
  - name: C
    handlers:
      - name: h
        pth: /a
"#,
    )
    .unwrap_err();
    assert!(matches!(err, ManifestError::Yaml(_)));
}

#[test]
fn test_resolve_versioned_handler_with_prefix() {
    let decls = resolve_yaml(
        r#"
controllers:
  - name: GetVersionController
    prefix: /api
    handlers:
      - name: a2
        path: /a
        versions: [2, 9]
"#,
    )
    .unwrap();

    assert_eq!(decls.len(), 1);
    let decl = &decls[0];
    assert_eq!(decl.controller, "GetVersionController");
    assert_eq!(decl.declaration, Declaration::Versioned(VersionMapping::Get));
    assert_eq!(decl.method(), Method::GET);
    assert_eq!(decl.templates, vec!["/a"]);
    assert_eq!(decl.versions, Some(vec![2, 9]));
    assert_eq!(decl.base_patterns, BTreeSet::from(["/api/a".to_string()]));
}

#[test]
fn test_path_wins_over_value() {
    let decls = resolve_yaml(
        r#"
controllers:
  - name: C
    handlers:
      - name: both
        path: /from-path
        value: /from-value
      - name: value_only
        value: /from-value
"#,
    )
    .unwrap();
    assert_eq!(decls[0].templates, vec!["/from-path"]);
    assert_eq!(decls[1].templates, vec!["/from-value"]);
}

#[test]
fn test_indirect_version_mapping() {
    let decls = resolve_yaml(
        r#"
controllers:
  - name: VersionMappingController
    handlers:
      - name: a2
        value: /version_mapping
        version_mapping: 2
"#,
    )
    .unwrap();
    assert_eq!(
        decls[0].declaration,
        Declaration::Indirect {
            method: Method::GET
        }
    );
    assert_eq!(decls[0].versions, Some(vec![2]));
    assert_eq!(
        decls[0].identifier(),
        "version_mapping on VersionMappingController::a2"
    );
}

#[test]
fn test_request_mapping_requires_method() {
    let decls = resolve_yaml(
        r#"
controllers:
  - name: C
    handlers:
      - name: opts
        mapping: request
        method: options
        path: /a
        versions: [1]
"#,
    )
    .unwrap();
    assert_eq!(decls[0].method(), Method::OPTIONS);
    assert_eq!(
        decls[0].declaration,
        Declaration::Versioned(VersionMapping::Request {
            method: Method::OPTIONS
        })
    );

    let err = resolve_yaml(
        r#"
controllers:
  - name: C
    handlers:
      - name: opts
        mapping: request
        path: /a
"#,
    )
    .unwrap_err();
    assert!(matches!(err, Error::Manifest(ManifestError::Declaration { .. })));

    let err = resolve_yaml(
        r#"
controllers:
  - name: C
    handlers:
      - name: g
        mapping: get
        method: POST
        path: /a
"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("method is only allowed on request mappings"));
}

#[test]
fn test_versions_declared_twice() {
    let err = resolve_yaml(
        r#"
controllers:
  - name: C
    handlers:
      - name: h
        path: /a
        versions: [1]
        version_mapping: [2]
"#,
    )
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid declaration at C::h: versions and version_mapping are mutually exclusive"
    );
}

#[test]
fn test_versioned_handler_needs_a_path() {
    let err = resolve_yaml(
        r#"
controllers:
  - name: C
    prefix: /api
    handlers:
      - name: h
        versions: [1]
"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("versioned handler declares no path"));
}

#[test]
fn test_plain_handler_without_path_maps_to_prefix() {
    let decls = resolve_yaml(
        r#"
controllers:
  - name: C
    prefix: /api/
    handlers:
      - name: index
"#,
    )
    .unwrap();
    assert_eq!(decls[0].base_patterns, BTreeSet::from(["/api".to_string()]));
    assert!(!decls[0].is_versioned());
}

#[test]
fn test_invalid_template_rejected() {
    let err = resolve_yaml(
        r#"
controllers:
  - name: C
    handlers:
      - name: h
        path: "/items/{id"
        versions: [1]
"#,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        Error::Build(crate::error::BuildError::Configuration(
            ConfigurationError::InvalidTemplate { .. }
        ))
    ));
}

#[test]
fn test_partial_segment_placeholder_rejected() {
    let err = resolve_yaml(
        r#"
controllers:
  - name: Files
    handlers:
      - name: download
        path: "/file.{ext}"
        versions: [1, 2]
"#,
    )
    .unwrap_err();
    match err {
        Error::Build(crate::error::BuildError::Configuration(
            ConfigurationError::InvalidTemplate {
                template, reason, ..
            },
        )) => {
            assert_eq!(template, "/file.{ext}");
            assert_eq!(reason, "placeholder must fill a whole path segment");
        }
        other => panic!("expected invalid template, got {other:?}"),
    }
}

#[test]
fn test_missing_leading_slash_is_added() {
    let decls = resolve_yaml(
        r#"
controllers:
  - name: C
    prefix: api
    handlers:
      - name: h
        path: a
        versions: [1]
"#,
    )
    .unwrap();
    assert_eq!(decls[0].templates, vec!["/a"]);
    assert_eq!(decls[0].base_patterns, BTreeSet::from(["/api/a".to_string()]));
}

#[test]
fn test_load_manifest_yaml_and_json() {
    let mut yaml = NamedTempFile::with_suffix(".yaml").unwrap();
    yaml.write_all(b"error_routes: false\ncontrollers: []\n").unwrap();
    yaml.flush().unwrap();
    let manifest = load_manifest(yaml.path()).unwrap();
    assert!(!manifest.error_routes);

    let mut json = NamedTempFile::with_suffix(".json").unwrap();
    json.write_all(
        br#"{"controllers":[{"name":"C","handlers":[{"name":"h","path":"/a","versions":[1,2]}]}]}"#,
    )
    .unwrap();
    json.flush().unwrap();
    let decls = load_declarations(json.path()).unwrap();
    assert_eq!(decls[0].versions, Some(vec![1, 2]));
}

#[test]
fn test_missing_file() {
    let err = load_manifest(std::path::Path::new("/definitely/not/here.yaml")).unwrap_err();
    assert!(matches!(err, ManifestError::Io(_)));
}

#[test]
fn test_empty_manifest() {
    assert!(resolve_yaml("").unwrap().is_empty());
}
