#![allow(clippy::unwrap_used, clippy::expect_used)]

use dynamic_version_url::hot_reload::{watch_manifest, LiveRoutes};
use dynamic_version_url::VersionConfig;
use http::Method;
use std::sync::Arc;
use std::time::Duration;

mod common;
use common::temp_files;

const MANIFEST_V1: &str = r#"
controllers:
  - name: C
    handlers:
      - name: foo_one
        path: /foo
        versions: 1
"#;

const MANIFEST_V2: &str = r#"
controllers:
  - name: C
    handlers:
      - name: foo_one
        path: /foo
        versions: 1
      - name: foo_two
        path: /foo
        versions: 2
"#;

const MANIFEST_OVERLAPPING: &str = r#"
controllers:
  - name: C
    handlers:
      - name: foo_one
        path: /foo
        versions: [1, 2]
      - name: foo_two
        path: /foo
        versions: 2
"#;

fn handler_at(live: &LiveRoutes, path: &str) -> Option<String> {
    live.current()
        .route(Method::GET, path)
        .map(|m| m.handler_name().to_string())
}

#[test]
fn test_watch_manifest_reload() {
    let path = temp_files::create_temp_yaml(MANIFEST_V1);
    let live = Arc::new(LiveRoutes::load(&path, VersionConfig::default()).unwrap());
    assert_eq!(handler_at(&live, "/v2/foo"), None);

    let watcher = watch_manifest(&path, Arc::clone(&live)).expect("watch_manifest");

    // allow watcher thread to start
    std::thread::sleep(Duration::from_millis(100));

    std::fs::write(&path, MANIFEST_V2).unwrap();

    for _ in 0..40 {
        if handler_at(&live, "/v2/foo").is_some() {
            break;
        }
        std::thread::sleep(Duration::from_millis(50));
    }
    assert_eq!(handler_at(&live, "/v2/foo").as_deref(), Some("foo_two"));

    drop(watcher);
    temp_files::cleanup_temp_files(&[path]);
}

#[test]
fn test_rejected_manifest_keeps_live_table() {
    let path = temp_files::create_temp_yaml(MANIFEST_V1);
    let live = LiveRoutes::load(&path, VersionConfig::default()).unwrap();

    std::fs::write(&path, MANIFEST_OVERLAPPING).unwrap();
    let err = live.reload_from(&path).err().unwrap();
    assert_eq!(
        err.to_string(),
        "Ambiguous version mapping found with the following URL: /v2/foo"
    );
    assert_eq!(handler_at(&live, "/v1/foo").as_deref(), Some("foo_one"));
    assert_eq!(handler_at(&live, "/v2/foo"), None);

    temp_files::cleanup_temp_files(&[path]);
}
