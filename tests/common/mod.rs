#![allow(dead_code, clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub mod temp_files {
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::{SystemTime, UNIX_EPOCH};

    // Global counter and lock for thread-safe temporary file creation
    static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);
    static TEMP_LOCK: Mutex<()> = Mutex::new(());

    /// Creates a temporary file with guaranteed unique name to prevent race conditions
    pub fn create_temp_manifest(content: &str, ext: &str) -> PathBuf {
        let _lock = TEMP_LOCK.lock().unwrap();
        let counter = TEMP_COUNTER.fetch_add(1, Ordering::SeqCst);
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();

        let path = std::env::temp_dir().join(format!(
            "dvu_test_{}_{}_{}.{}",
            std::process::id(),
            counter,
            nanos,
            ext
        ));

        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn create_temp_yaml(content: &str) -> PathBuf {
        create_temp_manifest(content, "yaml")
    }

    pub fn create_temp_json(content: &str) -> PathBuf {
        create_temp_manifest(content, "json")
    }

    /// Cleanup temporary files (best effort)
    pub fn cleanup_temp_files(paths: &[PathBuf]) {
        for path in paths {
            let _ = std::fs::remove_file(path);
        }
    }
}

pub mod routes {
    use dynamic_version_url::{build_router, manifest_from_yaml, Router, VersionConfig};
    use http::Method;

    /// Build a table from inline YAML with default settings.
    pub fn router_from_yaml(content: &str) -> Router {
        let manifest = manifest_from_yaml(content).expect("manifest parses");
        build_router(&manifest, &VersionConfig::default()).expect("table builds")
    }

    /// Assert `GET path` reaches `handler`.
    pub fn assert_get(router: &Router, path: &str, handler: &str) {
        let matched = router
            .route(Method::GET, path)
            .unwrap_or_else(|| panic!("no route for GET {path}"));
        assert_eq!(matched.handler_name(), handler, "GET {path}");
    }
}
