#![allow(dead_code)]

pub mod temp_files {
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::{SystemTime, UNIX_EPOCH};

    // Global counter and lock for thread-safe temporary file creation
    static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);
    static TEMP_LOCK: Mutex<()> = Mutex::new(());

    /// Creates a temporary file with guaranteed unique name to prevent race conditions
    pub fn create_temp_spec(content: &str, ext: &str) -> PathBuf {
        let _lock = TEMP_LOCK.lock().unwrap();
        let counter = TEMP_COUNTER.fetch_add(1, Ordering::SeqCst);
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();

        let path = std::env::temp_dir().join(format!(
            "schemadoc_test_{}_{}_{}.{}",
            std::process::id(),
            counter,
            nanos,
            ext
        ));

        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn create_temp_yaml(content: &str) -> PathBuf {
        create_temp_spec(content, "yaml")
    }

    pub fn create_temp_json(content: &str) -> PathBuf {
        create_temp_spec(content, "json")
    }

    /// Cleanup temporary files (best effort)
    pub fn cleanup_temp_files(paths: &[PathBuf]) {
        for path in paths {
            let _ = std::fs::remove_file(path);
        }
    }
}

pub mod fixtures {
    use schemadoc::spec::{load_spec, LoadedSpec};

    pub fn payments_path() -> String {
        format!("{}/tests/fixtures/payments.yaml", env!("CARGO_MANIFEST_DIR"))
    }

    pub fn payments() -> LoadedSpec {
        load_spec(&payments_path()).unwrap()
    }

    pub fn legacy_v30() -> LoadedSpec {
        let path = format!("{}/tests/fixtures/legacy_v30.yaml", env!("CARGO_MANIFEST_DIR"));
        load_spec(&path).unwrap()
    }
}
