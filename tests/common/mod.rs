#![allow(dead_code)]

pub mod mock_service;

use std::path::PathBuf;

use condense::config::ServiceConfig;

/// Write a candidate document into a temp dir, returning its path.
pub fn write_doc(dir: &tempfile::TempDir, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

/// Service config pointed at a test server, with short timeouts.
pub fn test_service_config(base_url: &str) -> ServiceConfig {
    ServiceConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
    }
}
