//! Shared testing utilities for pubset CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const SINGLE_URL_BODY: &str = r#"{"publish_sets":[{"name":"main","publish_set_type":"single_url","desktops_url":"https://x/d"}]}"#;
pub const MULTIPLE_URL_BODY: &str = r#"{"publish_sets":[{"name":"main","publish_set_type":"multiple_url","desktops_url":null}]}"#;
pub const BASIC_USER_KEY: &str = "Basic dXNlcjprZXk=";

/// Testing harness providing an isolated workspace and a fake configuration API.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    pub server: mockito::ServerGuard,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir, server: mockito::Server::new() }
    }

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Serve `body` for `GET /configurations/<id>`, expecting `hits` calls.
    pub fn serve_configuration(&mut self, id: &str, body: &str, hits: usize) -> mockito::Mock {
        self.server
            .mock("GET", format!("/configurations/{}", id).as_str())
            .match_header("authorization", BASIC_USER_KEY)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(hits)
            .create()
    }

    /// Build a command for invoking the compiled `pubset` binary against the fake API.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("pubset").expect("Failed to locate pubset binary");
        cmd.current_dir(&self.work_dir)
            .env("SKYTAP_USERNAME", "user")
            .env("SKYTAP_API_KEY", "key")
            .env_remove("RUST_LOG")
            .args(["list-published-url", "--base-url", &self.server.url()]);
        cmd
    }

    /// Write a file inside the workspace.
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Read a file inside the workspace, `None` if it does not exist.
    pub fn read_file(&self, relative: &str) -> Option<String> {
        fs::read_to_string(self.work_dir.join(relative)).ok()
    }
}
