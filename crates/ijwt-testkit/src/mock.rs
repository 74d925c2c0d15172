//! Mock server infrastructure for testing
//!
//! A single shared mockito server lets parallel tests serve sites without
//! each one binding its own port. Tests keep their mocks apart by using a
//! unique path prefix.

use lazy_static::lazy_static;
use mockito::{Mock, Server, ServerGuard};
use std::sync::Mutex;

lazy_static! {
    /// Global shared mockito server for all tests
    pub static ref SHARED_MOCK_SERVER: Mutex<ServerGuard> = Mutex::new(Server::new());
}

/// Get reference to shared mock server
///
/// Hold the guard only while creating mocks, not for the whole test.
pub fn get_shared_mock_server() -> std::sync::MutexGuard<'static, ServerGuard> {
    SHARED_MOCK_SERVER
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Serve each `(path, body)` pair with status 200 for GET and HEAD under
/// `prefix`. Everything else on the server answers 501 (mockito's default
/// for unmatched requests), which the engine treats as a miss.
///
/// The returned mocks must be kept alive for as long as the site is needed.
pub fn serve_site(server: &mut ServerGuard, prefix: &str, files: &[(&str, &str)]) -> Vec<Mock> {
    files
        .iter()
        .flat_map(|(path, body)| {
            let full = format!("{}/{}", prefix.trim_end_matches('/'), path);
            let get = server
                .mock("GET", full.as_str())
                .with_status(200)
                .with_body(*body)
                .create();
            let head = server.mock("HEAD", full.as_str()).with_status(200).create();
            [get, head]
        })
        .collect()
}
