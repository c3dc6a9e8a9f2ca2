/*! Integration tests for dotpath.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - path: Tests for path parsing and the path! macro
 * - read: Tests for path resolution, fan-out and fallbacks
 * - write: Tests for path assignment and container creation
 * - json: Tests for JSON interop across read and write
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("dotpath=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod json;
mod path;
mod read;
mod write;
