//! Test logging for the euchre workspace.
//!
//! Installed once per test binary: the engine's unit tests call it from the
//! ctor hook in `apps/engine/src/lib.rs`, and each integration test binary
//! (`tests/game.rs`, `tests/domain_prop_tests.rs`) does the same through
//! `tests/common/mod.rs`. Move rejections log at debug and hand scoring at
//! info, so `TEST_LOG=euchre_engine=debug` replays a failing game move by move.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static SUBSCRIBER: OnceCell<()> = OnceCell::new();

/// Env var read before `RUST_LOG` so test verbosity can differ from the CLI's.
pub const TEST_LOG_VAR: &str = "TEST_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Filter directive for tests: `TEST_LOG`, then `RUST_LOG`, then `warn`.
pub fn filter_directive() -> String {
    std::env::var(TEST_LOG_VAR)
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| DEFAULT_FILTER.to_string())
}

/// Install the test subscriber. Safe to call from every test binary and thread.
pub fn init() {
    SUBSCRIBER.get_or_init(|| {
        let filter =
            EnvFilter::try_new(filter_directive()).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // Another subscriber may already be global; tests keep it.
        let _ = fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .with_target(false)
            .try_init();
    });
}
