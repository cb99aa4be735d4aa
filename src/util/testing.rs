//! Test helpers shared by unit and integration tests

use std::sync::Once;

use tracing::debug;
use tracing_subscriber::{fmt, fmt::format::FmtSpan, prelude::*, EnvFilter};

static TEST_SETUP: Once = Once::new();

/// Install a test subscriber once per process.
///
/// `RUST_LOG` wins when set; otherwise our own targets log at debug.
pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("navtree=debug"));

        let subscriber = tracing_subscriber::registry().with(
            fmt::layer()
                .with_test_writer()
                .with_target(true)
                .with_span_events(FmtSpan::CLOSE)
                .with_filter(env_filter),
        );

        if tracing::dispatcher::has_been_set() {
            debug!("Tracing subscriber already set");
        } else if let Err(e) = subscriber.try_init() {
            eprintln!("Error: Failed to set up logging: {}", e);
        }
        debug!("Test setup complete");
    });
}

/// Sample tree used across tests: two top-level sections, one nested level.
pub fn sample_nav_json() -> &'static str {
    r#"{
  "collections": {
    "nav": [
      {
        "title": "Intro",
        "url": "/intro/",
        "order": 1,
        "children": [
          { "title": "Basics", "url": "/intro/basics/", "parent": "Intro" },
          { "title": "Setup", "url": "/intro/setup/", "parent": "Intro", "order": 2 }
        ]
      },
      { "title": "Reference", "url": "/reference/" }
    ]
  }
}"#
}
