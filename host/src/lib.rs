//! Terminal host for the todo search widget.
//!
//! # Overview
//! Owns everything the core leaves out: configuration, logging, and the
//! HTTP round-trip. Each line read from input is one form submission; the
//! rendered view is written after mount, after the fetch resolves, and after
//! every submission.

pub mod config;
pub mod session;
pub mod transport;

pub use config::{Config, EmptyQueryArg, Format};
pub use session::{run, run_until, SessionSummary};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber. Logs go to stderr so stdout carries only
/// rendered views.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_search=info,todo_search_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
