//! Rewrites legacy `update()` blocks that build a scratch object field by
//! field into `state.copyWith(...)` calls listing only the changed fields.

pub mod config;
pub mod error;
pub mod fileio;
pub mod parser;
pub mod rewrite;

pub use error::{Error, Result};
pub use parser::Markers;
pub use rewrite::{rewrite_document, rewrite_source, Rewrite, RewriteOptions, RewriteReport};

/// Log to stderr, `copywith_fixer=info` unless `RUST_LOG` says otherwise.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("copywith_fixer=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
