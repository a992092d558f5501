//! Tracing configuration.
//!
//! Supports three output formats controlled by `TYPEREVEAL_LOG_FORMAT`:
//!
//! - `text` (default): Standard `tracing-subscriber` flat output
//! - `tree`: Hierarchical indented output via `tracing-tree`
//! - `json`: One JSON object per span/event
//!
//! ```bash
//! TYPEREVEAL_LOG=debug TYPEREVEAL_LOG_FORMAT=tree host-binary
//! TYPEREVEAL_LOG="typereveal_inspections=trace" host-binary
//! ```
//!
//! The subscriber is only initialised when `TYPEREVEAL_LOG` (or `RUST_LOG`)
//! is set.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Tree,
    Json,
}

impl LogFormat {
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    fn from_env() -> Self {
        Self::parse(&std::env::var("TYPEREVEAL_LOG_FORMAT").unwrap_or_default())
    }
}

/// `TYPEREVEAL_LOG` takes precedence over `RUST_LOG` when both are set.
fn build_filter() -> EnvFilter {
    if let Ok(val) = std::env::var("TYPEREVEAL_LOG") {
        EnvFilter::builder().parse_lossy(val)
    } else {
        EnvFilter::from_default_env()
    }
}

/// Initialise the global tracing subscriber, writing to stderr.
///
/// Does nothing when neither `TYPEREVEAL_LOG` nor `RUST_LOG` is set, or when
/// the host already installed a subscriber. Returns whether a subscriber was
/// installed by this call.
pub fn init_tracing() -> bool {
    let has_own_log = std::env::var("TYPEREVEAL_LOG").is_ok();
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !has_own_log && !has_rust_log {
        return false;
    }

    let filter = build_filter();
    let result = match LogFormat::from_env() {
        LogFormat::Tree => {
            let tree_layer = tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_targets(true)
                .with_writer(std::io::stderr);
            Registry::default().with(filter).with(tree_layer).try_init()
        }
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);
            Registry::default().with(filter).with(json_layer).try_init()
        }
        LogFormat::Text => {
            let text_layer = fmt::layer().with_writer(std::io::stderr);
            Registry::default().with(filter).with(text_layer).try_init()
        }
    };
    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
        return false;
    }
    true
}
