// clprobe Library - Public API

// Re-export error types
pub mod error;
pub use error::{ClprobeError, Result};

// Module declarations
pub mod commands;
pub mod core;
pub mod platform;
pub mod ui;

// Re-export commonly used types
pub use crate::core::config::{OutputFormat, ProbeConfig};
pub use crate::core::{collect_inventory, Inventory, OpenClApi};

// Initialize logging
pub fn init_logging(level: log::LevelFilter) {
    // RUST_LOG, when set, overrides the level chosen on the command line
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
