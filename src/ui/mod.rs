// UI and formatting module

pub mod report;

// Re-export commonly used items for cleaner imports
pub use report::{format_megabytes, write_json, write_text};
