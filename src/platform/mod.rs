// Platform-specific code module

pub mod opencl;

// Re-exports for cleaner imports
pub use opencl::{DynamicOpenCl, MockOpenCl};
