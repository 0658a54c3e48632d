//! OpenCL-specific platform code.
//!
//! Provides the runtime-loaded driver and an in-memory stand-in, both
//! implementing [`crate::core::OpenClApi`].

pub mod ffi;
pub mod loader;
pub mod mock;

pub use loader::DynamicOpenCl;
pub use mock::{MockCall, MockDevice, MockOpenCl, MockPlatform};
