pub mod collector;
pub mod config;
pub mod driver;
pub mod enumerate;
pub mod query;
pub mod status;
pub mod types;

pub use collector::collect_inventory;
pub use config::{OutputFormat, ProbeConfig};
pub use driver::OpenClApi;
pub use types::*;
