// Command handlers module
pub mod probe;

// Re-exports for cleaner imports
pub use probe::execute as probe;
