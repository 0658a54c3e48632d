use std::path::PathBuf;

/// How the inventory is written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Runtime configuration, built from command-line arguments
#[derive(Debug, Clone, Default)]
pub struct ProbeConfig {
    /// Libraries to try before the platform defaults
    pub library_paths: Vec<PathBuf>,
    pub format: OutputFormat,
    pub verbose: bool,
}

impl ProbeConfig {
    /// Candidate OpenCL libraries in load order: explicit paths first, then
    /// the platform's default ICD loader names.
    pub fn library_candidates(&self) -> Vec<PathBuf> {
        self.library_paths
            .iter()
            .cloned()
            .chain(default_library_names().iter().map(PathBuf::from))
            .collect()
    }

    pub fn log_level(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        }
    }
}

#[cfg(target_os = "windows")]
pub fn default_library_names() -> &'static [&'static str] {
    &["OpenCL.dll"]
}

#[cfg(target_os = "macos")]
pub fn default_library_names() -> &'static [&'static str] {
    &["/System/Library/Frameworks/OpenCL.framework/OpenCL"]
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
pub fn default_library_names() -> &'static [&'static str] {
    &["libOpenCL.so.1", "libOpenCL.so"]
}
