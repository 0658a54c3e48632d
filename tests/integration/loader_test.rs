use clprobe::commands::probe::run;
use clprobe::platform::opencl::DynamicOpenCl;
use clprobe::{ClprobeError, OpenClApi, OutputFormat};
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_unloadable_driver_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("libOpenCL.so.1");
    let driver = DynamicOpenCl::new(vec![missing]);

    let mut out = Vec::new();
    let err = run(&driver, OutputFormat::Text, false, &mut out).unwrap_err();

    assert!(out.is_empty());
    assert!(matches!(
        err.downcast_ref::<ClprobeError>(),
        Some(ClprobeError::DriverUnavailable(_))
    ));
}

#[test]
fn test_gate_outcome_is_stable() {
    let driver = DynamicOpenCl::new(vec![PathBuf::from("/nonexistent/libOpenCL.so")]);

    assert!(!driver.is_usable());
    assert!(!driver.is_usable());
    assert!(driver.loaded_from().is_none());
}
