use clprobe::commands::probe::run;
use clprobe::platform::opencl::ffi;
use clprobe::platform::opencl::{MockCall, MockDevice, MockOpenCl, MockPlatform};
use clprobe::OutputFormat;

fn render(mock: &MockOpenCl) -> anyhow::Result<String> {
    let mut out = Vec::new();
    run(mock, OutputFormat::Text, false, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn test_single_platform_without_devices() {
    let mock = MockOpenCl::new().with_platform(MockPlatform::new("MockPlatform", "MockVendor"));

    let report = render(&mock).unwrap();
    assert_eq!(
        report,
        "Number of OpenCL platforms: 1\n\
         Platform #1/1\n    \
         Platform name: MockPlatform\n    \
         Platform vendor: MockVendor\n    \
         Number of OpenCL devices: 0\n"
    );
}

#[test]
fn test_two_platforms_with_one_gpu_each() {
    let gpu = MockDevice::gpu("Mock GPU")
        .global_mem_size(1073741824)
        .max_mem_alloc_size(268435456)
        .max_work_group_size(512);
    let mock = MockOpenCl::new()
        .with_platform(MockPlatform::new("First", "VendorA").with_device(gpu.clone()))
        .with_platform(MockPlatform::new("Second", "VendorB").with_device(gpu));

    let report = render(&mock).unwrap();

    assert!(report.contains("Platform #1/2"));
    assert!(report.contains("Platform #2/2"));
    assert_eq!(report.matches("Platform device type: GPU").count(), 2);
    assert_eq!(
        report
            .matches("Platform device global memory size: 1024MB")
            .count(),
        2
    );
    assert_eq!(
        report
            .matches("Platform device max memory alloc size: 256MB")
            .count(),
        2
    );
    assert_eq!(
        report
            .matches("Platform device max work group size: 512")
            .count(),
        2
    );
}

#[test]
fn test_platform_count_failure_prints_nothing() {
    let mock = MockOpenCl::new()
        .with_platform(MockPlatform::new("MockPlatform", "MockVendor"))
        .failing(MockCall::PlatformCount, ffi::CL_OUT_OF_HOST_MEMORY);

    let mut out = Vec::new();
    let err = run(&mock, OutputFormat::Text, false, &mut out).unwrap_err();

    assert!(out.is_empty());
    let cause = err.downcast_ref::<clprobe::ClprobeError>().unwrap();
    assert_eq!(cause.status_code(), Some(ffi::CL_OUT_OF_HOST_MEMORY));
}

#[test]
fn test_late_failure_prints_nothing() {
    let mock = MockOpenCl::new()
        .with_platform(MockPlatform::new("ok", "V").with_device(MockDevice::cpu("c")))
        .with_platform(MockPlatform::new("bad", "V").with_device(MockDevice::gpu("g")))
        .failing(MockCall::DeviceInfo(ffi::CL_DEVICE_MAX_MEM_ALLOC_SIZE), -5);

    let mut out = Vec::new();
    assert!(run(&mock, OutputFormat::Text, false, &mut out).is_err());
    assert!(out.is_empty());
}

#[test]
fn test_unrecognized_category_is_reported_not_fatal() {
    let mock = MockOpenCl::new().with_platform(
        MockPlatform::new("P", "V")
            .with_device(MockDevice::new("custom", 1 << 4))
            .with_device(MockDevice::new("all", ffi::CL_DEVICE_TYPE_ALL)),
    );

    let report = render(&mock).unwrap();
    assert!(report.contains("Platform device type: UNRECOGNIZED(0x10)"));
    assert!(report.contains("Platform device type: ALL"));
}

#[test]
fn test_json_format() {
    let mock = MockOpenCl::new().with_platform(
        MockPlatform::new("MockPlatform", "MockVendor")
            .with_device(MockDevice::cpu("Mock CPU").global_mem_size(1 << 34)),
    );

    let mut out = Vec::new();
    run(&mock, OutputFormat::Json, false, &mut out).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

    assert_eq!(value["platforms"][0]["vendor"], "MockVendor");
    assert_eq!(value["platforms"][0]["devices"][0]["category"], "CPU");
    assert_eq!(
        value["platforms"][0]["devices"][0]["global_mem_bytes"],
        1u64 << 34
    );
}
