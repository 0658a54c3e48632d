use clprobe::core::query::{device_attribute, platform_attribute};
use clprobe::core::{DeviceId, PlatformId};
use clprobe::platform::opencl::ffi;
use clprobe::platform::opencl::{MockCall, MockDevice, MockOpenCl, MockPlatform};
use clprobe::{collect_inventory, ClprobeError};

fn populated() -> MockOpenCl {
    MockOpenCl::new().with_platform(
        MockPlatform::new("MockPlatform", "MockVendor").with_device(
            MockDevice::gpu("Mock GPU")
                .global_mem_size(1 << 30)
                .max_mem_alloc_size(1 << 28)
                .max_work_group_size(256),
        ),
    )
}

#[test]
fn test_driver_unavailable_is_reported_once_before_enumeration() {
    let mock = MockOpenCl::unavailable().with_platform(MockPlatform::new("P", "V"));
    let err = collect_inventory(&mock).unwrap_err();

    assert!(matches!(err, ClprobeError::DriverUnavailable(_)));
    assert!(err.to_string().starts_with("Can't init OpenCL driver"));
    assert!(mock.calls().is_empty());
}

#[test]
fn test_every_call_kind_propagates_its_exact_code() {
    let cases = [
        (MockCall::PlatformCount, -6),
        (MockCall::PlatformFetch, -30),
        (MockCall::PlatformInfo(ffi::CL_PLATFORM_NAME), -32),
        (MockCall::PlatformInfo(ffi::CL_PLATFORM_VENDOR), -5),
        (MockCall::DeviceCount, -1),
        (MockCall::DeviceFetch, -33),
        (MockCall::DeviceInfo(ffi::CL_DEVICE_NAME), -30),
        (MockCall::DeviceInfo(ffi::CL_DEVICE_TYPE), -59),
        (MockCall::DeviceInfo(ffi::CL_DEVICE_GLOBAL_MEM_SIZE), -4242),
        (MockCall::DeviceInfo(ffi::CL_DEVICE_MAX_MEM_ALLOC_SIZE), 17),
        (MockCall::DeviceInfo(ffi::CL_DEVICE_MAX_WORK_GROUP_SIZE), -1001),
    ];

    for (call, code) in cases {
        let mock = populated().failing(call, code);
        let err = collect_inventory(&mock).unwrap_err();
        assert_eq!(err.status_code(), Some(code), "call {:?}", call);
    }
}

#[test]
fn test_failure_message_names_call_and_location() {
    let mock = populated().failing(
        MockCall::DeviceInfo(ffi::CL_DEVICE_NAME),
        ffi::CL_INVALID_DEVICE,
    );
    let message = collect_inventory(&mock).unwrap_err().to_string();

    assert!(message.contains("-33"), "{}", message);
    assert!(message.contains("CL_INVALID_DEVICE"), "{}", message);
    assert!(message.contains("clGetDeviceInfo(CL_DEVICE_NAME)"), "{}", message);
    assert!(message.contains(".rs:"), "{}", message);
}

#[test]
fn test_unsupported_parameter_uses_generic_failure_path() {
    let mock = populated();

    let err = platform_attribute(&mock, PlatformId(1), 239).unwrap_err();
    assert_eq!(err.status_code(), Some(ffi::CL_INVALID_VALUE));

    let err = device_attribute(&mock, DeviceId((1 << 16) | 1), 0x7777).unwrap_err();
    assert_eq!(err.status_code(), Some(ffi::CL_INVALID_VALUE));
    assert!(err.to_string().contains("clGetDeviceInfo(0x7777)"));
}

#[test]
fn test_zero_sized_text_attribute_is_not_an_error() {
    let mock = MockOpenCl::new().with_platform(
        MockPlatform::new("P", "V")
            .raw_attribute(ffi::CL_PLATFORM_NAME, Vec::new())
            .with_device(MockDevice::cpu("c").raw_attribute(ffi::CL_DEVICE_NAME, Vec::new())),
    );

    let inventory = collect_inventory(&mock).unwrap();
    assert_eq!(inventory.platforms[0].name, "");
    assert_eq!(inventory.platforms[0].devices[0].name, "");
}
