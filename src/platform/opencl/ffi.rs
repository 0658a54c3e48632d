//! Raw OpenCL 1.2 type definitions and constants.
//!
//! Only the subset needed for platform/device discovery is declared here.
//! Values follow the Khronos `CL/cl.h` and `CL/cl_ext.h` headers.

use std::ffi::c_void;

pub type ClInt = i32;
pub type ClUint = u32;
pub type ClUlong = u64;
pub type ClBitfield = ClUlong;
pub type ClDeviceType = ClBitfield;
pub type ClPlatformInfo = ClUint;
pub type ClDeviceInfo = ClUint;

pub type ClPlatformId = *mut c_void;
pub type ClDeviceId = *mut c_void;

// Status codes
pub const CL_SUCCESS: ClInt = 0;
pub const CL_DEVICE_NOT_FOUND: ClInt = -1;
pub const CL_OUT_OF_RESOURCES: ClInt = -5;
pub const CL_OUT_OF_HOST_MEMORY: ClInt = -6;
pub const CL_INVALID_VALUE: ClInt = -30;
pub const CL_INVALID_PLATFORM: ClInt = -32;
pub const CL_INVALID_DEVICE: ClInt = -33;
pub const CL_PLATFORM_NOT_FOUND_KHR: ClInt = -1001;

// Platform info
pub const CL_PLATFORM_PROFILE: ClPlatformInfo = 0x0900;
pub const CL_PLATFORM_VERSION: ClPlatformInfo = 0x0901;
pub const CL_PLATFORM_NAME: ClPlatformInfo = 0x0902;
pub const CL_PLATFORM_VENDOR: ClPlatformInfo = 0x0903;

// Device types
pub const CL_DEVICE_TYPE_DEFAULT: ClDeviceType = 1 << 0;
pub const CL_DEVICE_TYPE_CPU: ClDeviceType = 1 << 1;
pub const CL_DEVICE_TYPE_GPU: ClDeviceType = 1 << 2;
pub const CL_DEVICE_TYPE_ACCELERATOR: ClDeviceType = 1 << 3;
pub const CL_DEVICE_TYPE_ALL: ClDeviceType = 0xFFFF_FFFF;

// Device info
pub const CL_DEVICE_TYPE: ClDeviceInfo = 0x1000;
pub const CL_DEVICE_MAX_WORK_GROUP_SIZE: ClDeviceInfo = 0x1004;
pub const CL_DEVICE_MAX_MEM_ALLOC_SIZE: ClDeviceInfo = 0x1010;
pub const CL_DEVICE_GLOBAL_MEM_SIZE: ClDeviceInfo = 0x101F;
pub const CL_DEVICE_NAME: ClDeviceInfo = 0x102B;

// Entry point signatures
pub type ClGetPlatformIdsFn =
    unsafe extern "system" fn(ClUint, *mut ClPlatformId, *mut ClUint) -> ClInt;
pub type ClGetDeviceIdsFn = unsafe extern "system" fn(
    ClPlatformId,
    ClDeviceType,
    ClUint,
    *mut ClDeviceId,
    *mut ClUint,
) -> ClInt;
pub type ClGetPlatformInfoFn =
    unsafe extern "system" fn(ClPlatformId, ClPlatformInfo, usize, *mut c_void, *mut usize) -> ClInt;
pub type ClGetDeviceInfoFn =
    unsafe extern "system" fn(ClDeviceId, ClDeviceInfo, usize, *mut c_void, *mut usize) -> ClInt;

/// Symbolic name of an OpenCL status code.
pub fn status_name(code: ClInt) -> Option<&'static str> {
    let name = match code {
        0 => "CL_SUCCESS",
        -1 => "CL_DEVICE_NOT_FOUND",
        -2 => "CL_DEVICE_NOT_AVAILABLE",
        -3 => "CL_COMPILER_NOT_AVAILABLE",
        -4 => "CL_MEM_OBJECT_ALLOCATION_FAILURE",
        -5 => "CL_OUT_OF_RESOURCES",
        -6 => "CL_OUT_OF_HOST_MEMORY",
        -7 => "CL_PROFILING_INFO_NOT_AVAILABLE",
        -8 => "CL_MEM_COPY_OVERLAP",
        -9 => "CL_IMAGE_FORMAT_MISMATCH",
        -10 => "CL_IMAGE_FORMAT_NOT_SUPPORTED",
        -11 => "CL_BUILD_PROGRAM_FAILURE",
        -12 => "CL_MAP_FAILURE",
        -13 => "CL_MISALIGNED_SUB_BUFFER_OFFSET",
        -14 => "CL_EXEC_STATUS_ERROR_FOR_EVENTS_IN_WAIT_LIST",
        -15 => "CL_COMPILE_PROGRAM_FAILURE",
        -16 => "CL_LINKER_NOT_AVAILABLE",
        -17 => "CL_LINK_PROGRAM_FAILURE",
        -18 => "CL_DEVICE_PARTITION_FAILED",
        -19 => "CL_KERNEL_ARG_INFO_NOT_AVAILABLE",
        -30 => "CL_INVALID_VALUE",
        -31 => "CL_INVALID_DEVICE_TYPE",
        -32 => "CL_INVALID_PLATFORM",
        -33 => "CL_INVALID_DEVICE",
        -34 => "CL_INVALID_CONTEXT",
        -35 => "CL_INVALID_QUEUE_PROPERTIES",
        -36 => "CL_INVALID_COMMAND_QUEUE",
        -37 => "CL_INVALID_HOST_PTR",
        -38 => "CL_INVALID_MEM_OBJECT",
        -39 => "CL_INVALID_IMAGE_FORMAT_DESCRIPTOR",
        -40 => "CL_INVALID_IMAGE_SIZE",
        -41 => "CL_INVALID_SAMPLER",
        -42 => "CL_INVALID_BINARY",
        -43 => "CL_INVALID_BUILD_OPTIONS",
        -44 => "CL_INVALID_PROGRAM",
        -45 => "CL_INVALID_PROGRAM_EXECUTABLE",
        -46 => "CL_INVALID_KERNEL_NAME",
        -47 => "CL_INVALID_KERNEL_DEFINITION",
        -48 => "CL_INVALID_KERNEL",
        -49 => "CL_INVALID_ARG_INDEX",
        -50 => "CL_INVALID_ARG_VALUE",
        -51 => "CL_INVALID_ARG_SIZE",
        -52 => "CL_INVALID_KERNEL_ARGS",
        -53 => "CL_INVALID_WORK_DIMENSION",
        -54 => "CL_INVALID_WORK_GROUP_SIZE",
        -55 => "CL_INVALID_WORK_ITEM_SIZE",
        -56 => "CL_INVALID_GLOBAL_OFFSET",
        -57 => "CL_INVALID_EVENT_WAIT_LIST",
        -58 => "CL_INVALID_EVENT",
        -59 => "CL_INVALID_OPERATION",
        -60 => "CL_INVALID_GL_OBJECT",
        -61 => "CL_INVALID_BUFFER_SIZE",
        -62 => "CL_INVALID_MIP_LEVEL",
        -63 => "CL_INVALID_GLOBAL_WORK_SIZE",
        -64 => "CL_INVALID_PROPERTY",
        -65 => "CL_INVALID_IMAGE_DESCRIPTOR",
        -66 => "CL_INVALID_COMPILER_OPTIONS",
        -67 => "CL_INVALID_LINKER_OPTIONS",
        -68 => "CL_INVALID_DEVICE_PARTITION_COUNT",
        -1001 => "CL_PLATFORM_NOT_FOUND_KHR",
        _ => return None,
    };
    Some(name)
}

/// `CL_*` label of a platform info parameter, if known.
pub fn platform_param_name(param: ClPlatformInfo) -> Option<&'static str> {
    match param {
        CL_PLATFORM_PROFILE => Some("CL_PLATFORM_PROFILE"),
        CL_PLATFORM_VERSION => Some("CL_PLATFORM_VERSION"),
        CL_PLATFORM_NAME => Some("CL_PLATFORM_NAME"),
        CL_PLATFORM_VENDOR => Some("CL_PLATFORM_VENDOR"),
        _ => None,
    }
}

/// `CL_*` label of a device info parameter, if known.
pub fn device_param_name(param: ClDeviceInfo) -> Option<&'static str> {
    match param {
        CL_DEVICE_TYPE => Some("CL_DEVICE_TYPE"),
        CL_DEVICE_MAX_WORK_GROUP_SIZE => Some("CL_DEVICE_MAX_WORK_GROUP_SIZE"),
        CL_DEVICE_MAX_MEM_ALLOC_SIZE => Some("CL_DEVICE_MAX_MEM_ALLOC_SIZE"),
        CL_DEVICE_GLOBAL_MEM_SIZE => Some("CL_DEVICE_GLOBAL_MEM_SIZE"),
        CL_DEVICE_NAME => Some("CL_DEVICE_NAME"),
        _ => None,
    }
}
