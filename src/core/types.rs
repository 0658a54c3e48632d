use crate::platform::opencl::ffi::{self, ClDeviceInfo, ClDeviceType, ClPlatformInfo};
use serde::Serialize;
use std::fmt;

/// Opaque handle to an installed OpenCL platform.
///
/// Only meaningful to the driver that produced it, and only for the
/// enumeration pass that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlatformId(pub usize);

/// Opaque handle to a device owned by one platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeviceId(pub usize);

/// Platform attributes this tool reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformParam {
    Name,
    Vendor,
}

impl PlatformParam {
    pub fn id(self) -> ClPlatformInfo {
        match self {
            PlatformParam::Name => ffi::CL_PLATFORM_NAME,
            PlatformParam::Vendor => ffi::CL_PLATFORM_VENDOR,
        }
    }
}

/// Device attributes this tool reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceParam {
    Name,
    Type,
    GlobalMemSize,
    MaxMemAllocSize,
    MaxWorkGroupSize,
}

impl DeviceParam {
    pub fn id(self) -> ClDeviceInfo {
        match self {
            DeviceParam::Name => ffi::CL_DEVICE_NAME,
            DeviceParam::Type => ffi::CL_DEVICE_TYPE,
            DeviceParam::GlobalMemSize => ffi::CL_DEVICE_GLOBAL_MEM_SIZE,
            DeviceParam::MaxMemAllocSize => ffi::CL_DEVICE_MAX_MEM_ALLOC_SIZE,
            DeviceParam::MaxWorkGroupSize => ffi::CL_DEVICE_MAX_WORK_GROUP_SIZE,
        }
    }
}

/// Device category as reported by `CL_DEVICE_TYPE`
///
/// Values outside the known set are kept as `Unrecognized` so a driver
/// reporting a newer or combined type never aborts the enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeviceCategory {
    Default,
    Cpu,
    Gpu,
    Accelerator,
    All,
    Unrecognized(u64),
}

impl DeviceCategory {
    pub fn from_raw(raw: ClDeviceType) -> Self {
        match raw {
            ffi::CL_DEVICE_TYPE_DEFAULT => DeviceCategory::Default,
            ffi::CL_DEVICE_TYPE_CPU => DeviceCategory::Cpu,
            ffi::CL_DEVICE_TYPE_GPU => DeviceCategory::Gpu,
            ffi::CL_DEVICE_TYPE_ACCELERATOR => DeviceCategory::Accelerator,
            ffi::CL_DEVICE_TYPE_ALL => DeviceCategory::All,
            other => DeviceCategory::Unrecognized(other),
        }
    }
}

impl fmt::Display for DeviceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceCategory::Default => write!(f, "DEFAULT"),
            DeviceCategory::Cpu => write!(f, "CPU"),
            DeviceCategory::Gpu => write!(f, "GPU"),
            DeviceCategory::Accelerator => write!(f, "ACCELERATOR"),
            DeviceCategory::All => write!(f, "ALL"),
            DeviceCategory::Unrecognized(raw) => write!(f, "UNRECOGNIZED({:#x})", raw),
        }
    }
}

/// Everything discovered in one enumeration pass
#[derive(Debug, Clone, Default, Serialize)]
pub struct Inventory {
    pub platforms: Vec<PlatformInfo>,
}

/// Platform information
#[derive(Debug, Clone, Serialize)]
pub struct PlatformInfo {
    pub name: String,
    pub vendor: String,
    pub devices: Vec<DeviceInfo>,
}

/// Device information
#[derive(Debug, Clone, Serialize)]
pub struct DeviceInfo {
    pub name: String,
    pub category: DeviceCategory,
    pub global_mem_bytes: u64,
    pub max_mem_alloc_bytes: u64,
    pub max_work_group_size: usize,
}
