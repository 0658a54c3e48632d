use crate::core::types::{DeviceId, PlatformId};
use crate::platform::opencl::ffi::{ClDeviceInfo, ClDeviceType, ClInt, ClPlatformInfo};

/// Trait for the native OpenCL layer
///
/// Mirrors the four discovery entry points of the OpenCL runtime. Every
/// method returns the raw status code; translating it into a `Result` is
/// the caller's job (see [`crate::core::status::check_status`]).
///
/// Output parameters are optional the same way the native API accepts
/// `NULL`: pass `None` for the buffer to ask for the size or count only.
/// Implementations are provided in the platform layer.
pub trait OpenClApi {
    /// Check that the driver is loaded and its entry points are resolved
    fn is_usable(&self) -> bool;

    /// `clGetPlatformIDs`
    fn platform_ids(
        &self,
        platforms: Option<&mut [PlatformId]>,
        num_platforms: Option<&mut u32>,
    ) -> ClInt;

    /// `clGetDeviceIDs`
    fn device_ids(
        &self,
        platform: PlatformId,
        device_type: ClDeviceType,
        devices: Option<&mut [DeviceId]>,
        num_devices: Option<&mut u32>,
    ) -> ClInt;

    /// `clGetPlatformInfo`
    fn platform_info(
        &self,
        platform: PlatformId,
        param: ClPlatformInfo,
        value: Option<&mut [u8]>,
        value_size: Option<&mut usize>,
    ) -> ClInt;

    /// `clGetDeviceInfo`
    fn device_info(
        &self,
        device: DeviceId,
        param: ClDeviceInfo,
        value: Option<&mut [u8]>,
        value_size: Option<&mut usize>,
    ) -> ClInt;
}
