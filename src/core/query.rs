//! Sized attribute queries.
//!
//! Every `clGet*Info` attribute is read the same way: ask for the size,
//! allocate exactly that, ask again into the buffer. Both calls go through
//! [`check_status`], so an unsupported parameter and a driver fault fail
//! the same way.

use crate::core::driver::OpenClApi;
use crate::core::status::check_status;
use crate::core::types::{DeviceId, DeviceParam, PlatformId, PlatformParam};
use crate::error::{ClprobeError, Result};
use crate::platform::opencl::ffi::{self, ClDeviceInfo, ClInt, ClPlatformInfo};

/// Run the size-then-fetch sequence against one native query
///
/// `invoke` receives `(value, value_size)` exactly like the native
/// `param_value`/`param_value_size_ret` pair. A required size of zero
/// yields an empty buffer.
#[track_caller]
pub fn query_attribute<F>(call: &str, mut invoke: F) -> Result<Vec<u8>>
where
    F: FnMut(Option<&mut [u8]>, Option<&mut usize>) -> ClInt,
{
    let mut size = 0usize;
    check_status(invoke(None, Some(&mut size)), call)?;

    let mut buffer = vec![0u8; size];
    check_status(invoke(Some(&mut buffer[..]), None), call)?;

    Ok(buffer)
}

/// Raw bytes of a platform attribute
#[track_caller]
pub fn platform_attribute<A>(api: &A, platform: PlatformId, param: ClPlatformInfo) -> Result<Vec<u8>>
where
    A: OpenClApi + ?Sized,
{
    let call = platform_call(param);
    query_attribute(&call, |value, size| {
        api.platform_info(platform, param, value, size)
    })
}

/// Raw bytes of a device attribute
#[track_caller]
pub fn device_attribute<A>(api: &A, device: DeviceId, param: ClDeviceInfo) -> Result<Vec<u8>>
where
    A: OpenClApi + ?Sized,
{
    let call = device_call(param);
    query_attribute(&call, |value, size| {
        api.device_info(device, param, value, size)
    })
}

#[track_caller]
pub fn platform_text<A>(api: &A, platform: PlatformId, param: PlatformParam) -> Result<String>
where
    A: OpenClApi + ?Sized,
{
    Ok(decode_text(&platform_attribute(api, platform, param.id())?))
}

#[track_caller]
pub fn device_text<A>(api: &A, device: DeviceId, param: DeviceParam) -> Result<String>
where
    A: OpenClApi + ?Sized,
{
    Ok(decode_text(&device_attribute(api, device, param.id())?))
}

/// Device attribute declared as `cl_ulong` or `cl_bitfield`
#[track_caller]
pub fn device_u64<A>(api: &A, device: DeviceId, param: DeviceParam) -> Result<u64>
where
    A: OpenClApi + ?Sized,
{
    let bytes = device_attribute(api, device, param.id())?;
    decode_u64(&bytes, &device_call(param.id()))
}

/// Device attribute declared as `size_t`
#[track_caller]
pub fn device_usize<A>(api: &A, device: DeviceId, param: DeviceParam) -> Result<usize>
where
    A: OpenClApi + ?Sized,
{
    let bytes = device_attribute(api, device, param.id())?;
    decode_usize(&bytes, &device_call(param.id()))
}

/// Decode a `char[]` attribute. Stops at the first NUL; invalid UTF-8 is replaced.
pub fn decode_text(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end]).into_owned()
}

pub fn decode_u64(bytes: &[u8], attribute: &str) -> Result<u64> {
    let raw: [u8; 8] = bytes
        .try_into()
        .map_err(|_| ClprobeError::malformed_attribute(attribute, 8, bytes.len()))?;
    Ok(u64::from_ne_bytes(raw))
}

pub fn decode_usize(bytes: &[u8], attribute: &str) -> Result<usize> {
    const WIDTH: usize = std::mem::size_of::<usize>();
    let raw: [u8; WIDTH] = bytes
        .try_into()
        .map_err(|_| ClprobeError::malformed_attribute(attribute, WIDTH, bytes.len()))?;
    Ok(usize::from_ne_bytes(raw))
}

fn platform_call(param: ClPlatformInfo) -> String {
    match ffi::platform_param_name(param) {
        Some(name) => format!("clGetPlatformInfo({})", name),
        None => format!("clGetPlatformInfo({:#x})", param),
    }
}

fn device_call(param: ClDeviceInfo) -> String {
    match ffi::device_param_name(param) {
        Some(name) => format!("clGetDeviceInfo({})", name),
        None => format!("clGetDeviceInfo({:#x})", param),
    }
}
