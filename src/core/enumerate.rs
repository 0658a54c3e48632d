use crate::core::driver::OpenClApi;
use crate::core::status::check_status;
use crate::core::types::{DeviceId, PlatformId};
use crate::error::Result;
use crate::platform::opencl::ffi::{self, ClInt};
use log::debug;

/// Run the count-then-fetch sequence against one native listing call
///
/// `invoke` receives `(ids, count)` like the native `platforms`/
/// `num_platforms` pair. A count of zero returns an empty list without a
/// fetch call, since the native API rejects a zero-capacity output array.
#[track_caller]
pub fn count_then_fetch<T, F>(call: &str, placeholder: T, mut invoke: F) -> Result<Vec<T>>
where
    T: Clone,
    F: FnMut(Option<&mut [T]>, Option<&mut u32>) -> ClInt,
{
    let mut count = 0u32;
    check_status(invoke(None, Some(&mut count)), call)?;

    if count == 0 {
        return Ok(Vec::new());
    }

    let mut ids = vec![placeholder; count as usize];
    check_status(invoke(Some(&mut ids[..]), None), call)?;

    Ok(ids)
}

/// List the installed platforms in driver order
#[track_caller]
pub fn enumerate_platforms<A>(api: &A) -> Result<Vec<PlatformId>>
where
    A: OpenClApi + ?Sized,
{
    let platforms = count_then_fetch("clGetPlatformIDs", PlatformId(0), |ids, count| {
        api.platform_ids(ids, count)
    })?;

    debug!("Found {} OpenCL platform(s)", platforms.len());
    Ok(platforms)
}

/// List every device of one platform in driver order
#[track_caller]
pub fn enumerate_devices<A>(api: &A, platform: PlatformId) -> Result<Vec<DeviceId>>
where
    A: OpenClApi + ?Sized,
{
    let devices = count_then_fetch("clGetDeviceIDs(CL_DEVICE_TYPE_ALL)", DeviceId(0), |ids, count| {
        api.device_ids(platform, ffi::CL_DEVICE_TYPE_ALL, ids, count)
    })?;

    debug!(
        "Platform {:#x} has {} device(s)",
        platform.0,
        devices.len()
    );
    Ok(devices)
}
