use crate::core::driver::OpenClApi;
use crate::core::enumerate::{enumerate_devices, enumerate_platforms};
use crate::core::query::{device_text, device_u64, device_usize, platform_text};
use crate::core::types::*;
use crate::error::{ClprobeError, Result};
use log::debug;

/// Collect the full platform/device inventory
///
/// Checks the driver gate first, then walks platforms and their devices.
/// Any failing native call aborts the whole pass; no partial inventory is
/// returned.
pub fn collect_inventory<A>(api: &A) -> Result<Inventory>
where
    A: OpenClApi + ?Sized,
{
    if !api.is_usable() {
        return Err(ClprobeError::driver_unavailable(
            "no usable OpenCL library could be loaded",
        ));
    }

    let platforms = enumerate_platforms(api)?
        .into_iter()
        .map(|platform| collect_platform(api, platform))
        .collect::<Result<Vec<_>>>()?;

    Ok(Inventory { platforms })
}

fn collect_platform<A>(api: &A, platform: PlatformId) -> Result<PlatformInfo>
where
    A: OpenClApi + ?Sized,
{
    let name = platform_text(api, platform, PlatformParam::Name)?;
    let vendor = platform_text(api, platform, PlatformParam::Vendor)?;
    debug!("Platform {:#x}: {} ({})", platform.0, name, vendor);

    let devices = enumerate_devices(api, platform)?
        .into_iter()
        .map(|device| collect_device(api, device))
        .collect::<Result<Vec<_>>>()?;

    Ok(PlatformInfo {
        name,
        vendor,
        devices,
    })
}

fn collect_device<A>(api: &A, device: DeviceId) -> Result<DeviceInfo>
where
    A: OpenClApi + ?Sized,
{
    let name = device_text(api, device, DeviceParam::Name)?;
    let category = DeviceCategory::from_raw(device_u64(api, device, DeviceParam::Type)?);
    let global_mem_bytes = device_u64(api, device, DeviceParam::GlobalMemSize)?;
    let max_mem_alloc_bytes = device_u64(api, device, DeviceParam::MaxMemAllocSize)?;
    let max_work_group_size = device_usize(api, device, DeviceParam::MaxWorkGroupSize)?;

    Ok(DeviceInfo {
        name,
        category,
        global_mem_bytes,
        max_mem_alloc_bytes,
        max_work_group_size,
    })
}
