//! OpenCL runtime dynamic loading.
//!
//! The ICD loader (`libOpenCL.so.1`, `OpenCL.dll`, ...) is opened at
//! runtime so the binary starts on machines without any OpenCL install and
//! reports that cleanly instead of failing to link.

use super::ffi::{
    self, ClDeviceId, ClDeviceInfo, ClDeviceType, ClGetDeviceIdsFn, ClGetDeviceInfoFn,
    ClGetPlatformIdsFn, ClGetPlatformInfoFn, ClInt, ClPlatformId, ClPlatformInfo, ClUint,
};
use crate::core::config::ProbeConfig;
use crate::core::driver::OpenClApi;
use crate::core::types::{DeviceId, PlatformId};
use libloading::Library;
use log::{info, warn};
use once_cell::unsync::OnceCell;
use std::ffi::c_void;
use std::path::{Path, PathBuf};
use std::ptr;

/// OpenCL library function table.
struct OpenClLib {
    #[allow(dead_code)]
    lib: Library,
    path: PathBuf,

    get_platform_ids: ClGetPlatformIdsFn,
    get_device_ids: ClGetDeviceIdsFn,
    get_platform_info: ClGetPlatformInfoFn,
    get_device_info: ClGetDeviceInfoFn,
}

impl OpenClLib {
    fn load(path: &Path) -> Result<Self, String> {
        let lib = unsafe { Library::new(path) }.map_err(|e| format!("{}: {e}", path.display()))?;

        // Copy the function pointers out before moving lib into the struct.
        let get_platform_ids: ClGetPlatformIdsFn = unsafe {
            *lib.get::<ClGetPlatformIdsFn>(b"clGetPlatformIDs\0")
                .map_err(|e| format!("clGetPlatformIDs: {e}"))?
        };
        let get_device_ids: ClGetDeviceIdsFn = unsafe {
            *lib.get::<ClGetDeviceIdsFn>(b"clGetDeviceIDs\0")
                .map_err(|e| format!("clGetDeviceIDs: {e}"))?
        };
        let get_platform_info: ClGetPlatformInfoFn = unsafe {
            *lib.get::<ClGetPlatformInfoFn>(b"clGetPlatformInfo\0")
                .map_err(|e| format!("clGetPlatformInfo: {e}"))?
        };
        let get_device_info: ClGetDeviceInfoFn = unsafe {
            *lib.get::<ClGetDeviceInfoFn>(b"clGetDeviceInfo\0")
                .map_err(|e| format!("clGetDeviceInfo: {e}"))?
        };

        Ok(Self {
            lib,
            path: path.to_path_buf(),
            get_platform_ids,
            get_device_ids,
            get_platform_info,
            get_device_info,
        })
    }
}

/// OpenCL driver bound at runtime
///
/// The library is opened on the first [`OpenClApi::is_usable`] call and the
/// outcome is kept for the life of the value. Native calls made while no
/// library is loaded return `CL_PLATFORM_NOT_FOUND_KHR`, the same code the
/// ICD loader uses when no vendor driver is installed.
pub struct DynamicOpenCl {
    candidates: Vec<PathBuf>,
    lib: OnceCell<Option<OpenClLib>>,
}

impl DynamicOpenCl {
    /// Create a driver that will try `candidates` in order
    pub fn new(candidates: Vec<PathBuf>) -> Self {
        Self {
            candidates,
            lib: OnceCell::new(),
        }
    }

    pub fn from_config(config: &ProbeConfig) -> Self {
        Self::new(config.library_candidates())
    }

    /// Libraries this driver tries, in order
    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// Path of the library that was loaded, if any
    pub fn loaded_from(&self) -> Option<&Path> {
        self.library().map(|lib| lib.path.as_path())
    }

    fn library(&self) -> Option<&OpenClLib> {
        self.lib.get().and_then(Option::as_ref)
    }

    fn load_first(&self) -> Option<OpenClLib> {
        for path in &self.candidates {
            match OpenClLib::load(path) {
                Ok(lib) => {
                    info!("Loaded OpenCL driver from {}", path.display());
                    return Some(lib);
                }
                Err(e) => warn!("Failed to load OpenCL library {}", e),
            }
        }
        None
    }
}

fn out_ptr<T>(value: Option<&mut T>) -> *mut T {
    value.map_or(ptr::null_mut(), |v| v as *mut T)
}

fn buffer_ptr(value: Option<&mut [u8]>) -> (usize, *mut c_void) {
    match value {
        Some(buf) if !buf.is_empty() => (buf.len(), buf.as_mut_ptr() as *mut c_void),
        _ => (0, ptr::null_mut()),
    }
}

impl OpenClApi for DynamicOpenCl {
    fn is_usable(&self) -> bool {
        self.lib.get_or_init(|| self.load_first()).is_some()
    }

    fn platform_ids(
        &self,
        platforms: Option<&mut [PlatformId]>,
        num_platforms: Option<&mut u32>,
    ) -> ClInt {
        let Some(lib) = self.library() else {
            return ffi::CL_PLATFORM_NOT_FOUND_KHR;
        };

        let capacity = platforms.as_ref().map_or(0, |p| p.len());
        let mut raw: Vec<ClPlatformId> = vec![ptr::null_mut(); capacity];
        let raw_ptr = if raw.is_empty() {
            ptr::null_mut()
        } else {
            raw.as_mut_ptr()
        };

        let status =
            unsafe { (lib.get_platform_ids)(capacity as ClUint, raw_ptr, out_ptr(num_platforms)) };

        if let Some(platforms) = platforms {
            for (slot, id) in platforms.iter_mut().zip(&raw) {
                *slot = PlatformId(*id as usize);
            }
        }
        status
    }

    fn device_ids(
        &self,
        platform: PlatformId,
        device_type: ClDeviceType,
        devices: Option<&mut [DeviceId]>,
        num_devices: Option<&mut u32>,
    ) -> ClInt {
        let Some(lib) = self.library() else {
            return ffi::CL_PLATFORM_NOT_FOUND_KHR;
        };

        let capacity = devices.as_ref().map_or(0, |d| d.len());
        let mut raw: Vec<ClDeviceId> = vec![ptr::null_mut(); capacity];
        let raw_ptr = if raw.is_empty() {
            ptr::null_mut()
        } else {
            raw.as_mut_ptr()
        };

        let status = unsafe {
            (lib.get_device_ids)(
                platform.0 as ClPlatformId,
                device_type,
                capacity as ClUint,
                raw_ptr,
                out_ptr(num_devices),
            )
        };

        if let Some(devices) = devices {
            for (slot, id) in devices.iter_mut().zip(&raw) {
                *slot = DeviceId(*id as usize);
            }
        }
        status
    }

    fn platform_info(
        &self,
        platform: PlatformId,
        param: ClPlatformInfo,
        value: Option<&mut [u8]>,
        value_size: Option<&mut usize>,
    ) -> ClInt {
        let Some(lib) = self.library() else {
            return ffi::CL_PLATFORM_NOT_FOUND_KHR;
        };

        let (size, buf) = buffer_ptr(value);
        unsafe {
            (lib.get_platform_info)(
                platform.0 as ClPlatformId,
                param,
                size,
                buf,
                out_ptr(value_size),
            )
        }
    }

    fn device_info(
        &self,
        device: DeviceId,
        param: ClDeviceInfo,
        value: Option<&mut [u8]>,
        value_size: Option<&mut usize>,
    ) -> ClInt {
        let Some(lib) = self.library() else {
            return ffi::CL_PLATFORM_NOT_FOUND_KHR;
        };

        let (size, buf) = buffer_ptr(value);
        unsafe {
            (lib.get_device_info)(
                device.0 as ClDeviceId,
                param,
                size,
                buf,
                out_ptr(value_size),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_library_is_not_usable() {
        let driver = DynamicOpenCl::new(vec![PathBuf::from(
            "/nonexistent/path/libOpenCL-does-not-exist.so",
        )]);

        assert!(!driver.is_usable());
        assert!(driver.loaded_from().is_none());
    }

    #[test]
    fn test_non_library_file_is_not_usable() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not a shared object").unwrap();

        let driver = DynamicOpenCl::new(vec![file.path().to_path_buf()]);
        assert!(!driver.is_usable());
    }

    #[test]
    fn test_calls_without_library_report_platform_not_found() {
        let driver = DynamicOpenCl::new(Vec::new());
        assert!(!driver.is_usable());

        let mut count = 0;
        assert_eq!(
            driver.platform_ids(None, Some(&mut count)),
            ffi::CL_PLATFORM_NOT_FOUND_KHR
        );
        assert_eq!(
            driver.device_info(DeviceId(1), ffi::CL_DEVICE_NAME, None, Some(&mut 0)),
            ffi::CL_PLATFORM_NOT_FOUND_KHR
        );
    }

    #[test]
    fn test_candidates_from_config() {
        let config = ProbeConfig {
            library_paths: vec![PathBuf::from("/custom/libOpenCL.so")],
            ..Default::default()
        };
        let driver = DynamicOpenCl::from_config(&config);

        assert_eq!(driver.candidates()[0], PathBuf::from("/custom/libOpenCL.so"));
    }
}
