use crate::error::{ClprobeError, Result};
use crate::platform::opencl::ffi::{self, ClInt};
use std::panic::Location;

/// Translate a native status code into a `Result`
///
/// `CL_SUCCESS` passes through. Any other code becomes
/// [`ClprobeError::DriverCall`] tagged with the code, its symbolic name,
/// the native call label and the source location of the caller.
///
/// # Arguments
/// * `code` - Status returned by the native call
/// * `call` - What was called, e.g. `clGetDeviceInfo(CL_DEVICE_NAME)`
#[track_caller]
pub fn check_status(code: ClInt, call: impl Into<String>) -> Result<()> {
    if code == ffi::CL_SUCCESS {
        return Ok(());
    }

    let caller = Location::caller();
    let call = call.into();
    log::debug!("{} returned {} at {}", call, code, caller);

    Err(ClprobeError::DriverCall {
        code,
        name: ffi::status_name(code),
        call,
        location: format!("{}:{}", caller.file(), caller.line()),
    })
}
