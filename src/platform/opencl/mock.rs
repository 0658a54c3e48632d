//! In-memory OpenCL layer.
//!
//! Behaves like a well-formed driver: handles are stable for the life of
//! the value, info queries follow the size-discovery contract of
//! `clGetPlatformInfo`/`clGetDeviceInfo`, and unknown parameters return
//! `CL_INVALID_VALUE`. Failures can be injected per call kind, and every
//! call is recorded so tests can assert the two-call protocols.

use super::ffi::{self, ClDeviceInfo, ClDeviceType, ClInt, ClPlatformInfo};
use crate::core::driver::OpenClApi;
use crate::core::types::{DeviceId, PlatformId};
use std::cell::RefCell;
use std::collections::HashMap;

/// A native call as seen by the mock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockCall {
    /// `clGetPlatformIDs` with no output array
    PlatformCount,
    /// `clGetPlatformIDs` with an output array
    PlatformFetch,
    /// `clGetDeviceIDs` with no output array
    DeviceCount,
    /// `clGetDeviceIDs` with an output array
    DeviceFetch,
    /// `clGetPlatformInfo` for a parameter
    PlatformInfo(ClPlatformInfo),
    /// `clGetDeviceInfo` for a parameter
    DeviceInfo(ClDeviceInfo),
}

/// Mock device with its raw attribute table
#[derive(Debug, Clone)]
pub struct MockDevice {
    device_type: ClDeviceType,
    attributes: HashMap<ClDeviceInfo, Vec<u8>>,
}

impl MockDevice {
    pub fn new(name: &str, device_type: ClDeviceType) -> Self {
        let mut attributes = HashMap::new();
        attributes.insert(ffi::CL_DEVICE_NAME, nul_terminated(name));
        attributes.insert(ffi::CL_DEVICE_TYPE, device_type.to_ne_bytes().to_vec());
        attributes.insert(ffi::CL_DEVICE_GLOBAL_MEM_SIZE, 0u64.to_ne_bytes().to_vec());
        attributes.insert(ffi::CL_DEVICE_MAX_MEM_ALLOC_SIZE, 0u64.to_ne_bytes().to_vec());
        attributes.insert(ffi::CL_DEVICE_MAX_WORK_GROUP_SIZE, 1usize.to_ne_bytes().to_vec());

        Self {
            device_type,
            attributes,
        }
    }

    pub fn gpu(name: &str) -> Self {
        Self::new(name, ffi::CL_DEVICE_TYPE_GPU)
    }

    pub fn cpu(name: &str) -> Self {
        Self::new(name, ffi::CL_DEVICE_TYPE_CPU)
    }

    pub fn global_mem_size(self, bytes: u64) -> Self {
        self.raw_attribute(ffi::CL_DEVICE_GLOBAL_MEM_SIZE, bytes.to_ne_bytes().to_vec())
    }

    pub fn max_mem_alloc_size(self, bytes: u64) -> Self {
        self.raw_attribute(ffi::CL_DEVICE_MAX_MEM_ALLOC_SIZE, bytes.to_ne_bytes().to_vec())
    }

    pub fn max_work_group_size(self, size: usize) -> Self {
        self.raw_attribute(ffi::CL_DEVICE_MAX_WORK_GROUP_SIZE, size.to_ne_bytes().to_vec())
    }

    /// Override the bytes returned for any parameter
    pub fn raw_attribute(mut self, param: ClDeviceInfo, bytes: Vec<u8>) -> Self {
        self.attributes.insert(param, bytes);
        self
    }
}

/// Mock platform with its raw attribute table and devices
#[derive(Debug, Clone)]
pub struct MockPlatform {
    attributes: HashMap<ClPlatformInfo, Vec<u8>>,
    devices: Vec<MockDevice>,
}

impl MockPlatform {
    pub fn new(name: &str, vendor: &str) -> Self {
        let mut attributes = HashMap::new();
        attributes.insert(ffi::CL_PLATFORM_NAME, nul_terminated(name));
        attributes.insert(ffi::CL_PLATFORM_VENDOR, nul_terminated(vendor));

        Self {
            attributes,
            devices: Vec::new(),
        }
    }

    pub fn with_device(mut self, device: MockDevice) -> Self {
        self.devices.push(device);
        self
    }

    /// Override the bytes returned for any parameter
    pub fn raw_attribute(mut self, param: ClPlatformInfo, bytes: Vec<u8>) -> Self {
        self.attributes.insert(param, bytes);
        self
    }
}

/// In-memory implementation of [`OpenClApi`]
#[derive(Debug)]
pub struct MockOpenCl {
    usable: bool,
    platforms: Vec<MockPlatform>,
    failures: Vec<(MockCall, ClInt)>,
    calls: RefCell<Vec<MockCall>>,
}

impl Default for MockOpenCl {
    fn default() -> Self {
        Self::new()
    }
}

impl MockOpenCl {
    /// A usable driver with no platforms
    pub fn new() -> Self {
        Self {
            usable: true,
            platforms: Vec::new(),
            failures: Vec::new(),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// A driver whose library could not be loaded
    pub fn unavailable() -> Self {
        Self {
            usable: false,
            ..Self::new()
        }
    }

    pub fn with_platform(mut self, platform: MockPlatform) -> Self {
        self.platforms.push(platform);
        self
    }

    /// Make every call of the given kind return `code`
    pub fn failing(mut self, call: MockCall, code: ClInt) -> Self {
        self.failures.push((call, code));
        self
    }

    /// All calls made so far, in order
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.borrow().clone()
    }

    /// How many times a call kind was made
    pub fn call_count(&self, call: MockCall) -> usize {
        self.calls.borrow().iter().filter(|c| **c == call).count()
    }

    fn record(&self, call: MockCall) -> Option<ClInt> {
        self.calls.borrow_mut().push(call);
        self.failures
            .iter()
            .find(|(c, _)| *c == call)
            .map(|(_, code)| *code)
    }

    fn platform(&self, id: PlatformId) -> Option<&MockPlatform> {
        id.0.checked_sub(1).and_then(|i| self.platforms.get(i))
    }

    fn device(&self, id: DeviceId) -> Option<&MockDevice> {
        let platform = (id.0 >> 16).checked_sub(1)?;
        let device = (id.0 & 0xFFFF).checked_sub(1)?;
        self.platforms.get(platform)?.devices.get(device)
    }
}

fn nul_terminated(text: &str) -> Vec<u8> {
    let mut bytes = text.as_bytes().to_vec();
    bytes.push(0);
    bytes
}

/// Shared count-then-fetch behaviour of `clGetPlatformIDs`/`clGetDeviceIDs`
fn fill_ids<T: Copy>(ids: &[T], out: Option<&mut [T]>, count: Option<&mut u32>) -> ClInt {
    if out.is_none() && count.is_none() {
        return ffi::CL_INVALID_VALUE;
    }
    if let Some(out) = out {
        if out.is_empty() {
            return ffi::CL_INVALID_VALUE;
        }
        let n = out.len().min(ids.len());
        out[..n].copy_from_slice(&ids[..n]);
    }
    if let Some(count) = count {
        *count = ids.len() as u32;
    }
    ffi::CL_SUCCESS
}

/// Shared size-discovery behaviour of `clGetPlatformInfo`/`clGetDeviceInfo`
fn fill_info(data: Option<&Vec<u8>>, value: Option<&mut [u8]>, value_size: Option<&mut usize>) -> ClInt {
    let Some(data) = data else {
        return ffi::CL_INVALID_VALUE;
    };
    if let Some(value) = value {
        if value.len() < data.len() {
            return ffi::CL_INVALID_VALUE;
        }
        value[..data.len()].copy_from_slice(data);
    }
    if let Some(size) = value_size {
        *size = data.len();
    }
    ffi::CL_SUCCESS
}

impl OpenClApi for MockOpenCl {
    fn is_usable(&self) -> bool {
        self.usable
    }

    fn platform_ids(
        &self,
        platforms: Option<&mut [PlatformId]>,
        num_platforms: Option<&mut u32>,
    ) -> ClInt {
        let call = if platforms.is_some() {
            MockCall::PlatformFetch
        } else {
            MockCall::PlatformCount
        };
        if let Some(code) = self.record(call) {
            return code;
        }

        let ids: Vec<PlatformId> = (1..=self.platforms.len()).map(PlatformId).collect();
        fill_ids(&ids, platforms, num_platforms)
    }

    fn device_ids(
        &self,
        platform: PlatformId,
        device_type: ClDeviceType,
        devices: Option<&mut [DeviceId]>,
        num_devices: Option<&mut u32>,
    ) -> ClInt {
        let call = if devices.is_some() {
            MockCall::DeviceFetch
        } else {
            MockCall::DeviceCount
        };
        if let Some(code) = self.record(call) {
            return code;
        }

        let Some(owner) = self.platform(platform) else {
            return ffi::CL_INVALID_PLATFORM;
        };
        let ids: Vec<DeviceId> = owner
            .devices
            .iter()
            .enumerate()
            .filter(|(_, d)| d.device_type & device_type != 0)
            .map(|(i, _)| DeviceId((platform.0 << 16) | (i + 1)))
            .collect();
        fill_ids(&ids, devices, num_devices)
    }

    fn platform_info(
        &self,
        platform: PlatformId,
        param: ClPlatformInfo,
        value: Option<&mut [u8]>,
        value_size: Option<&mut usize>,
    ) -> ClInt {
        if let Some(code) = self.record(MockCall::PlatformInfo(param)) {
            return code;
        }

        match self.platform(platform) {
            Some(p) => fill_info(p.attributes.get(&param), value, value_size),
            None => ffi::CL_INVALID_PLATFORM,
        }
    }

    fn device_info(
        &self,
        device: DeviceId,
        param: ClDeviceInfo,
        value: Option<&mut [u8]>,
        value_size: Option<&mut usize>,
    ) -> ClInt {
        if let Some(code) = self.record(MockCall::DeviceInfo(param)) {
            return code;
        }

        match self.device(device) {
            Some(d) => fill_info(d.attributes.get(&param), value, value_size),
            None => ffi::CL_INVALID_DEVICE,
        }
    }
}
