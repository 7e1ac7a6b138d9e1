//! Mock driver entry point table
//!
//! `vkGetInstanceProcAddr` for the mock driver: a static map from entry point
//! name to the function the mock implements.

use ash::vk;
use log::debug;
use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use std::ffi::CStr;
use std::os::raw::c_char;

use crate::mock;

/// Entry points the mock driver resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntryPoint {
    GetPhysicalDeviceFeatures2,
    GetPhysicalDeviceProperties2,
    GetPhysicalDeviceImageFormatProperties2,
    EnumerateDeviceExtensionProperties,
}

impl EntryPoint {
    pub const ALL: [EntryPoint; 4] = [
        EntryPoint::GetPhysicalDeviceFeatures2,
        EntryPoint::GetPhysicalDeviceProperties2,
        EntryPoint::GetPhysicalDeviceImageFormatProperties2,
        EntryPoint::EnumerateDeviceExtensionProperties,
    ];

    pub fn name(self) -> &'static CStr {
        match self {
            EntryPoint::GetPhysicalDeviceFeatures2 => c"vkGetPhysicalDeviceFeatures2KHR",
            EntryPoint::GetPhysicalDeviceProperties2 => c"vkGetPhysicalDeviceProperties2KHR",
            EntryPoint::GetPhysicalDeviceImageFormatProperties2 => {
                c"vkGetPhysicalDeviceImageFormatProperties2KHR"
            }
            EntryPoint::EnumerateDeviceExtensionProperties => {
                c"vkEnumerateDeviceExtensionProperties"
            }
        }
    }

    pub fn lookup(name: &CStr) -> Option<Self> {
        ENTRY_POINTS.get(name.to_bytes()).copied()
    }

    /// The mock implementation, erased to `PFN_vkVoidFunction`.
    pub fn as_void_function(self) -> vk::PFN_vkVoidFunction {
        unsafe {
            match self {
                EntryPoint::GetPhysicalDeviceFeatures2 => std::mem::transmute(
                    mock::get_physical_device_features2 as vk::PFN_vkGetPhysicalDeviceFeatures2,
                ),
                EntryPoint::GetPhysicalDeviceProperties2 => std::mem::transmute(
                    mock::get_physical_device_properties2
                        as vk::PFN_vkGetPhysicalDeviceProperties2,
                ),
                EntryPoint::GetPhysicalDeviceImageFormatProperties2 => std::mem::transmute(
                    mock::get_physical_device_image_format_properties2
                        as vk::PFN_vkGetPhysicalDeviceImageFormatProperties2,
                ),
                EntryPoint::EnumerateDeviceExtensionProperties => std::mem::transmute(
                    mock::enumerate_device_extension_properties
                        as vk::PFN_vkEnumerateDeviceExtensionProperties,
                ),
            }
        }
    }
}

static ENTRY_POINTS: Lazy<FxHashMap<&'static [u8], EntryPoint>> = Lazy::new(|| {
    EntryPoint::ALL
        .iter()
        .map(|&entry| (entry.name().to_bytes(), entry))
        .collect()
});

/// Resolve an entry point by name. Unknown names yield `None`.
pub fn get_instance_proc_addr(_instance: vk::Instance, name: &CStr) -> vk::PFN_vkVoidFunction {
    debug!("get_instance_proc_addr: {:?}", name);
    EntryPoint::lookup(name).and_then(EntryPoint::as_void_function)
}

/// `vkGetInstanceProcAddr` with the C signature.
pub unsafe extern "system" fn vk_get_instance_proc_addr(
    instance: vk::Instance,
    p_name: *const c_char,
) -> vk::PFN_vkVoidFunction {
    if p_name.is_null() {
        return None;
    }

    get_instance_proc_addr(instance, CStr::from_ptr(p_name))
}
