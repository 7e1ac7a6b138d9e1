//! Query backend abstraction
//!
//! A backend resolves Vulkan entry points by name. The mock driver answers
//! from its own table; the loader backend forwards to the system Vulkan loader.
//! Which one is used is decided by configuration, see [`crate::config`].

use ash::vk;
use log::info;
use std::ffi::CStr;

use crate::config::BackendKind;
use crate::error::{Result, VkError};

pub trait QueryBackend {
    fn kind(&self) -> BackendKind;

    /// Resolve `name` the way `vkGetInstanceProcAddr` does.
    ///
    /// # Safety
    /// `instance` must be null or a live instance created through this backend.
    unsafe fn get_instance_proc_addr(
        &self,
        instance: vk::Instance,
        name: &CStr,
    ) -> vk::PFN_vkVoidFunction;
}

// ── Mock driver ──────────────────────────────────────────────────────────────

/// Canned responses; ignores every handle it is given.
#[cfg(feature = "mock-driver")]
#[derive(Clone, Copy, Debug, Default)]
pub struct MockDriver;

#[cfg(feature = "mock-driver")]
impl QueryBackend for MockDriver {
    fn kind(&self) -> BackendKind {
        BackendKind::Mock
    }

    unsafe fn get_instance_proc_addr(
        &self,
        instance: vk::Instance,
        name: &CStr,
    ) -> vk::PFN_vkVoidFunction {
        crate::icd::get_instance_proc_addr(instance, name)
    }
}

// ── System loader ────────────────────────────────────────────────────────────

/// Forwards lookups to the installed Vulkan loader.
pub struct LoaderBackend {
    entry: ash::Entry,
}

impl LoaderBackend {
    pub fn load() -> Result<Self> {
        let entry = unsafe { ash::Entry::load() }
            .map_err(|e| VkError::InitializationFailed(e.to_string()))?;
        info!("Vulkan loader found");
        Ok(Self { entry })
    }

    pub fn entry(&self) -> &ash::Entry {
        &self.entry
    }
}

impl QueryBackend for LoaderBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Loader
    }

    unsafe fn get_instance_proc_addr(
        &self,
        instance: vk::Instance,
        name: &CStr,
    ) -> vk::PFN_vkVoidFunction {
        self.entry.get_instance_proc_addr(instance, name.as_ptr())
    }
}

/// Resolve `name` and fail if the backend does not know it.
///
/// # Safety
/// Same as [`QueryBackend::get_instance_proc_addr`].
pub unsafe fn resolve(
    backend: &dyn QueryBackend,
    instance: vk::Instance,
    name: &CStr,
) -> Result<unsafe extern "system" fn()> {
    backend
        .get_instance_proc_addr(instance, name)
        .ok_or_else(|| VkError::FunctionNotFound(name.to_string_lossy().into_owned()))
}
