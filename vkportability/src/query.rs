//! Application-side portability subset queries
//!
//! Builds the request/result chains on the stack, calls the entry points the
//! backend resolved, and reads the records back.

use ash::vk;
use log::{debug, info, warn};
use std::ffi::CStr;

use crate::backend::{resolve, QueryBackend};
use crate::error::{check, Result, VkError};
use crate::extx::{
    self, ImageViewRequest, PhysicalDevicePortabilitySubsetFeaturesEXTX,
    PhysicalDevicePortabilitySubsetPropertiesEXTX, PortabilitySubsetFeatures,
    PortabilitySubsetProperties,
};

const GET_FEATURES2: &CStr = c"vkGetPhysicalDeviceFeatures2KHR";
const GET_PROPERTIES2: &CStr = c"vkGetPhysicalDeviceProperties2KHR";
const GET_IMAGE_FORMAT_PROPERTIES2: &CStr = c"vkGetPhysicalDeviceImageFormatProperties2KHR";
const ENUMERATE_DEVICE_EXTENSION_PROPERTIES: &CStr = c"vkEnumerateDeviceExtensionProperties";

/// The three capability queries, resolved once.
pub struct PortabilityQueries {
    get_features2: vk::PFN_vkGetPhysicalDeviceFeatures2,
    get_properties2: vk::PFN_vkGetPhysicalDeviceProperties2,
    get_image_format_properties2: vk::PFN_vkGetPhysicalDeviceImageFormatProperties2,
}

impl PortabilityQueries {
    /// # Safety
    /// `instance` must be valid for `backend`, and the backend must return
    /// functions with the Vulkan signatures for these names.
    pub unsafe fn load(backend: &dyn QueryBackend, instance: vk::Instance) -> Result<Self> {
        debug!("Resolving portability queries via {} backend", backend.kind());
        Ok(Self {
            get_features2: std::mem::transmute(resolve(backend, instance, GET_FEATURES2)?),
            get_properties2: std::mem::transmute(resolve(backend, instance, GET_PROPERTIES2)?),
            get_image_format_properties2: std::mem::transmute(resolve(
                backend,
                instance,
                GET_IMAGE_FORMAT_PROPERTIES2,
            )?),
        })
    }

    /// # Safety
    /// `physical_device` must be valid for the backend these queries came from.
    pub unsafe fn features(&self, physical_device: vk::PhysicalDevice) -> PortabilitySubsetFeatures {
        let mut port_features = PhysicalDevicePortabilitySubsetFeaturesEXTX::default();
        let mut features2 = vk::PhysicalDeviceFeatures2 {
            p_next: (&mut port_features as *mut PhysicalDevicePortabilitySubsetFeaturesEXTX).cast(),
            ..Default::default()
        };

        (self.get_features2)(physical_device, &mut features2);

        let features = PortabilitySubsetFeatures::from(&port_features);
        info!("Portability subset features: {:?}", features);
        features
    }

    /// # Safety
    /// `physical_device` must be valid for the backend these queries came from.
    pub unsafe fn properties(
        &self,
        physical_device: vk::PhysicalDevice,
    ) -> PortabilitySubsetProperties {
        let mut port_properties = PhysicalDevicePortabilitySubsetPropertiesEXTX::default();
        let mut properties2 = vk::PhysicalDeviceProperties2 {
            p_next: (&mut port_properties as *mut PhysicalDevicePortabilitySubsetPropertiesEXTX)
                .cast(),
            ..Default::default()
        };

        (self.get_properties2)(physical_device, &mut properties2);

        let properties = PortabilitySubsetProperties::from(&port_properties);
        info!("Portability subset properties: {:?}", properties);
        properties
    }

    /// Probe whether the image view in `request` can be created. Returns the
    /// driver's status unchanged.
    ///
    /// # Safety
    /// `physical_device` must be valid for the backend these queries came from.
    pub unsafe fn image_view_support_raw(
        &self,
        physical_device: vk::PhysicalDevice,
        request: &ImageViewRequest,
    ) -> vk::Result {
        let port_image_view_support = request.to_raw();
        let format_info2 = vk::PhysicalDeviceImageFormatInfo2 {
            p_next: (&port_image_view_support as *const extx::PhysicalDeviceImageViewSupportEXTX)
                .cast(),
            format: request.format,
            ty: request.image_type,
            tiling: request.tiling,
            usage: request.usage,
            flags: vk::ImageCreateFlags::empty(),
            ..Default::default()
        };
        let mut format_properties2 = vk::ImageFormatProperties2::default();

        (self.get_image_format_properties2)(physical_device, &format_info2, &mut format_properties2)
    }

    /// Like [`Self::image_view_support_raw`], mapped to `Result`.
    ///
    /// # Safety
    /// `physical_device` must be valid for the backend these queries came from.
    pub unsafe fn image_view_support(
        &self,
        physical_device: vk::PhysicalDevice,
        request: &ImageViewRequest,
    ) -> Result<()> {
        let result = self.image_view_support_raw(physical_device, request);
        if result != vk::Result::SUCCESS {
            warn!(
                "Image view {:?} of {:?} rejected: {}",
                request.view_type, request.format, result
            );
        }
        check(result)
    }
}

/// Whether the device advertises `VK_EXTX_portability_subset`.
///
/// # Safety
/// `instance` and `physical_device` must be valid for `backend`.
pub unsafe fn is_portability_supported(
    backend: &dyn QueryBackend,
    instance: vk::Instance,
    physical_device: vk::PhysicalDevice,
) -> Result<bool> {
    let enumerate: vk::PFN_vkEnumerateDeviceExtensionProperties = std::mem::transmute(resolve(
        backend,
        instance,
        ENUMERATE_DEVICE_EXTENSION_PROPERTIES,
    )?);

    let mut count = 0u32;
    check(enumerate(
        physical_device,
        std::ptr::null(),
        &mut count,
        std::ptr::null_mut(),
    ))?;

    let mut extensions = vec![vk::ExtensionProperties::default(); count as usize];
    match enumerate(
        physical_device,
        std::ptr::null(),
        &mut count,
        extensions.as_mut_ptr(),
    ) {
        vk::Result::SUCCESS | vk::Result::INCOMPLETE => {}
        other => return Err(VkError::from_vk_result(other)),
    }
    extensions.truncate(count as usize);

    let supported = extensions
        .iter()
        .any(|ext| CStr::from_ptr(ext.extension_name.as_ptr()) == extx::EXTENSION_NAME);
    debug!(
        "{} device extensions, portability subset {}",
        extensions.len(),
        if supported { "present" } else { "absent" }
    );
    Ok(supported)
}
