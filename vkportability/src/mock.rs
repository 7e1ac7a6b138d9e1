//! Mock driver responses
//!
//! Stand-in implementations of the capability queries. They need no real
//! instance or physical device: the handles are ignored and every call walks
//! the caller's chains, filling only the records this driver understands.

use ash::vk;
use log::debug;
use std::os::raw::c_char;

use crate::chain::{ChainNodeMut, OutChain};
use crate::extx::{self, PortabilitySubsetFeatures};

/// Canned `minVertexInputBindingStrideAlignment`.
pub const MIN_VERTEX_INPUT_BINDING_STRIDE_ALIGNMENT: u32 = 4;

/// Canned portability features: everything optional is unavailable.
pub const FEATURES: PortabilitySubsetFeatures = PortabilitySubsetFeatures {
    triangle_fans: false,
    separate_stencil_mask_ref: false,
    events: false,
    standard_image_views: false,
    sampler_mip_lod_bias: false,
};

/// Device extensions the mock advertises.
const DEVICE_EXTENSIONS: &[(&std::ffi::CStr, u32)] = &[(extx::EXTENSION_NAME, extx::SPEC_VERSION)];

/// vkGetPhysicalDeviceFeatures2KHR
pub unsafe extern "system" fn get_physical_device_features2(
    _physical_device: vk::PhysicalDevice,
    p_features: *mut vk::PhysicalDeviceFeatures2<'_>,
) {
    for node in OutChain::new(p_features) {
        if let ChainNodeMut::PortabilityFeatures(port_features) = node {
            debug!("Filling portability subset features");
            FEATURES.write_to(port_features);
        }
    }
}

/// vkGetPhysicalDeviceProperties2KHR
pub unsafe extern "system" fn get_physical_device_properties2(
    _physical_device: vk::PhysicalDevice,
    p_properties: *mut vk::PhysicalDeviceProperties2<'_>,
) {
    for node in OutChain::new(p_properties) {
        if let ChainNodeMut::PortabilityProperties(port_properties) = node {
            debug!("Filling portability subset properties");
            port_properties.min_vertex_input_binding_stride_alignment =
                MIN_VERTEX_INPUT_BINDING_STRIDE_ALIGNMENT;
        }
    }
}

/// vkGetPhysicalDeviceImageFormatProperties2KHR
///
/// An image-view-support record in the result chain makes the query fail with
/// `VK_ERROR_FORMAT_NOT_SUPPORTED`. The request chain is not inspected and
/// nothing is written to the result chain.
pub unsafe extern "system" fn get_physical_device_image_format_properties2(
    _physical_device: vk::PhysicalDevice,
    _p_image_format_info: *const vk::PhysicalDeviceImageFormatInfo2<'_>,
    p_image_format_properties: *mut vk::ImageFormatProperties2<'_>,
) -> vk::Result {
    let mut result = vk::Result::SUCCESS;
    for node in OutChain::new(p_image_format_properties) {
        if let ChainNodeMut::ImageViewSupport(view_support) = node {
            debug!("Rejecting image view support for {:?}", view_support.format);
            result = vk::Result::ERROR_FORMAT_NOT_SUPPORTED;
        }
    }
    result
}

/// vkEnumerateDeviceExtensionProperties
pub unsafe extern "system" fn enumerate_device_extension_properties(
    _physical_device: vk::PhysicalDevice,
    p_layer_name: *const c_char,
    p_property_count: *mut u32,
    p_properties: *mut vk::ExtensionProperties,
) -> vk::Result {
    if !p_layer_name.is_null() {
        return vk::Result::ERROR_LAYER_NOT_PRESENT;
    }
    if p_property_count.is_null() {
        return vk::Result::ERROR_INITIALIZATION_FAILED;
    }

    if p_properties.is_null() {
        *p_property_count = DEVICE_EXTENSIONS.len() as u32;
        return vk::Result::SUCCESS;
    }

    let count = (*p_property_count as usize).min(DEVICE_EXTENSIONS.len());
    let props = std::slice::from_raw_parts_mut(p_properties, count);

    for (prop, (name, version)) in props.iter_mut().zip(DEVICE_EXTENSIONS) {
        let mut extension_name = [0 as c_char; vk::MAX_EXTENSION_NAME_SIZE];
        for (dst, &src) in extension_name.iter_mut().zip(name.to_bytes()) {
            *dst = src as c_char;
        }
        *prop = vk::ExtensionProperties {
            extension_name,
            spec_version: *version,
        };
    }

    *p_property_count = count as u32;

    if count < DEVICE_EXTENSIONS.len() {
        vk::Result::INCOMPLETE
    } else {
        vk::Result::SUCCESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extx::{
        PhysicalDeviceImageViewSupportEXTX, PhysicalDevicePortabilitySubsetFeaturesEXTX,
        PhysicalDevicePortabilitySubsetPropertiesEXTX,
    };
    use std::ffi::CStr;

    #[test]
    fn test_features_all_false() {
        let mut port_features = PhysicalDevicePortabilitySubsetFeaturesEXTX {
            triangle_fans: vk::TRUE,
            separate_stencil_mask_ref: vk::TRUE,
            events: vk::TRUE,
            standard_image_views: vk::TRUE,
            sampler_mip_lod_bias: vk::TRUE,
            ..Default::default()
        };
        let mut features2 = vk::PhysicalDeviceFeatures2 {
            p_next: (&mut port_features as *mut PhysicalDevicePortabilitySubsetFeaturesEXTX).cast(),
            ..Default::default()
        };

        unsafe { get_physical_device_features2(vk::PhysicalDevice::null(), &mut features2) };

        assert_eq!(PortabilitySubsetFeatures::from(&port_features), FEATURES);
        assert_eq!(port_features.triangle_fans, vk::FALSE);
        assert_eq!(port_features.sampler_mip_lod_bias, vk::FALSE);
    }

    #[test]
    fn test_features_leave_other_nodes_alone() {
        let mut port_properties = PhysicalDevicePortabilitySubsetPropertiesEXTX {
            min_vertex_input_binding_stride_alignment: 99,
            ..Default::default()
        };
        let mut features2 = vk::PhysicalDeviceFeatures2 {
            p_next: (&mut port_properties as *mut PhysicalDevicePortabilitySubsetPropertiesEXTX)
                .cast(),
            ..Default::default()
        };
        features2.features.robust_buffer_access = vk::TRUE;

        unsafe { get_physical_device_features2(vk::PhysicalDevice::null(), &mut features2) };

        assert_eq!(features2.features.robust_buffer_access, vk::TRUE);
        assert_eq!(port_properties.min_vertex_input_binding_stride_alignment, 99);
    }

    #[test]
    fn test_features_without_record_is_noop() {
        let mut port_features = PhysicalDevicePortabilitySubsetFeaturesEXTX {
            events: vk::TRUE,
            ..Default::default()
        };
        let mut features2 = vk::PhysicalDeviceFeatures2 {
            p_next: (&mut port_features as *mut PhysicalDevicePortabilitySubsetFeaturesEXTX).cast(),
            ..Default::default()
        };
        // Unlink the only recognized node again.
        features2.p_next = std::ptr::null_mut();
        features2.features.depth_clamp = vk::TRUE;

        unsafe { get_physical_device_features2(vk::PhysicalDevice::null(), &mut features2) };

        assert_eq!(port_features.events, vk::TRUE);
        assert_eq!(features2.features.depth_clamp, vk::TRUE);
        assert!(features2.p_next.is_null());
    }

    #[test]
    fn test_properties_alignment() {
        let mut port_properties = PhysicalDevicePortabilitySubsetPropertiesEXTX::default();
        let mut properties2 = vk::PhysicalDeviceProperties2 {
            p_next: (&mut port_properties as *mut PhysicalDevicePortabilitySubsetPropertiesEXTX)
                .cast(),
            ..Default::default()
        };
        properties2.properties.vendor_id = 0x10DE;

        unsafe { get_physical_device_properties2(vk::PhysicalDevice::null(), &mut properties2) };

        assert_eq!(
            port_properties.min_vertex_input_binding_stride_alignment,
            MIN_VERTEX_INPUT_BINDING_STRIDE_ALIGNMENT
        );
        assert_eq!(properties2.properties.vendor_id, 0x10DE);
    }

    #[test]
    fn test_properties_leave_feature_record_alone() {
        let mut port_features = PhysicalDevicePortabilitySubsetFeaturesEXTX {
            triangle_fans: vk::TRUE,
            ..Default::default()
        };
        let mut properties2 = vk::PhysicalDeviceProperties2 {
            p_next: (&mut port_features as *mut PhysicalDevicePortabilitySubsetFeaturesEXTX).cast(),
            ..Default::default()
        };

        unsafe { get_physical_device_properties2(vk::PhysicalDevice::null(), &mut properties2) };

        assert_eq!(port_features.triangle_fans, vk::TRUE);
    }

    #[test]
    fn test_properties_without_record_is_noop() {
        let mut port_properties = PhysicalDevicePortabilitySubsetPropertiesEXTX::default();
        let mut properties2 = vk::PhysicalDeviceProperties2 {
            p_next: (&mut port_properties as *mut PhysicalDevicePortabilitySubsetPropertiesEXTX)
                .cast(),
            ..Default::default()
        };
        properties2.p_next = std::ptr::null_mut();

        unsafe { get_physical_device_properties2(vk::PhysicalDevice::null(), &mut properties2) };

        assert_eq!(port_properties.min_vertex_input_binding_stride_alignment, 0);
    }

    #[test]
    fn test_image_view_record_in_request_chain_is_ignored() {
        let view_support = PhysicalDeviceImageViewSupportEXTX {
            format: vk::Format::R8G8B8A8_UNORM,
            ..Default::default()
        };
        let format_info2 = vk::PhysicalDeviceImageFormatInfo2 {
            p_next: (&view_support as *const PhysicalDeviceImageViewSupportEXTX).cast(),
            format: vk::Format::R8G8B8A8_UNORM,
            ..Default::default()
        };
        let mut format_properties2 = vk::ImageFormatProperties2::default();

        let result = unsafe {
            get_physical_device_image_format_properties2(
                vk::PhysicalDevice::null(),
                &format_info2,
                &mut format_properties2,
            )
        };

        assert_eq!(result, vk::Result::SUCCESS);
        assert_eq!(format_properties2.image_format_properties.max_mip_levels, 0);
    }

    #[test]
    fn test_image_format_without_record_is_noop() {
        let mut view_support = PhysicalDeviceImageViewSupportEXTX::default();
        let format_info2 = vk::PhysicalDeviceImageFormatInfo2::default();
        let mut format_properties2 = vk::ImageFormatProperties2 {
            p_next: (&mut view_support as *mut PhysicalDeviceImageViewSupportEXTX).cast(),
            ..Default::default()
        };
        // Unlink the only recognized node again.
        format_properties2.p_next = std::ptr::null_mut();

        let result = unsafe {
            get_physical_device_image_format_properties2(
                vk::PhysicalDevice::null(),
                &format_info2,
                &mut format_properties2,
            )
        };

        assert_eq!(result, vk::Result::SUCCESS);
        assert!(format_properties2.p_next.is_null());
        let properties = format_properties2.image_format_properties;
        assert_eq!(properties.max_extent.width, 0);
        assert_eq!(properties.max_mip_levels, 0);
        assert_eq!(properties.max_array_layers, 0);
        assert_eq!(properties.max_resource_size, 0);
        assert_eq!(view_support.format, vk::Format::UNDEFINED);
    }

    #[test]
    fn test_image_view_record_in_result_chain_not_supported() {
        let mut view_support = PhysicalDeviceImageViewSupportEXTX::default();
        let format_info2 = vk::PhysicalDeviceImageFormatInfo2::default();
        let mut format_properties2 = vk::ImageFormatProperties2 {
            p_next: (&mut view_support as *mut PhysicalDeviceImageViewSupportEXTX).cast(),
            ..Default::default()
        };

        let result = unsafe {
            get_physical_device_image_format_properties2(
                vk::PhysicalDevice::null(),
                &format_info2,
                &mut format_properties2,
            )
        };

        assert_eq!(result, vk::Result::ERROR_FORMAT_NOT_SUPPORTED);
    }

    #[test]
    fn test_image_format_without_request_succeeds() {
        let mut port_features = PhysicalDevicePortabilitySubsetFeaturesEXTX::default();
        let format_info2 = vk::PhysicalDeviceImageFormatInfo2::default();
        let mut format_properties2 = vk::ImageFormatProperties2 {
            p_next: (&mut port_features as *mut PhysicalDevicePortabilitySubsetFeaturesEXTX).cast(),
            ..Default::default()
        };

        let result = unsafe {
            get_physical_device_image_format_properties2(
                vk::PhysicalDevice::null(),
                &format_info2,
                &mut format_properties2,
            )
        };

        assert_eq!(result, vk::Result::SUCCESS);
    }

    #[test]
    fn test_enumerate_extensions_two_call() {
        let mut count = 0u32;
        let result = unsafe {
            enumerate_device_extension_properties(
                vk::PhysicalDevice::null(),
                std::ptr::null(),
                &mut count,
                std::ptr::null_mut(),
            )
        };
        assert_eq!(result, vk::Result::SUCCESS);
        assert_eq!(count, 1);

        let mut props = vec![vk::ExtensionProperties::default(); count as usize];
        let result = unsafe {
            enumerate_device_extension_properties(
                vk::PhysicalDevice::null(),
                std::ptr::null(),
                &mut count,
                props.as_mut_ptr(),
            )
        };
        assert_eq!(result, vk::Result::SUCCESS);

        let name = unsafe { CStr::from_ptr(props[0].extension_name.as_ptr()) };
        assert_eq!(name, extx::EXTENSION_NAME);
        assert_eq!(props[0].spec_version, extx::SPEC_VERSION);
    }

    #[test]
    fn test_enumerate_extensions_incomplete() {
        let mut count = 0u32;
        let mut prop = vk::ExtensionProperties::default();
        let result = unsafe {
            enumerate_device_extension_properties(
                vk::PhysicalDevice::null(),
                std::ptr::null(),
                &mut count,
                &mut prop,
            )
        };
        assert_eq!(result, vk::Result::INCOMPLETE);
        assert_eq!(count, 0);
    }

    #[test]
    fn test_enumerate_extensions_unknown_layer() {
        let mut count = 0u32;
        let result = unsafe {
            enumerate_device_extension_properties(
                vk::PhysicalDevice::null(),
                c"VK_LAYER_KHRONOS_validation".as_ptr(),
                &mut count,
                std::ptr::null_mut(),
            )
        };
        assert_eq!(result, vk::Result::ERROR_LAYER_NOT_PRESENT);
    }
}
