//! `VK_EXTX_portability_subset` definitions
//!
//! The extension is provisional and not part of the registry `ash` is generated
//! from, so its structure types and records are declared here with the same
//! C layout as `vk_extx_portability_subset.h`.

use ash::vk;
use std::ffi::{c_void, CStr};

pub const EXTENSION_NAME: &CStr = c"VK_EXTX_portability_subset";
pub const SPEC_VERSION: u32 = 1;
pub const EXTENSION_NUMBER: i32 = 164;

/// `VK_EXTX_ENUM(type, id)`
const fn extx_enum(id: i32) -> i32 {
    1_000_000_000 + 1000 * (EXTENSION_NUMBER - 1) + id
}

pub const STRUCTURE_TYPE_PHYSICAL_DEVICE_PORTABILITY_SUBSET_FEATURES: vk::StructureType =
    vk::StructureType::from_raw(extx_enum(0));
pub const STRUCTURE_TYPE_PHYSICAL_DEVICE_PORTABILITY_SUBSET_PROPERTIES: vk::StructureType =
    vk::StructureType::from_raw(extx_enum(1));
pub const STRUCTURE_TYPE_PHYSICAL_DEVICE_IMAGE_VIEW_SUPPORT: vk::StructureType =
    vk::StructureType::from_raw(extx_enum(2));

/// `VkPhysicalDevicePortabilitySubsetFeaturesEXTX`
#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct PhysicalDevicePortabilitySubsetFeaturesEXTX {
    pub s_type: vk::StructureType,
    pub p_next: *mut c_void,
    pub triangle_fans: vk::Bool32,
    pub separate_stencil_mask_ref: vk::Bool32,
    pub events: vk::Bool32,
    pub standard_image_views: vk::Bool32,
    pub sampler_mip_lod_bias: vk::Bool32,
}

impl Default for PhysicalDevicePortabilitySubsetFeaturesEXTX {
    fn default() -> Self {
        Self {
            s_type: STRUCTURE_TYPE_PHYSICAL_DEVICE_PORTABILITY_SUBSET_FEATURES,
            p_next: std::ptr::null_mut(),
            triangle_fans: vk::FALSE,
            separate_stencil_mask_ref: vk::FALSE,
            events: vk::FALSE,
            standard_image_views: vk::FALSE,
            sampler_mip_lod_bias: vk::FALSE,
        }
    }
}

/// `VkPhysicalDevicePortabilitySubsetPropertiesEXTX`
#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct PhysicalDevicePortabilitySubsetPropertiesEXTX {
    pub s_type: vk::StructureType,
    pub p_next: *mut c_void,
    pub min_vertex_input_binding_stride_alignment: u32,
}

impl Default for PhysicalDevicePortabilitySubsetPropertiesEXTX {
    fn default() -> Self {
        Self {
            s_type: STRUCTURE_TYPE_PHYSICAL_DEVICE_PORTABILITY_SUBSET_PROPERTIES,
            p_next: std::ptr::null_mut(),
            min_vertex_input_binding_stride_alignment: 0,
        }
    }
}

/// `VkPhysicalDeviceImageViewSupportEXTX`
///
/// Describes an image view the application intends to create. Chained into
/// `VkPhysicalDeviceImageFormatInfo2` when probing image format support.
#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct PhysicalDeviceImageViewSupportEXTX {
    pub s_type: vk::StructureType,
    pub p_next: *mut c_void,
    pub flags: vk::ImageViewCreateFlags,
    pub view_type: vk::ImageViewType,
    pub format: vk::Format,
    pub components: vk::ComponentMapping,
    pub aspect_mask: vk::ImageAspectFlags,
}

impl Default for PhysicalDeviceImageViewSupportEXTX {
    fn default() -> Self {
        Self {
            s_type: STRUCTURE_TYPE_PHYSICAL_DEVICE_IMAGE_VIEW_SUPPORT,
            p_next: std::ptr::null_mut(),
            flags: vk::ImageViewCreateFlags::empty(),
            view_type: vk::ImageViewType::TYPE_2D,
            format: vk::Format::UNDEFINED,
            components: vk::ComponentMapping::default(),
            aspect_mask: vk::ImageAspectFlags::empty(),
        }
    }
}

/// Portability feature flags as plain booleans.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PortabilitySubsetFeatures {
    pub triangle_fans: bool,
    pub separate_stencil_mask_ref: bool,
    pub events: bool,
    pub standard_image_views: bool,
    pub sampler_mip_lod_bias: bool,
}

impl PortabilitySubsetFeatures {
    /// Write these flags into a raw record, leaving its chain header alone.
    pub fn write_to(&self, raw: &mut PhysicalDevicePortabilitySubsetFeaturesEXTX) {
        raw.triangle_fans = self.triangle_fans.into();
        raw.separate_stencil_mask_ref = self.separate_stencil_mask_ref.into();
        raw.events = self.events.into();
        raw.standard_image_views = self.standard_image_views.into();
        raw.sampler_mip_lod_bias = self.sampler_mip_lod_bias.into();
    }
}

impl From<&PhysicalDevicePortabilitySubsetFeaturesEXTX> for PortabilitySubsetFeatures {
    fn from(raw: &PhysicalDevicePortabilitySubsetFeaturesEXTX) -> Self {
        Self {
            triangle_fans: raw.triangle_fans != vk::FALSE,
            separate_stencil_mask_ref: raw.separate_stencil_mask_ref != vk::FALSE,
            events: raw.events != vk::FALSE,
            standard_image_views: raw.standard_image_views != vk::FALSE,
            sampler_mip_lod_bias: raw.sampler_mip_lod_bias != vk::FALSE,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PortabilitySubsetProperties {
    pub min_vertex_input_binding_stride_alignment: u32,
}

impl From<&PhysicalDevicePortabilitySubsetPropertiesEXTX> for PortabilitySubsetProperties {
    fn from(raw: &PhysicalDevicePortabilitySubsetPropertiesEXTX) -> Self {
        Self {
            min_vertex_input_binding_stride_alignment: raw
                .min_vertex_input_binding_stride_alignment,
        }
    }
}

/// An image view to probe, plus the image it would be created from.
#[derive(Clone, Copy, Debug)]
pub struct ImageViewRequest {
    pub view_type: vk::ImageViewType,
    pub format: vk::Format,
    pub components: vk::ComponentMapping,
    pub aspect_mask: vk::ImageAspectFlags,
    pub image_type: vk::ImageType,
    pub tiling: vk::ImageTiling,
    pub usage: vk::ImageUsageFlags,
}

impl ImageViewRequest {
    pub fn to_raw(&self) -> PhysicalDeviceImageViewSupportEXTX {
        PhysicalDeviceImageViewSupportEXTX {
            view_type: self.view_type,
            format: self.format,
            components: self.components,
            aspect_mask: self.aspect_mask,
            ..Default::default()
        }
    }
}

impl Default for ImageViewRequest {
    /// A sampled 2D RGBA8 view that swizzles alpha into green.
    fn default() -> Self {
        Self {
            view_type: vk::ImageViewType::TYPE_2D,
            format: vk::Format::R8G8B8A8_UNORM,
            components: vk::ComponentMapping {
                r: vk::ComponentSwizzle::R,
                g: vk::ComponentSwizzle::A,
                b: vk::ComponentSwizzle::IDENTITY,
                a: vk::ComponentSwizzle::IDENTITY,
            },
            aspect_mask: vk::ImageAspectFlags::COLOR,
            image_type: vk::ImageType::TYPE_2D,
            tiling: vk::ImageTiling::OPTIMAL,
            usage: vk::ImageUsageFlags::SAMPLED,
        }
    }
}
