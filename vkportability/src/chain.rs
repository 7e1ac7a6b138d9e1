//! Typed walks over Vulkan `pNext` chains
//!
//! Every node of a chain starts with `sType`/`pNext`. [`OutChain`] reads the
//! tag of each node and hands out a [`ChainNodeMut`] that is only ever the
//! concrete record the tag names, so no consumer casts blindly.

use ash::vk;
use std::marker::PhantomData;

use crate::extx::{
    PhysicalDeviceImageViewSupportEXTX, PhysicalDevicePortabilitySubsetFeaturesEXTX,
    PhysicalDevicePortabilitySubsetPropertiesEXTX,
    STRUCTURE_TYPE_PHYSICAL_DEVICE_IMAGE_VIEW_SUPPORT,
    STRUCTURE_TYPE_PHYSICAL_DEVICE_PORTABILITY_SUBSET_FEATURES,
    STRUCTURE_TYPE_PHYSICAL_DEVICE_PORTABILITY_SUBSET_PROPERTIES,
};

/// A writable node of an output chain.
#[derive(Debug)]
pub enum ChainNodeMut<'a> {
    PortabilityFeatures(&'a mut PhysicalDevicePortabilitySubsetFeaturesEXTX),
    PortabilityProperties(&'a mut PhysicalDevicePortabilitySubsetPropertiesEXTX),
    ImageViewSupport(&'a mut PhysicalDeviceImageViewSupportEXTX),
    Other(vk::StructureType),
}

impl ChainNodeMut<'_> {
    pub fn s_type(&self) -> vk::StructureType {
        match self {
            ChainNodeMut::PortabilityFeatures(n) => n.s_type,
            ChainNodeMut::PortabilityProperties(n) => n.s_type,
            ChainNodeMut::ImageViewSupport(n) => n.s_type,
            ChainNodeMut::Other(s_type) => *s_type,
        }
    }
}

/// Iterator over a `*mut` chain, root included.
///
/// `pNext` of each node is read before the node is handed out, so a consumer
/// may rewrite a node's fields without affecting the walk.
pub struct OutChain<'a> {
    next: *mut vk::BaseOutStructure<'a>,
    _marker: PhantomData<&'a mut ()>,
}

impl<'a> OutChain<'a> {
    /// # Safety
    /// `root` must be null or point to a well-formed chain of Vulkan structures
    /// that stays alive for `'a` and is not accessed elsewhere meanwhile.
    pub unsafe fn new<T>(root: *mut T) -> Self {
        Self {
            next: root.cast(),
            _marker: PhantomData,
        }
    }
}

impl<'a> Iterator for OutChain<'a> {
    type Item = ChainNodeMut<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next.is_null() {
            return None;
        }

        let node = self.next;
        unsafe {
            self.next = (*node).p_next;
            Some(match (*node).s_type {
                STRUCTURE_TYPE_PHYSICAL_DEVICE_PORTABILITY_SUBSET_FEATURES => {
                    ChainNodeMut::PortabilityFeatures(
                        &mut *node.cast::<PhysicalDevicePortabilitySubsetFeaturesEXTX>(),
                    )
                }
                STRUCTURE_TYPE_PHYSICAL_DEVICE_PORTABILITY_SUBSET_PROPERTIES => {
                    ChainNodeMut::PortabilityProperties(
                        &mut *node.cast::<PhysicalDevicePortabilitySubsetPropertiesEXTX>(),
                    )
                }
                STRUCTURE_TYPE_PHYSICAL_DEVICE_IMAGE_VIEW_SUPPORT => {
                    ChainNodeMut::ImageViewSupport(
                        &mut *node.cast::<PhysicalDeviceImageViewSupportEXTX>(),
                    )
                }
                other => ChainNodeMut::Other(other),
            })
        }
    }
}
