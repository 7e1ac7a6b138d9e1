//! Error types for vkportability

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VkError {
    #[error("Vulkan initialization failed: {0}")]
    InitializationFailed(String),

    #[error("Entry point not found: {0}")]
    FunctionNotFound(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Out of host memory")]
    OutOfHostMemory,

    #[error("Layer not present")]
    LayerNotPresent,

    #[error("Format not supported")]
    FormatNotSupported,

    #[error("Vulkan call failed: {0}")]
    Vulkan(ash::vk::Result),
}

pub type Result<T> = std::result::Result<T, VkError>;

impl VkError {
    /// Convert VkError to Vulkan result code
    pub fn to_vk_result(&self) -> ash::vk::Result {
        match self {
            VkError::InitializationFailed(_) | VkError::InvalidConfig(_) => {
                ash::vk::Result::ERROR_INITIALIZATION_FAILED
            }
            VkError::FunctionNotFound(_) => ash::vk::Result::ERROR_EXTENSION_NOT_PRESENT,
            VkError::OutOfHostMemory => ash::vk::Result::ERROR_OUT_OF_HOST_MEMORY,
            VkError::LayerNotPresent => ash::vk::Result::ERROR_LAYER_NOT_PRESENT,
            VkError::FormatNotSupported => ash::vk::Result::ERROR_FORMAT_NOT_SUPPORTED,
            VkError::Vulkan(result) => *result,
        }
    }

    /// Map a failing Vulkan result code back to a VkError.
    pub fn from_vk_result(result: ash::vk::Result) -> Self {
        match result {
            ash::vk::Result::ERROR_OUT_OF_HOST_MEMORY => VkError::OutOfHostMemory,
            ash::vk::Result::ERROR_LAYER_NOT_PRESENT => VkError::LayerNotPresent,
            ash::vk::Result::ERROR_FORMAT_NOT_SUPPORTED => VkError::FormatNotSupported,
            other => VkError::Vulkan(other),
        }
    }
}

/// Turn a raw status into `Ok(())` on `VK_SUCCESS`.
pub fn check(result: ash::vk::Result) -> Result<()> {
    match result {
        ash::vk::Result::SUCCESS => Ok(()),
        other => Err(VkError::from_vk_result(other)),
    }
}
