//! vkportability - VK_EXTX_portability_subset capability queries
//!
//! Shows how an application queries a driver for the portability subset
//! extension, and ships a mock driver that answers those queries.
//!
//! Flow:
//! ```text
//! Application → QueryBackend (name → entry point) → driver / mock → chained records
//! ```

pub mod backend;
pub mod chain;
pub mod config;
pub mod error;
pub mod extx;
#[cfg(feature = "mock-driver")]
pub mod icd;
#[cfg(feature = "mock-driver")]
pub mod mock;
pub mod query;

pub use backend::{LoaderBackend, QueryBackend};
#[cfg(feature = "mock-driver")]
pub use backend::MockDriver;
pub use config::{BackendKind, Config};
pub use error::{Result, VkError};
pub use extx::{ImageViewRequest, PortabilitySubsetFeatures, PortabilitySubsetProperties};
pub use query::{is_portability_supported, PortabilityQueries};

use log::info;

/// Initialize logging. `RUST_LOG` overrides the default `info` filter.
pub fn init() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .try_init();

    info!("vkportability v{} initialized", env!("CARGO_PKG_VERSION"));
}
