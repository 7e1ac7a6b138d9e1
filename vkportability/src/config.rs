//! Backend selection
//!
//! `VKPORT_BACKEND=mock|loader` picks the backend. Without it the mock driver
//! is used when compiled in, the system loader otherwise.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, VkError};

pub const BACKEND_ENV: &str = "VKPORT_BACKEND";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackendKind {
    Mock,
    Loader,
}

impl Default for BackendKind {
    fn default() -> Self {
        if cfg!(feature = "mock-driver") {
            BackendKind::Mock
        } else {
            BackendKind::Loader
        }
    }
}

impl FromStr for BackendKind {
    type Err = VkError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mock" => Ok(BackendKind::Mock),
            "loader" => Ok(BackendKind::Loader),
            other => Err(VkError::InvalidConfig(format!(
                "unknown backend {:?} (expected \"mock\" or \"loader\")",
                other
            ))),
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendKind::Mock => f.write_str("mock"),
            BackendKind::Loader => f.write_str("loader"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Config {
    pub backend: BackendKind,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_value(std::env::var(BACKEND_ENV).ok().as_deref())
    }

    fn from_value(value: Option<&str>) -> Result<Self> {
        let backend = match value {
            Some(s) if !s.trim().is_empty() => s.parse()?,
            _ => BackendKind::default(),
        };

        if backend == BackendKind::Mock && !cfg!(feature = "mock-driver") {
            return Err(VkError::InvalidConfig(
                "mock backend requested but the mock-driver feature is disabled".to_string(),
            ));
        }

        Ok(Self { backend })
    }
}
