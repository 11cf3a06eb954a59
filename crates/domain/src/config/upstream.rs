use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use crate::upstream_addr::UpstreamAddr;
use crate::wire::DecodeOptions;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// `HOST:PORT` of the resolver every question is forwarded to.
    #[serde(default)]
    pub resolver: Option<String>,

    #[serde(default = "default_max_pointer_hops")]
    pub max_pointer_hops: u8,
}

impl UpstreamConfig {
    pub fn resolver_addr(&self) -> Result<UpstreamAddr, ConfigError> {
        let raw = self
            .resolver
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| ConfigError::Validation("Resolver address is not set".to_string()))?;
        raw.parse::<UpstreamAddr>().map_err(ConfigError::Validation)
    }

    pub fn decode_options(&self) -> DecodeOptions {
        DecodeOptions {
            max_pointer_hops: self.max_pointer_hops,
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            resolver: None,
            max_pointer_hops: default_max_pointer_hops(),
        }
    }
}

fn default_max_pointer_hops() -> u8 {
    DecodeOptions::default().max_pointer_hops
}
