//! Configuration-driven service probe
//!
//! Reports a service as usable when its credentials are present. Nothing is
//! contacted over the network.

use application::error::ApplicationError;
use application::ports::{ServiceCheck, ServiceProbePort};
use async_trait::async_trait;

use crate::config::{AiConfig, SmsConfig};

/// Probe whose answer is fixed when it is constructed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapabilityProbe {
    configured: bool,
}

impl CapabilityProbe {
    pub const fn new(configured: bool) -> Self {
        Self { configured }
    }

    /// AI provider: configured when an API key is present
    pub fn ai(config: &AiConfig) -> Self {
        Self::new(config.is_configured())
    }

    /// SMS provider: configured when the full credential triple is present
    pub fn sms(config: &SmsConfig) -> Self {
        Self::new(config.is_configured())
    }
}

#[async_trait]
impl ServiceProbePort for CapabilityProbe {
    async fn probe(&self) -> Result<ServiceCheck, ApplicationError> {
        Ok(if self.configured {
            ServiceCheck::healthy()
        } else {
            ServiceCheck::not_configured()
        })
    }
}
