//! Service probe port used by the health aggregator

use std::fmt;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// Status label reported for a dependent service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceState {
    Healthy,
    Unhealthy,
    NotConfigured,
    DemoMode,
}

impl fmt::Display for ServiceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Healthy => "healthy",
            Self::Unhealthy => "unhealthy",
            Self::NotConfigured => "not_configured",
            Self::DemoMode => "demo_mode",
        };
        f.write_str(label)
    }
}

/// Outcome of probing one service: a label plus the pass/fail check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCheck {
    pub state: ServiceState,
    pub healthy: bool,
}

impl ServiceCheck {
    pub const fn healthy() -> Self {
        Self {
            state: ServiceState::Healthy,
            healthy: true,
        }
    }

    pub const fn unhealthy() -> Self {
        Self {
            state: ServiceState::Unhealthy,
            healthy: false,
        }
    }

    pub const fn not_configured() -> Self {
        Self {
            state: ServiceState::NotConfigured,
            healthy: false,
        }
    }

    /// Demo mode counts as passing; nothing is probed
    pub const fn demo_mode() -> Self {
        Self {
            state: ServiceState::DemoMode,
            healthy: true,
        }
    }
}

/// A read-only check against one dependent service
///
/// Implementations must not mutate shared state; the aggregator runs
/// probes concurrently.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ServiceProbePort: Send + Sync {
    async fn probe(&self) -> Result<ServiceCheck, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(ServiceState::Healthy.to_string(), "healthy");
        assert_eq!(ServiceState::NotConfigured.to_string(), "not_configured");
        assert_eq!(ServiceState::DemoMode.to_string(), "demo_mode");
    }

    #[test]
    fn demo_mode_passes() {
        let check = ServiceCheck::demo_mode();
        assert!(check.healthy);
        assert_eq!(check.state, ServiceState::DemoMode);
    }

    #[test]
    fn not_configured_fails() {
        assert!(!ServiceCheck::not_configured().healthy);
    }

    #[test]
    fn state_serializes_snake_case() {
        let json = serde_json::to_string(&ServiceState::NotConfigured).unwrap();
        assert_eq!(json, "\"not_configured\"");
    }
}
