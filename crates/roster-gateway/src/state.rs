//! Gateway application state.
//!
//! This module defines the shared state that is available to all request handlers.

use std::sync::Arc;

use roster_directory::Directory;

use crate::config::GatewayConfig;

/// Shared application state for the gateway.
///
/// Holds no per-request data; every handler gets the same directory.
pub struct GatewayState<D>
where
    D: Directory,
{
    /// The employee directory.
    pub directory: Arc<D>,
    /// Gateway configuration.
    pub config: GatewayConfig,
}

impl<D> GatewayState<D>
where
    D: Directory,
{
    /// Create a new gateway state.
    #[must_use]
    pub fn new(directory: Arc<D>, config: GatewayConfig) -> Self {
        Self { directory, config }
    }
}

impl<D> Clone for GatewayState<D>
where
    D: Directory,
{
    fn clone(&self) -> Self {
        Self {
            directory: Arc::clone(&self.directory),
            config: self.config.clone(),
        }
    }
}
