//! Mock launcher implementation for testing and dry runs.

use crate::launch::base::{LaunchContext, LaunchError, ProcessLauncher};
use async_trait::async_trait;
use dpu_protocol::launch_models::LaunchConfiguration;
use std::sync::{Arc, Mutex};

/// Records every configuration it is asked to launch instead of starting a
/// process. Clones share the same record.
#[derive(Clone)]
pub struct MockLauncher {
    available: bool,
    failure: Option<String>,
    launched: Arc<Mutex<Vec<(LaunchConfiguration, LaunchContext)>>>,
}

impl MockLauncher {
    pub fn new(available: bool, failure: Option<String>) -> Self {
        Self {
            available,
            failure,
            launched: Arc::default(),
        }
    }

    pub fn success() -> Self {
        Self::new(true, None)
    }

    pub fn unavailable() -> Self {
        Self::new(false, None)
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self::new(true, Some(message.into()))
    }

    /// Configurations received so far, in launch order.
    pub fn launched(&self) -> Vec<LaunchConfiguration> {
        self.records().into_iter().map(|(config, _)| config).collect()
    }

    /// Contexts received so far, in launch order.
    pub fn contexts(&self) -> Vec<LaunchContext> {
        self.records().into_iter().map(|(_, context)| context).collect()
    }

    fn records(&self) -> Vec<(LaunchConfiguration, LaunchContext)> {
        self.launched
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

#[async_trait]
impl ProcessLauncher for MockLauncher {
    async fn check_availability(&self) -> bool {
        self.available
    }

    async fn launch(
        &self,
        configuration: &LaunchConfiguration,
        context: &LaunchContext,
    ) -> Result<(), LaunchError> {
        if !self.available {
            return Err(LaunchError::NotAvailable("Mock launcher not available".to_string()));
        }

        self.launched
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((configuration.clone(), context.clone()));

        match &self.failure {
            Some(message) => Err(LaunchError::Delegate(message.clone())),
            None => Ok(()),
        }
    }
}
