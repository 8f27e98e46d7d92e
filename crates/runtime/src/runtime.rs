//! High-level runtime orchestrator.
//!
//! The runtime owns the roster worker, wires up its command channel, and
//! exposes a builder-based API for clients.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::info;

use sheet_content::ReferenceCatalogs;
use sheet_core::GameConfig;

use crate::api::{Result, RosterHandle, RuntimeError};
use crate::repository::UserRepository;
use crate::workers::{Command, RosterWorker};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    pub command_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            command_buffer_size: 32,
        }
    }
}

/// Main runtime that owns the roster worker.
///
/// [`RosterHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    handle: RosterHandle,
    worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    pub fn handle(&self) -> RosterHandle {
        self.handle.clone()
    }

    /// Shutdown the runtime gracefully.
    ///
    /// The worker drains queued commands and stops once every handle clone
    /// has been dropped.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);

        self.worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)?;

        Ok(())
    }
}

/// Builder for [`Runtime`].
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    repository: Option<Box<dyn UserRepository>>,
    catalogs: Option<Arc<ReferenceCatalogs>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            repository: None,
            catalogs: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the required user repository
    pub fn repository(mut self, repository: impl UserRepository + 'static) -> Self {
        self.repository = Some(Box::new(repository));
        self
    }

    /// Set reference catalogs (empty when not provided)
    pub fn catalogs(mut self, catalogs: impl Into<Arc<ReferenceCatalogs>>) -> Self {
        self.catalogs = Some(catalogs.into());
        self
    }

    /// Build the runtime and spawn its worker.
    pub fn build(self) -> Result<Runtime> {
        let repository = self.repository.ok_or(RuntimeError::MissingRepository)?;
        let catalogs = self.catalogs.unwrap_or_default();

        let (command_tx, command_rx) = mpsc::channel::<Command>(self.config.command_buffer_size);
        let handle = RosterHandle::new(command_tx, Arc::clone(&catalogs));

        info!(
            target: "runtime",
            roles = catalogs.roles.len(),
            professions = catalogs.professions.len(),
            pathways = catalogs.pathways.len(),
            max_characters = self.config.game_config.max_characters,
            "starting roster runtime"
        );

        let worker = RosterWorker::new(repository, catalogs, self.config.game_config, command_rx);
        let worker_handle = tokio::spawn(async move {
            worker.run().await;
        });

        Ok(Runtime {
            handle,
            worker_handle,
        })
    }
}
