use async_trait::async_trait;
use thiserror::Error;

use crate::shared::core::directory::{Company, PauseType, Worker};

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("directory unavailable: {0}")]
    Backend(String),
}

/// Read-only view of companies, workers and pause types. Deleted records are
/// never returned.
#[async_trait]
pub trait Directory: Send + Sync {
    async fn company(&self, company_id: &str) -> Result<Option<Company>, DirectoryError>;
    async fn worker(&self, worker_id: &str) -> Result<Option<Worker>, DirectoryError>;
    async fn active_workers(&self, company_id: &str) -> Result<Vec<Worker>, DirectoryError>;
    async fn pause_type(
        &self,
        pause_type_id: &str,
        company_id: &str,
    ) -> Result<Option<PauseType>, DirectoryError>;
}

pub mod in_memory;
