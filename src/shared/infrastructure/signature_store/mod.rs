use async_trait::async_trait;
use thiserror::Error;

use crate::modules::reports::core::signatures::MonthlySignature;

#[derive(Debug, Error)]
pub enum SignatureStoreError {
    #[error("month {month}/{year} already signed")]
    AlreadySigned { year: i32, month: u32 },

    #[error("backend error: {0}")]
    Backend(String),
}

/// Write-once store keyed by (worker, company, year, month).
#[async_trait]
pub trait SignatureStore: Send + Sync {
    async fn insert_if_absent(&self, signature: MonthlySignature)
    -> Result<(), SignatureStoreError>;

    async fn find(
        &self,
        worker_id: &str,
        company_id: &str,
        year: i32,
        month: u32,
    ) -> Result<Option<MonthlySignature>, SignatureStoreError>;

    /// Signatures of a worker in a company from `(year, month)` onwards.
    async fn list_since(
        &self,
        worker_id: &str,
        company_id: &str,
        since: (i32, u32),
    ) -> Result<Vec<MonthlySignature>, SignatureStoreError>;
}

pub mod in_memory;
