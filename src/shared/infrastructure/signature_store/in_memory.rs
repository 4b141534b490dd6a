use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

use crate::modules::reports::core::signatures::MonthlySignature;
use crate::shared::infrastructure::signature_store::{SignatureStore, SignatureStoreError};

type SignatureKey = (String, String, i32, u32);

#[derive(Default)]
pub struct InMemorySignatureStore {
    rows: Mutex<HashMap<SignatureKey, MonthlySignature>>,
    offline: bool,
}

impl InMemorySignatureStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    fn ensure_online(&self) -> Result<(), SignatureStoreError> {
        if self.offline {
            return Err(SignatureStoreError::Backend("Signature store offline".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl SignatureStore for InMemorySignatureStore {
    async fn insert_if_absent(
        &self,
        signature: MonthlySignature,
    ) -> Result<(), SignatureStoreError> {
        self.ensure_online()?;
        let key = (
            signature.worker_id.clone(),
            signature.company_id.clone(),
            signature.year,
            signature.month,
        );
        let mut rows = self.rows.lock().await;
        if rows.contains_key(&key) {
            return Err(SignatureStoreError::AlreadySigned {
                year: signature.year,
                month: signature.month,
            });
        }
        rows.insert(key, signature);
        Ok(())
    }

    async fn find(
        &self,
        worker_id: &str,
        company_id: &str,
        year: i32,
        month: u32,
    ) -> Result<Option<MonthlySignature>, SignatureStoreError> {
        self.ensure_online()?;
        let key = (worker_id.to_string(), company_id.to_string(), year, month);
        Ok(self.rows.lock().await.get(&key).cloned())
    }

    async fn list_since(
        &self,
        worker_id: &str,
        company_id: &str,
        since: (i32, u32),
    ) -> Result<Vec<MonthlySignature>, SignatureStoreError> {
        self.ensure_online()?;
        let rows = self.rows.lock().await;
        let mut signatures: Vec<MonthlySignature> = rows
            .values()
            .filter(|s| s.worker_id == worker_id && s.company_id == company_id)
            .filter(|s| (s.year, s.month) >= since)
            .cloned()
            .collect();
        signatures.sort_by_key(|s| (s.year, s.month));
        Ok(signatures)
    }
}
