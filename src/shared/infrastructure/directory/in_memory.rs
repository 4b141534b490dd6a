// In memory implementation of the Directory port.
//
// Seeded from builders in tests, or from a JSON file in the binary.

use async_trait::async_trait;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tokio::sync::RwLock;

use crate::shared::core::directory::{Company, PauseType, Worker};
use crate::shared::infrastructure::directory::{Directory, DirectoryError};

#[derive(Debug, Default, Deserialize)]
pub struct DirectorySeed {
    #[serde(default)]
    pub companies: Vec<Company>,
    #[serde(default)]
    pub workers: Vec<Worker>,
    #[serde(default)]
    pub pause_types: Vec<PauseType>,
}

#[derive(Default)]
struct Records {
    companies: HashMap<String, Company>,
    workers: HashMap<String, Worker>,
    pause_types: HashMap<String, PauseType>,
    unavailable_workers: HashSet<String>,
}

#[derive(Default)]
pub struct InMemoryDirectory {
    records: RwLock<Records>,
    offline: bool,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_seed(seed: DirectorySeed) -> Self {
        seed.companies
            .into_iter()
            .fold(Self::new(), Self::with_company)
            .with_all(seed.workers, Self::with_worker)
            .with_all(seed.pause_types, Self::with_pause_type)
    }

    pub fn load_seed_file(path: &Path) -> Result<Self, DirectoryError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| DirectoryError::Backend(format!("{}: {e}", path.display())))?;
        let seed: DirectorySeed = serde_json::from_str(&raw)
            .map_err(|e| DirectoryError::Backend(format!("{}: {e}", path.display())))?;
        Ok(Self::from_seed(seed))
    }

    fn with_all<T>(self, items: Vec<T>, add: fn(Self, T) -> Self) -> Self {
        items.into_iter().fold(self, add)
    }

    pub fn with_company(mut self, company: Company) -> Self {
        self.records
            .get_mut()
            .companies
            .insert(company.id.clone(), company);
        self
    }

    pub fn with_worker(mut self, worker: Worker) -> Self {
        self.records
            .get_mut()
            .workers
            .insert(worker.id.clone(), worker);
        self
    }

    pub fn with_pause_type(mut self, pause_type: PauseType) -> Self {
        self.records
            .get_mut()
            .pause_types
            .insert(pause_type.id.clone(), pause_type);
        self
    }

    /// Makes single-worker lookups fail while the worker is still listed as active.
    pub fn with_unavailable_worker(mut self, worker_id: &str) -> Self {
        self.records
            .get_mut()
            .unavailable_workers
            .insert(worker_id.to_string());
        self
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    fn ensure_online(&self) -> Result<(), DirectoryError> {
        if self.offline {
            return Err(DirectoryError::Backend("Directory offline".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl Directory for InMemoryDirectory {
    async fn company(&self, company_id: &str) -> Result<Option<Company>, DirectoryError> {
        self.ensure_online()?;
        let records = self.records.read().await;
        Ok(records
            .companies
            .get(company_id)
            .filter(|company| !company.deleted)
            .cloned())
    }

    async fn worker(&self, worker_id: &str) -> Result<Option<Worker>, DirectoryError> {
        self.ensure_online()?;
        let records = self.records.read().await;
        if records.unavailable_workers.contains(worker_id) {
            return Err(DirectoryError::Backend(format!(
                "worker {worker_id} unavailable"
            )));
        }
        Ok(records
            .workers
            .get(worker_id)
            .filter(|worker| !worker.deleted)
            .cloned())
    }

    async fn active_workers(&self, company_id: &str) -> Result<Vec<Worker>, DirectoryError> {
        self.ensure_online()?;
        let records = self.records.read().await;
        let mut workers: Vec<Worker> = records
            .workers
            .values()
            .filter(|worker| !worker.deleted && worker.belongs_to(company_id))
            .cloned()
            .collect();
        workers.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(workers)
    }

    async fn pause_type(
        &self,
        pause_type_id: &str,
        company_id: &str,
    ) -> Result<Option<PauseType>, DirectoryError> {
        self.ensure_online()?;
        let records = self.records.read().await;
        Ok(records
            .pause_types
            .get(pause_type_id)
            .filter(|pause_type| pause_type.applies_to(company_id))
            .cloned())
    }
}
