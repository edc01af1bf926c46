// In memory implementation of the BookStore port.
//
// Purpose
// - Support handler tests and local development without a database.
//
// Responsibilities
// - Keep records per year.
// - Hold one write lock across the conflict check and the assignment write.

use crate::modules::reviews::adapters::outbound::book_store::{BookStore, StoreError};
use crate::modules::reviews::core::book::{Assignment, BookDetails, BookRecord};
use crate::modules::reviews::core::ledger::{SlotGuard, find_conflict};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryBookStore {
    years: RwLock<HashMap<i32, Vec<BookRecord>>>,
    is_offline: bool,
    delay_write_ms: AtomicU64,
}

impl InMemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Delays conditional writes so concurrent submissions overlap in tests.
    pub fn set_delay_write_ms(&self, ms: u64) {
        self.delay_write_ms.store(ms, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Book store offline".into()));
        }
        Ok(())
    }

    async fn maybe_delay(&self) {
        let ms = self.delay_write_ms.load(Ordering::SeqCst);
        if ms > 0 {
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }
    }

    async fn modify<F>(&self, year: i32, id: &str, change: F) -> Result<BookRecord, StoreError>
    where
        F: FnOnce(&mut BookRecord),
    {
        self.ensure_online()?;
        let mut years = self.years.write().await;
        let record = years
            .get_mut(&year)
            .and_then(|records| records.iter_mut().find(|r| r.id == id))
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })?;
        change(record);
        Ok(record.clone())
    }
}

#[async_trait::async_trait]
impl BookStore for InMemoryBookStore {
    async fn list_by_year(&self, year: i32) -> Result<Vec<BookRecord>, StoreError> {
        self.ensure_online()?;
        let years = self.years.read().await;
        Ok(years.get(&year).cloned().unwrap_or_default())
    }

    async fn get(&self, year: i32, id: &str) -> Result<BookRecord, StoreError> {
        self.ensure_online()?;
        let years = self.years.read().await;
        years
            .get(&year)
            .and_then(|records| records.iter().find(|r| r.id == id))
            .cloned()
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })
    }

    async fn insert(&self, year: i32, details: BookDetails) -> Result<BookRecord, StoreError> {
        self.ensure_online()?;
        let mut record = BookRecord::empty(Uuid::now_v7().to_string(), year);
        record.details = details;
        self.years
            .write()
            .await
            .entry(year)
            .or_default()
            .push(record.clone());
        Ok(record)
    }

    async fn update_details(
        &self,
        year: i32,
        id: &str,
        details: BookDetails,
    ) -> Result<BookRecord, StoreError> {
        self.modify(year, id, |record| record.details = details).await
    }

    async fn write_assignment(
        &self,
        year: i32,
        id: &str,
        assignment: Assignment,
        guard: SlotGuard,
    ) -> Result<BookRecord, StoreError> {
        self.ensure_online()?;
        self.maybe_delay().await;
        let mut years = self.years.write().await;
        let records = years.entry(year).or_default();
        if !records.iter().any(|r| r.id == id) {
            return Err(StoreError::NotFound { id: id.to_string() });
        }
        if let Some(conflict) =
            find_conflict(records, id, assignment.month, &assignment.email, guard)
        {
            return Err(StoreError::Conflict(conflict));
        }
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })?;
        record.assignment = Some(assignment);
        Ok(record.clone())
    }

    async fn clear_assignment(&self, year: i32, id: &str) -> Result<BookRecord, StoreError> {
        self.modify(year, id, |record| record.assignment = None).await
    }

    async fn delete(&self, year: i32, id: &str) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut years = self.years.write().await;
        let records = years.entry(year).or_default();
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            return Err(StoreError::NotFound { id: id.to_string() });
        }
        Ok(())
    }
}
