// Record store port for book records.
//
// Purpose
// - Persist one year's catalog and its assignments.
//
// Responsibilities
// - `write_assignment` is conditional: the adapter re-runs the ledger conflict checks
//   against its current state and writes only when they still pass.
// - Catalog writes (`update_details`) never touch the assignment, and assignment writes
//   never touch the catalog fields.

use crate::modules::reviews::core::book::{Assignment, BookDetails, BookRecord};
use crate::modules::reviews::core::ledger::{SlotConflict, SlotGuard};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("book {id} not found")]
    NotFound { id: String },

    #[error("slot conflict: {0}")]
    Conflict(SlotConflict),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait BookStore: Send + Sync {
    async fn list_by_year(&self, year: i32) -> Result<Vec<BookRecord>, StoreError>;

    async fn get(&self, year: i32, id: &str) -> Result<BookRecord, StoreError>;

    /// Creates a record for `year` with a store-assigned id.
    async fn insert(&self, year: i32, details: BookDetails) -> Result<BookRecord, StoreError>;

    async fn update_details(
        &self,
        year: i32,
        id: &str,
        details: BookDetails,
    ) -> Result<BookRecord, StoreError>;

    async fn write_assignment(
        &self,
        year: i32,
        id: &str,
        assignment: Assignment,
        guard: SlotGuard,
    ) -> Result<BookRecord, StoreError>;

    async fn clear_assignment(&self, year: i32, id: &str) -> Result<BookRecord, StoreError>;

    async fn delete(&self, year: i32, id: &str) -> Result<(), StoreError>;
}
