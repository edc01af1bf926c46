// Admin-side ledger operations over one year's catalog.
//
// Invariants
// - Catalog fields are last-write-wins and written apart from the assignment.
// - Reviewers never read an assigned record.
// - An edit touching assignment fields ends either complete (conditional write) or empty
//   (release). Anything in between is refused before any write happens.

use crate::modules::reviews::adapters::outbound::book_store::BookStore;
use crate::modules::reviews::core::book::{Assignment, BookDetails, BookRecord, split_full_name};
use crate::modules::reviews::core::ledger::{SlotGuard, find_conflict, visible};
use crate::modules::reviews::errors::{ApplicationError, require_admin};
use crate::modules::reviews::use_cases::assign_slot::command::CandidateInput;
use crate::modules::reviews::use_cases::assign_slot::decide::validate_candidate;
use crate::modules::reviews::use_cases::assign_slot::decision::DecideError;
use crate::modules::reviews::use_cases::assign_slot::handler::release_book;
use crate::modules::reviews::use_cases::manage_books::command::BookChanges;
use crate::shared::core::primitives::{Role, SessionContext};
use crate::shared::infrastructure::object_store::ObjectStore;
use std::sync::Arc;

#[derive(Debug, PartialEq, Eq)]
enum AssignmentEdit {
    Keep,
    Release,
    Write(Assignment),
}

fn apply_catalog(mut details: BookDetails, changes: &BookChanges) -> BookDetails {
    if let Some(title) = &changes.title {
        details.title = title.trim().to_string();
    }
    if let Some(author) = &changes.author {
        details.author = author.trim().to_string();
    }
    if let Some(link) = &changes.purchase_link {
        details.purchase_link = link.trim().to_string();
    }
    if let Some(page_count) = changes.page_count {
        details.page_count = page_count;
    }
    if let Some(cover) = &changes.cover_image_ref {
        details.cover_image_ref = cover.trim().to_string();
    }
    details
}

fn plan_assignment_edit(
    record: &BookRecord,
    changes: &BookChanges,
) -> Result<AssignmentEdit, ApplicationError> {
    if !changes.touches_assignment() {
        return Ok(AssignmentEdit::Keep);
    }

    let current = record.assignment.as_ref();
    let mut merged = CandidateInput {
        month: current.map(|a| a.month.name().to_string()).unwrap_or_default(),
        given_name: current.map(|a| a.given_name.clone()).unwrap_or_default(),
        family_name: current.map(|a| a.family_name.clone()).unwrap_or_default(),
        email: current.map(|a| a.email.clone()).unwrap_or_default(),
    };
    if let Some(full_name) = &changes.full_name {
        let (given, family) = split_full_name(full_name);
        merged.given_name = given;
        merged.family_name = family;
    }
    if let Some(given) = &changes.given_name {
        merged.given_name = given.clone();
    }
    if let Some(family) = &changes.family_name {
        merged.family_name = family.clone();
    }
    if let Some(month) = &changes.month {
        merged.month = month.clone();
    }
    if let Some(email) = &changes.email {
        merged.email = email.clone();
    }

    let all_blank = [
        &merged.month,
        &merged.given_name,
        &merged.family_name,
        &merged.email,
    ]
    .iter()
    .all(|v| v.trim().is_empty());
    if all_blank {
        return Ok(AssignmentEdit::Release);
    }

    let month = validate_candidate(&merged)?;
    Assignment::new(
        record.year,
        month,
        &merged.given_name,
        &merged.family_name,
        &merged.email,
    )
    .map(AssignmentEdit::Write)
    .ok_or(ApplicationError::Rejected(DecideError::IncompleteInput))
}

pub struct BookLedger<TStore, TObjects>
where
    TStore: BookStore + Send + Sync + 'static,
    TObjects: ObjectStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
    objects: Arc<TObjects>,
}

impl<TStore, TObjects> BookLedger<TStore, TObjects>
where
    TStore: BookStore + Send + Sync + 'static,
    TObjects: ObjectStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>, objects: Arc<TObjects>) -> Self {
        Self { store, objects }
    }

    pub async fn list_visible(
        &self,
        session: &SessionContext,
    ) -> Result<Vec<BookRecord>, ApplicationError> {
        let records = self.store.list_by_year(session.year).await?;
        Ok(visible(records, session.role))
    }

    pub async fn get(
        &self,
        session: &SessionContext,
        id: &str,
    ) -> Result<BookRecord, ApplicationError> {
        let record = self.store.get(session.year, id).await?;
        if session.role == Role::Reviewer && record.is_assigned() {
            return Err(ApplicationError::NotFound(id.to_string()));
        }
        Ok(record)
    }

    pub async fn create(&self, session: &SessionContext) -> Result<BookRecord, ApplicationError> {
        require_admin(session)?;
        let record = self
            .store
            .insert(session.year, BookDetails::default())
            .await?;
        tracing::info!(book_id = %record.id, year = session.year, "book created");
        Ok(record)
    }

    /// Applies catalog changes, then the assignment edit. Slot conflicts are checked before
    /// anything is written and re-checked by the conditional write, which runs last. A store
    /// failure on that final write leaves the catalog changes in place.
    pub async fn update(
        &self,
        session: &SessionContext,
        id: &str,
        changes: BookChanges,
    ) -> Result<BookRecord, ApplicationError> {
        require_admin(session)?;
        let current = self.store.get(session.year, id).await?;
        let edit = plan_assignment_edit(&current, &changes).inspect_err(|err| {
            tracing::warn!(book_id = id, error = %err, "admin edit rejected");
        })?;
        let guard = if current.is_assigned() {
            SlotGuard::admin_edit()
        } else {
            SlotGuard::admin()
        };

        if let AssignmentEdit::Write(assignment) = &edit {
            let records = self.store.list_by_year(session.year).await?;
            if let Some(conflict) =
                find_conflict(&records, id, assignment.month, &assignment.email, guard)
            {
                tracing::warn!(book_id = id, ?conflict, "admin edit rejected");
                return Err(ApplicationError::Rejected(conflict.into()));
            }
        }

        let mut latest = current;
        if changes.touches_catalog() {
            let details = apply_catalog(latest.details.clone(), &changes);
            latest = self.store.update_details(session.year, id, details).await?;
        }

        match edit {
            AssignmentEdit::Keep => {}
            AssignmentEdit::Release => {
                latest = self.store.clear_assignment(session.year, id).await?;
                tracing::info!(book_id = id, "assignment cleared by edit");
            }
            AssignmentEdit::Write(assignment) => {
                latest = self
                    .store
                    .write_assignment(session.year, id, assignment, guard)
                    .await?;
                tracing::info!(book_id = id, "assignment written by edit");
            }
        }
        Ok(latest)
    }

    pub async fn remove(&self, session: &SessionContext, id: &str) -> Result<(), ApplicationError> {
        require_admin(session)?;
        self.store.delete(session.year, id).await?;
        tracing::info!(book_id = id, year = session.year, "book removed");
        Ok(())
    }

    pub async fn release_assignment(
        &self,
        session: &SessionContext,
        id: &str,
    ) -> Result<BookRecord, ApplicationError> {
        release_book(&*self.store, session, id).await
    }

    pub async fn upload_cover(
        &self,
        session: &SessionContext,
        id: &str,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<BookRecord, ApplicationError> {
        require_admin(session)?;
        let record = self.store.get(session.year, id).await?;
        let file_name = match file_name.trim() {
            "" => "cover",
            name => name,
        };
        let object_name = format!("covers/{}/{}/{}", session.year, id, file_name);
        let url = self
            .objects
            .upload(&object_name, content_type, bytes)
            .await
            .map_err(|err| ApplicationError::StoreUnavailable(format!("{err:#}")))?;

        let details = BookDetails {
            cover_image_ref: url,
            ..record.details
        };
        let updated = self.store.update_details(session.year, id, details).await?;
        tracing::info!(book_id = id, "cover uploaded");
        Ok(updated)
    }
}
