use crate::modules::reviews::adapters::outbound::book_store::BookStore;
use crate::modules::reviews::core::book::{BookRecord, email_key};
use crate::modules::reviews::core::ledger::SlotGuard;
use crate::modules::reviews::errors::{ApplicationError, require_admin};
use crate::modules::reviews::use_cases::assign_slot::command::CandidateInput;
use crate::modules::reviews::use_cases::assign_slot::decide::{decide_assign, validate_candidate};
use crate::modules::reviews::use_cases::assign_slot::decision::Decision;
use crate::shared::core::primitives::{Role, SessionContext};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

type SubmissionKey = (i32, String, String);

/// Marks one (book, reviewer) submission as running until dropped.
struct InFlight<'a> {
    set: &'a Mutex<HashSet<SubmissionKey>>,
    key: SubmissionKey,
}

impl<'a> InFlight<'a> {
    fn acquire(set: &'a Mutex<HashSet<SubmissionKey>>, key: SubmissionKey) -> Option<Self> {
        let mut running = set.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if !running.insert(key.clone()) {
            return None;
        }
        Some(Self { set, key })
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        let mut running = self
            .set
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        running.remove(&self.key);
    }
}

pub struct AssignSlotHandler<TStore>
where
    TStore: BookStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
    capacity: usize,
    in_flight: Mutex<HashSet<SubmissionKey>>,
}

impl<TStore> AssignSlotHandler<TStore>
where
    TStore: BookStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>, capacity: usize) -> Self {
        Self {
            store,
            capacity,
            in_flight: Mutex::new(HashSet::new()),
        }
    }

    fn guard_for(&self, session: &SessionContext) -> SlotGuard {
        match session.role {
            Role::Admin => SlotGuard::admin(),
            Role::Reviewer => SlotGuard::reviewer(self.capacity),
        }
    }

    pub async fn attempt_assign(
        &self,
        session: &SessionContext,
        book_id: &str,
        candidate: CandidateInput,
    ) -> Result<BookRecord, ApplicationError> {
        let key = (session.year, book_id.to_string(), email_key(&candidate.email));
        let Some(_running) = InFlight::acquire(&self.in_flight, key) else {
            tracing::warn!(book_id, "submission already in flight");
            return Err(ApplicationError::SubmissionInFlight);
        };

        validate_candidate(&candidate).inspect_err(|reason| {
            tracing::warn!(book_id, %reason, "assignment rejected");
        })?;

        let records = self.store.list_by_year(session.year).await?;
        let target = records
            .iter()
            .find(|r| r.id == book_id)
            .ok_or_else(|| ApplicationError::NotFound(book_id.to_string()))?;

        let guard = self.guard_for(session);
        match decide_assign(&records, target, &candidate, guard) {
            Decision::Accepted { assignment } => {
                let month = assignment.month;
                let saved = self
                    .store
                    .write_assignment(session.year, book_id, assignment, guard)
                    .await
                    .map_err(ApplicationError::from)
                    .inspect_err(|err| {
                        tracing::warn!(book_id, error = %err, "conditional assignment write refused");
                    })?;
                tracing::info!(book_id, year = session.year, %month, "slot assigned");
                Ok(saved)
            }
            Decision::Rejected { reason } => {
                tracing::warn!(book_id, %reason, "assignment rejected");
                Err(reason.into())
            }
        }
    }

    pub async fn release(
        &self,
        session: &SessionContext,
        book_id: &str,
    ) -> Result<BookRecord, ApplicationError> {
        release_book(&*self.store, session, book_id).await
    }
}

/// Returns the book to the free state. Releasing a free book writes nothing.
pub async fn release_book<TStore>(
    store: &TStore,
    session: &SessionContext,
    book_id: &str,
) -> Result<BookRecord, ApplicationError>
where
    TStore: BookStore + ?Sized,
{
    require_admin(session)?;
    let record = store.get(session.year, book_id).await?;
    if !record.is_assigned() {
        return Ok(record);
    }
    let released = store.clear_assignment(session.year, book_id).await?;
    tracing::info!(book_id, year = session.year, "assignment released");
    Ok(released)
}
