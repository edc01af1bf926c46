// Ledger rules over one year's book records.
//
// Purpose
// - Decide what each role may see and in which order.
// - Detect slot conflicts (book taken, month taken, reviewer already active, capacity reached).
//
// Boundaries
// - Pure functions over a snapshot. Persistence adapters call `find_conflict` inside their
//   write critical section so the same rules guard the conditional write.

use crate::modules::reviews::core::book::{BookRecord, email_key};
use crate::modules::reviews::core::month::Month;
use crate::shared::core::primitives::Role;
use std::cmp::Ordering;

pub const DEFAULT_CAPACITY: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SlotConflict {
    #[error("book already has a reviewer")]
    AlreadyAssigned,
    #[error("month already taken")]
    MonthTaken,
    #[error("reviewer already has an active assignment")]
    DuplicateReviewer,
    #[error("assignment capacity reached")]
    CapacityReached,
}

/// Conditions a slot write must still satisfy at commit time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotGuard {
    /// Require the target book to be free. Admin edits of an existing assignment skip this.
    pub require_free: bool,
    /// Ceiling on assigned books for the year, enforced only when set.
    pub capacity: Option<usize>,
}

impl SlotGuard {
    pub fn reviewer(capacity: usize) -> Self {
        Self {
            require_free: true,
            capacity: Some(capacity),
        }
    }

    pub fn admin() -> Self {
        Self {
            require_free: true,
            capacity: None,
        }
    }

    pub fn admin_edit() -> Self {
        Self {
            require_free: false,
            capacity: None,
        }
    }
}

pub fn assigned_count(records: &[BookRecord]) -> usize {
    records.iter().filter(|r| r.is_assigned()).count()
}

/// Checks run in a fixed order; the first failing one is reported.
pub fn find_conflict(
    records: &[BookRecord],
    book_id: &str,
    month: Month,
    email: &str,
    guard: SlotGuard,
) -> Option<SlotConflict> {
    let target_assigned = records.iter().any(|r| r.id == book_id && r.is_assigned());
    if guard.require_free && target_assigned {
        return Some(SlotConflict::AlreadyAssigned);
    }

    let others = || {
        records
            .iter()
            .filter(move |r| r.id != book_id)
            .filter_map(|r| r.assignment.as_ref())
    };
    if others().any(|a| a.month == month) {
        return Some(SlotConflict::MonthTaken);
    }
    let key = email_key(email);
    if others().any(|a| a.email_key() == key) {
        return Some(SlotConflict::DuplicateReviewer);
    }

    if let Some(capacity) = guard.capacity
        && !target_assigned
        && assigned_count(records) >= capacity
    {
        return Some(SlotConflict::CapacityReached);
    }
    None
}

/// Reviewers only see free books. Admins see everything: assigned first, then by month,
/// then by title.
pub fn visible(records: Vec<BookRecord>, role: Role) -> Vec<BookRecord> {
    let mut items: Vec<BookRecord> = match role {
        Role::Admin => records,
        Role::Reviewer => records.into_iter().filter(|r| !r.is_assigned()).collect(),
    };
    items.sort_by(admin_order);
    items
}

pub fn admin_order(a: &BookRecord, b: &BookRecord) -> Ordering {
    b.is_assigned()
        .cmp(&a.is_assigned())
        .then_with(|| month_rank(a).cmp(&month_rank(b)))
        .then_with(|| {
            a.details
                .title
                .to_lowercase()
                .cmp(&b.details.title.to_lowercase())
        })
        .then_with(|| a.id.cmp(&b.id))
}

fn month_rank(record: &BookRecord) -> usize {
    record.assigned_month().map_or(Month::ALL.len(), Month::index)
}
