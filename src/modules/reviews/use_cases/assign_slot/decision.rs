use crate::modules::reviews::core::book::Assignment;
use crate::modules::reviews::core::ledger::SlotConflict;

#[derive(Debug, Clone, Copy, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("month, given name, family name and email are all required")]
    IncompleteInput,

    #[error("email address is not valid")]
    InvalidEmail,

    #[error("book already has a reviewer")]
    AlreadyAssigned,

    #[error("month already taken")]
    MonthTaken,

    #[error("reviewer already has an active assignment")]
    DuplicateReviewer,

    #[error("assignment capacity reached")]
    CapacityReached,
}

impl From<SlotConflict> for DecideError {
    fn from(conflict: SlotConflict) -> Self {
        match conflict {
            SlotConflict::AlreadyAssigned => DecideError::AlreadyAssigned,
            SlotConflict::MonthTaken => DecideError::MonthTaken,
            SlotConflict::DuplicateReviewer => DecideError::DuplicateReviewer,
            SlotConflict::CapacityReached => DecideError::CapacityReached,
        }
    }
}

#[derive(Debug)]
pub enum Decision {
    Accepted { assignment: Assignment },
    Rejected { reason: DecideError },
}
