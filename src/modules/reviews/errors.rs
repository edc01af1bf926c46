use crate::modules::reviews::adapters::outbound::book_store::StoreError;
use crate::modules::reviews::use_cases::assign_slot::decision::DecideError;
use crate::shared::core::primitives::SessionContext;
use crate::shared::infrastructure::notification_channel::ChannelError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error(transparent)]
    Rejected(#[from] DecideError),

    #[error("book {0} not found")]
    NotFound(String),

    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("notification channel is not configured")]
    MisconfiguredChannel,

    #[error("no recipient address to send to")]
    RecipientMissing,

    #[error("notification channel error: {0}")]
    ChannelError(String),

    #[error("admin role required")]
    Forbidden,

    #[error("a submission for this book is already in progress")]
    SubmissionInFlight,

    #[error("unexpected: {0}")]
    Unexpected(String),
}

impl ApplicationError {
    /// Stable machine-readable name, used in HTTP and GraphQL error payloads.
    pub fn code(&self) -> &'static str {
        match self {
            ApplicationError::Rejected(reason) => match reason {
                DecideError::IncompleteInput => "IncompleteInput",
                DecideError::InvalidEmail => "InvalidEmail",
                DecideError::AlreadyAssigned => "AlreadyAssigned",
                DecideError::MonthTaken => "MonthTaken",
                DecideError::DuplicateReviewer => "DuplicateReviewer",
                DecideError::CapacityReached => "CapacityReached",
            },
            ApplicationError::NotFound(_) => "NotFound",
            ApplicationError::StoreUnavailable(_) => "StoreUnavailable",
            ApplicationError::MisconfiguredChannel => "MisconfiguredChannel",
            ApplicationError::RecipientMissing => "RecipientMissing",
            ApplicationError::ChannelError(_) => "ChannelError",
            ApplicationError::Forbidden => "Forbidden",
            ApplicationError::SubmissionInFlight => "SubmissionInFlight",
            ApplicationError::Unexpected(_) => "Unexpected",
        }
    }
}

impl From<StoreError> for ApplicationError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { id } => ApplicationError::NotFound(id),
            StoreError::Conflict(conflict) => ApplicationError::Rejected(conflict.into()),
            StoreError::Backend(message) => ApplicationError::StoreUnavailable(message),
        }
    }
}

impl From<ChannelError> for ApplicationError {
    fn from(err: ChannelError) -> Self {
        match err {
            ChannelError::NotConfigured => ApplicationError::MisconfiguredChannel,
            other => ApplicationError::ChannelError(other.to_string()),
        }
    }
}

pub fn require_admin(session: &SessionContext) -> Result<(), ApplicationError> {
    if session.is_admin() {
        Ok(())
    } else {
        Err(ApplicationError::Forbidden)
    }
}
