use crate::modules::reviews::core::book::{Assignment, BookRecord};
use crate::modules::reviews::core::ledger::{SlotGuard, find_conflict};
use crate::modules::reviews::core::month::Month;
use crate::modules::reviews::use_cases::assign_slot::command::CandidateInput;
use crate::modules::reviews::use_cases::assign_slot::decision::{DecideError, Decision};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref EMAIL_PATTERN: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email.trim())
}

/// Input checks that need no ledger state: every field present, a canonical month,
/// then email syntax.
pub fn validate_candidate(candidate: &CandidateInput) -> Result<Month, DecideError> {
    let blank = [&candidate.given_name, &candidate.family_name, &candidate.email]
        .iter()
        .any(|v| v.trim().is_empty());
    let month = Month::from_name(&candidate.month)
        .filter(|_| !blank)
        .ok_or(DecideError::IncompleteInput)?;
    if !is_valid_email(&candidate.email) {
        return Err(DecideError::InvalidEmail);
    }
    Ok(month)
}

/// Pure assignment decision over a snapshot of the year.
///
/// `target` must be the record being claimed, taken from `records`.
pub fn decide_assign(
    records: &[BookRecord],
    target: &BookRecord,
    candidate: &CandidateInput,
    guard: SlotGuard,
) -> Decision {
    let month = match validate_candidate(candidate) {
        Ok(month) => month,
        Err(reason) => return Decision::Rejected { reason },
    };

    if let Some(conflict) = find_conflict(records, &target.id, month, &candidate.email, guard) {
        return Decision::Rejected {
            reason: conflict.into(),
        };
    }

    match Assignment::new(
        target.year,
        month,
        &candidate.given_name,
        &candidate.family_name,
        &candidate.email,
    ) {
        Some(assignment) => Decision::Accepted { assignment },
        None => Decision::Rejected {
            reason: DecideError::IncompleteInput,
        },
    }
}
