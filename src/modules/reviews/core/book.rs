// Book record and its reviewer assignment.
//
// Purpose
// - BookRecord is one catalogued book for one year.
// - Assignment binds one reviewer to the book for one month.
//
// Invariants
// - An assignment is all-or-nothing: it exists with every field set, or it does not exist.
// - Full name and milestones are always re-derived from their sources in Assignment::new.
//
// Boundaries
// - No input or output here. BookView is the flat shape used on the wire and in exports.

use crate::modules::reviews::core::milestones::MilestoneSet;
use crate::modules::reviews::core::month::Month;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub month: Month,
    pub given_name: String,
    pub family_name: String,
    pub full_name: String,
    pub email: String,
    pub milestones: MilestoneSet,
}

impl Assignment {
    /// Returns `None` when any identity field is blank or the month has no milestones for `year`.
    pub fn new(
        year: i32,
        month: Month,
        given_name: &str,
        family_name: &str,
        email: &str,
    ) -> Option<Assignment> {
        let given_name = given_name.trim();
        let family_name = family_name.trim();
        let email = email.trim();
        if given_name.is_empty() || family_name.is_empty() || email.is_empty() {
            return None;
        }
        Some(Assignment {
            month,
            given_name: given_name.to_string(),
            family_name: family_name.to_string(),
            full_name: format!("{given_name} {family_name}"),
            email: email.to_string(),
            milestones: MilestoneSet::for_month(year, month)?,
        })
    }

    pub fn email_key(&self) -> String {
        email_key(&self.email)
    }
}

/// Reviewer identity used for exclusivity checks.
pub fn email_key(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Split a "full name" entry on the first whitespace run into (given, family).
pub fn split_full_name(full_name: &str) -> (String, String) {
    let trimmed = full_name.trim();
    match trimmed.split_once(char::is_whitespace) {
        Some((given, family)) => (given.to_string(), family.trim_start().to_string()),
        None => (trimmed.to_string(), String::new()),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDetails {
    pub title: String,
    pub author: String,
    pub purchase_link: String,
    pub page_count: Option<u32>,
    pub cover_image_ref: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    pub id: String,
    pub year: i32,
    pub details: BookDetails,
    pub assignment: Option<Assignment>,
}

impl BookRecord {
    pub fn empty(id: impl Into<String>, year: i32) -> Self {
        Self {
            id: id.into(),
            year,
            details: BookDetails::default(),
            assignment: None,
        }
    }

    pub fn is_assigned(&self) -> bool {
        self.assignment.is_some()
    }

    pub fn assigned_month(&self) -> Option<Month> {
        self.assignment.as_ref().map(|a| a.month)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookView {
    pub id: String,
    pub year: i32,
    pub title: String,
    pub author: String,
    pub purchase_link: String,
    pub page_count: Option<u32>,
    pub cover_image_ref: String,
    pub reviewer_given_name: String,
    pub reviewer_family_name: String,
    pub reviewer_full_name: String,
    pub reviewer_email: String,
    pub assigned_month: String,
    pub publication_date: String,
    pub info_dispatch_date: String,
    pub review_submission_date: String,
    pub comments_submission_date: String,
    pub revised_review_submission_date: String,
    pub pre_publication_prep_date: String,
}

impl From<BookRecord> for BookView {
    fn from(record: BookRecord) -> Self {
        let a = record.assignment;
        let field = |f: fn(&Assignment) -> &str| a.as_ref().map(f).unwrap_or_default().to_string();
        Self {
            id: record.id,
            year: record.year,
            title: record.details.title,
            author: record.details.author,
            purchase_link: record.details.purchase_link,
            page_count: record.details.page_count,
            cover_image_ref: record.details.cover_image_ref,
            reviewer_given_name: field(|a| &a.given_name),
            reviewer_family_name: field(|a| &a.family_name),
            reviewer_full_name: field(|a| &a.full_name),
            reviewer_email: field(|a| &a.email),
            assigned_month: field(|a| a.month.name()),
            publication_date: field(|a| &a.milestones.publication),
            info_dispatch_date: field(|a| &a.milestones.info_dispatch),
            review_submission_date: field(|a| &a.milestones.review_submission),
            comments_submission_date: field(|a| &a.milestones.comments_submission),
            revised_review_submission_date: field(|a| &a.milestones.revised_review_submission),
            pre_publication_prep_date: field(|a| &a.milestones.pre_publication_prep),
        }
    }
}
