// Milestone derivation: (year, month) -> six workflow deadlines.
//
// Rules
// - publication: last Sunday on or before the final day of the month.
// - info dispatch: first Monday on or after the 1st of the month.
// - review, comments, revised review, pre-publication prep: publication minus 4, 3, 2, 1 days.
//
// Boundaries
// - Pure. No clock, no locale lookup. Dates are rendered as dd/mm/yyyy.

use crate::modules::reviews::core::month::Month;
use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

pub const DATE_FORMAT: &str = "%d/%m/%Y";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneSet {
    pub publication: String,
    pub info_dispatch: String,
    pub review_submission: String,
    pub comments_submission: String,
    pub revised_review_submission: String,
    pub pre_publication_prep: String,
}

impl MilestoneSet {
    pub fn for_month(year: i32, month: Month) -> Option<MilestoneSet> {
        let first = NaiveDate::from_ymd_opt(year, month.number(), 1)?;
        let last = last_day_of_month(first)?;
        let publication = walk_back_to(last, Weekday::Sun)?;
        let info_dispatch = walk_forward_to(first, Weekday::Mon)?;
        let before_publication = |days: u64| publication.checked_sub_days(Days::new(days));

        Some(MilestoneSet {
            publication: format_date(publication),
            info_dispatch: format_date(info_dispatch),
            review_submission: format_date(before_publication(4)?),
            comments_submission: format_date(before_publication(3)?),
            revised_review_submission: format_date(before_publication(2)?),
            pre_publication_prep: format_date(before_publication(1)?),
        })
    }
}

/// Derive milestones from a month name. Non-canonical names (including "") yield `None`.
pub fn derive_milestones(year: i32, month: &str) -> Option<MilestoneSet> {
    Month::from_name(month).and_then(|m| MilestoneSet::for_month(year, m))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn last_day_of_month(first: NaiveDate) -> Option<NaiveDate> {
    let (year, month) = match first.month() {
        12 => (first.year() + 1, 1),
        m => (first.year(), m + 1),
    };
    NaiveDate::from_ymd_opt(year, month, 1)?.pred_opt()
}

// A weekday recurs within 7 days, so both walks stop after at most 6 steps.
fn walk_back_to(mut date: NaiveDate, weekday: Weekday) -> Option<NaiveDate> {
    for _ in 0..7 {
        if date.weekday() == weekday {
            return Some(date);
        }
        date = date.pred_opt()?;
    }
    None
}

fn walk_forward_to(mut date: NaiveDate, weekday: Weekday) -> Option<NaiveDate> {
    for _ in 0..7 {
        if date.weekday() == weekday {
            return Some(date);
        }
        date = date.succ_opt()?;
    }
    None
}
