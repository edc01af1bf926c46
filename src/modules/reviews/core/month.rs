// Canonical publication months.
//
// Purpose
// - The twelve month names reviewers pick from, in calendar order.
//
// Boundaries
// - Names are matched exactly (case-sensitive). Anything else is not a month.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Month {
    Gennaio,
    Febbraio,
    Marzo,
    Aprile,
    Maggio,
    Giugno,
    Luglio,
    Agosto,
    Settembre,
    Ottobre,
    Novembre,
    Dicembre,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::Gennaio,
        Month::Febbraio,
        Month::Marzo,
        Month::Aprile,
        Month::Maggio,
        Month::Giugno,
        Month::Luglio,
        Month::Agosto,
        Month::Settembre,
        Month::Ottobre,
        Month::Novembre,
        Month::Dicembre,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Month::Gennaio => "Gennaio",
            Month::Febbraio => "Febbraio",
            Month::Marzo => "Marzo",
            Month::Aprile => "Aprile",
            Month::Maggio => "Maggio",
            Month::Giugno => "Giugno",
            Month::Luglio => "Luglio",
            Month::Agosto => "Agosto",
            Month::Settembre => "Settembre",
            Month::Ottobre => "Ottobre",
            Month::Novembre => "Novembre",
            Month::Dicembre => "Dicembre",
        }
    }

    /// Zero-based position in the calendar year.
    pub fn index(self) -> usize {
        self as usize
    }

    /// One-based calendar number, as chrono expects it.
    pub fn number(self) -> u32 {
        self as u32 + 1
    }

    pub fn from_name(name: &str) -> Option<Month> {
        Month::ALL.into_iter().find(|m| m.name() == name)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
