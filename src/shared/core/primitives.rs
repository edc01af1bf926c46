use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Reviewer,
}

/// Who is calling and which year they are working on. Passed explicitly into every
/// ledger and assignment operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionContext {
    pub role: Role,
    pub year: i32,
}

impl SessionContext {
    pub fn admin(year: i32) -> Self {
        Self {
            role: Role::Admin,
            year,
        }
    }

    pub fn reviewer(year: i32) -> Self {
        Self {
            role: Role::Reviewer,
            year,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
