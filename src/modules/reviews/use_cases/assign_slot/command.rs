use serde::Deserialize;

/// Reviewer-supplied data for claiming a slot. Never persisted as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CandidateInput {
    #[serde(default)]
    pub month: String,
    #[serde(default)]
    pub given_name: String,
    #[serde(default)]
    pub family_name: String,
    #[serde(default)]
    pub email: String,
}
