// Shared test fixture for CandidateInput.

use crate::modules::reviews::use_cases::assign_slot::command::CandidateInput;

const CANDIDATE_JSON: &str = include_str!("json/candidate_input.json");

pub struct CandidateInputBuilder {
    inner: CandidateInput,
}

impl Default for CandidateInputBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CandidateInputBuilder {
    pub fn new() -> Self {
        let inner: CandidateInput = serde_json::from_str(CANDIDATE_JSON).unwrap();
        Self { inner }
    }

    pub fn month(mut self, v: impl Into<String>) -> Self {
        self.inner.month = v.into();
        self
    }

    pub fn given_name(mut self, v: impl Into<String>) -> Self {
        self.inner.given_name = v.into();
        self
    }

    pub fn family_name(mut self, v: impl Into<String>) -> Self {
        self.inner.family_name = v.into();
        self
    }

    pub fn email(mut self, v: impl Into<String>) -> Self {
        self.inner.email = v.into();
        self
    }

    pub fn build(self) -> CandidateInput {
        self.inner
    }
}

#[cfg(test)]
mod candidate_input_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = CandidateInputBuilder::default().build();
        assert_eq!(built.month, "Gennaio");
        assert_eq!(built.given_name, "Mario");
        assert_eq!(built.family_name, "Rossi");
        assert_eq!(built.email, "mario.rossi@example.com");
    }

    #[rstest]
    fn setters_override_all_fields() {
        let built = CandidateInputBuilder::new()
            .month("Luglio")
            .given_name("Giulia")
            .family_name("Verdi")
            .email("giulia@example.com")
            .build();
        assert_eq!(
            built,
            CandidateInput {
                month: "Luglio".into(),
                given_name: "Giulia".into(),
                family_name: "Verdi".into(),
                email: "giulia@example.com".into(),
            }
        );
    }
}
