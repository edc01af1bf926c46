use serde::{Deserialize, Deserializer};

/// Partial admin edit of one record. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BookChanges {
    pub title: Option<String>,
    pub author: Option<String>,
    pub purchase_link: Option<String>,
    /// `null` clears the page count.
    #[serde(deserialize_with = "nullable")]
    pub page_count: Option<Option<u32>>,
    pub cover_image_ref: Option<String>,

    pub month: Option<String>,
    pub given_name: Option<String>,
    pub family_name: Option<String>,
    /// Split on the first whitespace run into given and family name.
    pub full_name: Option<String>,
    pub email: Option<String>,
}

impl BookChanges {
    pub fn touches_catalog(&self) -> bool {
        self.title.is_some()
            || self.author.is_some()
            || self.purchase_link.is_some()
            || self.page_count.is_some()
            || self.cover_image_ref.is_some()
    }

    pub fn touches_assignment(&self) -> bool {
        self.month.is_some()
            || self.given_name.is_some()
            || self.family_name.is_some()
            || self.full_name.is_some()
            || self.email.is_some()
    }
}

fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod book_changes_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_tell_absent_from_null_page_count() {
        let absent: BookChanges = serde_json::from_str(r#"{"title":"X"}"#).unwrap();
        assert_eq!(absent.page_count, None);
        assert!(absent.touches_catalog());
        assert!(!absent.touches_assignment());

        let cleared: BookChanges = serde_json::from_str(r#"{"page_count":null}"#).unwrap();
        assert_eq!(cleared.page_count, Some(None));

        let set: BookChanges = serde_json::from_str(r#"{"page_count":212}"#).unwrap();
        assert_eq!(set.page_count, Some(Some(212)));
    }

    #[rstest]
    fn it_should_flag_assignment_edits() {
        let changes: BookChanges = serde_json::from_str(r#"{"full_name":"Mario Rossi"}"#).unwrap();
        assert!(changes.touches_assignment());
        assert!(!changes.touches_catalog());
    }
}
