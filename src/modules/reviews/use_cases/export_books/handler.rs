// Delimited-text snapshot of one year's catalog for spreadsheets.
//
// UTF-8 with a leading byte order mark. Quoting of delimiters, quotes and newlines is left
// to the csv writer.

use crate::modules::reviews::adapters::outbound::book_store::BookStore;
use crate::modules::reviews::core::book::{BookRecord, BookView};
use crate::modules::reviews::core::ledger::visible;
use crate::modules::reviews::errors::{ApplicationError, require_admin};
use crate::shared::core::primitives::{Role, SessionContext};
use std::sync::Arc;

pub const BOM: &str = "\u{FEFF}";
pub const DEFAULT_DELIMITER: u8 = b',';

pub const HEADER: [&str; 10] = [
    "id",
    "year",
    "title",
    "author",
    "month",
    "reviewer_given_name",
    "reviewer_family_name",
    "reviewer_email",
    "publication_date",
    "purchase_link",
];

/// Accepts a single ASCII character other than a quote or a line break.
pub fn parse_delimiter(raw: Option<&str>) -> Option<u8> {
    match raw {
        None | Some("") => Some(DEFAULT_DELIMITER),
        Some("\\t") | Some("tab") => Some(b'\t'),
        Some(value) => {
            let bytes = value.as_bytes();
            match bytes {
                [b'"'] | [b'\n'] | [b'\r'] => None,
                [byte] if byte.is_ascii() => Some(*byte),
                _ => None,
            }
        }
    }
}

pub fn render_csv(records: Vec<BookRecord>, delimiter: u8) -> Result<String, ApplicationError> {
    let unexpected = |err: csv::Error| ApplicationError::Unexpected(err.to_string());
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());

    writer.write_record(HEADER).map_err(unexpected)?;
    for record in records {
        let view = BookView::from(record);
        let year = view.year.to_string();
        writer
            .write_record([
                view.id.as_str(),
                year.as_str(),
                view.title.as_str(),
                view.author.as_str(),
                view.assigned_month.as_str(),
                view.reviewer_given_name.as_str(),
                view.reviewer_family_name.as_str(),
                view.reviewer_email.as_str(),
                view.publication_date.as_str(),
                view.purchase_link.as_str(),
            ])
            .map_err(unexpected)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| ApplicationError::Unexpected(err.to_string()))?;
    let body =
        String::from_utf8(bytes).map_err(|err| ApplicationError::Unexpected(err.to_string()))?;
    Ok(format!("{BOM}{body}"))
}

pub struct ExportBooksHandler<TStore>
where
    TStore: BookStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ExportBooksHandler<TStore>
where
    TStore: BookStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn export_csv(
        &self,
        session: &SessionContext,
        delimiter: u8,
    ) -> Result<String, ApplicationError> {
        require_admin(session)?;
        let records = self.store.list_by_year(session.year).await?;
        let rows = records.len();
        let csv = render_csv(visible(records, Role::Admin), delimiter)?;
        tracing::info!(year = session.year, rows, "catalog exported");
        Ok(csv)
    }
}

#[cfg(test)]
mod export_books_tests {
    use super::*;
    use crate::modules::reviews::adapters::outbound::book_store_in_memory::InMemoryBookStore;
    use crate::modules::reviews::core::book::Assignment;
    use crate::modules::reviews::core::ledger::SlotGuard;
    use crate::modules::reviews::core::month::Month;
    use crate::tests::fixtures::books::details;
    use rstest::rstest;

    #[rstest]
    #[case(None, Some(b','))]
    #[case(Some(";"), Some(b';'))]
    #[case(Some("tab"), Some(b'\t'))]
    #[case(Some("\""), None)]
    #[case(Some(";;"), None)]
    #[case(Some("é"), None)]
    fn it_should_parse_delimiters(#[case] raw: Option<&str>, #[case] expected: Option<u8>) {
        assert_eq!(parse_delimiter(raw), expected);
    }

    #[rstest]
    fn it_should_escape_delimiters_and_quotes_and_keep_accents() {
        let mut record = BookRecord::empty("b-1", 2026);
        record.details = details("Sì, \"proprio\" così", "Niccolò Ammaniti");
        record.assignment =
            Assignment::new(2026, Month::Febbraio, "Zoë", "D'Amico", "zoe@example.com");

        let csv = render_csv(vec![record], b',').unwrap();
        assert!(csv.starts_with(BOM));
        let mut lines = csv.trim_start_matches(BOM).lines();
        assert_eq!(
            lines.next().unwrap(),
            "id,year,title,author,month,reviewer_given_name,reviewer_family_name,reviewer_email,publication_date,purchase_link"
        );
        let row = lines.next().unwrap();
        assert!(row.starts_with("b-1,2026,\"Sì, \"\"proprio\"\" così\",Niccolò Ammaniti,Febbraio,Zoë,D'Amico,zoe@example.com,22/02/2026,"));
    }

    #[rstest]
    fn it_should_render_unassigned_records_with_empty_reviewer_columns() {
        let csv = render_csv(vec![BookRecord::empty("b-9", 2026)], b';').unwrap();
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(row, "b-9;2026;;;;;;;;");
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_export_in_admin_order_for_admins_only() {
        let store = Arc::new(InMemoryBookStore::new());
        let free = store.insert(2026, details("Alfa", "A")).await.unwrap();
        let taken = store.insert(2026, details("Zeta", "Z")).await.unwrap();
        let assignment =
            Assignment::new(2026, Month::Marzo, "Mario", "Rossi", "mario@example.com").unwrap();
        store
            .write_assignment(2026, &taken.id, assignment, SlotGuard::admin())
            .await
            .unwrap();
        let handler = ExportBooksHandler::new(store);

        let csv = handler
            .export_csv(&SessionContext::admin(2026), b',')
            .await
            .unwrap();
        let ids: Vec<&str> = csv
            .lines()
            .skip(1)
            .filter_map(|line| line.split(',').next())
            .collect();
        assert_eq!(ids, vec![taken.id.as_str(), free.id.as_str()]);

        assert_eq!(
            handler.export_csv(&SessionContext::reviewer(2026), b',').await,
            Err(ApplicationError::Forbidden)
        );
    }
}
