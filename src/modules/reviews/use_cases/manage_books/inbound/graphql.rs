use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::reviews::adapters::inbound::error_mapping::gql_error;
use crate::modules::reviews::core::book::{BookRecord, BookView};
use crate::shared::core::primitives::SessionContext;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlBook {
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

impl From<BookView> for GqlBook {
    fn from(v: BookView) -> Self {
        Self {
            id: v.id,
            year: v.year,
            title: v.title,
            author: v.author,
            purchase_link: v.purchase_link,
            page_count: v.page_count,
            cover_image_ref: v.cover_image_ref,
            reviewer_given_name: v.reviewer_given_name,
            reviewer_family_name: v.reviewer_family_name,
            reviewer_full_name: v.reviewer_full_name,
            reviewer_email: v.reviewer_email,
            assigned_month: v.assigned_month,
            publication_date: v.publication_date,
            info_dispatch_date: v.info_dispatch_date,
            review_submission_date: v.review_submission_date,
            comments_submission_date: v.comments_submission_date,
            revised_review_submission_date: v.revised_review_submission_date,
            pre_publication_prep_date: v.pre_publication_prep_date,
        }
    }
}

impl From<BookRecord> for GqlBook {
    fn from(record: BookRecord) -> Self {
        BookView::from(record).into()
    }
}

#[derive(Default)]
pub struct BooksQuery;

#[Object]
impl BooksQuery {
    /// Books of the session year visible to the caller's role.
    async fn books(&self, context: &Context<'_>) -> GqlResult<Vec<GqlBook>> {
        let state = context.data_unchecked::<AppState>();
        let session = context.data::<SessionContext>()?;
        let records = state
            .ledger
            .list_visible(session)
            .await
            .map_err(gql_error)?;
        Ok(records.into_iter().map(GqlBook::from).collect())
    }
}
