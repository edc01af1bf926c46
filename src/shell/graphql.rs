use async_graphql::{EmptySubscription, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, response::Html};

pub use crate::modules::reviews::use_cases::assign_slot::inbound::graphql::SlotMutation as MutationRoot;
pub use crate::modules::reviews::use_cases::manage_books::inbound::graphql::BooksQuery as QueryRoot;
use crate::shared::core::primitives::SessionContext;
use crate::shell::state::AppState;

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}

/// Executes one request with the caller's session attached as request data.
pub async fn graphql(
    Extension(schema): Extension<AppSchema>,
    session: SessionContext,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner().data(session)).await.into()
}

pub async fn graphiql() -> Html<String> {
    use async_graphql::http::GraphiQLSource;
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}
