use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::reviews::adapters::inbound::error_mapping::gql_error;
use crate::modules::reviews::use_cases::assign_slot::command::CandidateInput;
use crate::modules::reviews::use_cases::manage_books::inbound::graphql::GqlBook;
use crate::shared::core::primitives::SessionContext;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct SlotMutation;

#[Object]
impl SlotMutation {
    async fn assign_slot(
        &self,
        context: &Context<'_>,
        book_id: ID,
        month: String,
        given_name: String,
        family_name: String,
        email: String,
    ) -> GqlResult<GqlBook> {
        let state = context.data_unchecked::<AppState>();
        let session = context.data::<SessionContext>()?;
        let candidate = CandidateInput {
            month,
            given_name,
            family_name,
            email,
        };
        let record = state
            .assign_handler
            .attempt_assign(session, &book_id, candidate)
            .await
            .map_err(gql_error)?;
        Ok(record.into())
    }

    async fn release_assignment(&self, context: &Context<'_>, book_id: ID) -> GqlResult<GqlBook> {
        let state = context.data_unchecked::<AppState>();
        let session = context.data::<SessionContext>()?;
        let record = state
            .assign_handler
            .release(session, &book_id)
            .await
            .map_err(gql_error)?;
        Ok(record.into())
    }
}
