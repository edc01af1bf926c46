// Composition root for the reviews service.
//
// - Read config from the environment.
// - Instantiate the in-memory stores and the notification channel.
// - Wire them into use case handlers and expose them over HTTP and GraphQL.

pub mod config;
pub mod graphql;
pub mod http;
pub mod logging;
pub mod state;
