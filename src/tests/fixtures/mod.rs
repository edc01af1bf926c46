pub mod books;
pub mod candidates;
pub mod state;
