//! Questions Module
//!
//! Read-only access to the onboarding questions shown to prospective donors.
//!
//! - **`db`** - `QuestionRepository`, rows as JSON objects
//! - **`handlers`** - GET /questions

pub mod db;
pub mod handlers;

pub use db::{QuestionRecord, QuestionRepository};
pub use handlers::list_questions;
