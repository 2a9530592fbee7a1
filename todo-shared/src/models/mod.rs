//! Request and response bodies for the `/auth` and `/todos` endpoints.

pub mod errors;
pub mod todo;
pub mod user;

pub use errors::{ErrorResponse, extract_error_message, request_failed_message};
pub use todo::{Todo, TodoFilter, TodoPayload, TodosResponse};
pub use user::{LoginRequest, TokenResponse, UserProfile};
