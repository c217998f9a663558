//! REST contract of the flashgen API: envelopes, error codes, DTOs, command
//! models and list queries. JSON bodies are camelCase.

pub mod auth;
pub mod cards;
pub mod decks;
pub mod dto;
pub mod envelope;
pub mod error_code;
pub mod generations;
pub mod query;
pub mod response;
pub mod validation;

pub use auth::*;
pub use cards::*;
pub use decks::*;
pub use dto::*;
pub use envelope::*;
pub use error_code::*;
pub use generations::*;
pub use query::{CursorQuery, DEFAULT_LIMIT, MAX_LIMIT};
pub use response::Created;
pub use validation::{Normalize, Validate, Violations};
