pub mod errors;
pub mod models;
pub mod nullable;
pub mod rows;
pub mod schema;

pub use errors::*;
pub use models::*;
pub use rows::*;
pub use schema::*;
