//! Data loading and validation for deck layouts and sprite catalogs.

pub mod load;
pub mod schema;

pub use load::*;
pub use schema::*;
