pub mod connection;
pub mod models;
pub mod repository;
pub mod schema;

// Re-export commonly used items
pub use connection::{establish_connection, init_db, AnyConnection};
pub use repository::{RepositoryError, RepositoryResult};
pub use diesel::prelude::*;
