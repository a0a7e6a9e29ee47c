// Persistent word store backed by Turso/libsql.
//
// Owns the database client, the path-resolution policy, the schema and its
// migrations, and the low-level row operations on the words and
// missing_words tables. Everything above this module goes through
// StoreClient; nothing else touches the database.

mod client;
mod missing;
mod paths;
mod schema;
mod words;

pub use client::{StoreClient, StoreError};
pub use missing::MissingWord;
pub use paths::{resolve_db_path, DB_PATH_ENV};
pub use schema::initialize_schema;
pub use words::WordEntry;
