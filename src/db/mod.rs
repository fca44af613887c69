//! Database module: row models, schema and the read-only flight storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring rows of the `Flight`/`Aircraft` join
//! - `schema.rs`: SQL DDL for initializing a development database (SQLite)
//! - `sqlite.rs`: pool setup and the parameterized read queries

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{DestinationEntry, FlightRow, OriginEntry};
pub use schema::SQLITE_INIT;
pub use sqlite::{FlightStorage, SqlitePool, connect};
