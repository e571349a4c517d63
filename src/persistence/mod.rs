//! Persistence layer: the storage driver abstraction and its backends.
//!
//! [`EventStore`] is the driver trait the HTTP layer talks to. Two
//! implementations are available and selected at startup:
//!
//! - [`MemoryStore`]: an ordered in-process list behind an async lock.
//! - [`PostgresStore`]: an external PostgreSQL database via `sqlx::PgPool`.

pub mod memory;
pub mod postgres;
pub mod store;

pub use memory::MemoryStore;
pub use postgres::PostgresStore;
pub use store::{EventStore, StoreError};
