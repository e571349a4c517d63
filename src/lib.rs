//! # events-gateway
//!
//! REST CRUD gateway for event records (`id`, `title`, `description`).
//!
//! The HTTP layer never touches a database directly: every handler goes
//! through [`service::EventService`], which delegates to a storage driver
//! implementing [`persistence::EventStore`]. The driver is chosen at
//! startup from configuration.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── EventService (service/)
//!     │
//!     └── EventStore (persistence/)
//!           ├── MemoryStore    (in-process list)
//!           └── PostgresStore  (sqlx::PgPool)
//! ```

pub mod api;
pub mod app_state;
pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
