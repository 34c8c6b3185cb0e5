//! Seat ledger backends.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryLedger;
pub use postgres::PostgresLedger;
