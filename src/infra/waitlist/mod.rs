//! Waitlist backends.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryWaitlist;
pub use postgres::PostgresWaitlist;
