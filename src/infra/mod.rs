//! Infrastructure adapters for ledgers, waitlists, and notification sinks.

pub mod ledger;
pub mod notify;
pub mod waitlist;

pub use ledger::InMemoryLedger;
pub use notify::{InMemoryNotifier, TracingNotifier};
pub use waitlist::InMemoryWaitlist;
