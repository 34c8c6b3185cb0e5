//! Builders to construct registrar components from configuration.

pub mod registrar_builder;

pub use registrar_builder::{build_in_memory, build_registrar};
