//! Observability for go-consistent.
//! `tracing` crate with `EnvFilter`, log level read from `CONSISTENT_LOG`.

pub mod setup;

pub use setup::init_tracing;
