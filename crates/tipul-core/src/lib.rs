//! tipul-core
//!
//! Pure domain types for the Tipul clinic system. No async, no I/O —
//! this is the shared vocabulary of every other crate.

pub mod models;
