//! tipul-app
//!
//! Screen view models and the application shell wiring the session, the
//! router, and the data-access boundary together. The binary in this crate
//! is a development console standing in for the SPA chrome.

pub mod app;
pub mod badge;
pub mod screens;
