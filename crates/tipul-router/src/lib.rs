//! tipul-router
//!
//! Location-fragment parsing, the hash router, and the role-aware route
//! resolver. The resolver is a pure function; the router is the single
//! source of truth for where the app currently is.

pub mod path;
pub mod resolve;
pub mod router;
