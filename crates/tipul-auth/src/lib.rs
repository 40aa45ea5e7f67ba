//! tipul-auth
//!
//! The session/identity store: who is signed in, and the login/logout
//! flow over the data-access boundary.

pub mod error;
pub mod session;
