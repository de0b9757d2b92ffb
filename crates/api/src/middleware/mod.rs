//! Request extractors for authenticated routes.
//!
//! - [`auth::SessionUser`] -- the account behind a Bearer session token.

pub mod auth;
