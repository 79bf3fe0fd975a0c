//! Bearer token handling.
//!
//! Sessions are issued elsewhere; this server only validates the HS256
//! access tokens it is handed and reads the caller's user id from them.

pub mod jwt;
