//! Well-known role name constants.
//!
//! The league has a single role: every account in the `users` table is an
//! administrator allowed to perform write operations.

pub const ROLE_ADMIN: &str = "admin";
