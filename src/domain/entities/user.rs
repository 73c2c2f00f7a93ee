//! User entity backed by the legacy `users` table.

/// A row of the `users` table.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Full replacement of a user's mutable columns.
#[derive(Debug, Clone, PartialEq)]
pub struct UserUpdate {
    pub name: String,
    pub email: String,
}
