//! Module `record`
//!
//! A single registered user as held in a directory slot.

/// Username and password exactly as supplied at registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    username: String,
    password: String,
}

impl UserRecord {
    pub fn new(username: String, password: String) -> Self {
        Self { username, password }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Exact, case-sensitive password comparison.
    pub fn matches_password(&self, password: &str) -> bool {
        self.password == password
    }
}
