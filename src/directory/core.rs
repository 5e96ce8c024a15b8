//! Directory core
//!
//! `UserDirectory` owns a fixed number of slots, each empty or holding one
//! record. Removal clears a slot in place; registration fills the lowest
//! free slot.

use log::info;

use crate::config::DirectoryConfig;
use crate::directory::record::UserRecord;
use crate::directory::validator::{is_valid_password, is_valid_username};
use crate::error::{DirectoryError, UsernameRejection};

pub struct UserDirectory {
    slots: Vec<Option<UserRecord>>,
    config: DirectoryConfig,
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::with_config(DirectoryConfig::default())
    }
}

impl UserDirectory {
    /// An empty directory with the default policy and 15 slots.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty directory sized and governed by `config`.
    pub fn with_config(config: DirectoryConfig) -> Self {
        let slots = (0..config.capacity).map(|_| None).collect();
        Self { slots, config }
    }

    /// Registers a new user.
    ///
    /// Checks run in order: username policy, password policy, duplicate
    /// username, free slot. Nothing changes unless every check passes.
    pub fn register(&mut self, username: &str, password: &str) -> Result<(), DirectoryError> {
        if !is_valid_username(username, &self.config) {
            return Err(DirectoryError::InvalidUsername(UsernameRejection::Malformed));
        }

        if !is_valid_password(password, &self.config) {
            return Err(DirectoryError::InvalidPassword);
        }

        if self.find_user(username).is_some() {
            return Err(DirectoryError::InvalidUsername(
                UsernameRejection::AlreadyExists,
            ));
        }

        let capacity = self.capacity();
        let (index, slot) = self
            .slots
            .iter_mut()
            .enumerate()
            .find(|(_, slot)| slot.is_none())
            .ok_or(DirectoryError::CapacityExceeded(capacity))?;

        *slot = Some(UserRecord::new(username.to_string(), password.to_string()));
        info!("Registered user '{}' in slot {}", username, index);
        Ok(())
    }

    /// Removes the user with exactly this username, freeing its slot.
    pub fn remove(&mut self, username: &str) -> Result<(), DirectoryError> {
        let index = self
            .find_user(username)
            .ok_or_else(|| DirectoryError::UserNotFound(username.to_string()))?;

        self.slots[index] = None;
        info!("Removed user '{}' from slot {}", username, index);
        Ok(())
    }

    /// Checks a username and password against the stored record.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<(), DirectoryError> {
        let record = self
            .find_user(username)
            .and_then(|index| self.slots[index].as_ref())
            .ok_or_else(|| DirectoryError::UserNotFound(username.to_string()))?;

        if !record.matches_password(password) {
            return Err(DirectoryError::WrongPassword(username.to_string()));
        }

        info!("Authenticated user '{}'", username);
        Ok(())
    }

    // --------------------
    // Read-only queries
    // --------------------

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_some())
    }

    pub fn contains(&self, username: &str) -> bool {
        self.find_user(username).is_some()
    }

    /// Index of the slot holding `username`, scanning from slot 0.
    fn find_user(&self, username: &str) -> Option<usize> {
        self.slots.iter().position(|slot| {
            slot.as_ref()
                .is_some_and(|record| record.username() == username)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    const PASSWORD: &str = "Sunshine123!";

    fn fill(directory: &mut UserDirectory, count: usize) {
        for i in 0..count {
            directory.register(&format!("user{:02}", i), PASSWORD).unwrap();
        }
    }

    #[test]
    fn test_new_directory_is_empty() {
        let directory = UserDirectory::new();
        assert!(directory.is_empty());
        assert!(!directory.is_full());
        assert_eq!(directory.capacity(), 15);
    }

    #[test]
    fn test_register_then_authenticate() {
        let mut directory = UserDirectory::new();
        directory.register("alice1", PASSWORD).unwrap();

        assert_eq!(directory.len(), 1);
        assert!(directory.contains("alice1"));
        assert!(directory.authenticate("alice1", PASSWORD).is_ok());
    }

    #[test]
    fn test_short_username_rejected_regardless_of_password() {
        let mut directory = UserDirectory::new();
        assert_eq!(
            directory.register("bob", PASSWORD),
            Err(DirectoryError::InvalidUsername(UsernameRejection::Malformed))
        );
        assert_eq!(
            directory.register("bob", "x").unwrap_err().kind(),
            ErrorKind::InvalidUsername
        );
        assert!(directory.is_empty());
    }

    #[test]
    fn test_forbidden_password_rejected() {
        let mut directory = UserDirectory::new();
        assert_eq!(
            directory.register("alice1", "password123"),
            Err(DirectoryError::InvalidPassword)
        );
        assert!(directory.is_empty());
    }

    #[test]
    fn test_duplicate_username() {
        let mut directory = UserDirectory::new();
        directory.register("alice1", PASSWORD).unwrap();

        let err = directory.register("alice1", "Another456#").unwrap_err();
        assert_eq!(
            err,
            DirectoryError::InvalidUsername(UsernameRejection::AlreadyExists)
        );
        assert_eq!(err.kind(), ErrorKind::InvalidUsername);

        // Original password still in place
        assert!(directory.authenticate("alice1", PASSWORD).is_ok());
        assert_eq!(directory.len(), 1);
    }

    #[test]
    fn test_password_checked_before_duplicate() {
        let mut directory = UserDirectory::new();
        directory.register("alice1", PASSWORD).unwrap();
        assert_eq!(
            directory.register("alice1", "short"),
            Err(DirectoryError::InvalidPassword)
        );
    }

    #[test]
    fn test_usernames_are_case_sensitive() {
        let mut directory = UserDirectory::new();
        directory.register("alice1", PASSWORD).unwrap();
        directory.register("Alice1", PASSWORD).unwrap();

        assert_eq!(directory.len(), 2);
        assert_eq!(
            directory.authenticate("ALICE1", PASSWORD),
            Err(DirectoryError::UserNotFound("ALICE1".into()))
        );
    }

    #[test]
    fn test_capacity_exceeded_then_slot_reused() {
        let mut directory = UserDirectory::new();
        fill(&mut directory, 15);
        assert!(directory.is_full());

        assert_eq!(
            directory.register("overflow", PASSWORD),
            Err(DirectoryError::CapacityExceeded(15))
        );

        directory.remove("user07").unwrap();
        assert!(!directory.is_full());

        directory.register("overflow", PASSWORD).unwrap();
        assert!(directory.is_full());
        assert!(directory.authenticate("overflow", PASSWORD).is_ok());
    }

    #[test]
    fn test_full_directory_still_reports_policy_errors_first() {
        let mut directory = UserDirectory::new();
        fill(&mut directory, 15);

        assert_eq!(
            directory.register("user00", PASSWORD),
            Err(DirectoryError::InvalidUsername(UsernameRejection::AlreadyExists))
        );
        assert_eq!(
            directory.register("newcomer", "weak"),
            Err(DirectoryError::InvalidPassword)
        );
    }

    #[test]
    fn test_register_fills_lowest_free_slot() {
        let mut directory = UserDirectory::new();
        fill(&mut directory, 5);
        directory.remove("user01").unwrap();
        directory.remove("user03").unwrap();

        directory.register("refill", PASSWORD).unwrap();
        assert_eq!(directory.find_user("refill"), Some(1));

        directory.register("refill2", PASSWORD).unwrap();
        assert_eq!(directory.find_user("refill2"), Some(3));
    }

    #[test]
    fn test_remove_unknown_user() {
        let mut directory = UserDirectory::new();
        assert_eq!(
            directory.remove("ghost"),
            Err(DirectoryError::UserNotFound("ghost".into()))
        );
    }

    #[test]
    fn test_remove_then_authenticate() {
        let mut directory = UserDirectory::new();
        directory.register("alice1", PASSWORD).unwrap();
        directory.remove("alice1").unwrap();

        assert!(directory.is_empty());
        assert_eq!(
            directory.authenticate("alice1", PASSWORD),
            Err(DirectoryError::UserNotFound("alice1".into()))
        );
    }

    #[test]
    fn test_wrong_password() {
        let mut directory = UserDirectory::new();
        directory.register("alice1", PASSWORD).unwrap();

        assert_eq!(
            directory.authenticate("alice1", "sunshine123!"),
            Err(DirectoryError::WrongPassword("alice1".into()))
        );
    }

    #[test]
    fn test_custom_capacity() {
        let config = DirectoryConfig {
            capacity: 2,
            ..DirectoryConfig::default()
        };
        let mut directory = UserDirectory::with_config(config);
        fill(&mut directory, 2);

        assert_eq!(
            directory.register("third", PASSWORD),
            Err(DirectoryError::CapacityExceeded(2))
        );
    }
}
