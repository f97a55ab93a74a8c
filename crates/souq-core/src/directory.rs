//! # Account Directory
//!
//! Registered identities and their carts.
//!
//! ## Information Leak Policy
//! `authenticate` fails identically for an unknown username and a wrong
//! password. This is deliberate: login error messages must not reveal which
//! usernames exist.

use crate::error::{ShopError, ShopResult};
use crate::types::{Identity, Role};

/// The set of registered identities, keyed by unique username.
#[derive(Debug, Clone, Default)]
pub struct AccountDirectory {
    users: Vec<Identity>,
}

impl AccountDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        AccountDirectory { users: Vec::new() }
    }

    /// Creates a directory from seed identities.
    pub fn with_identities(users: Vec<Identity>) -> Self {
        AccountDirectory { users }
    }

    /// Looks up an identity by username.
    pub fn find(&self, username: &str) -> Option<&Identity> {
        self.users.iter().find(|u| u.username == username)
    }

    /// Looks up an identity by username for mutation (cart access).
    pub fn find_mut(&mut self, username: &str) -> Option<&mut Identity> {
        self.users.iter_mut().find(|u| u.username == username)
    }

    /// Exact match on both username and password.
    ///
    /// Uniform failure: no distinction between unknown user and wrong
    /// secret.
    pub fn authenticate(&self, username: &str, password: &str) -> ShopResult<&Identity> {
        self.users
            .iter()
            .find(|u| u.username == username && u.password == password)
            .ok_or(ShopError::InvalidCredentials)
    }

    /// Registers a new Customer-role identity with an empty cart.
    ///
    /// Fails with [`ShopError::DuplicateUsername`] if the username is taken;
    /// the existing identity (including its credential) is left untouched.
    pub fn register(&mut self, username: &str, password: &str) -> ShopResult<&Identity> {
        if self.find(username).is_some() {
            return Err(ShopError::DuplicateUsername(username.to_string()));
        }
        self.users
            .push(Identity::new(username, password, Role::Customer));
        Ok(self.users.last().expect("just pushed"))
    }
}
