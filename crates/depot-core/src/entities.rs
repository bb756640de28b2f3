//! Remote registry entities and exact-match resolution over fetched lists.

use std::fmt;

use serde::Deserialize;

/// A package record as returned by `GET /packages/`.
#[derive(Debug, Clone, Deserialize)]
pub struct Package {
    /// Human-facing package name.
    pub name: String,
    /// Opaque registry identifier.
    pub uuid: String,
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A user record as returned by `GET /subusers/`.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    /// Email address the user is keyed by.
    pub email: String,
    /// Opaque registry identifier.
    pub hash_id: String,
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.email)
    }
}

/// An access token scoping one user's access to one package, as returned by
/// `GET /tokens/`.
#[derive(Debug, Clone, Deserialize)]
pub struct Token {
    /// Opaque token identifier, used in the delete endpoint path.
    pub uuid: String,
    /// `uuid` of the package this token grants access to.
    pub package: String,
    /// `hash_id` of the user this token belongs to.
    pub user: String,
}

impl Token {
    /// Whether this token belongs to the given account owner.
    ///
    /// Tokens owned by the account itself must never be deleted.
    #[must_use]
    pub fn is_owned_by(&self, account_id: &str) -> bool {
        self.user == account_id
    }
}

/// Find the first package with exactly the given name.
#[must_use]
pub fn find_package<'a>(packages: &'a [Package], name: &str) -> Option<&'a Package> {
    packages.iter().find(|p| p.name == name)
}

/// Find the first user with exactly the given email.
#[must_use]
pub fn find_user<'a>(users: &'a [User], email: &str) -> Option<&'a User> {
    users.iter().find(|u| u.email == email)
}

/// Find the first token scoping `user`'s access to `package`.
#[must_use]
pub fn find_token<'a>(tokens: &'a [Token], package: &Package, user: &User) -> Option<&'a Token> {
    tokens
        .iter()
        .find(|t| t.package == package.uuid && t.user == user.hash_id)
}
