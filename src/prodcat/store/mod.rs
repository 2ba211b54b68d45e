//! # Reference Data
//!
//! The catalog is built from three flat collections: users, categories and
//! products. The [`DataStore`] trait hides where they come from so the join and
//! filter code never deals with files or parsing.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: collections held in vectors, built in code.
//!   Used by tests and by [`sample`].
//! - [`fs::FileStore`]: reads `users.json`, `categories.json` and
//!   `products.json` from a directory once, at open time.
//! - [`sample::store`]: a small built-in dataset so the CLI works out of the box.
//!
//! Collections are loaded once and never change afterwards, which is why the
//! trait hands out plain slices instead of `Result`s.

use crate::model::{Category, Product, User};

pub mod fs;
pub mod memory;
pub mod sample;

/// Read-only access to the reference collections.
///
/// Order matters: the join keeps products in the order returned here.
pub trait DataStore {
    fn users(&self) -> &[User];

    fn categories(&self) -> &[Category];

    fn products(&self) -> &[Product];
}

impl<S: DataStore + ?Sized> DataStore for Box<S> {
    fn users(&self) -> &[User] {
        (**self).users()
    }

    fn categories(&self) -> &[Category] {
        (**self).categories()
    }

    fn products(&self) -> &[Product] {
        (**self).products()
    }
}

impl<S: DataStore + ?Sized> DataStore for &S {
    fn users(&self) -> &[User] {
        (**self).users()
    }

    fn categories(&self) -> &[Category] {
        (**self).categories()
    }

    fn products(&self) -> &[Product] {
        (**self).products()
    }
}
