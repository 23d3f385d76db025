//! Realm scoping and access control.
//!
//! A realm is the isolation boundary owning a set of components. Every
//! operation in this crate takes the realm scope and the caller's resolved
//! capabilities as explicit arguments.

mod access;
mod id;

pub use access::{AccessLevel, RealmAccess};
pub use id::RealmId;
