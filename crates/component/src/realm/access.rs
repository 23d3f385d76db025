//! Caller capability model.
//!
//! This module defines the two-level capability check applied before every
//! component operation. Capabilities are resolved by the transport layer and
//! passed in explicitly; the core never reads ambient request state.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AccessError;

/// The capability level an operation requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    /// Read-only listing access.
    View,
    /// Mutating access. Also required for single-resource reads.
    Manage,
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessLevel::View => write!(f, "view"),
            AccessLevel::Manage => write!(f, "manage"),
        }
    }
}

/// The caller's resolved capabilities for a realm.
///
/// `manage` implies `view`. A failing check short-circuits the operation
/// before any store access, so a forbidden call leaves no side effects.
///
/// # Examples
///
/// ```
/// use ironveil_component::realm::RealmAccess;
///
/// let admin = RealmAccess::manage();
/// assert!(admin.require_view().is_ok());
/// assert!(admin.require_manage().is_ok());
///
/// let auditor = RealmAccess::view_only();
/// assert!(auditor.require_view().is_ok());
/// assert!(auditor.require_manage().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RealmAccess {
    view: bool,
    manage: bool,
}

impl RealmAccess {
    /// Grants both capabilities.
    pub fn manage() -> Self {
        Self {
            view: true,
            manage: true,
        }
    }

    /// Grants only the view capability.
    pub fn view_only() -> Self {
        Self {
            view: true,
            manage: false,
        }
    }

    /// Grants nothing.
    pub fn none() -> Self {
        Self {
            view: false,
            manage: false,
        }
    }

    /// Builds capabilities from role names (`"view"`, `"manage"`).
    ///
    /// Unknown role names are ignored.
    pub fn from_roles<'a>(roles: impl IntoIterator<Item = &'a str>) -> Self {
        let mut access = Self::none();
        for role in roles {
            match role.trim() {
                "view" => access.view = true,
                "manage" => {
                    access.view = true;
                    access.manage = true;
                }
                _ => {}
            }
        }
        access
    }

    /// Returns `Ok(())` if the caller may perform read-only listing.
    pub fn require_view(&self) -> Result<(), AccessError> {
        if self.view || self.manage {
            Ok(())
        } else {
            Err(AccessError::Denied {
                required: AccessLevel::View,
            })
        }
    }

    /// Returns `Ok(())` if the caller may perform mutating operations.
    pub fn require_manage(&self) -> Result<(), AccessError> {
        if self.manage {
            Ok(())
        } else {
            Err(AccessError::Denied {
                required: AccessLevel::Manage,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manage_implies_view() {
        let access = RealmAccess::manage();
        assert!(access.require_view().is_ok());
        assert!(access.require_manage().is_ok());
    }

    #[test]
    fn test_view_only() {
        let access = RealmAccess::view_only();
        assert!(access.require_view().is_ok());
        let err = access.require_manage().unwrap_err();
        assert_eq!(
            err,
            AccessError::Denied {
                required: AccessLevel::Manage
            }
        );
    }

    #[test]
    fn test_none() {
        let access = RealmAccess::none();
        assert!(access.require_view().is_err());
        assert!(access.require_manage().is_err());
    }

    #[test]
    fn test_from_roles() {
        let access = RealmAccess::from_roles(["view"]);
        assert!(access.require_view().is_ok());
        assert!(access.require_manage().is_err());

        let access = RealmAccess::from_roles(["manage"]);
        assert!(access.require_manage().is_ok());

        let access = RealmAccess::from_roles([" view ", "unknown"]);
        assert!(access.require_view().is_ok());
        assert!(access.require_manage().is_err());

        let access = RealmAccess::from_roles([]);
        assert!(access.require_view().is_err());
    }

    #[test]
    fn test_access_level_display() {
        assert_eq!(AccessLevel::View.to_string(), "view");
        assert_eq!(AccessLevel::Manage.to_string(), "manage");
    }
}
