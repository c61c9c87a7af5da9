//! The viewing user and the permission queries the detail view relies on.

use serde::{Deserialize, Serialize};

use super::{Collective, CollectiveRef};
use crate::constants::ROOT_COLLECTIVE_SLUG;

// ============================================================================
// Permissions
// ============================================================================

/// Permission checks consulted while rendering.
///
/// The view only ever asks these two questions, so anything able to answer
/// them can stand in for a logged-in user.
pub trait Permissions {
    /// Whether the viewer may edit (administer) the given collective.
    fn can_edit_collective(&self, collective: &Collective) -> bool;

    /// Whether the viewer is a platform super-admin.
    fn is_root(&self) -> bool;
}

// ============================================================================
// Membership
// ============================================================================

/// Role held by a user in a collective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MemberRole {
    Admin,
    Host,
    Member,
    Backer,
    Contributor,
    Fundraiser,
    Follower,
    #[serde(other)]
    Other,
}

/// One entry of the user's `memberOf` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Membership {
    pub collective: CollectiveRef,
    pub role: MemberRole,
}

// ============================================================================
// LoggedInUser
// ============================================================================

/// The user currently viewing the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggedInUser {
    pub id: u64,
    #[serde(default)]
    pub username: Option<String>,
    /// The user's own profile collective.
    #[serde(default)]
    pub collective: Option<CollectiveRef>,
    #[serde(default)]
    pub member_of: Vec<Membership>,
}

impl LoggedInUser {
    /// Returns `true` if the user holds any of `wanted` in the collective `slug`.
    #[must_use]
    pub fn has_role(&self, slug: &str, wanted: &[MemberRole]) -> bool {
        self.member_of
            .iter()
            .any(|m| m.collective.slug == slug && wanted.contains(&m.role))
    }

    /// Display name for the header.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.username
            .clone()
            .or_else(|| self.collective.as_ref().map(|c| c.slug.clone()))
            .unwrap_or_else(|| format!("user #{}", self.id))
    }

    fn owns(&self, collective: &Collective) -> bool {
        self.collective.as_ref().is_some_and(|own| {
            own.id == Some(collective.id) || own.slug == collective.slug
        })
    }
}

impl Permissions for LoggedInUser {
    fn can_edit_collective(&self, collective: &Collective) -> bool {
        if self.owns(collective) {
            return true;
        }
        if self.has_role(&collective.slug, &[MemberRole::Admin, MemberRole::Host]) {
            return true;
        }
        collective
            .host_slug()
            .is_some_and(|host| self.has_role(host, &[MemberRole::Admin]))
    }

    fn is_root(&self) -> bool {
        self.has_role(ROOT_COLLECTIVE_SLUG, &[MemberRole::Admin])
    }
}

// ============================================================================
// Tests
// ============================================================================
