//! Collective (organization) records.

use serde::{Deserialize, Serialize};

/// Slug-only reference to another collective, e.g. a host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectiveRef {
    #[serde(default)]
    pub id: Option<u64>,
    pub slug: String,
}

/// An organization receiving funds, identified publicly by its slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collective {
    pub id: u64,
    pub slug: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub host: Option<CollectiveRef>,
}

impl Collective {
    /// Name for headers, falling back to the slug.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.slug)
    }

    /// Slug of the fiscal host, if any.
    #[must_use]
    pub fn host_slug(&self) -> Option<&str> {
        self.host.as_ref().map(|host| host.slug.as_str())
    }
}
