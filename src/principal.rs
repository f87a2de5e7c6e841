//! Principal — the identity value reported by the provider.
//!
//! A `Principal` is externally defined data: the crate caches and checks
//! it for presence but never interprets its fields. The cached "session
//! record" is this value serialized as JSON text.

#[cfg(test)]
#[path = "principal_test.rs"]
mod principal_test;

use serde::{Deserialize, Serialize};

/// Identity data returned by the identity provider after sign-in.
///
/// Only `uid` is required; display attributes are whatever the provider
/// supplies. Any further provider-defined fields are captured in `extra`
/// so a cached record round-trips without dropping data this crate does
/// not model.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Principal {
    /// Provider-unique identifier for the signed-in user.
    pub uid: String,

    /// Human-readable name, if the provider supplies one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Primary email address, if the provider supplies one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Profile image URL, if the provider supplies one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,

    /// Provider-defined attributes beyond the modelled fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Principal {
    /// Create a principal with only a `uid`, all display attributes unset.
    #[must_use]
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            display_name: None,
            email: None,
            avatar_url: None,
            extra: serde_json::Map::new(),
        }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
