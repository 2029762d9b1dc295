//! Canonical entity shapes read by every UI consumer.

use serde::{Deserialize, Serialize};

/// A user in canonical form, post-normalization.
///
/// `id` is derived from whichever of `_id`/`id` the backend supplied; exactly
/// one canonical field is exposed regardless of backend convention. `username`,
/// `email` and `status` are empty strings when the backend omitted them;
/// the remaining attributes are genuinely optional.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    pub status: String,
    #[serde(rename = "profileImage", skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}

impl User {
    /// "First Last", skipping absent parts.
    pub fn full_name(&self) -> String {
        [self.firstname.as_deref(), self.lastname.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A canonical paginated listing.
///
/// `total` is inferred, not always provided verbatim by the backend; see
/// [`crate::normalize::normalize_listing`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub users: Vec<User>,
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_skips_absent_parts() {
        let user = User {
            firstname: Some("Jo".to_string()),
            ..User::default()
        };
        assert_eq!(user.full_name(), "Jo");

        let user = User {
            firstname: Some("Jo".to_string()),
            lastname: Some("Reyes".to_string()),
            ..User::default()
        };
        assert_eq!(user.full_name(), "Jo Reyes");

        assert_eq!(User::default().full_name(), "");
    }
}
