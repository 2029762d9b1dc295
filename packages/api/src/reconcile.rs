//! # Optimistic reconciliation of in-memory listings
//!
//! After an edit or delete succeeds remotely, the visible listing is updated
//! locally instead of re-fetched, trading a window of potential drift from
//! server truth for responsiveness. The merge semantics live here as pure
//! functions so they are testable independent of any transport.

use crate::model::User;

/// Shallow-overwrite merge of `update` into `existing`.
///
/// The canonical id is always kept from `existing`. String attributes
/// overwrite only when the update carries a non-empty value, and optional
/// attributes only when present, so a sparse mutation response never erases
/// fields the server simply didn't echo back.
pub fn merge_user(existing: &User, update: &User) -> User {
    User {
        id: existing.id.clone(),
        username: pick(&existing.username, &update.username),
        email: pick(&existing.email, &update.email),
        firstname: update
            .firstname
            .clone()
            .or_else(|| existing.firstname.clone()),
        lastname: update
            .lastname
            .clone()
            .or_else(|| existing.lastname.clone()),
        status: pick(&existing.status, &update.status),
        profile_image: update
            .profile_image
            .clone()
            .or_else(|| existing.profile_image.clone()),
    }
}

/// Merge an edit result into its slot in the listing. Records with a
/// different id pass through untouched.
pub fn reconcile_update(users: &[User], id: &str, update: &User) -> Vec<User> {
    users
        .iter()
        .map(|user| {
            if user.id == id {
                merge_user(user, update)
            } else {
                user.clone()
            }
        })
        .collect()
}

/// Remove a deleted record from the listing and adjust the known total.
///
/// The total only decrements when a record was actually removed, so a delete
/// of an id that is not displayed leaves both outputs unchanged.
pub fn reconcile_delete(users: &[User], total: u64, id: &str) -> (Vec<User>, u64) {
    let next: Vec<User> = users.iter().filter(|user| user.id != id).cloned().collect();
    let total = if next.len() < users.len() {
        total.saturating_sub(1)
    } else {
        total
    };
    (next, total)
}

fn pick(existing: &str, update: &str) -> String {
    if update.is_empty() {
        existing.to_string()
    } else {
        update.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, username: &str, email: &str) -> User {
        User {
            id: id.to_string(),
            username: username.to_string(),
            email: email.to_string(),
            ..User::default()
        }
    }

    #[test]
    fn test_merge_overwrites_present_fields_only() {
        let existing = User {
            firstname: Some("Jo".to_string()),
            lastname: Some("Reyes".to_string()),
            status: "active".to_string(),
            ..user("u1", "jo", "jo@example.com")
        };
        let update = User {
            firstname: Some("Joanna".to_string()),
            ..user("u1", "", "")
        };

        let merged = merge_user(&existing, &update);
        assert_eq!(merged.firstname.as_deref(), Some("Joanna"));
        // Absent in the update: untouched
        assert_eq!(merged.lastname.as_deref(), Some("Reyes"));
        assert_eq!(merged.username, "jo");
        assert_eq!(merged.email, "jo@example.com");
        assert_eq!(merged.status, "active");
    }

    #[test]
    fn test_merge_keeps_existing_id() {
        let existing = user("u1", "jo", "jo@example.com");
        let update = user("server-assigned-other", "jo2", "jo2@example.com");

        let merged = merge_user(&existing, &update);
        assert_eq!(merged.id, "u1");
        assert_eq!(merged.username, "jo2");
    }

    #[test]
    fn test_update_touches_only_the_matching_slot() {
        let users = vec![
            user("u1", "a", "a@example.com"),
            user("u2", "b", "b@example.com"),
            user("u3", "c", "c@example.com"),
        ];
        let update = user("u2", "renamed", "");

        let next = reconcile_update(&users, "u2", &update);
        assert_eq!(next.len(), 3);
        assert_eq!(next[0], users[0]);
        assert_eq!(next[1].username, "renamed");
        assert_eq!(next[1].email, "b@example.com");
        assert_eq!(next[2], users[2]);
    }

    #[test]
    fn test_delete_removes_exactly_one_and_decrements() {
        let users = vec![
            user("u1", "a", "a@example.com"),
            user("u2", "b", "b@example.com"),
        ];

        let (next, total) = reconcile_delete(&users, 10, "u1");
        assert_eq!(next, vec![users[1].clone()]);
        assert_eq!(total, 9);
        // The surviving record is untouched
        assert_eq!(next[0].username, "b");
    }

    #[test]
    fn test_delete_of_unknown_id_changes_nothing() {
        let users = vec![user("u1", "a", "a@example.com")];

        let (next, total) = reconcile_delete(&users, 10, "nope");
        assert_eq!(next, users);
        assert_eq!(total, 10);
    }

    #[test]
    fn test_delete_never_underflows_total() {
        let users = vec![user("u1", "a", "a@example.com")];
        let (_, total) = reconcile_delete(&users, 0, "u1");
        assert_eq!(total, 0);
    }
}
