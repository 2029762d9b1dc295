//! Built-in seed data for mock collections.

use serde_json::{json, Map, Value};

use crate::collection::Item;

/// The default contents of a collection on first access.
///
/// Only the demo `users` collection ships seed records; every other collection
/// seeds empty.
pub fn default_seed(collection: &str) -> Vec<Item> {
    match collection {
        "users" => seed_users(),
        _ => Vec::new(),
    }
}

fn seed_users() -> Vec<Item> {
    [
        (
            "u-1001",
            "Avery Thompson",
            "avery.thompson@example.com",
            "Admin",
            "Active",
            "2026-02-05 16:40",
        ),
        (
            "u-1002",
            "Jordan Lee",
            "jordan.lee@example.com",
            "Editor",
            "Active",
            "2026-02-04 09:12",
        ),
        (
            "u-1003",
            "Morgan Patel",
            "morgan.patel@example.com",
            "Viewer",
            "Suspended",
            "2026-01-28 13:07",
        ),
        (
            "u-1004",
            "Riley Chen",
            "riley.chen@example.com",
            "Editor",
            "Active",
            "2026-02-02 18:22",
        ),
    ]
    .into_iter()
    .map(|(id, name, email, role, status, last_active)| Item {
        id: id.to_string(),
        created_at: "2026-01-15T09:00:00.000Z".to_string(),
        updated_at: "2026-01-15T09:00:00.000Z".to_string(),
        fields: seed_fields(name, email, role, status, last_active),
    })
    .collect()
}

fn seed_fields(
    name: &str,
    email: &str,
    role: &str,
    status: &str,
    last_active: &str,
) -> Map<String, Value> {
    let mut fields = Map::new();
    fields.insert("name".to_string(), json!(name));
    fields.insert("email".to_string(), json!(email));
    fields.insert("role".to_string(), json!(role));
    fields.insert("status".to_string(), json!(status));
    fields.insert("lastActive".to_string(), json!(last_active));
    fields
}
