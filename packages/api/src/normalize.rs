//! # Response normalization — one canonical shape out of many
//!
//! The backend this client talks to does not guarantee its payload shapes:
//! entity fields arrive under several naming conventions and listings arrive
//! under several nesting conventions. The functions here accept whatever the
//! wire delivered and produce the single canonical shape the UI reads.
//!
//! Two ordered contracts live in this module and are part of the observable
//! behavior (tests pin them):
//!
//! - **Field chains**: per attribute, an ordered list of accepted spellings;
//!   the first non-absent value wins. E.g. first name resolves
//!   `firstname` → `firstName` → `first_name` → `givenName`.
//! - **Listing shapes**: an ordered list of known payload layouts; the first
//!   one that matches wins, and each array element is normalized as a user.
//!   An unrecognized layout degrades to an empty listing with total 0 rather
//!   than failing.
//!
//! The listing total is likewise inferred through an ordered chain of
//! locations, falling back to the resolved array's length, so a usable page
//! count exists even when the backend omits pagination metadata.

use serde_json::{Map, Value};

use crate::model::{Listing, User};

const FIRSTNAME_KEYS: &[&str] = &["firstname", "firstName", "first_name", "givenName"];
const LASTNAME_KEYS: &[&str] = &["lastname", "lastName", "last_name", "familyName"];
const USERNAME_KEYS: &[&str] = &["username", "userName", "user_name"];
const EMAIL_KEYS: &[&str] = &["email", "mail"];
const ID_KEYS: &[&str] = &["_id", "id"];
const IMAGE_KEYS: &[&str] = &["profileImage", "profile_image"];

/// Canonicalise a single raw user object.
///
/// A non-object input produces the default (empty) user.
pub fn normalize_user(raw: &Value) -> User {
    let Some(obj) = raw.as_object() else {
        return User::default();
    };

    User {
        id: first_string(obj, ID_KEYS).unwrap_or_default(),
        username: first_string(obj, USERNAME_KEYS).unwrap_or_default(),
        email: first_string(obj, EMAIL_KEYS).unwrap_or_default(),
        firstname: first_string(obj, FIRSTNAME_KEYS),
        lastname: first_string(obj, LASTNAME_KEYS),
        status: first_string(obj, &["status"]).unwrap_or_default(),
        profile_image: first_string(obj, IMAGE_KEYS),
    }
}

/// Canonicalise a raw listing payload into `{users, total}`.
///
/// Shapes are tried in order; the first match wins:
///
/// 1. bare array
/// 2. `{users: [...]}`
/// 3. `{user: [...]}`
/// 4. `{data: {users: [...]}}`
/// 5. `{items: [...]}`
/// 6. `{data: {user: [...]}}`
/// 7. `{data: [...]}`
///
/// Anything else normalizes to an empty listing.
pub fn normalize_listing(raw: &Value) -> Listing {
    if let Some(array) = raw.as_array() {
        return listing_from(array, raw, &[]);
    }

    let shapes: &[(&str, &[&str])] = &[
        ("/users", TOP_LEVEL_TOTALS),
        ("/user", TOP_LEVEL_TOTALS),
        ("/data/users", DATA_TOTALS),
        ("/items", ITEMS_TOTALS),
        ("/data/user", DATA_TOTALS),
        ("/data", TOP_LEVEL_TOTALS),
    ];

    for (array_pointer, total_pointers) in shapes {
        if let Some(array) = raw.pointer(array_pointer).and_then(Value::as_array) {
            return listing_from(array, raw, total_pointers);
        }
    }

    Listing::default()
}

/// Total locations for top-level listing shapes, in precedence order.
const TOP_LEVEL_TOTALS: &[&str] = &["/total", "/count", "/pagination/total", "/meta/total"];

/// Total locations when the array nests under `data`.
const DATA_TOTALS: &[&str] = &[
    "/total",
    "/count",
    "/data/total",
    "/pagination/total",
    "/meta/total",
];

/// Total locations for the `{items: [...]}` shape.
const ITEMS_TOTALS: &[&str] = &[
    "/total",
    "/count",
    "/totalItems",
    "/pagination/total",
    "/meta/total",
];

fn listing_from(array: &[Value], raw: &Value, total_pointers: &[&str]) -> Listing {
    let users: Vec<User> = array.iter().map(normalize_user).collect();
    let total = total_pointers
        .iter()
        .find_map(|pointer| raw.pointer(pointer).and_then(as_count))
        .unwrap_or(users.len() as u64);
    Listing { users, total }
}

fn first_string(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| obj.get(*key).and_then(value_to_string))
}

fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn as_count(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().map(|f| f.max(0.0) as u64)),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_first_name_spellings_resolve_identically() {
        for key in ["firstname", "firstName", "first_name", "givenName"] {
            let user = normalize_user(&json!({ "id": "1", key: "Jo" }));
            assert_eq!(user.firstname.as_deref(), Some("Jo"), "spelling {key}");
        }
    }

    #[test]
    fn test_field_chain_precedence() {
        // Earlier spellings win over later ones
        let user = normalize_user(&json!({
            "firstname": "canonical",
            "firstName": "camel",
            "givenName": "given",
        }));
        assert_eq!(user.firstname.as_deref(), Some("canonical"));

        let user = normalize_user(&json!({ "lastName": "camel", "familyName": "given" }));
        assert_eq!(user.lastname.as_deref(), Some("camel"));

        let user = normalize_user(&json!({ "email": "a@b.com", "mail": "other@b.com" }));
        assert_eq!(user.email, "a@b.com");
    }

    #[test]
    fn test_id_prefers_underscore_id() {
        let user = normalize_user(&json!({ "_id": "abc", "id": "def" }));
        assert_eq!(user.id, "abc");

        let user = normalize_user(&json!({ "id": 7 }));
        assert_eq!(user.id, "7");
    }

    #[test]
    fn test_non_object_input_is_empty_user() {
        assert_eq!(normalize_user(&json!(null)), User::default());
        assert_eq!(normalize_user(&json!([1, 2])), User::default());
    }

    #[test]
    fn test_all_listing_shapes_resolve() {
        let element = json!({ "id": "1", "userName": "jo" });
        let shapes = [
            json!([element]),
            json!({ "users": [element] }),
            json!({ "user": [element] }),
            json!({ "data": { "users": [element] } }),
            json!({ "items": [element] }),
            json!({ "data": { "user": [element] } }),
            json!({ "data": [element] }),
        ];

        for shape in shapes {
            let listing = normalize_listing(&shape);
            assert_eq!(listing.users.len(), 1, "shape {shape}");
            assert_eq!(listing.users[0].username, "jo");
            // No explicit total anywhere: inferred from array length
            assert_eq!(listing.total, 1);
        }
    }

    #[test]
    fn test_total_chain_precedence() {
        let listing = normalize_listing(&json!({
            "users": [],
            "total": 10,
            "count": 20,
            "pagination": { "total": 30 },
            "meta": { "total": 40 },
        }));
        assert_eq!(listing.total, 10);

        let listing = normalize_listing(&json!({
            "users": [],
            "count": 20,
            "meta": { "total": 40 },
        }));
        assert_eq!(listing.total, 20);

        let listing = normalize_listing(&json!({
            "users": [],
            "pagination": { "total": 30 },
            "meta": { "total": 40 },
        }));
        assert_eq!(listing.total, 30);
    }

    #[test]
    fn test_nested_data_shape_with_meta_total() {
        let listing = normalize_listing(&json!({
            "data": { "users": [{ "id": "1", "firstName": "Jo" }] },
            "meta": { "total": 42 },
        }));
        assert_eq!(listing.total, 42);
        assert_eq!(listing.users.len(), 1);
        assert_eq!(listing.users[0].id, "1");
        assert_eq!(listing.users[0].firstname.as_deref(), Some("Jo"));
    }

    #[test]
    fn test_data_total_resolves_for_nested_shapes() {
        let listing = normalize_listing(&json!({
            "data": { "user": [{ "id": "1" }], "total": 9 },
        }));
        assert_eq!(listing.total, 9);
    }

    #[test]
    fn test_items_shape_honors_total_items() {
        let listing = normalize_listing(&json!({
            "items": [{ "id": "1" }, { "id": "2" }],
            "totalItems": 12,
        }));
        assert_eq!(listing.total, 12);
        assert_eq!(listing.users.len(), 2);
    }

    #[test]
    fn test_unknown_shape_degrades_to_empty() {
        for payload in [
            json!({ "message": "nope" }),
            json!("just a string"),
            json!(42),
            json!(null),
            json!({ "data": { "records": [] } }),
        ] {
            let listing = normalize_listing(&payload);
            assert!(listing.users.is_empty());
            assert_eq!(listing.total, 0);
        }
    }

    #[test]
    fn test_inferred_total_matches_length() {
        for count in [0usize, 1, 5] {
            let rows: Vec<Value> = (0..count).map(|i| json!({ "id": i })).collect();
            let listing = normalize_listing(&json!({ "users": rows }));
            assert_eq!(listing.total, listing.users.len() as u64);
        }
    }

    #[test]
    fn test_string_total_parses() {
        let listing = normalize_listing(&json!({ "users": [], "total": "17" }));
        assert_eq!(listing.total, 17);
    }
}
