//! Local data view: browser-persisted mock collection, no server involved.

use dioxus::prelude::*;
use serde_json::{json, Map, Value};
use store::{Item, MockStore, StorageBackend, StoreError};
use ui::{Alert, Field};

use std::rc::Rc;

use super::{PageHeader, RequireSession};

const COLLECTION: &str = "users";

#[component]
pub fn LocalData() -> Element {
    rsx! {
        RequireSession {
            LocalDataView {}
        }
    }
}

#[component]
fn LocalDataView() -> Element {
    let store: MockStore<Rc<dyn StorageBackend>> =
        use_hook(|| MockStore::new(ui::make_backend()));

    let mut items = use_signal({
        let store = store.clone();
        move || store.list(COLLECTION)
    });
    let mut error = use_signal(String::new);

    let mut new_name = use_signal(String::new);
    let mut new_email = use_signal(String::new);
    let mut new_role = use_signal(|| "Viewer".to_string());

    let oncreate = {
        let store = store.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let name = new_name.peek().trim().to_string();
            let email = new_email.peek().trim().to_string();
            if name.is_empty() || email.is_empty() {
                error.set("Name and email are required.".to_string());
                return;
            }

            let mut payload = Map::new();
            payload.insert("name".to_string(), json!(name));
            payload.insert("email".to_string(), json!(email));
            payload.insert("role".to_string(), json!(new_role.peek().clone()));
            payload.insert("status".to_string(), json!("Active"));
            store.create(COLLECTION, payload);

            new_name.set(String::new());
            new_email.set(String::new());
            new_role.set("Viewer".to_string());
            error.set(String::new());
            items.set(store.list(COLLECTION));
        }
    };

    let ontoggle = {
        let store = store.clone();
        move |(id, currently_active): (String, bool)| {
            let mut patch = Map::new();
            let next_status = if currently_active { "Suspended" } else { "Active" };
            patch.insert("status".to_string(), json!(next_status));

            match store.update(COLLECTION, &id, patch) {
                Ok(_) => error.set(String::new()),
                Err(StoreError::NotFound { .. }) => {
                    error.set("That record no longer exists.".to_string());
                }
            }
            items.set(store.list(COLLECTION));
        }
    };

    let ondelete = {
        let store = store.clone();
        move |id: String| {
            match store.delete(COLLECTION, &id) {
                Ok(_) => error.set(String::new()),
                Err(StoreError::NotFound { .. }) => {
                    error.set("That record no longer exists.".to_string());
                }
            }
            items.set(store.list(COLLECTION));
        }
    };

    let onreset = {
        let store = store.clone();
        move |_| {
            items.set(store.reset(COLLECTION));
            error.set(String::new());
        }
    };

    rsx! {
        div { class: "page",
            PageHeader {
                eyebrow: "Sandbox",
                title: "Local Data",
                subtitle: "A seeded collection stored in this browser only.",
            }

            if !error().is_empty() {
                Alert { "{error}" }
            }

            section { class: "panel",
                div { class: "panel__head",
                    h2 { class: "panel__title", "Records" }
                    button { class: "ghost", onclick: onreset, "Reset to seed" }
                }

                table { class: "table",
                    thead {
                        tr { class: "table__head",
                            th { "Name" }
                            th { "Email" }
                            th { "Role" }
                            th { "Status" }
                            th { "Updated" }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        for item in items() {
                            LocalRow {
                                key: "{item.id}",
                                item: item.clone(),
                                ontoggle: ontoggle.clone(),
                                ondelete: ondelete.clone(),
                            }
                        }
                        if items().is_empty() {
                            tr {
                                td { class: "table__empty", colspan: 6, "Nothing stored yet." }
                            }
                        }
                    }
                }
            }

            section { class: "panel",
                h2 { class: "panel__title", "Add a record" }

                form { class: "form", onsubmit: oncreate,
                    Field {
                        label: "Name",
                        value: new_name(),
                        oninput: move |evt: FormEvent| new_name.set(evt.value()),
                    }
                    Field {
                        label: "Email",
                        input_type: "email",
                        value: new_email(),
                        oninput: move |evt: FormEvent| new_email.set(evt.value()),
                    }
                    label { class: "float-field",
                        select {
                            value: new_role(),
                            onchange: move |evt| new_role.set(evt.value()),
                            option { value: "Viewer", "Viewer" }
                            option { value: "Editor", "Editor" }
                            option { value: "Admin", "Admin" }
                        }
                        span { "Role" }
                    }

                    div { class: "form__actions",
                        button { class: "primary", r#type: "submit", "Add record" }
                    }
                }
            }
        }
    }
}

#[component]
fn LocalRow(
    item: Item,
    ontoggle: EventHandler<(String, bool)>,
    ondelete: EventHandler<String>,
) -> Element {
    let name = field(&item, "name").to_string();
    let email = field(&item, "email").to_string();
    let role = field(&item, "role").to_string();
    let status = field(&item, "status").to_string();
    let active = status == "Active";
    let id = item.id.clone();
    let toggle_id = id.clone();

    rsx! {
        tr { class: "table__row",
            td { class: "cell", strong { "{name}" } }
            td { class: "cell", "{email}" }
            td { class: "cell",
                span { class: "pill", "{role}" }
            }
            td { class: "cell",
                span {
                    class: if active { "status status--active" } else { "status" },
                    "{status}"
                }
            }
            td { class: "cell", "{item.updated_at}" }
            td { class: "cell actions",
                button {
                    class: "ghost",
                    onclick: move |_| ontoggle.call((toggle_id.clone(), active)),
                    if active { "Suspend" } else { "Activate" }
                }
                button {
                    class: "danger",
                    onclick: move |_| ondelete.call(id.clone()),
                    "Delete"
                }
            }
        }
    }
}

fn field<'a>(item: &'a Item, key: &str) -> &'a str {
    item.fields.get(key).and_then(Value::as_str).unwrap_or("")
}
