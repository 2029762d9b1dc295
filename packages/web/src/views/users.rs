//! Admin user table: paginated listing with inline edit, create, and delete.

use api::{reconcile_delete, reconcile_update, ApiError, User, UserDraft, UserPatch};
use dioxus::prelude::*;
use ui::{use_session, Alert, Field};

use super::{PageHeader, RequireSession};

const PAGE_SIZE: u32 = 5;

#[component]
pub fn Users() -> Element {
    rsx! {
        RequireSession {
            UsersView {}
        }
    }
}

#[component]
fn UsersView() -> Element {
    let session = use_session();
    let client = session.client();

    let mut page = use_signal(|| 1u32);
    let mut seq = use_signal(|| 0u32);
    let mut users = use_signal(Vec::<User>::new);
    let mut total = use_signal(|| 0u64);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(String::new);

    let mut editing_id = use_signal(|| None::<String>);
    let mut edit_username = use_signal(String::new);
    let mut edit_email = use_signal(String::new);
    let mut edit_firstname = use_signal(String::new);
    let mut edit_lastname = use_signal(String::new);
    let mut edit_status = use_signal(String::new);
    let mut saving = use_signal(|| false);

    let mut new_username = use_signal(String::new);
    let mut new_email = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut new_firstname = use_signal(String::new);
    let mut new_lastname = use_signal(String::new);
    let mut create_error = use_signal(String::new);
    let mut creating = use_signal(|| false);

    let list_client = client.clone();
    let load_users = use_callback(move |target_page: u32| {
        let client = list_client.clone();
        spawn(async move {
            // Responses landing out of order must not clobber the newest
            // page, so each fetch takes a generation and only the holder of
            // the latest one may write.
            let generation = seq.peek().wrapping_add(1);
            seq.set(generation);
            loading.set(true);
            error.set(String::new());

            match client.list_users(target_page, PAGE_SIZE).await {
                Ok(listing) => {
                    if *seq.peek() == generation {
                        users.set(listing.users);
                        total.set(listing.total);
                    }
                }
                Err(ApiError::Unauthorized) => session.force_logout(),
                Err(err) => {
                    if *seq.peek() == generation {
                        error.set(err.to_string());
                    }
                }
            }
            if *seq.peek() == generation {
                loading.set(false);
            }
        });
    });

    use_effect(move || {
        load_users.call(page());
    });

    let oncreate = {
        let client = client.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let client = client.clone();
            async move {
                let draft = UserDraft {
                    username: new_username.peek().trim().to_string(),
                    email: new_email.peek().trim().to_string(),
                    password: new_password.peek().clone(),
                    firstname: new_firstname.peek().trim().to_string(),
                    lastname: new_lastname.peek().trim().to_string(),
                };
                if let Some(problem) = validate_draft(&draft) {
                    create_error.set(problem.to_string());
                    return;
                }

                creating.set(true);
                create_error.set(String::new());

                match client.create_user(&draft).await {
                    Ok(_) => {
                        new_username.set(String::new());
                        new_email.set(String::new());
                        new_password.set(String::new());
                        new_firstname.set(String::new());
                        new_lastname.set(String::new());
                        // Re-fetch: the new record's page position is the
                        // server's call, not ours.
                        load_users.call(*page.peek());
                    }
                    Err(ApiError::Unauthorized) => session.force_logout(),
                    Err(err) => create_error.set(err.to_string()),
                }
                creating.set(false);
            }
        }
    };

    let mut start_edit = move |user: User| {
        edit_username.set(user.username.clone());
        edit_email.set(user.email.clone());
        edit_firstname.set(user.firstname.clone().unwrap_or_default());
        edit_lastname.set(user.lastname.clone().unwrap_or_default());
        edit_status.set(user.status.clone());
        editing_id.set(Some(user.id));
    };

    let onsaveedit = {
        let client = client.clone();
        move |_| {
            let client = client.clone();
            async move {
                let Some(id) = editing_id.peek().clone() else {
                    return;
                };
                let patch = UserPatch {
                    username: Some(edit_username.peek().clone()),
                    email: Some(edit_email.peek().clone()),
                    firstname: Some(edit_firstname.peek().clone()),
                    lastname: Some(edit_lastname.peek().clone()),
                    status: Some(edit_status.peek().clone()),
                };

                saving.set(true);
                error.set(String::new());

                match client.update_user(&id, &patch).await {
                    Ok(resolved) => {
                        let update = resolved.unwrap_or_else(|| User {
                            id: id.clone(),
                            username: edit_username.peek().clone(),
                            email: edit_email.peek().clone(),
                            firstname: Some(edit_firstname.peek().clone()),
                            lastname: Some(edit_lastname.peek().clone()),
                            status: edit_status.peek().clone(),
                            ..User::default()
                        });
                        let next = reconcile_update(&users.peek(), &id, &update);
                        users.set(next);
                        editing_id.set(None);
                    }
                    Err(ApiError::Unauthorized) => session.force_logout(),
                    Err(err) => error.set(err.to_string()),
                }
                saving.set(false);
            }
        }
    };

    let ondelete = {
        let client = client.clone();
        move |id: String| {
            let client = client.clone();
            async move {
                if !confirm("Delete this user? This cannot be undone.") {
                    return;
                }
                saving.set(true);
                error.set(String::new());

                match client.delete_user(&id).await {
                    Ok(_) => {
                        let (next, next_total) =
                            reconcile_delete(&users.peek(), *total.peek(), &id);
                        users.set(next);
                        total.set(next_total);
                        // Deleting the last row of a trailing page walks back
                        // instead of showing an empty table.
                        if users.peek().is_empty() && *page.peek() > 1 {
                            let prev = *page.peek() - 1;
                            page.set(prev);
                        }
                    }
                    Err(ApiError::Unauthorized) => session.force_logout(),
                    Err(err) => error.set(err.to_string()),
                }
                saving.set(false);
            }
        }
    };

    let page_count = page_count(total(), PAGE_SIZE);
    let current = page();

    rsx! {
        div { class: "page",
            PageHeader {
                eyebrow: "Administration",
                title: "Users",
                subtitle: "Every account the server knows about.",
            }

            if !error().is_empty() {
                Alert { "{error}" }
            }

            section { class: "panel",
                div { class: "panel__head",
                    h2 { class: "panel__title", "All users" }
                    button {
                        class: "ghost",
                        disabled: loading(),
                        onclick: move |_| load_users.call(*page.peek()),
                        if loading() { "Loading…" } else { "Refresh" }
                    }
                }

                table { class: "table",
                    thead {
                        tr { class: "table__head",
                            th { "User" }
                            th { "Email" }
                            th { "Status" }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        for user in users() {
                            if editing_id() == Some(user.id.clone()) {
                                tr { class: "table__row", key: "{user.id}",
                                    td { class: "cell",
                                        div { class: "stack",
                                            input {
                                                value: edit_firstname(),
                                                placeholder: "First name",
                                                oninput: move |evt| edit_firstname.set(evt.value()),
                                            }
                                            input {
                                                value: edit_lastname(),
                                                placeholder: "Last name",
                                                oninput: move |evt| edit_lastname.set(evt.value()),
                                            }
                                            input {
                                                value: edit_username(),
                                                placeholder: "Username",
                                                oninput: move |evt| edit_username.set(evt.value()),
                                            }
                                        }
                                    }
                                    td { class: "cell",
                                        input {
                                            value: edit_email(),
                                            placeholder: "Email",
                                            oninput: move |evt| edit_email.set(evt.value()),
                                        }
                                    }
                                    td { class: "cell",
                                        select {
                                            value: edit_status(),
                                            onchange: move |evt| edit_status.set(evt.value()),
                                            option { value: "active", "active" }
                                            option { value: "suspended", "suspended" }
                                        }
                                    }
                                    td { class: "cell actions",
                                        button {
                                            class: "primary",
                                            disabled: saving(),
                                            onclick: onsaveedit.clone(),
                                            if saving() { "Saving…" } else { "Save" }
                                        }
                                        button {
                                            class: "ghost",
                                            onclick: move |_| editing_id.set(None),
                                            "Cancel"
                                        }
                                    }
                                }
                            } else {
                                tr { class: "table__row", key: "{user.id}",
                                    td { class: "cell",
                                        div { class: "user",
                                            strong { {row_name(&user)} }
                                            span { class: "pill", "@{user.username}" }
                                        }
                                    }
                                    td { class: "cell", "{user.email}" }
                                    td { class: "cell",
                                        span { class: status_class(&user.status), "{user.status}" }
                                    }
                                    td { class: "cell actions",
                                        button {
                                            class: "ghost",
                                            disabled: saving(),
                                            onclick: {
                                                let user = user.clone();
                                                move |_| start_edit(user.clone())
                                            },
                                            "Edit"
                                        }
                                        button {
                                            class: "danger",
                                            disabled: saving(),
                                            onclick: {
                                                let ondelete = ondelete.clone();
                                                let id = user.id.clone();
                                                move |_| ondelete(id.clone())
                                            },
                                            "Delete"
                                        }
                                    }
                                }
                            }
                        }
                        if users().is_empty() && !loading() {
                            tr {
                                td { class: "table__empty", colspan: 4, "No users to show." }
                            }
                        }
                    }
                }

                div { class: "pager",
                    button {
                        class: "ghost",
                        disabled: current <= 1,
                        onclick: move |_| page.set(1),
                        "First"
                    }
                    button {
                        class: "ghost",
                        disabled: current <= 1,
                        onclick: move |_| page.set(current - 1),
                        "Previous"
                    }
                    span { "Page {current} of {page_count} · {total} users" }
                    button {
                        class: "ghost",
                        disabled: current >= page_count,
                        onclick: move |_| page.set(current + 1),
                        "Next"
                    }
                    button {
                        class: "ghost",
                        disabled: current >= page_count,
                        onclick: move |_| page.set(page_count),
                        "Last"
                    }
                }
            }

            section { class: "panel",
                h2 { class: "panel__title", "Add a user" }

                form { class: "form", onsubmit: oncreate,
                    Field {
                        label: "First name",
                        value: new_firstname(),
                        oninput: move |evt: FormEvent| new_firstname.set(evt.value()),
                    }
                    Field {
                        label: "Last name",
                        value: new_lastname(),
                        oninput: move |evt: FormEvent| new_lastname.set(evt.value()),
                    }
                    Field {
                        label: "Username",
                        value: new_username(),
                        oninput: move |evt: FormEvent| new_username.set(evt.value()),
                    }
                    Field {
                        label: "Email",
                        input_type: "email",
                        value: new_email(),
                        oninput: move |evt: FormEvent| new_email.set(evt.value()),
                    }
                    Field {
                        label: "Password",
                        input_type: "password",
                        value: new_password(),
                        oninput: move |evt: FormEvent| new_password.set(evt.value()),
                    }

                    div { class: "form__actions",
                        button {
                            class: "primary",
                            r#type: "submit",
                            disabled: creating(),
                            if creating() { "Creating…" } else { "Create user" }
                        }
                    }

                    if !create_error().is_empty() {
                        Alert { "{create_error}" }
                    }
                }
            }
        }
    }
}

fn row_name(user: &User) -> String {
    let name = user.full_name();
    if name.is_empty() {
        user.username.clone()
    } else {
        name
    }
}

fn status_class(status: &str) -> &'static str {
    if status.eq_ignore_ascii_case("active") {
        "status status--active"
    } else {
        "status"
    }
}

fn page_count(total: u64, limit: u32) -> u32 {
    let pages = total.div_ceil(u64::from(limit));
    pages.max(1).min(u64::from(u32::MAX)) as u32
}

fn validate_draft(draft: &UserDraft) -> Option<&'static str> {
    if draft.username.len() < 2 {
        return Some("Username must be at least 2 characters.");
    }
    if draft.firstname.is_empty() {
        return Some("First name is required.");
    }
    if draft.lastname.is_empty() {
        return Some("Last name is required.");
    }
    if !draft.email.contains('@') {
        return Some("Enter a valid email address.");
    }
    if draft.password.len() < 6 {
        return Some("Password must be at least 6 characters.");
    }
    None
}

#[cfg(target_arch = "wasm32")]
fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[cfg(not(target_arch = "wasm32"))]
fn confirm(_message: &str) -> bool {
    true
}
