//! Profile view: view and edit the signed-in user, upload a profile image.

use api::{merge_user, ApiError, User, UserPatch};
use dioxus::prelude::*;
use ui::{use_session, Alert, Field};

use super::{PageHeader, RequireSession};

#[component]
pub fn Profile() -> Element {
    rsx! {
        RequireSession {
            ProfileView {}
        }
    }
}

#[component]
fn ProfileView() -> Element {
    let session = use_session();
    let client = session.client();

    let mut profile = use_signal(|| None::<User>);
    let mut load_error = use_signal(String::new);

    let mut firstname = use_signal(String::new);
    let mut lastname = use_signal(String::new);
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);

    let mut saving = use_signal(|| false);
    let mut save_error = use_signal(String::new);
    let mut saved = use_signal(|| false);

    let mut pending_file = use_signal(|| None::<(String, Vec<u8>)>);
    let mut uploading = use_signal(|| false);
    let mut upload_error = use_signal(String::new);

    let fetch_client = client.clone();
    let mut resource = use_resource(move || {
        let client = fetch_client.clone();
        async move {
            match client.fetch_profile().await {
                Ok(user) => {
                    firstname.set(user.firstname.clone().unwrap_or_default());
                    lastname.set(user.lastname.clone().unwrap_or_default());
                    username.set(user.username.clone());
                    email.set(user.email.clone());
                    load_error.set(String::new());
                    profile.set(Some(user));
                }
                Err(ApiError::Unauthorized) => session.force_logout(),
                Err(err) => load_error.set(err.to_string()),
            }
        }
    });

    let save_client = client.clone();
    let onsave = move |evt: FormEvent| {
        evt.prevent_default();
        let client = save_client.clone();
        async move {
            let Some(current) = profile.peek().clone() else {
                return;
            };
            let patch = UserPatch {
                firstname: Some(firstname.peek().clone()),
                lastname: Some(lastname.peek().clone()),
                username: Some(username.peek().clone()),
                email: Some(email.peek().clone()),
                ..UserPatch::default()
            };

            saving.set(true);
            saved.set(false);
            save_error.set(String::new());

            match client.update_profile(&current.id, &patch).await {
                Ok(resolved) => {
                    // A 204 body still means the edit landed; fall back to
                    // what the form holds.
                    let update = resolved.unwrap_or_else(|| User {
                        id: current.id.clone(),
                        username: username.peek().clone(),
                        email: email.peek().clone(),
                        firstname: Some(firstname.peek().clone()),
                        lastname: Some(lastname.peek().clone()),
                        ..User::default()
                    });
                    profile.set(Some(merge_user(&current, &update)));
                    saved.set(true);
                }
                Err(ApiError::Unauthorized) => session.force_logout(),
                Err(err) => save_error.set(err.to_string()),
            }
            saving.set(false);
        }
    };

    let onpick = move |evt: FormEvent| async move {
        upload_error.set(String::new());
        if let Some(files) = evt.files() {
            if let Some(name) = files.files().first().cloned() {
                if let Some(bytes) = files.read_file(&name).await {
                    pending_file.set(Some((name, bytes)));
                    return;
                }
            }
        }
        pending_file.set(None);
    };

    let upload_client = client.clone();
    let onupload = move |_| {
        let client = upload_client.clone();
        async move {
            let Some((name, bytes)) = pending_file.peek().clone() else {
                upload_error.set("Please select a file.".to_string());
                return;
            };
            let Some(mime) = image_mime(&name) else {
                upload_error.set("Only image files are allowed.".to_string());
                return;
            };

            uploading.set(true);
            upload_error.set(String::new());

            match client.upload_profile_image(&name, mime, bytes).await {
                Ok(()) => {
                    pending_file.set(None);
                    resource.restart();
                }
                Err(ApiError::Unauthorized) => session.force_logout(),
                Err(err) => {
                    let message = match err.status() {
                        Some(code) => format!("Upload failed ({code}): {err}"),
                        None => err.to_string(),
                    };
                    upload_error.set(message);
                }
            }
            uploading.set(false);
        }
    };

    let image_url = profile
        .read()
        .as_ref()
        .and_then(|user| user.profile_image.clone())
        .map(|path| {
            if path.starts_with("http") {
                path
            } else {
                format!("{}{path}", client.base_url())
            }
        });

    rsx! {
        div { class: "page",
            PageHeader {
                eyebrow: "Account",
                title: "My Profile",
                subtitle: "Your details as the server knows them.",
            }

            if !load_error().is_empty() {
                Alert { "{load_error}" }
            }

            if let Some(user) = profile.read().clone() {
                div { class: "profile",
                    section { class: "panel",
                        div { class: "panel__head",
                            h2 { class: "panel__title", "Details" }
                            button {
                                class: "ghost",
                                onclick: move |_| resource.restart(),
                                "Refresh"
                            }
                        }

                        div { class: "profile__identity",
                            if let Some(src) = image_url {
                                img { class: "profile__avatar", src: "{src}", alt: "Profile image" }
                            } else {
                                div { class: "profile__avatar profile__avatar--empty",
                                    {initials(&user)}
                                }
                            }
                            div {
                                strong { {display_name(&user)} }
                                p { class: "subtitle", "{user.email}" }
                            }
                        }

                        form { class: "form", onsubmit: onsave,
                            Field {
                                label: "First name",
                                value: firstname(),
                                oninput: move |evt: FormEvent| firstname.set(evt.value()),
                            }
                            Field {
                                label: "Last name",
                                value: lastname(),
                                oninput: move |evt: FormEvent| lastname.set(evt.value()),
                            }
                            Field {
                                label: "Username",
                                value: username(),
                                oninput: move |evt: FormEvent| username.set(evt.value()),
                            }
                            Field {
                                label: "Email",
                                input_type: "email",
                                value: email(),
                                oninput: move |evt: FormEvent| email.set(evt.value()),
                            }

                            div { class: "form__actions",
                                button {
                                    class: "primary",
                                    r#type: "submit",
                                    disabled: saving(),
                                    if saving() { "Saving…" } else { "Save changes" }
                                }
                            }

                            if !save_error().is_empty() {
                                Alert { "{save_error}" }
                            }
                            if saved() {
                                Alert { success: true, "Profile updated." }
                            }
                        }
                    }

                    section { class: "panel",
                        h2 { class: "panel__title", "Profile image" }

                        input {
                            r#type: "file",
                            accept: "image/*",
                            onchange: onpick,
                        }
                        div { class: "form__actions",
                            button {
                                class: "primary",
                                disabled: uploading(),
                                onclick: onupload,
                                if uploading() { "Uploading…" } else { "Upload" }
                            }
                        }

                        if !upload_error().is_empty() {
                            Alert { "{upload_error}" }
                        }
                    }
                }
            } else if load_error().is_empty() {
                p { class: "subtitle", "Loading profile…" }
            }
        }
    }
}

fn display_name(user: &User) -> String {
    let name = user.full_name();
    if name.is_empty() {
        user.username.clone()
    } else {
        name
    }
}

fn initials(user: &User) -> String {
    let name = display_name(user);
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase()
}

/// Extension-based MIME lookup. `None` rejects the upload outright.
fn image_mime(name: &str) -> Option<&'static str> {
    let ext = name.rsplit('.').next()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}
