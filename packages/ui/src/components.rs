//! Small shared form widgets.

use dioxus::prelude::*;

/// A labelled floating input field.
#[component]
pub fn Field(
    label: String,
    value: String,
    oninput: EventHandler<FormEvent>,
    #[props(default = "text".to_string())] input_type: String,
) -> Element {
    rsx! {
        label { class: "float-field",
            input {
                r#type: "{input_type}",
                value: "{value}",
                placeholder: " ",
                oninput: move |evt| oninput.call(evt),
            }
            span { "{label}" }
        }
    }
}

/// Inline message rendered near the triggering action.
#[component]
pub fn Alert(#[props(default = false)] success: bool, children: Element) -> Element {
    let class = if success { "alert alert--success" } else { "alert" };
    rsx! {
        div { class: "{class}", {children} }
    }
}
