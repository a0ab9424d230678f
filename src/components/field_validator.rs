use std::rc::Rc;

use leptos::*;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;

use crate::api::ReviewApi;
use crate::models::validation::{FieldKind, ValidationMessage};
use crate::services::field_validator::FieldValidator;
use crate::utils::leptos_owner::{capture_owner, with_owner_safe};

/// Render message lines with a line break between consecutive lines.
pub fn message_view(lines: Vec<String>) -> View {
    let mut nodes = Vec::with_capacity(lines.len() * 2);
    for (i, line) in lines.into_iter().enumerate() {
        if i > 0 {
            nodes.push(view! { <br/> }.into_view());
        }
        nodes.push(line.into_view());
    }
    nodes.into_view()
}

/// Registration input validated against the server on every keystroke.
/// The latest keystroke's answer is the one displayed.
#[component]
pub fn ValidatedField(
    api: Rc<dyn ReviewApi>,
    kind: FieldKind,
    #[prop(optional, into)] placeholder: Option<String>,
) -> impl IntoView {
    let validator = FieldValidator::new(api, kind);
    let (message, set_message) = create_signal(ValidationMessage::Blank);
    let owner = capture_owner();
    let message_id = format!("{}-message-{}", kind.query_param(), Uuid::new_v4());

    let on_input = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        let validator = validator.clone();
        let owner = owner.clone();
        spawn_local(async move {
            if let Some(next) = validator.validate(&value).await {
                with_owner_safe(owner, "validation response", move || set_message.set(next));
            }
        });
    };

    let input_type = match kind {
        FieldKind::Username => "text",
        FieldKind::Password => "password",
    };

    view! {
        <div class="validated-field">
            <input
                type=input_type
                name=kind.query_param()
                class="form-control"
                placeholder=placeholder.unwrap_or_default()
                aria-describedby=message_id.clone()
                on:input=on_input
            />
            <div id=message_id class="validation-message">
                { move || message_view(message.get().lines()) }
            </div>
        </div>
    }
}
