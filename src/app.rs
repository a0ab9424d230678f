/// Application entry point for the hotel review pages.
/// Builds the HTTP port and notifier, then mounts a component into every root
/// the host page provides.
use std::rc::Rc;

use leptos::*;
use leptos::logging::{log, warn};

use crate::api::{HttpReviewApi, ReviewApi};
use crate::components::field_validator::ValidatedField;
use crate::components::reviews_list::ReviewsList;
use crate::config::ClientConfig;
use crate::models::validation::FieldKind;
use crate::page::{BootstrapError, PageContext, ReviewsMount};
use crate::utils::notifier::{BrowserNotifier, Notifier};

pub fn mount(context: PageContext, config: ClientConfig) {
    let api: Rc<dyn ReviewApi> = Rc::new(HttpReviewApi::new(config.clone()));
    let notifier: Rc<dyn Notifier> = Rc::new(BrowserNotifier);

    if let Some(ReviewsMount {
        root,
        hotel_id,
        current_username,
    }) = context.reviews
    {
        log!("[BOOT] Mounting reviews for hotel {}", hotel_id);
        let api = api.clone();
        mount_to(root, move || {
            view! {
                <ReviewsList
                    api=api
                    notifier=notifier
                    hotel_id=hotel_id
                    current_username=current_username
                    config=config
                />
            }
        });
    }

    if let Some(root) = context.username_field {
        log!("[BOOT] Mounting username validator");
        let api = api.clone();
        mount_to(root, move || {
            view! { <ValidatedField api=api kind=FieldKind::Username placeholder="Username" /> }
        });
    }

    if let Some(root) = context.password_field {
        log!("[BOOT] Mounting password validator");
        mount_to(root, move || {
            view! { <ValidatedField api=api kind=FieldKind::Password placeholder="Password" /> }
        });
    }
}

/// Read the host page and mount. Call once the DOM is ready.
pub fn start(config: ClientConfig) -> Result<(), BootstrapError> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(BootstrapError::NoDocument)?;
    let context = PageContext::from_document(&document, &config.dom)?;
    if context.is_empty() {
        warn!("[BOOT] No mount points found on this page");
    }
    mount(context, config);
    Ok(())
}
