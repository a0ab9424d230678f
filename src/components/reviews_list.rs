/// Component to display one page of a hotel's reviews.
/// Loads the first page once mounted, then pages with Previous/Next.
use std::rc::Rc;

use leptos::*;
use leptos::logging::log;
use wasm_bindgen_futures::spawn_local;

use crate::api::ReviewApi;
use crate::components::owner_controls::OwnerForms;
use crate::components::review_card::ReviewCard;
use crate::config::ClientConfig;
use crate::services::review_liker::ReviewLiker;
use crate::services::review_loader::{
    ReviewLoader, ReviewsState, BACK_ACTION, INITIAL_ACTION, LOAD_FAILED, NEXT_ACTION,
    NO_MORE_REVIEWS,
};
use crate::utils::leptos_owner::{capture_owner, with_owner_safe};
use crate::utils::notifier::Notifier;

#[component]
pub fn ReviewsList(
    api: Rc<dyn ReviewApi>,
    notifier: Rc<dyn Notifier>,
    #[prop(into)] hotel_id: String,
    /// Display name of the signed-in user, empty when anonymous.
    #[prop(into)] current_username: String,
    #[prop(optional)] config: ClientConfig,
) -> impl IntoView {
    let (state, set_state) = create_signal(ReviewsState::Loading);
    let loader = ReviewLoader::new(api.clone(), hotel_id.clone());
    let owner = capture_owner();

    // Every load blanks the list first; the loader drops superseded responses.
    let load = Callback::new(move |action: String| {
        let loader = loader.clone();
        let owner = owner.clone();
        set_state.set(ReviewsState::Loading);
        spawn_local(async move {
            if let Some(next) = loader.load(&action).await {
                with_owner_safe(owner, "reviews load", move || set_state.set(next));
            }
        });
    });

    // Effects only run in the browser, after mount.
    create_effect(move |_| {
        log!("[REVIEWS] Initial load");
        load.call(INITIAL_ACTION.to_string());
    });

    let owner_forms = OwnerForms {
        hotel_id,
        edit_action: config.edit_action(),
        delete_action: config.delete_action(),
    };

    let render_state = move || match state.get() {
        ReviewsState::Loading => view! {
            <div class="reviews-loading">{ "Loading reviews..." }</div>
        }
        .into_view(),
        ReviewsState::Exhausted => view! {
            <div class="no-more-reviews">{ NO_MORE_REVIEWS }</div>
        }
        .into_view(),
        ReviewsState::Failed { action } => view! {
            <div class="reviews-error">
                <p>{ LOAD_FAILED }</p>
                <button
                    type="button"
                    class="btn btn-outline-secondary btn-sm retry-button"
                    on:click=move |_| load.call(action.clone())
                >
                    { "Retry" }
                </button>
            </div>
        }
        .into_view(),
        ReviewsState::Page(reviews) => reviews
            .into_iter()
            .map(|review| {
                let liker = ReviewLiker::new(api.clone(), notifier.clone(), review.review_id.clone());
                let forms = review
                    .is_authored_by(&current_username)
                    .then(|| owner_forms.clone());
                view! { <ReviewCard review=review liker=liker owner_forms=forms /> }
            })
            .collect::<Vec<_>>()
            .into_view(),
    };

    view! {
        <div class="hotel-reviews">
            <div class="reviews-list">{ render_state }</div>
            <nav class="reviews-pager">
                <button
                    type="button"
                    class="btn btn-outline-primary btn-sm pager-back"
                    on:click=move |_| load.call(BACK_ACTION.to_string())
                >
                    { "Previous" }
                </button>
                <button
                    type="button"
                    class="btn btn-outline-primary btn-sm pager-next"
                    on:click=move |_| load.call(NEXT_ACTION.to_string())
                >
                    { "Next" }
                </button>
            </nav>
        </div>
    }
}
