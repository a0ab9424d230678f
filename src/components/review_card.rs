use leptos::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::owner_controls::{OwnerControls, OwnerForms};
use crate::models::review::Review;
use crate::services::review_liker::{LikeOutcome, ReviewLiker};
use crate::utils::leptos_owner::{capture_owner, with_owner_safe};

/// One rendered review with its like control. The like button stays disabled
/// until the pending like settles.
#[component]
pub fn ReviewCard(
    review: Review,
    liker: ReviewLiker,
    /// Present only when the signed-in user wrote this review.
    owner_forms: Option<OwnerForms>,
) -> impl IntoView {
    let (like_count, set_like_count) = create_signal(review.like_count);
    let (liking, set_liking) = create_signal(false);
    let like_node_id = review.like_count_node_id();
    let owner = capture_owner();

    let on_like = move |_| {
        let liker = liker.clone();
        let owner = owner.clone();
        set_liking.set(true);
        spawn_local(async move {
            // `None` means another like from this card is still pending.
            if let Some(outcome) = liker.like().await {
                with_owner_safe(owner, "like response", move || {
                    if let LikeOutcome::Counted(count) = outcome {
                        set_like_count.set(count);
                    }
                    set_liking.set(false);
                });
            }
        });
    };

    let Review {
        review_id,
        title,
        text,
        formatted_date,
        rating,
        nick_name,
        ..
    } = review;

    view! {
        <div class="review-container">
            <div class="review-title">{ format!("Title: {}", title) }</div>
            <div class="review-content">
                <p>{ format!("Date: {}", formatted_date) }</p>
                <p>{ format!("Rating: {}", rating) }</p>
                <br/>
                <p class="review-text">{ text }</p>
                <br/>
                <p class="review-author">{ format!("Review By: {}", nick_name) }</p>
                <button
                    type="button"
                    class="btn btn-outline-primary btn-sm like-button"
                    prop:disabled=move || liking.get()
                    on:click=on_like
                >
                    <i class="bi bi-hand-thumbs-up"></i>
                    { " Like" }
                </button>
                <p id=like_node_id class="like-count">{ move || like_count.get() }</p>
                { "users found this review helpful" }
            </div>
            { owner_forms.map(|forms| view! { <OwnerControls forms=forms review_id=review_id /> }) }
        </div>
    }
}
