use leptos::*;

/// Where the edit/delete forms post to, and the hotel they return to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerForms {
    pub hotel_id: String,
    pub edit_action: String,
    pub delete_action: String,
}

// Display hint only; the server decides whether the edit or delete is allowed.
#[component]
pub fn OwnerControls(forms: OwnerForms, review_id: String) -> impl IntoView {
    let OwnerForms {
        hotel_id,
        edit_action,
        delete_action,
    } = forms;
    let (edit_review_id, edit_hotel_id) = (review_id.clone(), hotel_id.clone());

    view! {
        <div class="owner-controls">
            <form action=edit_action method="get" class="edit-review-form">
                <input type="hidden" name="reviewId" value=edit_review_id />
                <input type="hidden" name="hotelId" value=edit_hotel_id />
                <button type="submit" class="btn btn-secondary">{ "Edit" }</button>
            </form>
            <form action=delete_action method="get" class="delete-review-form">
                <input type="hidden" name="reviewId" value=review_id />
                <input type="hidden" name="hotelId" value=hotel_id />
                <button type="submit" class="btn btn-danger">{ "Delete" }</button>
            </form>
        </div>
    }
}
