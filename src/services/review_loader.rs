use std::rc::Rc;

use leptos::logging::{log, warn};

use crate::api::ReviewApi;
use crate::models::review::Review;
use crate::services::request_ticket::RequestSequence;

pub const NO_MORE_REVIEWS: &str = "No more reviews available.";
pub const LOAD_FAILED: &str = "Could not load reviews.";

/// Action sent with the first load after mount; the server re-reads the current page.
pub const INITIAL_ACTION: &str = "";
pub const NEXT_ACTION: &str = "next";
pub const BACK_ACTION: &str = "back";

/// What the reviews container shows. Every load replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ReviewsState {
    #[default]
    Loading,
    Page(Vec<Review>),
    Exhausted,
    /// The load for `action` failed; retrying re-issues the same action.
    Failed { action: String },
}

/// Loads pages of reviews for one hotel.
#[derive(Clone)]
pub struct ReviewLoader {
    api: Rc<dyn ReviewApi>,
    hotel_id: String,
    sequence: RequestSequence,
}

impl ReviewLoader {
    pub fn new(api: Rc<dyn ReviewApi>, hotel_id: impl Into<String>) -> Self {
        Self {
            api,
            hotel_id: hotel_id.into(),
            sequence: RequestSequence::new(),
        }
    }

    /// Fetch the page selected by `action`. Returns `None` when a newer load
    /// was started before this one finished.
    pub async fn load(&self, action: &str) -> Option<ReviewsState> {
        let ticket = self.sequence.issue();
        let result = self.api.fetch_reviews(&self.hotel_id, action).await;

        if !self.sequence.is_latest(ticket) {
            log!("[REVIEWS] Dropping stale response for action {:?}", action);
            return None;
        }

        let state = match result {
            Ok(response) => match response.into_reviews() {
                Some(reviews) => {
                    log!("[REVIEWS] Loaded {} reviews for hotel {}", reviews.len(), self.hotel_id);
                    ReviewsState::Page(reviews)
                }
                None => ReviewsState::Exhausted,
            },
            Err(err) => {
                warn!("[REVIEWS] Load failed for hotel {}: {}", self.hotel_id, err);
                ReviewsState::Failed {
                    action: action.to_string(),
                }
            }
        };
        Some(state)
    }
}
