use std::cell::Cell;
use std::rc::Rc;

use leptos::logging::{log, warn};

use crate::api::ReviewApi;
use crate::models::review::LikeResponse;
use crate::utils::notifier::Notifier;

pub const LIKE_FAILED: &str = "Could not register your like. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LikeOutcome {
    Counted(u32),
    Rejected(String),
    Failed,
}

/// Submits likes for a single review, one request at a time.
#[derive(Clone)]
pub struct ReviewLiker {
    api: Rc<dyn ReviewApi>,
    notifier: Rc<dyn Notifier>,
    review_id: String,
    in_flight: Rc<Cell<bool>>,
}

// Clears the in-flight flag however the request future ends, including drop.
struct InFlight(Rc<Cell<bool>>);

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl ReviewLiker {
    pub fn new(api: Rc<dyn ReviewApi>, notifier: Rc<dyn Notifier>, review_id: impl Into<String>) -> Self {
        Self {
            api,
            notifier,
            review_id: review_id.into(),
            in_flight: Rc::new(Cell::new(false)),
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.get()
    }

    /// Like the review. Rejections and failures are reported through the
    /// notifier. Returns `None` without a request while a like is pending.
    pub async fn like(&self) -> Option<LikeOutcome> {
        if self.in_flight.replace(true) {
            log!("[LIKE] Review {} already has a like pending", self.review_id);
            return None;
        }
        let _guard = InFlight(self.in_flight.clone());

        let outcome = match self.api.like_review(&self.review_id).await {
            Ok(LikeResponse::Counted { like_count }) => {
                log!("[LIKE] Review {} now has {} likes", self.review_id, like_count);
                LikeOutcome::Counted(like_count)
            }
            Ok(LikeResponse::Rejected { message }) => {
                self.notifier.notify(&message);
                LikeOutcome::Rejected(message)
            }
            Err(err) => {
                warn!("[LIKE] Like for review {} failed: {}", self.review_id, err);
                self.notifier.notify(LIKE_FAILED);
                LikeOutcome::Failed
            }
        };
        Some(outcome)
    }
}
