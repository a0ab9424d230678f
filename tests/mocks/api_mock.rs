//! In-memory `ReviewApi` for component tests, so no request leaves the browser.

use std::cell::RefCell;
use std::collections::VecDeque;

use futures::channel::oneshot;
use futures::future::{FutureExt, LocalBoxFuture};
use hotel_reviews_client::api::{ApiError, ReviewApi};
use hotel_reviews_client::models::review::{LikeResponse, Review, ReviewsResponse};
use hotel_reviews_client::models::validation::FieldKind;

pub enum Reply<T> {
    Ready(T),
    Gated(oneshot::Receiver<T>),
}

pub struct Replies<T>(RefCell<VecDeque<Reply<T>>>);

impl<T> Default for Replies<T> {
    fn default() -> Self {
        Self(RefCell::new(VecDeque::new()))
    }
}

impl<T> Replies<T> {
    pub fn push(&self, reply: T) {
        self.0.borrow_mut().push_back(Reply::Ready(reply));
    }

    /// Queue a reply that stays pending until the returned sender fires
    pub fn push_gated(&self) -> oneshot::Sender<T> {
        let (tx, rx) = oneshot::channel();
        self.0.borrow_mut().push_back(Reply::Gated(rx));
        tx
    }

    async fn next(&self) -> T {
        let reply = self.0.borrow_mut().pop_front().expect("[MOCK API] unscripted call");
        match reply {
            Reply::Ready(value) => value,
            Reply::Gated(rx) => rx.await.expect("[MOCK API] gate dropped"),
        }
    }
}

#[derive(Default)]
pub struct MockApi {
    pub calls: RefCell<Vec<String>>,
    pub reviews: Replies<Result<ReviewsResponse, ApiError>>,
    pub likes: Replies<Result<LikeResponse, ApiError>>,
    pub validations: Replies<Result<String, ApiError>>,
}

impl MockApi {
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl ReviewApi for MockApi {
    fn fetch_reviews<'a>(
        &'a self,
        hotel_id: &'a str,
        action: &'a str,
    ) -> LocalBoxFuture<'a, Result<ReviewsResponse, ApiError>> {
        async move {
            self.calls
                .borrow_mut()
                .push(format!("reviews hotelId={hotel_id} action={action}"));
            self.reviews.next().await
        }
        .boxed_local()
    }

    fn like_review<'a>(
        &'a self,
        review_id: &'a str,
    ) -> LocalBoxFuture<'a, Result<LikeResponse, ApiError>> {
        async move {
            self.calls.borrow_mut().push(format!("like reviewId={review_id}"));
            self.likes.next().await
        }
        .boxed_local()
    }

    fn validate_field<'a>(
        &'a self,
        kind: FieldKind,
        value: &'a str,
    ) -> LocalBoxFuture<'a, Result<String, ApiError>> {
        async move {
            self.calls
                .borrow_mut()
                .push(format!("validate {}={value}", kind.query_param()));
            self.validations.next().await
        }
        .boxed_local()
    }
}

pub fn review(id: &str, author: &str, likes: u32) -> Review {
    Review {
        review_id: id.to_string(),
        title: format!("Stay {id}"),
        text: format!("Review text {id}"),
        formatted_date: "2016-08-01".to_string(),
        rating: 4,
        nick_name: author.to_string(),
        like_count: likes,
    }
}
