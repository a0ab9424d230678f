use std::cell::RefCell;
use std::collections::VecDeque;

use futures::channel::oneshot;
use futures::future::{FutureExt, LocalBoxFuture};

use crate::api::{ApiError, ReviewApi};
use crate::models::review::{LikeResponse, Review, ReviewsResponse};
use crate::models::validation::FieldKind;
use crate::utils::notifier::Notifier;

pub(crate) enum Reply<T> {
    Ready(T),
    Gated(oneshot::Receiver<T>),
}

// Replies handed out in call order. Gated replies stay pending until the test
// releases them, which lets tests control response ordering.
pub(crate) struct Script<T> {
    replies: RefCell<VecDeque<Reply<T>>>,
}

impl<T> Default for Script<T> {
    fn default() -> Self {
        Self {
            replies: RefCell::new(VecDeque::new()),
        }
    }
}

impl<T> Script<T> {
    pub(crate) fn push(&self, reply: T) {
        self.replies.borrow_mut().push_back(Reply::Ready(reply));
    }

    pub(crate) fn push_gated(&self) -> oneshot::Sender<T> {
        let (tx, rx) = oneshot::channel();
        self.replies.borrow_mut().push_back(Reply::Gated(rx));
        tx
    }

    async fn next(&self) -> T {
        let reply = self
            .replies
            .borrow_mut()
            .pop_front()
            .expect("unscripted call to fake api");
        match reply {
            Reply::Ready(value) => value,
            Reply::Gated(rx) => rx.await.expect("gate dropped before release"),
        }
    }
}

// Recording in-memory api for service tests.
#[derive(Default)]
pub(crate) struct FakeApi {
    pub(crate) calls: RefCell<Vec<String>>,
    pub(crate) reviews: Script<Result<ReviewsResponse, ApiError>>,
    pub(crate) likes: Script<Result<LikeResponse, ApiError>>,
    pub(crate) validations: Script<Result<String, ApiError>>,
}

impl FakeApi {
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl ReviewApi for FakeApi {
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

#[derive(Default)]
pub(crate) struct RecordingNotifier {
    pub(crate) messages: RefCell<Vec<String>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

pub(crate) fn review(id: &str, author: &str, likes: u32) -> Review {
    Review {
        review_id: id.to_string(),
        title: format!("Title {id}"),
        text: format!("Text of review {id}"),
        formatted_date: "2016-08-01".to_string(),
        rating: 4,
        nick_name: author.to_string(),
        like_count: likes,
    }
}

pub(crate) fn decode_error() -> ApiError {
    ApiError::Decode(
        serde_json::from_str::<ReviewsResponse>("not json").expect_err("invalid json"),
    )
}
