// src/models/review.rs
use serde::{Deserialize, Deserializer, Serialize};

/// A guest review as served by `/hotelReviews`. Read-only on the client apart
/// from `like_count`, which is replaced after a confirmed like.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub review_id: String,
    #[serde(deserialize_with = "unescaped")]
    pub title: String,
    #[serde(deserialize_with = "unescaped")]
    pub text: String,
    pub formatted_date: String,
    pub rating: u8,
    #[serde(deserialize_with = "unescaped")]
    pub nick_name: String, // Display name of the author
    pub like_count: u32,
}

impl Review {
    /// DOM id of the node showing this review's like count.
    pub fn like_count_node_id(&self) -> String {
        format!("like-count-{}", self.review_id)
    }

    /// Whether the given display name wrote this review.
    pub fn is_authored_by(&self, display_name: &str) -> bool {
        !display_name.is_empty() && self.nick_name == display_name
    }
}

// The server HTML-escapes user-entered text; the views render text nodes,
// so entities are decoded once here.
fn unescaped<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(html_escape::decode_html_entities(&raw).into_owned())
}

/// Body of a `/hotelReviews` response: either the exhaustion sentinel or a page.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ReviewsResponse {
    Exhausted {
        #[serde(rename = "noMoreReviews")]
        no_more_reviews: bool,
        #[serde(default)]
        message: Option<String>,
    },
    Page(Vec<Review>),
}

impl ReviewsResponse {
    /// Reviews to display, or `None` when the server has nothing more to show.
    /// An empty page counts as exhausted.
    pub fn into_reviews(self) -> Option<Vec<Review>> {
        match self {
            ReviewsResponse::Page(reviews) if !reviews.is_empty() => Some(reviews),
            _ => None,
        }
    }
}

/// Body of a `/likeReview` response.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum LikeResponse {
    Counted {
        #[serde(rename = "likeCount")]
        like_count: u32,
    },
    Rejected {
        message: String,
    },
}
