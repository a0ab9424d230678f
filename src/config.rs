// Client-side settings: where the endpoints live and which host-page nodes to read.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix for every endpoint path. Empty means same origin.
    pub base_url: String,
    pub reviews_path: String,
    pub like_path: String,
    pub edit_path: String,
    pub delete_path: String,
    pub validate_username_path: String,
    pub validate_password_path: String,
    pub dom: DomIds,
}

/// Ids of the host-page nodes the bootstrap reads or mounts into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomIds {
    pub hotel_id: String,
    pub username: String,
    pub reviews_root: String,
    pub username_field_root: String,
    pub password_field_root: String,
}

impl Default for DomIds {
    fn default() -> Self {
        Self {
            hotel_id: "hotelId".to_string(),
            username: "username".to_string(),
            reviews_root: "reviews-container".to_string(),
            username_field_root: "username-validator".to_string(),
            password_field_root: "password-validator".to_string(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            reviews_path: "/hotelReviews".to_string(),
            like_path: "/likeReview".to_string(),
            edit_path: "/editReview".to_string(),
            delete_path: "/deleteReview".to_string(),
            validate_username_path: "/validateUsername".to_string(),
            validate_password_path: "/validatePassword".to_string(),
            dom: DomIds::default(),
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Absolute (or same-origin) URL for `path` with percent-encoded query pairs.
    pub fn endpoint_url(&self, path: &str, query: &[(&str, &str)]) -> String {
        let mut url = format!("{}{}", self.base_url, path);
        for (i, (key, value)) in query.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(&urlencoding::encode(key));
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }
        url
    }

    /// Form `action` for the owner-only edit and delete controls.
    pub fn edit_action(&self) -> String {
        self.endpoint_url(&self.edit_path, &[])
    }

    pub fn delete_action(&self) -> String {
        self.endpoint_url(&self.delete_path, &[])
    }
}
