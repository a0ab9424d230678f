//! Bootstrap: the one place that reads the host page. Everything it finds is
//! handed to the components as props.

use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlInputElement};

use crate::config::DomIds;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BootstrapError {
    #[error("no browser window or document available")]
    NoDocument,

    #[error("required element #{0} is missing")]
    MissingElement(String),

    #[error("element #{0} does not contain a hotel id")]
    EmptyHotelId(String),
}

/// Hotel id from the text of the hotel-id node, e.g. `"Id: 25622"`.
pub fn parse_hotel_id(text: &str) -> Option<String> {
    let text = text.trim();
    let id = text.strip_prefix("Id:").unwrap_or(text).trim();
    (!id.is_empty()).then(|| id.to_string())
}

/// Root for the review list plus the values it needs from the page.
#[derive(Debug, Clone)]
pub struct ReviewsMount {
    pub root: HtmlElement,
    pub hotel_id: String,
    pub current_username: String,
}

/// Mount points present on the current page. A hotel page has `reviews`, the
/// registration page has the two field roots.
#[derive(Debug, Clone, Default)]
pub struct PageContext {
    pub reviews: Option<ReviewsMount>,
    pub username_field: Option<HtmlElement>,
    pub password_field: Option<HtmlElement>,
}

fn html_element(document: &Document, id: &str) -> Option<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
}

// The holder is normally a hidden input; any other element contributes its text.
fn current_username(document: &Document, id: &str) -> String {
    match document.get_element_by_id(id) {
        Some(element) => match element.dyn_ref::<HtmlInputElement>() {
            Some(input) => input.value(),
            None => element.text_content().unwrap_or_default(),
        },
        None => String::new(),
    }
}

impl PageContext {
    pub fn from_document(document: &Document, dom: &DomIds) -> Result<Self, BootstrapError> {
        let reviews = match html_element(document, &dom.reviews_root) {
            Some(root) => {
                let hotel_node = html_element(document, &dom.hotel_id)
                    .ok_or_else(|| BootstrapError::MissingElement(dom.hotel_id.clone()))?;
                let hotel_id = parse_hotel_id(&hotel_node.inner_text())
                    .ok_or_else(|| BootstrapError::EmptyHotelId(dom.hotel_id.clone()))?;
                Some(ReviewsMount {
                    root,
                    hotel_id,
                    current_username: current_username(document, &dom.username),
                })
            }
            None => None,
        };

        Ok(Self {
            reviews,
            username_field: html_element(document, &dom.username_field_root),
            password_field: html_element(document, &dom.password_field_root),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_none() && self.username_field.is_none() && self.password_field.is_none()
    }
}
