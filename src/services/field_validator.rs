use std::rc::Rc;

use leptos::logging::{log, warn};

use crate::api::ReviewApi;
use crate::models::validation::{FieldKind, ValidationMessage};
use crate::services::request_ticket::RequestSequence;

/// Live server-side validation for one form field.
#[derive(Clone)]
pub struct FieldValidator {
    api: Rc<dyn ReviewApi>,
    kind: FieldKind,
    sequence: RequestSequence,
}

impl FieldValidator {
    pub fn new(api: Rc<dyn ReviewApi>, kind: FieldKind) -> Self {
        Self {
            api,
            kind,
            sequence: RequestSequence::new(),
        }
    }

    /// Message for the current field value, or `None` if a later call has
    /// superseded this one. Empty values never reach the server.
    pub async fn validate(&self, value: &str) -> Option<ValidationMessage> {
        let ticket = self.sequence.issue();
        if value.is_empty() {
            return Some(ValidationMessage::Prompt(self.kind.empty_prompt()));
        }

        let result = self.api.validate_field(self.kind, value).await;
        if !self.sequence.is_latest(ticket) {
            log!("[VALIDATE] Dropping stale {} response", self.kind.query_param());
            return None;
        }

        Some(match result {
            Ok(text) => ValidationMessage::Server(self.kind.message_lines(&text)),
            Err(err) => {
                warn!("[VALIDATE] {} check failed: {}", self.kind.query_param(), err);
                ValidationMessage::Failed
            }
        })
    }
}
