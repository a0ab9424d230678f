use std::cell::RefCell;

use hotel_reviews_client::utils::notifier::Notifier;

/// Records notifications instead of calling `window.alert`, which would block the test runner
#[derive(Default)]
pub struct RecordingNotifier {
    pub messages: RefCell<Vec<String>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}
