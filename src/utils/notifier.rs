use gloo_utils::errors::JsError;
use leptos::logging::{error, log};

/// Blocking user notification, `window.alert` in the browser.
pub trait Notifier {
    fn notify(&self, message: &str);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNotifier;

impl Notifier for BrowserNotifier {
    fn notify(&self, message: &str) {
        log!("[NOTIFY] {}", message);
        match web_sys::window() {
            Some(window) => {
                if let Err(err) = window.alert_with_message(message) {
                    match JsError::try_from(err) {
                        Ok(err) => error!("[NOTIFY] alert failed: {}", err),
                        Err(err) => error!("[NOTIFY] alert failed: {}", err),
                    }
                }
            }
            None => error!("[NOTIFY] No window to alert in"),
        }
    }
}
