use leptos::logging::{log, warn};
use leptos::Owner;

/// Reactive owner of the calling component, to be captured before a request
/// is spawned and handed to [`with_owner_safe`] once it resolves.
pub fn capture_owner() -> Option<Owner> {
    Owner::current()
}

/// Apply a response under the owner captured at spawn time. Returns `None`
/// without running `f` when there is no owner or it has been disposed.
pub fn with_owner_safe<F, R>(owner: Option<Owner>, log_context: &str, f: F) -> Option<R>
where
    F: FnOnce() -> R,
{
    let Some(owner) = owner else {
        warn!("[OWNER] No Leptos owner captured for {log_context}; spawned outside a component?");
        return None;
    };
    match leptos::try_with_owner(owner, f) {
        Ok(value) => Some(value),
        Err(_) => {
            // Writing the signals now would panic with OwnerDisposed
            log!("[OWNER] {log_context} settled after its component unmounted; update dropped");
            None
        }
    }
}
