use leptos::logging::log;

/// Send Rust panics to the browser console with their message and location.
/// Idempotent, so both entry points may call it.
pub fn init() {
    console_error_panic_hook::set_once();
    log!("[BOOT] Console panic hook installed");
}
