#[cfg(not(feature = "csr"))]
pub fn main() {
    // no client-side main function
    // the host page calls `start_hotel_page` from the library bundle instead
    // see optional feature `csr` for `trunk serve`
}

#[cfg(feature = "csr")]
pub fn main() {
    // a client-side main function is required for using `trunk serve`
    // to run: `trunk serve --open`
    use hotel_reviews_client::app;
    use hotel_reviews_client::config::ClientConfig;
    use leptos::logging::error;

    hotel_reviews_client::utils::panic_hook::init();

    if let Err(err) = app::start(ClientConfig::default()) {
        error!("[BOOT] {}", err);
    }
}
