//! Full-page navigation to routes served outside this app.

/// Leave the current page for `path`.
///
/// The dashboard and set-password pages are not part of this router, so the
/// browser location is replaced instead of pushing a client-side route.
pub fn navigate_to(path: &str) {
    tracing::info!("Navigating to {path}");

    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(path) {
                tracing::error!("Failed to navigate to {path}: {e:?}");
            }
        }
    }
}

/// Origin of the page the app is served from, if running in a browser.
pub fn page_origin() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window().and_then(|window| window.location().origin().ok())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}
