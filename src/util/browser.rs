//! Thin wrappers over browser APIs. Requires a browser environment; host
//! builds get inert fallbacks so callers need no gating of their own.

/// Ask the user to confirm a destructive action. Declines on the host or
/// when no window is available, so the guarded action stays a no-op.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
        false
    }
}

/// Smooth-scroll the element with the given id into view.
pub fn scroll_to(element_id: &str) {
    #[cfg(feature = "csr")]
    {
        let el = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(element_id));
        if let Some(el) = el {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = element_id;
    }
}
