//! Viewport and motion media queries.

/// Whether the user has asked the OS to minimize animation.
pub fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok())
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// Viewport narrower than the tablet breakpoint.
#[allow(dead_code)]
pub fn is_mobile_viewport() -> bool {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .map(|width| width < 768.0)
        .unwrap_or(false)
}
