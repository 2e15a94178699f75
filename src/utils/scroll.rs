//! In-page smooth scrolling with a fixed-header offset.

use wasm_bindgen::JsValue;
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::config;
use crate::utils::motion;

/// Absolute scroll position that puts `rect_top` exactly `offset` pixels
/// below the viewport top.
pub fn target_scroll_top(rect_top: f64, page_y_offset: f64, offset: f64) -> f64 {
    rect_top + page_y_offset - offset
}

/// Scroll to the section with the given id and update the URL fragment
/// without re-triggering navigation. Missing targets are a silent no-op.
pub fn scroll_to_section(id: &str) {
    if id.is_empty() {
        return;
    }

    let window = match web_sys::window() {
        Some(w) => w,
        None => return,
    };
    let document = match window.document() {
        Some(d) => d,
        None => return,
    };
    let target = match document.get_element_by_id(id) {
        Some(t) => t,
        None => return,
    };

    let rect_top = target.get_bounding_client_rect().top();
    let page_y = window.page_y_offset().unwrap_or(0.0);
    let top = target_scroll_top(rect_top, page_y, config::SCROLL_OFFSET_PX);

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(if motion::prefers_reduced_motion() {
        ScrollBehavior::Auto
    } else {
        ScrollBehavior::Smooth
    });
    window.scroll_to_with_scroll_to_options(&options);

    if let Ok(history) = window.history() {
        let fragment = format!("#{id}");
        history
            .push_state_with_url(&JsValue::NULL, "", Some(&fragment))
            .ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_top_lands_offset_px_below_viewport_top() {
        // Section 600px below the viewport top on a page scrolled to 200px.
        assert_eq!(target_scroll_top(600.0, 200.0, 80.0), 720.0);
    }

    #[test]
    fn target_above_viewport_scrolls_up() {
        assert_eq!(target_scroll_top(-300.0, 500.0, 80.0), 120.0);
    }
}
