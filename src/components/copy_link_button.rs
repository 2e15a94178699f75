//! Copy-the-page-link button.
//!
//! Copies the clean page URL (query stripped) and confirms through both
//! the button label and a toast. Grounded on the share flow: label reverts
//! after two seconds unless a later click re-armed it.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::components::icons::{CheckIcon, CopyIcon};
use crate::components::toast::use_toasts;
use crate::config;
use crate::utils::rate_limit::Debounce;
use crate::utils::{clipboard, share};

#[component]
pub fn CopyLinkButton() -> Element {
    let toasts = use_toasts();
    let mut copied = use_signal(|| false);
    let mut revert = use_signal(Debounce::new);

    let on_copy = move |_| {
        spawn(async move {
            let url = match share::current_page_url() {
                Some(u) => u,
                None => return,
            };

            if clipboard::copy(&url).await {
                copied.set(true);
                toasts.success("Link copied to clipboard");

                let generation = revert.write().arm();
                spawn(async move {
                    TimeoutFuture::new(config::COPY_LABEL_REVERT_MS).await;
                    // A later click superseded this revert; leave its label.
                    if revert.peek().is_current(generation) {
                        copied.set(false);
                    }
                });
            } else {
                toasts.error("Failed to copy link");
            }
        });
    };

    rsx! {
        button {
            class: "copy-link-button",
            onclick: on_copy,
            if *copied.read() {
                CheckIcon { class: "w-4 h-4" }
                span { id: "copyText", "✓ Copied!" }
            } else {
                CopyIcon { class: "w-4 h-4" }
                span { id: "copyText", "Copy" }
            }
        }
    }
}
