//! Download-contact button for founder cards.

use dioxus::prelude::*;

use crate::components::icons::DownloadIcon;
use crate::components::toast::use_toasts;
use crate::utils::vcard;

#[component]
pub fn VCardButton(name: String, label: String) -> Element {
    let toasts = use_toasts();
    let slug = name.clone();

    rsx! {
        button {
            class: "vcard-button",
            onclick: move |_| {
                let name = slug.clone();
                spawn(async move {
                    match vcard::download_vcard(&name).await {
                        Ok(()) => toasts.success("Contact downloaded"),
                        Err(e) => {
                            log::error!("vCard download failed: {e:#}");
                            toasts.error("Failed to download contact");
                        }
                    }
                });
            },
            DownloadIcon { class: "w-4 h-4" }
            span { "{label}" }
        }
    }
}
