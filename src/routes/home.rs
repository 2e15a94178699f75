use dioxus::prelude::*;

use crate::components::{CopyLinkButton, Reveal, VCardButton};
use crate::routes::profile::FOUNDERS;
use crate::routes::Route;

#[component]
pub fn Home() -> Element {
    rsx! {
        // Hero
        section {
            class: "max-w-6xl mx-auto px-6 py-24 text-center",
            h1 {
                class: "text-5xl font-bold mb-6",
                "Due diligence, done right"
            }
            p {
                class: "text-xl text-muted-foreground max-w-2xl mx-auto mb-8",
                "DueD™ helps investors and acquirers see the whole picture before they sign."
            }
            div {
                class: "flex items-center justify-center gap-3",
                CopyLinkButton {}
            }
        }

        // Services
        section {
            id: "services",
            class: "max-w-6xl mx-auto px-6 py-16",
            Reveal {
                h2 { class: "text-3xl font-semibold mb-8", "What we do" }
            }
            div {
                class: "grid md:grid-cols-3 gap-6",
                Reveal {
                    class: "border border-border rounded-lg p-6",
                    h3 { class: "font-semibold mb-2", "Financial review" }
                    p {
                        class: "text-sm text-muted-foreground",
                        "Full-book analysis of revenue quality, liabilities, and working capital."
                    }
                }
                Reveal {
                    class: "border border-border rounded-lg p-6",
                    h3 { class: "font-semibold mb-2", "Technical audit" }
                    p {
                        class: "text-sm text-muted-foreground",
                        "Architecture, security posture, and delivery-process assessment."
                    }
                }
                Reveal {
                    class: "border border-border rounded-lg p-6",
                    h3 { class: "font-semibold mb-2", "Market fit" }
                    p {
                        class: "text-sm text-muted-foreground",
                        "Competitive landscape and realistic growth-path mapping."
                    }
                }
            }
        }

        // Founders
        section {
            id: "founders",
            class: "max-w-6xl mx-auto px-6 py-16",
            Reveal {
                h2 { class: "text-3xl font-semibold mb-8", "Founders" }
            }
            div {
                class: "grid md:grid-cols-2 gap-6",
                for founder in FOUNDERS.iter() {
                    Reveal {
                        key: "{founder.slug}",
                        class: "border border-border rounded-lg p-6",
                        h3 { class: "text-xl font-semibold", "{founder.display_name}" }
                        p { class: "text-sm text-muted-foreground mb-4", "{founder.title}" }
                        p { class: "mb-4", "{founder.summary}" }
                        div {
                            class: "flex items-center gap-3",
                            Link {
                                to: Route::Profile { name: founder.slug.to_string() },
                                class: "text-sm font-medium underline",
                                "View CV"
                            }
                            VCardButton {
                                name: founder.slug.to_string(),
                                label: "Save contact".to_string(),
                            }
                        }
                    }
                }
            }
        }

        // Contact
        section {
            id: "contact",
            class: "max-w-6xl mx-auto px-6 py-16",
            Reveal {
                h2 { class: "text-3xl font-semibold mb-4", "Contact" }
                p {
                    class: "text-muted-foreground",
                    "hello@dued.example — or save a founder's contact card above."
                }
            }
        }
    }
}
