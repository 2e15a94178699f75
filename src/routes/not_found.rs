use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            class: "max-w-xl mx-auto px-6 py-24 text-center",
            h1 { class: "text-4xl font-bold mb-4", "Page not found" }
            p {
                class: "text-muted-foreground mb-8",
                "There is no page at /{path}."
            }
            Link {
                to: Route::Home {},
                class: "underline font-medium",
                "Back to the home page"
            }
        }
    }
}
