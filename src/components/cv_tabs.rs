//! Single-select CV tab group for profile pages.

use dioxus::prelude::*;

/// One tab plus its panel content.
#[derive(Clone, PartialEq)]
pub struct CvPanel {
    pub id: String,
    pub label: String,
    pub body: Element,
}

/// Selection model behind the tab strip: exactly one id is active at all
/// times, and activating an unknown id is a no-op.
#[derive(Clone, Debug, PartialEq)]
pub struct TabSelection {
    ids: Vec<String>,
    active: usize,
}

impl TabSelection {
    pub fn new(ids: Vec<String>) -> Self {
        Self { ids, active: 0 }
    }

    pub fn activate(&mut self, id: &str) {
        if let Some(pos) = self.ids.iter().position(|i| i == id) {
            self.active = pos;
        }
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.ids.get(self.active).map(|i| i == id).unwrap_or(false)
    }

    #[allow(dead_code)]
    pub fn active_id(&self) -> Option<&str> {
        self.ids.get(self.active).map(String::as_str)
    }
}

#[component]
pub fn CvTabs(panels: Vec<CvPanel>) -> Element {
    let ids: Vec<String> = panels.iter().map(|p| p.id.clone()).collect();
    let mut selection = use_signal(|| TabSelection::new(ids));

    rsx! {
        div {
            class: "cv-tabs",
            div {
                role: "tablist",
                class: "cv-tab-list",
                for panel in panels.iter() {
                    CvTab {
                        key: "{panel.id}",
                        id: panel.id.clone(),
                        label: panel.label.clone(),
                        active: selection.read().is_active(&panel.id),
                        on_activate: move |id: String| selection.write().activate(&id),
                    }
                }
            }
            for panel in panels.iter() {
                {
                    let active = selection.read().is_active(&panel.id);
                    rsx! {
                        div {
                            key: "{panel.id}",
                            id: "{panel.id}",
                            role: "tabpanel",
                            class: if active { "cv-panel active" } else { "cv-panel" },
                            aria_hidden: if active { "false" } else { "true" },
                            {panel.body.clone()}
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CvTab(id: String, label: String, active: bool, on_activate: EventHandler<String>) -> Element {
    let click_id = id.clone();
    let key_id = id.clone();

    rsx! {
        button {
            role: "tab",
            class: if active { "cv-tab active" } else { "cv-tab" },
            "data-target": "{id}",
            aria_selected: if active { "true" } else { "false" },
            onclick: move |_| on_activate.call(click_id.clone()),
            // Enter and Space activate for keyboard users.
            onkeydown: move |e| match e.key() {
                Key::Enter => {
                    e.prevent_default();
                    on_activate.call(key_id.clone());
                }
                Key::Character(c) if c.as_str() == " " => {
                    e.prevent_default();
                    on_activate.call(key_id.clone());
                }
                _ => {}
            },
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection() -> TabSelection {
        TabSelection::new(vec![
            "experience".to_string(),
            "education".to_string(),
            "skills".to_string(),
        ])
    }

    #[test]
    fn first_tab_active_by_default() {
        let sel = selection();
        assert!(sel.is_active("experience"));
        assert_eq!(sel.active_id(), Some("experience"));
    }

    #[test]
    fn activation_deactivates_all_others() {
        let mut sel = selection();
        sel.activate("skills");

        let active: Vec<_> = ["experience", "education", "skills"]
            .iter()
            .filter(|id| sel.is_active(id))
            .collect();
        assert_eq!(active, vec![&"skills"]);
    }

    #[test]
    fn unknown_id_is_a_no_op() {
        let mut sel = selection();
        sel.activate("education");
        sel.activate("nonsense");
        assert!(sel.is_active("education"));
    }

    #[test]
    fn exactly_one_active_after_any_sequence() {
        let mut sel = selection();
        for id in ["skills", "experience", "skills", "education"] {
            sel.activate(id);
            let count = ["experience", "education", "skills"]
                .iter()
                .filter(|i| sel.is_active(i))
                .count();
            assert_eq!(count, 1);
        }
    }
}
