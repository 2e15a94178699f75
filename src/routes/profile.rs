use dioxus::prelude::*;

use crate::components::{CopyLinkButton, CvPanel, CvTabs, VCardButton};

/// Static founder profile data rendered on `/profile/:name`.
#[derive(Debug, PartialEq)]
pub struct Founder {
    pub slug: &'static str,
    pub display_name: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub experience: &'static [(&'static str, &'static str)],
    pub education: &'static [(&'static str, &'static str)],
    pub skills: &'static [&'static str],
}

pub static FOUNDERS: &[Founder] = &[
    Founder {
        slug: "mara-lindqvist",
        display_name: "Mara Lindqvist",
        title: "Co-founder · Financial diligence",
        summary: "Fifteen years auditing growth-stage books, from seed rounds to exits.",
        experience: &[
            ("Partner, Northlight Advisory", "Led 40+ buy-side financial reviews."),
            ("Senior auditor, KPMG", "Manufacturing and SaaS portfolios."),
        ],
        education: &[("MSc Accounting & Finance", "Stockholm School of Economics")],
        skills: &["Revenue quality", "Working capital", "Deal structuring"],
    },
    Founder {
        slug: "tomas-reyes",
        display_name: "Tomas Reyes",
        title: "Co-founder · Technical diligence",
        summary: "Former CTO who has sat on both sides of the acquisition table.",
        experience: &[
            ("CTO, Fieldline", "Scaled the platform through two acquisitions."),
            ("Principal engineer, Vantir", "Infrastructure and security reviews."),
        ],
        education: &[("BSc Computer Science", "Universitat Politècnica de Catalunya")],
        skills: &["Architecture review", "Security posture", "Team assessment"],
    },
];

pub fn founder_by_slug(slug: &str) -> Option<&'static Founder> {
    FOUNDERS.iter().find(|f| f.slug == slug)
}

#[component]
pub fn Profile(name: String) -> Element {
    let founder = match founder_by_slug(&name) {
        Some(f) => f,
        None => {
            return rsx! {
                div {
                    class: "max-w-xl mx-auto px-6 py-24 text-center",
                    h1 { class: "text-3xl font-bold mb-4", "Profile not found" }
                    p {
                        class: "text-muted-foreground",
                        "No founder profile named \"{name}\"."
                    }
                }
            };
        }
    };

    let panels = vec![
        CvPanel {
            id: "experience".to_string(),
            label: "Experience".to_string(),
            body: rsx! {
                ul {
                    class: "space-y-4",
                    for (role, detail) in founder.experience.iter() {
                        li {
                            key: "{role}",
                            p { class: "font-medium", "{role}" }
                            p { class: "text-sm text-muted-foreground", "{detail}" }
                        }
                    }
                }
            },
        },
        CvPanel {
            id: "education".to_string(),
            label: "Education".to_string(),
            body: rsx! {
                ul {
                    class: "space-y-4",
                    for (degree, school) in founder.education.iter() {
                        li {
                            key: "{degree}",
                            p { class: "font-medium", "{degree}" }
                            p { class: "text-sm text-muted-foreground", "{school}" }
                        }
                    }
                }
            },
        },
        CvPanel {
            id: "skills".to_string(),
            label: "Skills".to_string(),
            body: rsx! {
                ul {
                    class: "flex flex-wrap gap-2",
                    for skill in founder.skills.iter() {
                        li {
                            key: "{skill}",
                            class: "border border-border rounded-full px-3 py-1 text-sm",
                            "{skill}"
                        }
                    }
                }
            },
        },
    ];

    rsx! {
        div {
            class: "max-w-4xl mx-auto px-6 py-12",
            header {
                class: "mb-10",
                h1 { class: "text-4xl font-bold", "{founder.display_name}" }
                p { class: "text-muted-foreground mt-1", "{founder.title}" }
                p { class: "mt-4", "{founder.summary}" }
                div {
                    class: "flex items-center gap-3 mt-6",
                    VCardButton {
                        name: founder.slug.to_string(),
                        label: "Save contact".to_string(),
                    }
                    CopyLinkButton {}
                }
            }
            CvTabs { panels }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_slug() {
        assert_eq!(
            founder_by_slug("mara-lindqvist").map(|f| f.display_name),
            Some("Mara Lindqvist")
        );
        assert!(founder_by_slug("nobody").is_none());
    }
}
