// UI Components
// This module contains all reusable UI components

pub mod copy_link_button;
pub mod cv_tabs;
pub mod icons;
pub mod navbar;
pub mod page_loader;
pub mod reveal;
pub mod skip_link;
pub mod toast;
pub mod vcard_button;

pub use copy_link_button::CopyLinkButton;
pub use cv_tabs::{CvPanel, CvTabs};
pub use navbar::Navbar;
pub use page_loader::PageLoader;
pub use reveal::Reveal;
pub use skip_link::SkipLink;
pub use toast::ToastProvider;
pub use vcard_button::VCardButton;
