// Custom hooks

pub mod use_scroll_reveal;

pub use use_scroll_reveal::use_scroll_reveal;
