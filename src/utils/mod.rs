// Utility functions
// Helper functions for common operations

pub mod accessibility;
pub mod clipboard;
pub mod errors;
pub mod motion;
pub mod rate_limit;
pub mod scroll;
pub mod share;
pub mod vcard;
