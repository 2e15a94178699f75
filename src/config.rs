//! Site-wide tuning constants.

/// Hard deadline after which the page loader is force-hidden (ms).
pub const LOADER_TIMEOUT_MS: u32 = 5_000;

/// Short delay after mount before the loader starts fading (ms).
pub const LOADER_HIDE_DELAY_MS: u32 = 300;

/// Default toast visibility duration (ms).
pub const TOAST_DURATION_MS: u32 = 3_000;

/// Fixed-header offset applied when scrolling to an in-page section (px).
pub const SCROLL_OFFSET_PX: f64 = 80.0;

/// Window for the throttled navbar scroll handler (ms).
pub const SCROLL_THROTTLE_MS: u64 = 100;

/// Vertical offset past which the navbar gains its scrolled styling (px).
pub const NAVBAR_SCROLL_THRESHOLD_PX: f64 = 50.0;

/// How long the copy button shows its confirmation label (ms).
pub const COPY_LABEL_REVERT_MS: u32 = 2_000;
