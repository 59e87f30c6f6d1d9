//! Engine configuration.

/// Tunables consumed by [`crate::StyleContext::with_options`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StyleOptions {
    /// Initial `font-size` in pixels.
    pub default_font_size_px: f32,
    /// Reference for percentage `font-size` on elements without a parent.
    pub root_font_size_px: f32,
    /// When false every change is applied immediately.
    pub transitions_enabled: bool,
    /// Number of baseline styles kept before unused ones are purged.
    pub baseline_cache_capacity: usize,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            default_font_size_px: 16.0,
            root_font_size_px: 16.0,
            transitions_enabled: true,
            baseline_cache_capacity: 256,
        }
    }
}
