//! Explicitly constructed, immutable style context shared by resolvers and elements.

use std::sync::Arc;

use style_values::PropertyRegistry;

use crate::options::StyleOptions;
use crate::style_model::ComputedStyle;

/// Registry, initial style and options for one independent style system.
#[derive(Debug)]
pub struct StyleContext {
    registry: PropertyRegistry,
    initial: Arc<ComputedStyle>,
    options: StyleOptions,
}

impl Default for StyleContext {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl StyleContext {
    #[inline]
    pub fn new() -> Self {
        Self::with_options(StyleOptions::default())
    }

    #[inline]
    pub fn with_options(options: StyleOptions) -> Self {
        Self {
            registry: PropertyRegistry::new(),
            initial: Arc::new(ComputedStyle::initial(&options)),
            options,
        }
    }

    #[inline]
    pub const fn registry(&self) -> &PropertyRegistry {
        &self.registry
    }

    /// The initial value of every property.
    #[inline]
    pub fn initial_style(&self) -> &ComputedStyle {
        &self.initial
    }

    #[inline]
    pub const fn options(&self) -> &StyleOptions {
        &self.options
    }
}
