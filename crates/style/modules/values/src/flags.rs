//! Bit sets describing property traits and change invalidation.

use bitflags::bitflags;

bitflags! {
    /// Static classification of a property.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct PropertyTraits: u8 {
        /// Untouched values copy the parent's resolved value.
        const INHERITED = 1 << 0;
        /// Value changes may be interpolated by a transition.
        const ANIMATABLE = 1 << 1;
        /// Expands into longhands before it is applied.
        const SHORTHAND = 1 << 2;
    }
}

bitflags! {
    /// What a committed style change invalidates downstream.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ChangeFlags: u16 {
        /// Some computed value changed.
        const STYLES = 1 << 0;
        const LAYOUT = 1 << 1;
        const REPAINT = 1 << 2;
        const TRANSFORM = 1 << 3;
        const OPACITY = 1 << 4;
        const COLOR = 1 << 5;
        const BORDER_RADIUS = 1 << 6;
        const BORDER_WIDTH = 1 << 7;
        const OVERFLOW = 1 << 8;
        /// An inherited value changed; descendants must be restyled.
        const INHERITED = 1 << 9;
    }
}

impl ChangeFlags {
    /// Add the flags implied by `self`: layout changes always repaint.
    pub const fn with_implied(self) -> Self {
        if self.contains(Self::LAYOUT) {
            self.union(Self::REPAINT)
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_implies_repaint() {
        let flags = ChangeFlags::LAYOUT.with_implied();
        assert!(flags.contains(ChangeFlags::REPAINT));
        assert_eq!(ChangeFlags::COLOR.with_implied(), ChangeFlags::COLOR);
    }
}
