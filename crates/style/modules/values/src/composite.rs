//! Multi-component values: transform components, background size and text shadow.

use core::hash::{Hash, Hasher};

use crate::{Length, Rgba};

/// `translate`: offsets along x/y (lengths) and z (pixels).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Translate {
    pub x: Length,
    pub y: Length,
    pub z: f32,
}

impl Translate {
    pub const fn new(x: Length, y: Length, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// `rotate` around the z axis, in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotate {
    pub degrees: f32,
}

impl Rotate {
    pub const fn degrees(degrees: f32) -> Self {
        Self { degrees }
    }
}

/// `scale` factors per axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scale {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Scale {
    pub const IDENTITY: Self = Self::new(1.0, 1.0, 1.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// `transform-origin`; defaults to the element's center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformOrigin {
    pub x: Length,
    pub y: Length,
    pub z: f32,
}

impl TransformOrigin {
    pub const fn new(x: Length, y: Length, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl Default for TransformOrigin {
    fn default() -> Self {
        Self::new(Length::percent(50.0), Length::percent(50.0), 0.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BackgroundSizeKind {
    /// Explicit x/y lengths (either may be `auto`).
    #[default]
    Length,
    Cover,
    Contain,
}

/// `background-size`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackgroundSize {
    pub kind: BackgroundSizeKind,
    pub x: Length,
    pub y: Length,
}

impl BackgroundSize {
    pub const fn lengths(x: Length, y: Length) -> Self {
        Self {
            kind: BackgroundSizeKind::Length,
            x,
            y,
        }
    }

    pub const fn cover() -> Self {
        Self {
            kind: BackgroundSizeKind::Cover,
            x: Length::auto(),
            y: Length::auto(),
        }
    }

    pub const fn contain() -> Self {
        Self {
            kind: BackgroundSizeKind::Contain,
            x: Length::auto(),
            y: Length::auto(),
        }
    }
}

impl Default for BackgroundSize {
    fn default() -> Self {
        Self::lengths(Length::auto(), Length::auto())
    }
}

/// `text-shadow`: a single shadow with offsets and blur in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextShadow {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur_radius: f32,
    pub color: Rgba,
}

impl Default for TextShadow {
    fn default() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            blur_radius: 0.0,
            color: Rgba::TRANSPARENT,
        }
    }
}

impl Hash for TextShadow {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.offset_x.to_bits().hash(state);
        self.offset_y.to_bits().hash(state);
        self.blur_radius.to_bits().hash(state);
        self.color.hash(state);
    }
}
