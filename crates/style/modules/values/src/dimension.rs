//! Lengths, times and angles.

use core::hash::{Hash, Hasher};

/// Unit of a [`Length`]. `Auto` and `None` are keyword lengths without a magnitude.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    #[default]
    Pixel,
    /// Percentage of a reference size, stored as authored (`50.0` is 50%).
    Percent,
    Auto,
    None,
}

/// A length with its unit.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Length {
    pub value: f32,
    pub unit: LengthUnit,
}

impl Length {
    pub const ZERO: Self = Self::px(0.0);

    pub const fn px(value: f32) -> Self {
        Self {
            value,
            unit: LengthUnit::Pixel,
        }
    }

    pub const fn percent(value: f32) -> Self {
        Self {
            value,
            unit: LengthUnit::Percent,
        }
    }

    pub const fn auto() -> Self {
        Self {
            value: 0.0,
            unit: LengthUnit::Auto,
        }
    }

    pub const fn none() -> Self {
        Self {
            value: 0.0,
            unit: LengthUnit::None,
        }
    }

    pub const fn is_auto(self) -> bool {
        matches!(self.unit, LengthUnit::Auto)
    }

    pub const fn is_none(self) -> bool {
        matches!(self.unit, LengthUnit::None)
    }

    /// Whether the length carries a magnitude (pixel or percent).
    pub const fn is_numeric(self) -> bool {
        matches!(self.unit, LengthUnit::Pixel | LengthUnit::Percent)
    }

    /// Resolve against `reference` pixels. Keyword lengths have no resolved value.
    pub fn resolve(self, reference: f32) -> Option<f32> {
        match self.unit {
            LengthUnit::Pixel => Some(self.value),
            LengthUnit::Percent => Some(reference * self.value / 100.0),
            LengthUnit::Auto | LengthUnit::None => None,
        }
    }
}

impl Hash for Length {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.to_bits().hash(state);
        self.unit.hash(state);
    }
}

/// A duration in milliseconds.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TimeValue {
    pub milliseconds: f32,
}

impl TimeValue {
    pub const ZERO: Self = Self::ms(0.0);

    pub const fn ms(milliseconds: f32) -> Self {
        Self { milliseconds }
    }

    pub fn seconds(seconds: f32) -> Self {
        Self {
            milliseconds: seconds * 1000.0,
        }
    }
}

/// Convert an angle expressed in `unit` to degrees.
pub fn angle_to_degrees(value: f32, unit: &str) -> Option<f32> {
    let lower = unit.to_ascii_lowercase();
    match lower.as_str() {
        "deg" => Some(value),
        "rad" => Some(value.to_degrees()),
        "grad" => Some(value * 0.9),
        "turn" => Some(value * 360.0),
        _ => None,
    }
}
