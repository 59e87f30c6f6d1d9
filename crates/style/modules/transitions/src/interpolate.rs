//! Linear interpolation between two resolved values of the same property.

use style_values::{
    BackgroundSize, BackgroundSizeKind, Length, LengthUnit, Rgba, Rotate, Scale, TextShadow,
    TransformOrigin, Translate, ValueData,
};

/// Values that can be blended. `None` means the pair cannot be interpolated (for example a
/// pixel length against a percentage) and the new value must be applied directly.
pub trait Interpolate: Sized {
    fn interpolate(&self, to: &Self, progress: f32) -> Option<Self>;
}

fn lerp(from: f32, to: f32, progress: f32) -> f32 {
    (to - from).mul_add(progress, from)
}

impl Interpolate for f32 {
    fn interpolate(&self, to: &Self, progress: f32) -> Option<Self> {
        Some(lerp(*self, *to, progress))
    }
}

impl Interpolate for Length {
    fn interpolate(&self, to: &Self, progress: f32) -> Option<Self> {
        if self.unit != to.unit {
            return None;
        }
        match self.unit {
            LengthUnit::Pixel | LengthUnit::Percent => Some(Self {
                value: lerp(self.value, to.value, progress),
                unit: self.unit,
            }),
            LengthUnit::Auto | LengthUnit::None => None,
        }
    }
}

fn lerp_channel(from: u8, to: u8, progress: f32) -> u8 {
    lerp(f32::from(from), f32::from(to), progress)
        .round()
        .clamp(0.0, 255.0) as u8
}

impl Interpolate for Rgba {
    fn interpolate(&self, to: &Self, progress: f32) -> Option<Self> {
        Some(Self::new(
            lerp_channel(self.red, to.red, progress),
            lerp_channel(self.green, to.green, progress),
            lerp_channel(self.blue, to.blue, progress),
            lerp_channel(self.alpha, to.alpha, progress),
        ))
    }
}

impl Interpolate for Translate {
    fn interpolate(&self, to: &Self, progress: f32) -> Option<Self> {
        Some(Self::new(
            self.x.interpolate(&to.x, progress)?,
            self.y.interpolate(&to.y, progress)?,
            lerp(self.z, to.z, progress),
        ))
    }
}

impl Interpolate for Rotate {
    fn interpolate(&self, to: &Self, progress: f32) -> Option<Self> {
        Some(Self::degrees(lerp(self.degrees, to.degrees, progress)))
    }
}

impl Interpolate for Scale {
    fn interpolate(&self, to: &Self, progress: f32) -> Option<Self> {
        Some(Self::new(
            lerp(self.x, to.x, progress),
            lerp(self.y, to.y, progress),
            lerp(self.z, to.z, progress),
        ))
    }
}

impl Interpolate for TransformOrigin {
    fn interpolate(&self, to: &Self, progress: f32) -> Option<Self> {
        Some(Self::new(
            self.x.interpolate(&to.x, progress)?,
            self.y.interpolate(&to.y, progress)?,
            lerp(self.z, to.z, progress),
        ))
    }
}

impl Interpolate for BackgroundSize {
    fn interpolate(&self, to: &Self, progress: f32) -> Option<Self> {
        if self.kind != BackgroundSizeKind::Length || to.kind != BackgroundSizeKind::Length {
            return None;
        }
        Some(Self::lengths(
            self.x.interpolate(&to.x, progress)?,
            self.y.interpolate(&to.y, progress)?,
        ))
    }
}

impl Interpolate for TextShadow {
    fn interpolate(&self, to: &Self, progress: f32) -> Option<Self> {
        Some(Self {
            offset_x: lerp(self.offset_x, to.offset_x, progress),
            offset_y: lerp(self.offset_y, to.offset_y, progress),
            blur_radius: lerp(self.blur_radius, to.blur_radius, progress),
            color: self.color.interpolate(&to.color, progress)?,
        })
    }
}

impl Interpolate for ValueData {
    fn interpolate(&self, to: &Self, progress: f32) -> Option<Self> {
        match (*self, *to) {
            (Self::Length(from), Self::Length(target)) => {
                from.interpolate(&target, progress).map(Self::Length)
            }
            (Self::Number(from), Self::Number(target)) => {
                from.interpolate(&target, progress).map(Self::Number)
            }
            (Self::Color(from), Self::Color(target)) => {
                from.interpolate(&target, progress).map(Self::Color)
            }
            (Self::Translate(from), Self::Translate(target)) => {
                from.interpolate(&target, progress).map(Self::Translate)
            }
            (Self::Rotate(from), Self::Rotate(target)) => {
                from.interpolate(&target, progress).map(Self::Rotate)
            }
            (Self::Scale(from), Self::Scale(target)) => {
                from.interpolate(&target, progress).map(Self::Scale)
            }
            (Self::TransformOrigin(from), Self::TransformOrigin(target)) => {
                from.interpolate(&target, progress).map(Self::TransformOrigin)
            }
            (Self::BackgroundSize(from), Self::BackgroundSize(target)) => {
                from.interpolate(&target, progress).map(Self::BackgroundSize)
            }
            (Self::TextShadow(from), Self::TextShadow(target)) => {
                from.interpolate(&target, progress).map(Self::TextShadow)
            }
            _ => None,
        }
    }
}

/// Whether a transition between `from` and `to` can be sampled.
pub fn can_interpolate(from: &ValueData, to: &ValueData) -> bool {
    from.interpolate(to, 0.0).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lengths_need_matching_numeric_units() {
        let from = Length::px(0.0);
        assert_eq!(from.interpolate(&Length::px(100.0), 0.25), Some(Length::px(25.0)));
        assert_eq!(from.interpolate(&Length::percent(100.0), 0.25), None);
        assert_eq!(Length::auto().interpolate(&Length::auto(), 0.5), None);
    }

    #[test]
    fn colors_round_per_channel() {
        let mid = Rgba::BLACK.interpolate(&Rgba::WHITE, 0.5);
        assert_eq!(mid, Some(Rgba::new(128, 128, 128, 255)));
    }

    #[test]
    fn mismatched_payloads_and_integers_do_not_blend() {
        assert!(!can_interpolate(&ValueData::Integer(0), &ValueData::Integer(1)));
        assert!(!can_interpolate(&ValueData::Number(0.0), &ValueData::Empty));
        assert!(can_interpolate(
            &ValueData::Rotate(Rotate::degrees(0.0)),
            &ValueData::Rotate(Rotate::degrees(90.0))
        ));
    }
}
