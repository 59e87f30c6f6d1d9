//! Typed views over style value records, as exposed by the inline style facade.

use crate::{
    BackgroundSize, Cursor, Length, ResourceHandle, Rgba, Rotate, Scale, StyleKeyword, TextShadow,
    TransformOrigin, Translate,
};

/// A value together with its keyword. The value is only meaningful when the keyword is
/// [`StyleKeyword::Undefined`].
#[derive(Clone, Debug, PartialEq)]
pub struct Style<T> {
    pub keyword: StyleKeyword,
    pub value: T,
}

impl<T> Style<T> {
    /// A concrete value.
    pub const fn value(value: T) -> Self {
        Self {
            keyword: StyleKeyword::Undefined,
            value,
        }
    }

    pub const fn is_null(&self) -> bool {
        matches!(self.keyword, StyleKeyword::Null)
    }

    /// The value when the keyword is `Undefined`.
    pub fn into_option(self) -> Option<T> {
        match self.keyword {
            StyleKeyword::Undefined => Some(self.value),
            _ => None,
        }
    }
}

impl<T: Default> Style<T> {
    /// A keyword-only value carrying a default payload.
    pub fn keyword(keyword: StyleKeyword) -> Self {
        Self {
            keyword,
            value: T::default(),
        }
    }

    /// An absent value.
    pub fn null() -> Self {
        Self::keyword(StyleKeyword::Null)
    }
}

impl<T> From<T> for Style<T> {
    fn from(value: T) -> Self {
        Self::value(value)
    }
}

pub type StyleLength = Style<Length>;
pub type StyleFloat = Style<f32>;
pub type StyleInt = Style<i32>;
pub type StyleColor = Style<Rgba>;
/// Keyword enumerations such as [`crate::Align`] or [`crate::Display`].
pub type StyleEnum<T> = Style<T>;
pub type StyleTranslate = Style<Translate>;
pub type StyleRotate = Style<Rotate>;
pub type StyleScale = Style<Scale>;
pub type StyleTransformOrigin = Style<TransformOrigin>;
pub type StyleBackgroundSize = Style<BackgroundSize>;
pub type StyleTextShadow = Style<TextShadow>;
pub type StyleCursor = Style<Cursor>;
pub type StyleImage = Style<Option<ResourceHandle>>;
pub type StyleList<T> = Style<Vec<T>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_values_hide_payload() {
        let auto = StyleLength::keyword(StyleKeyword::Auto);
        assert_eq!(auto.clone().into_option(), None);
        assert!(!auto.is_null());
        assert!(StyleFloat::null().is_null());
        assert_eq!(StyleFloat::from(0.5).into_option(), Some(0.5));
    }
}
