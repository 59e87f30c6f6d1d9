//! Style value records: a property id, a keyword, and a typed payload.

use crate::{
    BackgroundSize, Cursor, EasingFunction, Length, PropertyId, ResourceHandle, Rgba, Rotate,
    Scale, StyleKeyword, TextShadow, TimeValue, TransformOrigin, Translate,
};

/// Plain (copyable) payload of a style value.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ValueData {
    /// No payload; the record is keyword-only.
    #[default]
    Empty,
    Length(Length),
    Number(f32),
    Integer(i32),
    Color(Rgba),
    Translate(Translate),
    Rotate(Rotate),
    Scale(Scale),
    TransformOrigin(TransformOrigin),
    BackgroundSize(BackgroundSize),
    TextShadow(TextShadow),
}

/// One entry of `transition-property`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransitionTarget {
    All,
    None,
    Property(PropertyId),
}

impl TransitionTarget {
    /// Whether this entry selects `id`.
    pub fn matches(self, id: PropertyId) -> bool {
        match self {
            Self::All => id.is_animatable(),
            Self::None => false,
            Self::Property(target) => target == id,
        }
    }
}

/// Payload that owns heap data or shared resources.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ManagedData {
    #[default]
    Empty,
    Cursor(Cursor),
    Image(ResourceHandle),
    TransitionTargets(Vec<TransitionTarget>),
    Times(Vec<TimeValue>),
    Easings(Vec<EasingFunction>),
}

/// A plain style value record.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StyleValue {
    pub id: PropertyId,
    pub keyword: StyleKeyword,
    pub data: ValueData,
}

impl StyleValue {
    /// A concrete value (keyword `Undefined`).
    pub const fn new(id: PropertyId, data: ValueData) -> Self {
        Self {
            id,
            keyword: StyleKeyword::Undefined,
            data,
        }
    }

    /// A keyword-only value.
    pub const fn keyword(id: PropertyId, keyword: StyleKeyword) -> Self {
        Self {
            id,
            keyword,
            data: ValueData::Empty,
        }
    }
}

/// A managed style value record.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleValueManaged {
    pub id: PropertyId,
    pub keyword: StyleKeyword,
    pub data: ManagedData,
}

impl StyleValueManaged {
    pub const fn new(id: PropertyId, data: ManagedData) -> Self {
        Self {
            id,
            keyword: StyleKeyword::Undefined,
            data,
        }
    }

    pub const fn keyword(id: PropertyId, keyword: StyleKeyword) -> Self {
        Self {
            id,
            keyword,
            data: ManagedData::Empty,
        }
    }
}

/// A single declaration, as produced by parsing or shorthand expansion.
#[derive(Clone, Debug, PartialEq)]
pub enum StyleDeclaration {
    Value(StyleValue),
    Managed(StyleValueManaged),
}

impl StyleDeclaration {
    /// A keyword-only declaration, placed in the store matching the property's kind.
    pub fn keyword(id: PropertyId, keyword: StyleKeyword) -> Self {
        if id.kind().is_managed() {
            Self::Managed(StyleValueManaged::keyword(id, keyword))
        } else {
            Self::Value(StyleValue::keyword(id, keyword))
        }
    }

    pub const fn id(&self) -> PropertyId {
        match self {
            Self::Value(value) => value.id,
            Self::Managed(value) => value.id,
        }
    }

    pub const fn keyword_of(&self) -> StyleKeyword {
        match self {
            Self::Value(value) => value.keyword,
            Self::Managed(value) => value.keyword,
        }
    }
}

impl From<StyleValue> for StyleDeclaration {
    fn from(value: StyleValue) -> Self {
        Self::Value(value)
    }
}

impl From<StyleValueManaged> for StyleDeclaration {
    fn from(value: StyleValueManaged) -> Self {
        Self::Managed(value)
    }
}
