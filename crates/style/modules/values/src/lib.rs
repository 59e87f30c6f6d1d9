//! Style values: keywords, typed payloads, the property registry and the per-element
//! StyleValue store.

#![forbid(unsafe_code)]

use core::fmt;

pub mod color;
pub mod composite;
pub mod dimension;
pub mod enums;
pub mod flags;
pub mod keyword;
pub mod parser;
pub mod property;
pub mod resource;
pub mod shorthand;
pub mod store;
pub mod typed;
pub mod value;

pub use color::Rgba;
pub use composite::{
    BackgroundSize, BackgroundSizeKind, Rotate, Scale, TextShadow, TransformOrigin, Translate,
};
pub use dimension::{Length, LengthUnit, TimeValue, angle_to_degrees};
pub use enums::{
    Align, Display, EasingFunction, EasingMode, EnumValue, FlexDirection, FontStyle, Justify,
    Overflow, Position, TextAlign, Visibility, WhiteSpace, Wrap,
};
pub use flags::{ChangeFlags, PropertyTraits};
pub use keyword::StyleKeyword;
pub use parser::{parse_declaration, parse_declarations, parse_value};
pub use property::{PropertyId, PropertyInfo, PropertyRegistry, ValueKind};
pub use resource::{Cursor, Resource, ResourceHandle, builtin_cursor_id};
pub use shorthand::{Longhands, TransitionItem};
pub use store::StyleValueCollection;
pub use typed::{
    Style, StyleBackgroundSize, StyleColor, StyleCursor, StyleEnum, StyleFloat, StyleImage,
    StyleInt, StyleLength, StyleList, StyleRotate, StyleScale, StyleTextShadow,
    StyleTransformOrigin, StyleTranslate,
};
pub use value::{
    ManagedData, StyleDeclaration, StyleValue, StyleValueManaged, TransitionTarget, ValueData,
};

/// Parse error for declaration and value parsing in this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The property name is not known to the registry.
    UnknownProperty,
    /// The value text does not match the property's grammar.
    InvalidValue,
}

impl fmt::Display for ParseError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownProperty => formatter.write_str("unknown property"),
            Self::InvalidValue => formatter.write_str("invalid value"),
        }
    }
}

impl core::error::Error for ParseError {}
