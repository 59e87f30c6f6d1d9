//! Property identifiers and the name ↔ id registry.
//!
//! Every property is described once in a dense table indexed by [`PropertyId`]. The registry
//! adds the reverse (name → id) map, built once when the registry is constructed.

use std::collections::HashMap;

use crate::flags::{ChangeFlags, PropertyTraits};

/// Payload type a property's records carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Length,
    Number,
    /// Keyword enumeration stored as an integer.
    Integer,
    Color,
    Translate,
    Rotate,
    Scale,
    TransformOrigin,
    BackgroundSize,
    TextShadow,
    Cursor,
    Image,
    TransitionTargets,
    TimeList,
    EasingList,
    Shorthand,
    /// Only used by [`PropertyId::Unknown`].
    Unknown,
}

impl ValueKind {
    /// Kinds whose records live in the managed store.
    pub const fn is_managed(self) -> bool {
        matches!(
            self,
            Self::Cursor | Self::Image | Self::TransitionTargets | Self::TimeList | Self::EasingList
        )
    }
}

/// Static description of one property.
#[derive(Clone, Copy, Debug)]
pub struct PropertyInfo {
    pub id: PropertyId,
    pub name: &'static str,
    pub kind: ValueKind,
    pub traits: PropertyTraits,
    pub change: ChangeFlags,
}

const PLAIN: PropertyTraits = PropertyTraits::empty();
const ANIMATED: PropertyTraits = PropertyTraits::ANIMATABLE;
const INHERITED: PropertyTraits = PropertyTraits::INHERITED;
const INHERITED_ANIMATED: PropertyTraits =
    PropertyTraits::INHERITED.union(PropertyTraits::ANIMATABLE);
const SHORTHAND: PropertyTraits = PropertyTraits::SHORTHAND;

const LAYOUT: ChangeFlags = ChangeFlags::LAYOUT;
const BORDER_WIDTH: ChangeFlags = ChangeFlags::LAYOUT.union(ChangeFlags::BORDER_WIDTH);
const PAINT_COLOR: ChangeFlags = ChangeFlags::REPAINT.union(ChangeFlags::COLOR);
const RADIUS: ChangeFlags = ChangeFlags::REPAINT.union(ChangeFlags::BORDER_RADIUS);
const TRANSFORM: ChangeFlags = ChangeFlags::TRANSFORM.union(ChangeFlags::REPAINT);
const INHERITED_LAYOUT: ChangeFlags = ChangeFlags::LAYOUT.union(ChangeFlags::INHERITED);
const INHERITED_PAINT: ChangeFlags = ChangeFlags::REPAINT.union(ChangeFlags::INHERITED);
const NO_CHANGE: ChangeFlags = ChangeFlags::empty();

macro_rules! property_table {
    ($($variant:ident = $name:literal, $kind:ident, $traits:expr, $change:expr;)+) => {
        /// Dense identifier of a stylable property. `Unknown` is the lookup-miss sentinel.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u16)]
        pub enum PropertyId {
            Unknown,
            $($variant),+
        }

        const PROPERTY_TABLE: &[PropertyInfo] = &[
            PropertyInfo {
                id: PropertyId::Unknown,
                name: "",
                kind: ValueKind::Unknown,
                traits: PLAIN,
                change: NO_CHANGE,
            },
            $(PropertyInfo {
                id: PropertyId::$variant,
                name: $name,
                kind: ValueKind::$kind,
                traits: $traits,
                change: $change,
            }),+
        ];
    };
}

property_table! {
    AlignContent = "align-content", Integer, PLAIN, LAYOUT;
    AlignItems = "align-items", Integer, PLAIN, LAYOUT;
    AlignSelf = "align-self", Integer, PLAIN, LAYOUT;
    BackgroundColor = "background-color", Color, ANIMATED, PAINT_COLOR;
    BackgroundImage = "background-image", Image, PLAIN, ChangeFlags::REPAINT;
    BackgroundSize = "background-size", BackgroundSize, ANIMATED, ChangeFlags::REPAINT;
    BorderBottomColor = "border-bottom-color", Color, ANIMATED, PAINT_COLOR;
    BorderBottomLeftRadius = "border-bottom-left-radius", Length, ANIMATED, RADIUS;
    BorderBottomRightRadius = "border-bottom-right-radius", Length, ANIMATED, RADIUS;
    BorderBottomWidth = "border-bottom-width", Number, ANIMATED, BORDER_WIDTH;
    BorderLeftColor = "border-left-color", Color, ANIMATED, PAINT_COLOR;
    BorderLeftWidth = "border-left-width", Number, ANIMATED, BORDER_WIDTH;
    BorderRightColor = "border-right-color", Color, ANIMATED, PAINT_COLOR;
    BorderRightWidth = "border-right-width", Number, ANIMATED, BORDER_WIDTH;
    BorderTopColor = "border-top-color", Color, ANIMATED, PAINT_COLOR;
    BorderTopLeftRadius = "border-top-left-radius", Length, ANIMATED, RADIUS;
    BorderTopRightRadius = "border-top-right-radius", Length, ANIMATED, RADIUS;
    BorderTopWidth = "border-top-width", Number, ANIMATED, BORDER_WIDTH;
    Bottom = "bottom", Length, ANIMATED, LAYOUT;
    Color = "color", Color, INHERITED_ANIMATED, PAINT_COLOR.union(ChangeFlags::INHERITED);
    Cursor = "cursor", Cursor, PLAIN, NO_CHANGE;
    Display = "display", Integer, PLAIN, LAYOUT;
    FlexBasis = "flex-basis", Length, ANIMATED, LAYOUT;
    FlexDirection = "flex-direction", Integer, PLAIN, LAYOUT;
    FlexGrow = "flex-grow", Number, ANIMATED, LAYOUT;
    FlexShrink = "flex-shrink", Number, ANIMATED, LAYOUT;
    FlexWrap = "flex-wrap", Integer, PLAIN, LAYOUT;
    FontSize = "font-size", Length, INHERITED_ANIMATED, INHERITED_LAYOUT;
    FontStyle = "font-style", Integer, INHERITED, INHERITED_LAYOUT;
    Height = "height", Length, ANIMATED, LAYOUT;
    JustifyContent = "justify-content", Integer, PLAIN, LAYOUT;
    Left = "left", Length, ANIMATED, LAYOUT;
    LetterSpacing = "letter-spacing", Length, INHERITED_ANIMATED, INHERITED_LAYOUT;
    MarginBottom = "margin-bottom", Length, ANIMATED, LAYOUT;
    MarginLeft = "margin-left", Length, ANIMATED, LAYOUT;
    MarginRight = "margin-right", Length, ANIMATED, LAYOUT;
    MarginTop = "margin-top", Length, ANIMATED, LAYOUT;
    MaxHeight = "max-height", Length, ANIMATED, LAYOUT;
    MaxWidth = "max-width", Length, ANIMATED, LAYOUT;
    MinHeight = "min-height", Length, ANIMATED, LAYOUT;
    MinWidth = "min-width", Length, ANIMATED, LAYOUT;
    Opacity = "opacity", Number, ANIMATED, ChangeFlags::REPAINT.union(ChangeFlags::OPACITY);
    Overflow = "overflow", Integer, PLAIN, LAYOUT.union(ChangeFlags::OVERFLOW);
    PaddingBottom = "padding-bottom", Length, ANIMATED, LAYOUT;
    PaddingLeft = "padding-left", Length, ANIMATED, LAYOUT;
    PaddingRight = "padding-right", Length, ANIMATED, LAYOUT;
    PaddingTop = "padding-top", Length, ANIMATED, LAYOUT;
    Position = "position", Integer, PLAIN, LAYOUT;
    Right = "right", Length, ANIMATED, LAYOUT;
    Rotate = "rotate", Rotate, ANIMATED, TRANSFORM;
    Scale = "scale", Scale, ANIMATED, TRANSFORM;
    TextAlign = "text-align", Integer, INHERITED, INHERITED_PAINT;
    TextShadow = "text-shadow", TextShadow, INHERITED_ANIMATED, INHERITED_PAINT;
    Top = "top", Length, ANIMATED, LAYOUT;
    TransformOrigin = "transform-origin", TransformOrigin, ANIMATED, TRANSFORM;
    TransitionDelay = "transition-delay", TimeList, PLAIN, NO_CHANGE;
    TransitionDuration = "transition-duration", TimeList, PLAIN, NO_CHANGE;
    TransitionProperty = "transition-property", TransitionTargets, PLAIN, NO_CHANGE;
    TransitionTimingFunction = "transition-timing-function", EasingList, PLAIN, NO_CHANGE;
    Translate = "translate", Translate, ANIMATED, TRANSFORM;
    Visibility = "visibility", Integer, INHERITED, INHERITED_PAINT;
    WhiteSpace = "white-space", Integer, INHERITED, INHERITED_LAYOUT;
    Width = "width", Length, ANIMATED, LAYOUT;
    BorderColor = "border-color", Shorthand, SHORTHAND, NO_CHANGE;
    BorderRadius = "border-radius", Shorthand, SHORTHAND, NO_CHANGE;
    BorderWidth = "border-width", Shorthand, SHORTHAND, NO_CHANGE;
    Flex = "flex", Shorthand, SHORTHAND, NO_CHANGE;
    Margin = "margin", Shorthand, SHORTHAND, NO_CHANGE;
    Padding = "padding", Shorthand, SHORTHAND, NO_CHANGE;
    Transition = "transition", Shorthand, SHORTHAND, NO_CHANGE;
}

impl PropertyId {
    /// The static table entry for this id.
    pub fn info(self) -> &'static PropertyInfo {
        PROPERTY_TABLE
            .get(usize::from(self as u16))
            .unwrap_or(&PROPERTY_TABLE[0])
    }

    pub fn from_index(index: u16) -> Option<Self> {
        PROPERTY_TABLE.get(usize::from(index)).map(|info| info.id)
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    pub fn kind(self) -> ValueKind {
        self.info().kind
    }

    pub fn is_inherited(self) -> bool {
        self.info().traits.contains(PropertyTraits::INHERITED)
    }

    pub fn is_animatable(self) -> bool {
        self.info().traits.contains(PropertyTraits::ANIMATABLE)
    }

    pub fn is_shorthand(self) -> bool {
        self.info().traits.contains(PropertyTraits::SHORTHAND)
    }

    /// Invalidation implied by a change of this property (layout implies repaint).
    pub fn change_flags(self) -> ChangeFlags {
        self.info().change.with_implied()
    }

    /// Longhands of a shorthand, in component order. Box shorthands use top, right, bottom,
    /// left; `border-radius` uses top-left, top-right, bottom-right, bottom-left.
    pub const fn longhands(self) -> &'static [Self] {
        match self {
            Self::Margin => &[
                Self::MarginTop,
                Self::MarginRight,
                Self::MarginBottom,
                Self::MarginLeft,
            ],
            Self::Padding => &[
                Self::PaddingTop,
                Self::PaddingRight,
                Self::PaddingBottom,
                Self::PaddingLeft,
            ],
            Self::BorderWidth => &[
                Self::BorderTopWidth,
                Self::BorderRightWidth,
                Self::BorderBottomWidth,
                Self::BorderLeftWidth,
            ],
            Self::BorderColor => &[
                Self::BorderTopColor,
                Self::BorderRightColor,
                Self::BorderBottomColor,
                Self::BorderLeftColor,
            ],
            Self::BorderRadius => &[
                Self::BorderTopLeftRadius,
                Self::BorderTopRightRadius,
                Self::BorderBottomRightRadius,
                Self::BorderBottomLeftRadius,
            ],
            Self::Flex => &[Self::FlexGrow, Self::FlexShrink, Self::FlexBasis],
            Self::Transition => &[
                Self::TransitionProperty,
                Self::TransitionDuration,
                Self::TransitionTimingFunction,
                Self::TransitionDelay,
            ],
            _ => &[],
        }
    }
}

/// Name ↔ id map and classification queries.
#[derive(Debug, Clone)]
pub struct PropertyRegistry {
    by_name: HashMap<&'static str, PropertyId>,
}

impl Default for PropertyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PropertyRegistry {
    pub fn new() -> Self {
        let by_name = PROPERTY_TABLE
            .iter()
            .filter(|info| info.id != PropertyId::Unknown)
            .map(|info| (info.name, info.id))
            .collect();
        Self { by_name }
    }

    /// Look a property up by its kebab-case name. Camel-case names (`flexGrow`) are accepted
    /// too. Misses return [`PropertyId::Unknown`], which callers ignore.
    pub fn id_for_name(&self, name: &str) -> PropertyId {
        let trimmed = name.trim();
        if let Some(id) = self.by_name.get(trimmed) {
            return *id;
        }
        let normalized = normalize_property_name(trimmed);
        self.by_name
            .get(normalized.as_str())
            .copied()
            .unwrap_or(PropertyId::Unknown)
    }

    pub fn name_for_id(&self, id: PropertyId) -> &'static str {
        id.name()
    }

    pub fn is_animatable(&self, id: PropertyId) -> bool {
        id.is_animatable()
    }

    pub fn is_shorthand(&self, id: PropertyId) -> bool {
        id.is_shorthand()
    }

    pub fn is_inherited(&self, id: PropertyId) -> bool {
        id.is_inherited()
    }

    pub fn longhands_of(&self, id: PropertyId) -> &'static [PropertyId] {
        id.longhands()
    }

    pub fn value_kind(&self, id: PropertyId) -> ValueKind {
        id.kind()
    }

    pub fn change_flags(&self, id: PropertyId) -> ChangeFlags {
        id.change_flags()
    }

    /// Every longhand property, in id order.
    pub fn longhand_ids(&self) -> impl Iterator<Item = PropertyId> {
        PROPERTY_TABLE
            .iter()
            .map(|info| info.id)
            .filter(|id| *id != PropertyId::Unknown && !id.is_shorthand())
    }

    /// Every animatable property, in id order.
    pub fn animatable_ids(&self) -> impl Iterator<Item = PropertyId> {
        PROPERTY_TABLE
            .iter()
            .map(|info| info.id)
            .filter(|id| id.is_animatable())
    }

    /// Number of registered properties, excluding the sentinel.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

/// Lowercase and convert camel case to kebab case (`borderTopWidth` → `border-top-width`).
fn normalize_property_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for character in name.chars() {
        if character.is_ascii_uppercase() {
            if !out.is_empty() {
                out.push('-');
            }
            out.push(character.to_ascii_lowercase());
        } else {
            out.push(character);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_indexed_by_id() {
        for (index, info) in PROPERTY_TABLE.iter().enumerate() {
            assert_eq!(usize::from(info.id as u16), index, "{}", info.name);
        }
    }

    #[test]
    fn names_and_ids_are_bijective() {
        let registry = PropertyRegistry::new();
        for info in PROPERTY_TABLE.iter().skip(1) {
            assert_eq!(registry.id_for_name(info.name), info.id);
            assert_eq!(registry.name_for_id(info.id), info.name);
        }
        assert_eq!(registry.len(), PROPERTY_TABLE.len() - 1);
    }

    #[test]
    fn unknown_and_camel_case_names() {
        let registry = PropertyRegistry::new();
        assert_eq!(registry.id_for_name("-vendor-glow"), PropertyId::Unknown);
        assert_eq!(registry.id_for_name("flexGrow"), PropertyId::FlexGrow);
        assert_eq!(
            registry.id_for_name("BorderTopLeftRadius"),
            PropertyId::BorderTopLeftRadius
        );
    }

    #[test]
    fn classification() {
        assert!(PropertyId::Color.is_inherited());
        assert!(!PropertyId::Width.is_inherited());
        assert!(PropertyId::Width.is_animatable());
        assert!(!PropertyId::Display.is_animatable());
        assert!(PropertyId::Margin.is_shorthand());
        assert_eq!(PropertyId::Margin.longhands().len(), 4);
        assert!(PropertyId::Cursor.kind().is_managed());
        assert!(
            PropertyId::Width
                .change_flags()
                .contains(ChangeFlags::LAYOUT | ChangeFlags::REPAINT)
        );
    }
}
