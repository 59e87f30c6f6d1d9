//! Computed style aggregate.
//!
//! Values are grouped so that elements can share unchanged groups through `Arc`. Every
//! mutation goes through `Arc::make_mut`, so a shared group is copied before it is written.

use core::hash::{Hash, Hasher};
use std::sync::Arc;

use log::trace;
use style_values::{
    Align, BackgroundSize, ChangeFlags, Cursor, Display, EasingFunction, EnumValue as _,
    FlexDirection, FontStyle, Justify, Length, LengthUnit, ManagedData, Overflow, Position,
    PropertyId, PropertyRegistry, ResourceHandle, Rgba, Rotate, Scale, StyleKeyword, TextAlign,
    TextShadow, TimeValue, TransformOrigin, TransitionTarget, Translate, ValueData, ValueKind,
    Visibility, WhiteSpace, Wrap,
};

use crate::options::StyleOptions;

/// Per-side values in top, right, bottom, left order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Edges<T> {
    pub top: T,
    pub right: T,
    pub bottom: T,
    pub left: T,
}

impl<T: Copy> Edges<T> {
    pub const fn all(value: T) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

/// Per-corner values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Corners<T> {
    pub top_left: T,
    pub top_right: T,
    pub bottom_right: T,
    pub bottom_left: T,
}

impl<T: Copy> Corners<T> {
    pub const fn all(value: T) -> Self {
        Self {
            top_left: value,
            top_right: value,
            bottom_right: value,
            bottom_left: value,
        }
    }
}

/// Inherited properties. Children start from their parent's instance.
#[derive(Clone, Debug, PartialEq)]
pub struct InheritedData {
    pub color: Rgba,
    /// Resolved font size in pixels.
    pub font_size: f32,
    pub font_style: FontStyle,
    pub letter_spacing: Length,
    pub text_align: TextAlign,
    pub text_shadow: TextShadow,
    pub visibility: Visibility,
    pub white_space: WhiteSpace,
}

impl Hash for InheritedData {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.color.hash(state);
        self.font_size.to_bits().hash(state);
        self.font_style.hash(state);
        self.letter_spacing.hash(state);
        self.text_align.hash(state);
        self.text_shadow.hash(state);
        self.visibility.hash(state);
        self.white_space.hash(state);
    }
}

/// Box and flex properties consumed by the layout bridge.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutData {
    pub align_content: Align,
    pub align_items: Align,
    pub align_self: Align,
    pub justify_content: Justify,
    pub flex_direction: FlexDirection,
    pub flex_wrap: Wrap,
    pub display: Display,
    pub position: Position,
    pub overflow: Overflow,
    pub flex_grow: f32,
    pub flex_shrink: f32,
    pub flex_basis: Length,
    pub width: Length,
    pub height: Length,
    pub min_width: Length,
    pub min_height: Length,
    pub max_width: Length,
    pub max_height: Length,
    pub margin: Edges<Length>,
    pub padding: Edges<Length>,
    pub border_width: Edges<f32>,
    /// `top` / `right` / `bottom` / `left` offsets.
    pub inset: Edges<Length>,
}

/// Paint-only properties.
#[derive(Clone, Debug, PartialEq)]
pub struct VisualData {
    pub background_color: Rgba,
    pub background_image: Option<ResourceHandle>,
    pub background_size: BackgroundSize,
    pub border_color: Edges<Rgba>,
    pub border_radius: Corners<Length>,
    pub cursor: Cursor,
    pub opacity: f32,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransformData {
    pub translate: Translate,
    pub rotate: Rotate,
    pub scale: Scale,
    pub transform_origin: TransformOrigin,
}

/// Transition lists. Rarely set, so kept out of line.
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionData {
    pub properties: Vec<TransitionTarget>,
    pub durations: Vec<TimeValue>,
    pub delays: Vec<TimeValue>,
    pub easings: Vec<EasingFunction>,
}

impl Default for TransitionData {
    fn default() -> Self {
        Self {
            properties: vec![TransitionTarget::All],
            durations: vec![TimeValue::ZERO],
            delays: vec![TimeValue::ZERO],
            easings: vec![EasingFunction::default()],
        }
    }
}

/// Fully resolved style of one element.
#[derive(Clone, Debug, PartialEq)]
pub struct ComputedStyle {
    inherited: Arc<InheritedData>,
    layout: Arc<LayoutData>,
    visual: Arc<VisualData>,
    transform: Arc<TransformData>,
    transition: Arc<TransitionData>,
}

/// Write `$value` into a group field, copying the group first when it is shared.
macro_rules! assign {
    ($style:ident . $group:ident => $($field:ident).+, $value:expr) => {{
        let value = $value;
        if $style.$group.$($field).+ == value {
            false
        } else {
            Arc::make_mut(&mut $style.$group).$($field).+ = value;
            true
        }
    }};
}

impl ComputedStyle {
    /// The initial value of every property.
    pub fn initial(options: &StyleOptions) -> Self {
        let inherited = InheritedData {
            color: Rgba::BLACK,
            font_size: options.default_font_size_px,
            font_style: FontStyle::Normal,
            letter_spacing: Length::ZERO,
            text_align: TextAlign::Left,
            text_shadow: TextShadow::default(),
            visibility: Visibility::Visible,
            white_space: WhiteSpace::Normal,
        };
        let layout = LayoutData {
            align_content: Align::FlexStart,
            align_items: Align::Stretch,
            align_self: Align::Auto,
            justify_content: Justify::FlexStart,
            flex_direction: FlexDirection::Column,
            flex_wrap: Wrap::NoWrap,
            display: Display::Flex,
            position: Position::Relative,
            overflow: Overflow::Visible,
            flex_grow: 0.0,
            flex_shrink: 1.0,
            flex_basis: Length::auto(),
            width: Length::auto(),
            height: Length::auto(),
            min_width: Length::auto(),
            min_height: Length::auto(),
            max_width: Length::none(),
            max_height: Length::none(),
            margin: Edges::all(Length::ZERO),
            padding: Edges::all(Length::ZERO),
            border_width: Edges::all(0.0),
            inset: Edges::all(Length::auto()),
        };
        let visual = VisualData {
            background_color: Rgba::TRANSPARENT,
            background_image: None,
            background_size: BackgroundSize::default(),
            border_color: Edges::all(Rgba::BLACK),
            border_radius: Corners::all(Length::ZERO),
            cursor: Cursor::default(),
            opacity: 1.0,
        };
        Self {
            inherited: Arc::new(inherited),
            layout: Arc::new(layout),
            visual: Arc::new(visual),
            transform: Arc::new(TransformData::default()),
            transition: Arc::new(TransitionData::default()),
        }
    }

    /// Start of a child's resolution: the parent's inherited group, initial values elsewhere.
    pub fn inheriting_from(parent: &Self, initial: &Self) -> Self {
        Self {
            inherited: Arc::clone(&parent.inherited),
            layout: Arc::clone(&initial.layout),
            visual: Arc::clone(&initial.visual),
            transform: Arc::clone(&initial.transform),
            transition: Arc::clone(&initial.transition),
        }
    }

    pub fn inherited(&self) -> &InheritedData {
        &self.inherited
    }

    pub fn layout(&self) -> &LayoutData {
        &self.layout
    }

    pub fn visual(&self) -> &VisualData {
        &self.visual
    }

    pub fn transform(&self) -> &TransformData {
        &self.transform
    }

    pub fn transition(&self) -> &TransitionData {
        &self.transition
    }

    /// Whether every group is the same allocation as in `other`.
    pub fn is_shared_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inherited, &other.inherited)
            && Arc::ptr_eq(&self.layout, &other.layout)
            && Arc::ptr_eq(&self.visual, &other.visual)
            && Arc::ptr_eq(&self.transform, &other.transform)
            && Arc::ptr_eq(&self.transition, &other.transition)
    }

    /// Whether the inherited group is the same allocation as in `other`.
    pub fn shares_inherited_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inherited, &other.inherited)
    }

    /// Read a plain property. Returns `None` for managed properties and shorthands.
    pub fn value(&self, id: PropertyId) -> Option<ValueData> {
        let inherited = &self.inherited;
        let layout = &self.layout;
        let visual = &self.visual;
        let transform = &self.transform;
        let data = match id {
            PropertyId::AlignContent => ValueData::Integer(layout.align_content.to_int()),
            PropertyId::AlignItems => ValueData::Integer(layout.align_items.to_int()),
            PropertyId::AlignSelf => ValueData::Integer(layout.align_self.to_int()),
            PropertyId::JustifyContent => ValueData::Integer(layout.justify_content.to_int()),
            PropertyId::FlexDirection => ValueData::Integer(layout.flex_direction.to_int()),
            PropertyId::FlexWrap => ValueData::Integer(layout.flex_wrap.to_int()),
            PropertyId::Display => ValueData::Integer(layout.display.to_int()),
            PropertyId::Position => ValueData::Integer(layout.position.to_int()),
            PropertyId::Overflow => ValueData::Integer(layout.overflow.to_int()),
            PropertyId::FlexGrow => ValueData::Number(layout.flex_grow),
            PropertyId::FlexShrink => ValueData::Number(layout.flex_shrink),
            PropertyId::FlexBasis => ValueData::Length(layout.flex_basis),
            PropertyId::Width => ValueData::Length(layout.width),
            PropertyId::Height => ValueData::Length(layout.height),
            PropertyId::MinWidth => ValueData::Length(layout.min_width),
            PropertyId::MinHeight => ValueData::Length(layout.min_height),
            PropertyId::MaxWidth => ValueData::Length(layout.max_width),
            PropertyId::MaxHeight => ValueData::Length(layout.max_height),
            PropertyId::MarginTop => ValueData::Length(layout.margin.top),
            PropertyId::MarginRight => ValueData::Length(layout.margin.right),
            PropertyId::MarginBottom => ValueData::Length(layout.margin.bottom),
            PropertyId::MarginLeft => ValueData::Length(layout.margin.left),
            PropertyId::PaddingTop => ValueData::Length(layout.padding.top),
            PropertyId::PaddingRight => ValueData::Length(layout.padding.right),
            PropertyId::PaddingBottom => ValueData::Length(layout.padding.bottom),
            PropertyId::PaddingLeft => ValueData::Length(layout.padding.left),
            PropertyId::BorderTopWidth => ValueData::Number(layout.border_width.top),
            PropertyId::BorderRightWidth => ValueData::Number(layout.border_width.right),
            PropertyId::BorderBottomWidth => ValueData::Number(layout.border_width.bottom),
            PropertyId::BorderLeftWidth => ValueData::Number(layout.border_width.left),
            PropertyId::Top => ValueData::Length(layout.inset.top),
            PropertyId::Right => ValueData::Length(layout.inset.right),
            PropertyId::Bottom => ValueData::Length(layout.inset.bottom),
            PropertyId::Left => ValueData::Length(layout.inset.left),
            PropertyId::Color => ValueData::Color(inherited.color),
            PropertyId::FontSize => ValueData::Length(Length::px(inherited.font_size)),
            PropertyId::FontStyle => ValueData::Integer(inherited.font_style.to_int()),
            PropertyId::LetterSpacing => ValueData::Length(inherited.letter_spacing),
            PropertyId::TextAlign => ValueData::Integer(inherited.text_align.to_int()),
            PropertyId::TextShadow => ValueData::TextShadow(inherited.text_shadow),
            PropertyId::Visibility => ValueData::Integer(inherited.visibility.to_int()),
            PropertyId::WhiteSpace => ValueData::Integer(inherited.white_space.to_int()),
            PropertyId::BackgroundColor => ValueData::Color(visual.background_color),
            PropertyId::BackgroundSize => ValueData::BackgroundSize(visual.background_size),
            PropertyId::BorderTopColor => ValueData::Color(visual.border_color.top),
            PropertyId::BorderRightColor => ValueData::Color(visual.border_color.right),
            PropertyId::BorderBottomColor => ValueData::Color(visual.border_color.bottom),
            PropertyId::BorderLeftColor => ValueData::Color(visual.border_color.left),
            PropertyId::BorderTopLeftRadius => ValueData::Length(visual.border_radius.top_left),
            PropertyId::BorderTopRightRadius => ValueData::Length(visual.border_radius.top_right),
            PropertyId::BorderBottomRightRadius => {
                ValueData::Length(visual.border_radius.bottom_right)
            }
            PropertyId::BorderBottomLeftRadius => {
                ValueData::Length(visual.border_radius.bottom_left)
            }
            PropertyId::Opacity => ValueData::Number(visual.opacity),
            PropertyId::Translate => ValueData::Translate(transform.translate),
            PropertyId::Rotate => ValueData::Rotate(transform.rotate),
            PropertyId::Scale => ValueData::Scale(transform.scale),
            PropertyId::TransformOrigin => ValueData::TransformOrigin(transform.transform_origin),
            _ => return None,
        };
        Some(data)
    }

    /// Write a plain property. Returns `true` when the stored value changed.
    ///
    /// A payload of the wrong type for `id` is ignored. `font-size` only accepts pixels; the
    /// cascade resolves percentages before calling this.
    pub fn set_value(&mut self, id: PropertyId, data: ValueData) -> bool {
        match (id, data) {
            (PropertyId::AlignContent, ValueData::Integer(raw)) => {
                Align::from_int(raw).is_some_and(|value| assign!(self.layout => align_content, value))
            }
            (PropertyId::AlignItems, ValueData::Integer(raw)) => {
                Align::from_int(raw).is_some_and(|value| assign!(self.layout => align_items, value))
            }
            (PropertyId::AlignSelf, ValueData::Integer(raw)) => {
                Align::from_int(raw).is_some_and(|value| assign!(self.layout => align_self, value))
            }
            (PropertyId::JustifyContent, ValueData::Integer(raw)) => Justify::from_int(raw)
                .is_some_and(|value| assign!(self.layout => justify_content, value)),
            (PropertyId::FlexDirection, ValueData::Integer(raw)) => FlexDirection::from_int(raw)
                .is_some_and(|value| assign!(self.layout => flex_direction, value)),
            (PropertyId::FlexWrap, ValueData::Integer(raw)) => {
                Wrap::from_int(raw).is_some_and(|value| assign!(self.layout => flex_wrap, value))
            }
            (PropertyId::Display, ValueData::Integer(raw)) => {
                Display::from_int(raw).is_some_and(|value| assign!(self.layout => display, value))
            }
            (PropertyId::Position, ValueData::Integer(raw)) => {
                Position::from_int(raw).is_some_and(|value| assign!(self.layout => position, value))
            }
            (PropertyId::Overflow, ValueData::Integer(raw)) => {
                Overflow::from_int(raw).is_some_and(|value| assign!(self.layout => overflow, value))
            }
            (PropertyId::FlexGrow, ValueData::Number(value)) => assign!(self.layout => flex_grow, value),
            (PropertyId::FlexShrink, ValueData::Number(value)) => {
                assign!(self.layout => flex_shrink, value)
            }
            (PropertyId::FlexBasis, ValueData::Length(value)) => {
                assign!(self.layout => flex_basis, value)
            }
            (PropertyId::Width, ValueData::Length(value)) => assign!(self.layout => width, value),
            (PropertyId::Height, ValueData::Length(value)) => assign!(self.layout => height, value),
            (PropertyId::MinWidth, ValueData::Length(value)) => assign!(self.layout => min_width, value),
            (PropertyId::MinHeight, ValueData::Length(value)) => {
                assign!(self.layout => min_height, value)
            }
            (PropertyId::MaxWidth, ValueData::Length(value)) => assign!(self.layout => max_width, value),
            (PropertyId::MaxHeight, ValueData::Length(value)) => {
                assign!(self.layout => max_height, value)
            }
            (PropertyId::MarginTop, ValueData::Length(value)) => assign!(self.layout => margin.top, value),
            (PropertyId::MarginRight, ValueData::Length(value)) => {
                assign!(self.layout => margin.right, value)
            }
            (PropertyId::MarginBottom, ValueData::Length(value)) => {
                assign!(self.layout => margin.bottom, value)
            }
            (PropertyId::MarginLeft, ValueData::Length(value)) => {
                assign!(self.layout => margin.left, value)
            }
            (PropertyId::PaddingTop, ValueData::Length(value)) => {
                assign!(self.layout => padding.top, value)
            }
            (PropertyId::PaddingRight, ValueData::Length(value)) => {
                assign!(self.layout => padding.right, value)
            }
            (PropertyId::PaddingBottom, ValueData::Length(value)) => {
                assign!(self.layout => padding.bottom, value)
            }
            (PropertyId::PaddingLeft, ValueData::Length(value)) => {
                assign!(self.layout => padding.left, value)
            }
            (PropertyId::BorderTopWidth, ValueData::Number(value)) => {
                assign!(self.layout => border_width.top, value)
            }
            (PropertyId::BorderRightWidth, ValueData::Number(value)) => {
                assign!(self.layout => border_width.right, value)
            }
            (PropertyId::BorderBottomWidth, ValueData::Number(value)) => {
                assign!(self.layout => border_width.bottom, value)
            }
            (PropertyId::BorderLeftWidth, ValueData::Number(value)) => {
                assign!(self.layout => border_width.left, value)
            }
            (PropertyId::Top, ValueData::Length(value)) => assign!(self.layout => inset.top, value),
            (PropertyId::Right, ValueData::Length(value)) => assign!(self.layout => inset.right, value),
            (PropertyId::Bottom, ValueData::Length(value)) => {
                assign!(self.layout => inset.bottom, value)
            }
            (PropertyId::Left, ValueData::Length(value)) => assign!(self.layout => inset.left, value),
            (PropertyId::Color, ValueData::Color(value)) => assign!(self.inherited => color, value),
            (PropertyId::FontSize, ValueData::Length(value)) if value.unit == LengthUnit::Pixel =>
            {
                assign!(self.inherited => font_size, value.value)
            }
            (PropertyId::FontStyle, ValueData::Integer(raw)) => FontStyle::from_int(raw)
                .is_some_and(|value| assign!(self.inherited => font_style, value)),
            (PropertyId::LetterSpacing, ValueData::Length(value)) => {
                assign!(self.inherited => letter_spacing, value)
            }
            (PropertyId::TextAlign, ValueData::Integer(raw)) => TextAlign::from_int(raw)
                .is_some_and(|value| assign!(self.inherited => text_align, value)),
            (PropertyId::TextShadow, ValueData::TextShadow(value)) => {
                assign!(self.inherited => text_shadow, value)
            }
            (PropertyId::Visibility, ValueData::Integer(raw)) => Visibility::from_int(raw)
                .is_some_and(|value| assign!(self.inherited => visibility, value)),
            (PropertyId::WhiteSpace, ValueData::Integer(raw)) => WhiteSpace::from_int(raw)
                .is_some_and(|value| assign!(self.inherited => white_space, value)),
            (PropertyId::BackgroundColor, ValueData::Color(value)) => {
                assign!(self.visual => background_color, value)
            }
            (PropertyId::BackgroundSize, ValueData::BackgroundSize(value)) => {
                assign!(self.visual => background_size, value)
            }
            (PropertyId::BorderTopColor, ValueData::Color(value)) => {
                assign!(self.visual => border_color.top, value)
            }
            (PropertyId::BorderRightColor, ValueData::Color(value)) => {
                assign!(self.visual => border_color.right, value)
            }
            (PropertyId::BorderBottomColor, ValueData::Color(value)) => {
                assign!(self.visual => border_color.bottom, value)
            }
            (PropertyId::BorderLeftColor, ValueData::Color(value)) => {
                assign!(self.visual => border_color.left, value)
            }
            (PropertyId::BorderTopLeftRadius, ValueData::Length(value)) => {
                assign!(self.visual => border_radius.top_left, value)
            }
            (PropertyId::BorderTopRightRadius, ValueData::Length(value)) => {
                assign!(self.visual => border_radius.top_right, value)
            }
            (PropertyId::BorderBottomRightRadius, ValueData::Length(value)) => {
                assign!(self.visual => border_radius.bottom_right, value)
            }
            (PropertyId::BorderBottomLeftRadius, ValueData::Length(value)) => {
                assign!(self.visual => border_radius.bottom_left, value)
            }
            (PropertyId::Opacity, ValueData::Number(value)) => assign!(self.visual => opacity, value),
            (PropertyId::Translate, ValueData::Translate(value)) => {
                assign!(self.transform => translate, value)
            }
            (PropertyId::Rotate, ValueData::Rotate(value)) => assign!(self.transform => rotate, value),
            (PropertyId::Scale, ValueData::Scale(value)) => assign!(self.transform => scale, value),
            (PropertyId::TransformOrigin, ValueData::TransformOrigin(value)) => {
                assign!(self.transform => transform_origin, value)
            }
            _ => {
                trace!("ignoring {data:?} for {}", id.name());
                false
            }
        }
    }

    /// Read a managed property.
    pub fn managed(&self, id: PropertyId) -> Option<ManagedData> {
        let data = match id {
            PropertyId::Cursor => ManagedData::Cursor(self.visual.cursor.clone()),
            PropertyId::BackgroundImage => self
                .visual
                .background_image
                .clone()
                .map_or(ManagedData::Empty, ManagedData::Image),
            PropertyId::TransitionProperty => {
                ManagedData::TransitionTargets(self.transition.properties.clone())
            }
            PropertyId::TransitionDuration => ManagedData::Times(self.transition.durations.clone()),
            PropertyId::TransitionDelay => ManagedData::Times(self.transition.delays.clone()),
            PropertyId::TransitionTimingFunction => {
                ManagedData::Easings(self.transition.easings.clone())
            }
            _ => return None,
        };
        Some(data)
    }

    /// Write a managed property. Returns `true` when the stored value changed.
    pub fn set_managed(&mut self, id: PropertyId, data: &ManagedData) -> bool {
        match (id, data) {
            (PropertyId::Cursor, ManagedData::Cursor(cursor)) => {
                assign!(self.visual => cursor, cursor.clone())
            }
            (PropertyId::BackgroundImage, ManagedData::Image(handle)) => {
                assign!(self.visual => background_image, Some(handle.clone()))
            }
            (PropertyId::BackgroundImage, ManagedData::Empty) => {
                assign!(self.visual => background_image, None)
            }
            (PropertyId::TransitionProperty, ManagedData::TransitionTargets(targets)) => {
                assign!(self.transition => properties, targets.clone())
            }
            (PropertyId::TransitionDuration, ManagedData::Times(times)) => {
                assign!(self.transition => durations, times.clone())
            }
            (PropertyId::TransitionDelay, ManagedData::Times(times)) => {
                assign!(self.transition => delays, times.clone())
            }
            (PropertyId::TransitionTimingFunction, ManagedData::Easings(easings)) => {
                assign!(self.transition => easings, easings.clone())
            }
            _ => {
                trace!("ignoring {data:?} for {}", id.name());
                false
            }
        }
    }

    /// Apply an `auto` / `none` keyword. Properties without a meaning for the keyword are
    /// left untouched.
    pub fn apply_keyword(&mut self, id: PropertyId, keyword: StyleKeyword) -> bool {
        match (id.kind(), keyword) {
            (ValueKind::Length, StyleKeyword::Auto) if id != PropertyId::FontSize => {
                self.set_value(id, ValueData::Length(Length::auto()))
            }
            (ValueKind::Length, StyleKeyword::None) if id != PropertyId::FontSize => {
                self.set_value(id, ValueData::Length(Length::none()))
            }
            (ValueKind::Image, StyleKeyword::None) => self.set_managed(id, &ManagedData::Empty),
            (ValueKind::Cursor, StyleKeyword::Auto) => {
                self.set_managed(id, &ManagedData::Cursor(Cursor::default()))
            }
            (ValueKind::Translate, StyleKeyword::None) => {
                self.set_value(id, ValueData::Translate(Translate::default()))
            }
            (ValueKind::Rotate, StyleKeyword::None) => {
                self.set_value(id, ValueData::Rotate(Rotate::default()))
            }
            (ValueKind::Scale, StyleKeyword::None) => {
                self.set_value(id, ValueData::Scale(Scale::IDENTITY))
            }
            (ValueKind::TextShadow, StyleKeyword::None) => {
                self.set_value(id, ValueData::TextShadow(TextShadow::default()))
            }
            (ValueKind::TransitionTargets, StyleKeyword::None) => self.set_managed(
                id,
                &ManagedData::TransitionTargets(vec![TransitionTarget::None]),
            ),
            _ => false,
        }
    }

    /// Copy one property from `source`.
    pub fn copy_property(&mut self, id: PropertyId, source: &Self) -> bool {
        if id.kind().is_managed() {
            return source
                .managed(id)
                .is_some_and(|data| self.set_managed(id, &data));
        }
        source
            .value(id)
            .is_some_and(|data| self.set_value(id, data))
    }

    /// Whether `id` resolves to different values in `self` and `other`.
    pub fn differs(&self, other: &Self, id: PropertyId) -> bool {
        if id.kind().is_managed() {
            self.managed(id) != other.managed(id)
        } else {
            self.value(id) != other.value(id)
        }
    }

    /// Invalidation needed to go from `self` to `other`.
    pub fn change_flags(&self, other: &Self, registry: &PropertyRegistry) -> ChangeFlags {
        if self.is_shared_with(other) {
            return ChangeFlags::empty();
        }
        registry
            .longhand_ids()
            .filter(|id| self.differs(other, *id))
            .fold(ChangeFlags::empty(), |flags, id| {
                flags | id.change_flags() | ChangeFlags::STYLES
            })
    }
}
