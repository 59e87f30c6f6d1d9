//! Per-element inline style overrides.
//!
//! Getters read the element's inline records (`Null` when a property has none). Setters
//! write a record and commit the result immediately, returning what the write invalidated.
//! Passing a `Null` keyword to a setter removes the override.

use log::debug;
use style_values::{
    Align, ChangeFlags, Display, EasingFunction, EnumValue, FlexDirection, FontStyle, Justify,
    Length, ManagedData, Overflow, Position, PropertyId, Rgba, Style, StyleBackgroundSize,
    StyleColor, StyleCursor, StyleDeclaration, StyleEnum, StyleFloat, StyleImage, StyleKeyword,
    StyleLength, StyleList, StyleRotate, StyleScale, StyleTextShadow, StyleTransformOrigin,
    StyleTranslate, StyleValue, StyleValueCollection, StyleValueManaged, TextAlign, TimeValue,
    TransitionTarget, ValueData, Visibility, WhiteSpace, Wrap, parse_declaration,
    parse_declarations, shorthand,
};

use crate::engine::StyleEngine;
use crate::style_model::ComputedStyle;
use crate::types::NodeKey;

/// Inline style access for one element, borrowed from the engine.
#[derive(Debug)]
pub struct InlineStyleAccess<'engine> {
    engine: &'engine mut StyleEngine,
    node: NodeKey,
}

impl<'engine> InlineStyleAccess<'engine> {
    pub(crate) fn new(engine: &'engine mut StyleEngine, node: NodeKey) -> Self {
        Self { engine, node }
    }
}

impl InlineStyleAccess<'_> {
    pub const fn node(&self) -> NodeKey {
        self.node
    }

    /// The element's displayed style after the writes made so far.
    pub fn computed(&self) -> Option<&ComputedStyle> {
        self.engine.computed_style(self.node)
    }

    pub fn values(&self) -> Option<&StyleValueCollection> {
        self.engine.inline_values(self.node)
    }

    fn read<T: Default>(&self, read: impl FnOnce(&StyleValueCollection) -> Style<T>) -> Style<T> {
        self.values().map_or_else(Style::null, read)
    }

    pub fn set_value(&mut self, value: StyleValue) -> ChangeFlags {
        self.engine
            .write_inline(self.node, StyleDeclaration::Value(value))
    }

    pub fn set_managed(&mut self, value: StyleValueManaged) -> ChangeFlags {
        self.engine
            .write_inline(self.node, StyleDeclaration::Managed(value))
    }

    /// Set a global or `auto` / `none` keyword. Shorthands apply it to every longhand.
    pub fn set_keyword(&mut self, id: PropertyId, keyword: StyleKeyword) -> ChangeFlags {
        self.engine
            .write_inline(self.node, StyleDeclaration::keyword(id, keyword))
    }

    /// Remove the override for `id` (every longhand of a shorthand).
    pub fn clear(&mut self, id: PropertyId) -> ChangeFlags {
        self.set_keyword(id, StyleKeyword::Null)
    }

    pub fn clear_all(&mut self) -> ChangeFlags {
        self.engine.clear_inline(self.node)
    }

    fn set_typed<T>(
        &mut self,
        id: PropertyId,
        style: Style<T>,
        wrap: impl FnOnce(T) -> ValueData,
    ) -> ChangeFlags {
        let value = match style.keyword {
            StyleKeyword::Undefined => StyleValue::new(id, wrap(style.value)),
            keyword => StyleValue::keyword(id, keyword),
        };
        self.set_value(value)
    }

    fn set_typed_managed<T>(
        &mut self,
        id: PropertyId,
        style: Style<T>,
        wrap: impl FnOnce(T) -> ManagedData,
    ) -> ChangeFlags {
        let value = match style.keyword {
            StyleKeyword::Undefined => StyleValueManaged::new(id, wrap(style.value)),
            keyword => StyleValueManaged::keyword(id, keyword),
        };
        self.set_managed(value)
    }

    fn set_enum<T: EnumValue>(&mut self, id: PropertyId, style: StyleEnum<T>) -> ChangeFlags {
        self.set_typed(id, style, |value| ValueData::Integer(value.to_int()))
    }

    fn write_all(&mut self, declarations: impl IntoIterator<Item = StyleDeclaration>) -> ChangeFlags {
        declarations
            .into_iter()
            .fold(ChangeFlags::empty(), |flags, declaration| {
                flags | self.engine.write_inline(self.node, declaration)
            })
    }

    /// Parse `text` as the value of `name` and set it. Unknown names and invalid values are
    /// ignored.
    pub fn set_by_name(&mut self, name: &str, text: &str) -> ChangeFlags {
        match parse_declaration(self.engine.context().registry(), name, text) {
            Ok(longhands) => self.write_all(longhands),
            Err(error) => {
                debug!("ignoring inline {name}: {text} ({error})");
                ChangeFlags::empty()
            }
        }
    }

    /// The inline record for a property name, if there is one.
    pub fn value_by_name(&self, name: &str) -> Option<StyleDeclaration> {
        let id = self.engine.context().registry().id_for_name(name);
        let values = self.values()?;
        values
            .try_get(id)
            .copied()
            .map(StyleDeclaration::Value)
            .or_else(|| {
                values
                    .try_get_managed(id)
                    .cloned()
                    .map(StyleDeclaration::Managed)
            })
    }

    /// Apply `name: value; ...` text, one declaration at a time in source order.
    pub fn apply_style_attribute(&mut self, text: &str) -> ChangeFlags {
        let declarations = parse_declarations(self.engine.context().registry(), text);
        self.write_all(declarations)
    }

    fn set_edges(&mut self, id: PropertyId, components: &[ValueData]) -> ChangeFlags {
        let longhands = shorthand::expand_edges(id, components);
        if longhands.is_empty() {
            debug!("{} takes one to four values, got {}", id.name(), components.len());
        }
        self.write_all(longhands)
    }

    /// `margin` with one to four lengths.
    pub fn set_margin(&mut self, lengths: &[Length]) -> ChangeFlags {
        let components: Vec<_> = lengths.iter().copied().map(ValueData::Length).collect();
        self.set_edges(PropertyId::Margin, &components)
    }

    /// `padding` with one to four lengths.
    pub fn set_padding(&mut self, lengths: &[Length]) -> ChangeFlags {
        let components: Vec<_> = lengths.iter().copied().map(ValueData::Length).collect();
        self.set_edges(PropertyId::Padding, &components)
    }

    pub fn set_border_width(&mut self, widths: &[f32]) -> ChangeFlags {
        let components: Vec<_> = widths.iter().copied().map(ValueData::Number).collect();
        self.set_edges(PropertyId::BorderWidth, &components)
    }

    pub fn set_border_color(&mut self, colors: &[Rgba]) -> ChangeFlags {
        let components: Vec<_> = colors.iter().copied().map(ValueData::Color).collect();
        self.set_edges(PropertyId::BorderColor, &components)
    }

    /// Corner radii in top-left, top-right, bottom-right, bottom-left order.
    pub fn set_border_radius(&mut self, radii: &[Length]) -> ChangeFlags {
        let components: Vec<_> = radii.iter().copied().map(ValueData::Length).collect();
        self.set_edges(PropertyId::BorderRadius, &components)
    }

    pub fn set_flex(&mut self, grow: f32, shrink: f32, basis: Length) -> ChangeFlags {
        self.write_all(shorthand::expand_flex(grow, shrink, basis))
    }
}

macro_rules! plain_properties {
    ($($getter:ident, $setter:ident: $id:ident => $style:ty, $read:ident, $variant:ident;)+) => {
        impl InlineStyleAccess<'_> {
            $(
                pub fn $getter(&self) -> $style {
                    self.read(|values| values.$read(PropertyId::$id))
                }

                pub fn $setter(&mut self, value: impl Into<$style>) -> ChangeFlags {
                    self.set_typed(PropertyId::$id, value.into(), ValueData::$variant)
                }
            )+
        }
    };
}

plain_properties! {
    width, set_width: Width => StyleLength, length, Length;
    height, set_height: Height => StyleLength, length, Length;
    min_width, set_min_width: MinWidth => StyleLength, length, Length;
    min_height, set_min_height: MinHeight => StyleLength, length, Length;
    max_width, set_max_width: MaxWidth => StyleLength, length, Length;
    max_height, set_max_height: MaxHeight => StyleLength, length, Length;
    margin_top, set_margin_top: MarginTop => StyleLength, length, Length;
    margin_right, set_margin_right: MarginRight => StyleLength, length, Length;
    margin_bottom, set_margin_bottom: MarginBottom => StyleLength, length, Length;
    margin_left, set_margin_left: MarginLeft => StyleLength, length, Length;
    padding_top, set_padding_top: PaddingTop => StyleLength, length, Length;
    padding_right, set_padding_right: PaddingRight => StyleLength, length, Length;
    padding_bottom, set_padding_bottom: PaddingBottom => StyleLength, length, Length;
    padding_left, set_padding_left: PaddingLeft => StyleLength, length, Length;
    top, set_top: Top => StyleLength, length, Length;
    right, set_right: Right => StyleLength, length, Length;
    bottom, set_bottom: Bottom => StyleLength, length, Length;
    left, set_left: Left => StyleLength, length, Length;
    flex_basis, set_flex_basis: FlexBasis => StyleLength, length, Length;
    font_size, set_font_size: FontSize => StyleLength, length, Length;
    letter_spacing, set_letter_spacing: LetterSpacing => StyleLength, length, Length;
    border_top_left_radius, set_border_top_left_radius: BorderTopLeftRadius => StyleLength, length, Length;
    border_top_right_radius, set_border_top_right_radius: BorderTopRightRadius => StyleLength, length, Length;
    border_bottom_right_radius, set_border_bottom_right_radius: BorderBottomRightRadius => StyleLength, length, Length;
    border_bottom_left_radius, set_border_bottom_left_radius: BorderBottomLeftRadius => StyleLength, length, Length;
    opacity, set_opacity: Opacity => StyleFloat, float, Number;
    flex_grow, set_flex_grow: FlexGrow => StyleFloat, float, Number;
    flex_shrink, set_flex_shrink: FlexShrink => StyleFloat, float, Number;
    border_top_width, set_border_top_width: BorderTopWidth => StyleFloat, float, Number;
    border_right_width, set_border_right_width: BorderRightWidth => StyleFloat, float, Number;
    border_bottom_width, set_border_bottom_width: BorderBottomWidth => StyleFloat, float, Number;
    border_left_width, set_border_left_width: BorderLeftWidth => StyleFloat, float, Number;
    color, set_color: Color => StyleColor, color, Color;
    background_color, set_background_color: BackgroundColor => StyleColor, color, Color;
    border_top_color, set_border_top_color: BorderTopColor => StyleColor, color, Color;
    border_right_color, set_border_right_color: BorderRightColor => StyleColor, color, Color;
    border_bottom_color, set_border_bottom_color: BorderBottomColor => StyleColor, color, Color;
    border_left_color, set_border_left_color: BorderLeftColor => StyleColor, color, Color;
    translate, set_translate: Translate => StyleTranslate, translate, Translate;
    rotate, set_rotate: Rotate => StyleRotate, rotate, Rotate;
    scale, set_scale: Scale => StyleScale, scale, Scale;
    transform_origin, set_transform_origin: TransformOrigin => StyleTransformOrigin, transform_origin, TransformOrigin;
    text_shadow, set_text_shadow: TextShadow => StyleTextShadow, text_shadow, TextShadow;
    background_size, set_background_size: BackgroundSize => StyleBackgroundSize, background_size, BackgroundSize;
}

macro_rules! enum_properties {
    ($($getter:ident, $setter:ident: $id:ident => $enum:ty;)+) => {
        impl InlineStyleAccess<'_> {
            $(
                pub fn $getter(&self) -> StyleEnum<$enum> {
                    self.read(|values| values.enum_value::<$enum>(PropertyId::$id))
                }

                pub fn $setter(&mut self, value: impl Into<StyleEnum<$enum>>) -> ChangeFlags {
                    self.set_enum(PropertyId::$id, value.into())
                }
            )+
        }
    };
}

enum_properties! {
    align_content, set_align_content: AlignContent => Align;
    align_items, set_align_items: AlignItems => Align;
    align_self, set_align_self: AlignSelf => Align;
    justify_content, set_justify_content: JustifyContent => Justify;
    flex_direction, set_flex_direction: FlexDirection => FlexDirection;
    flex_wrap, set_flex_wrap: FlexWrap => Wrap;
    display, set_display: Display => Display;
    position, set_position: Position => Position;
    overflow, set_overflow: Overflow => Overflow;
    visibility, set_visibility: Visibility => Visibility;
    white_space, set_white_space: WhiteSpace => WhiteSpace;
    text_align, set_text_align: TextAlign => TextAlign;
    font_style, set_font_style: FontStyle => FontStyle;
}

/// Resource and list properties live in the managed part of the store.
impl InlineStyleAccess<'_> {
    pub fn cursor(&self) -> StyleCursor {
        self.read(|values| values.cursor(PropertyId::Cursor))
    }

    pub fn set_cursor(&mut self, value: impl Into<StyleCursor>) -> ChangeFlags {
        self.set_typed_managed(PropertyId::Cursor, value.into(), ManagedData::Cursor)
    }

    pub fn background_image(&self) -> StyleImage {
        self.read(|values| values.image(PropertyId::BackgroundImage))
    }

    /// `None` clears the image (the same as the `none` keyword).
    pub fn set_background_image(&mut self, value: impl Into<StyleImage>) -> ChangeFlags {
        self.set_typed_managed(PropertyId::BackgroundImage, value.into(), |image| {
            image.map_or(ManagedData::Empty, ManagedData::Image)
        })
    }

    pub fn transition_property(&self) -> StyleList<TransitionTarget> {
        self.read(|values| values.transition_targets(PropertyId::TransitionProperty))
    }

    pub fn set_transition_property(
        &mut self,
        value: impl Into<StyleList<TransitionTarget>>,
    ) -> ChangeFlags {
        self.set_typed_managed(
            PropertyId::TransitionProperty,
            value.into(),
            ManagedData::TransitionTargets,
        )
    }

    pub fn transition_duration(&self) -> StyleList<TimeValue> {
        self.read(|values| values.times(PropertyId::TransitionDuration))
    }

    pub fn set_transition_duration(&mut self, value: impl Into<StyleList<TimeValue>>) -> ChangeFlags {
        self.set_typed_managed(PropertyId::TransitionDuration, value.into(), ManagedData::Times)
    }

    pub fn transition_delay(&self) -> StyleList<TimeValue> {
        self.read(|values| values.times(PropertyId::TransitionDelay))
    }

    pub fn set_transition_delay(&mut self, value: impl Into<StyleList<TimeValue>>) -> ChangeFlags {
        self.set_typed_managed(PropertyId::TransitionDelay, value.into(), ManagedData::Times)
    }

    pub fn transition_timing_function(&self) -> StyleList<EasingFunction> {
        self.read(|values| values.easings(PropertyId::TransitionTimingFunction))
    }

    pub fn set_transition_timing_function(
        &mut self,
        value: impl Into<StyleList<EasingFunction>>,
    ) -> ChangeFlags {
        self.set_typed_managed(
            PropertyId::TransitionTimingFunction,
            value.into(),
            ManagedData::Easings,
        )
    }
}
