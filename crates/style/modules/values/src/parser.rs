//! Textual declaration parsing: `name: value; ...` blocks and single property values.
//!
//! Values are split into whitespace- and comma-separated components at parenthesis depth
//! zero; each component is then read as a single `cssparser` token.

use cssparser::{Parser, ParserInput, Token};
use log::debug;
use smallvec::SmallVec;

use crate::shorthand::{self, Longhands, TransitionItem};
use crate::{
    Align, BackgroundSize, Cursor, Display, EasingFunction, EasingMode, EnumValue, FlexDirection,
    FontStyle, Justify, Length, ManagedData, Overflow, ParseError, Position, PropertyId,
    PropertyRegistry, ResourceHandle, Rgba, Rotate, Scale, StyleDeclaration, StyleKeyword,
    StyleValue, StyleValueManaged, TextAlign, TextShadow, TimeValue, TransformOrigin,
    TransitionTarget, Translate, ValueData, ValueKind, Visibility, WhiteSpace, Wrap,
    angle_to_degrees, builtin_cursor_id,
};

/// Parse a declaration block (`width: 10px; color: red`) into longhand declarations.
///
/// Items without a colon, unknown properties and invalid values are skipped. Later
/// declarations are kept after earlier ones so that applying them in order lets the last win.
pub fn parse_declarations(registry: &PropertyRegistry, text: &str) -> Vec<StyleDeclaration> {
    let mut out = Vec::new();
    for raw_item in text.split(';') {
        let item = raw_item.trim();
        if item.is_empty() {
            continue;
        }
        let Some((raw_name, raw_value)) = item.split_once(':') else {
            debug!("skipping declaration without colon: {item:?}");
            continue;
        };
        match parse_declaration(registry, raw_name, raw_value) {
            Ok(longhands) => out.extend(longhands),
            Err(error) => debug!("skipping declaration {item:?}: {error}"),
        }
    }
    out
}

/// Parse one `name: value` pair, expanding shorthands.
///
/// # Errors
/// Returns `ParseError::UnknownProperty` when the registry does not know `name`, and
/// `ParseError::InvalidValue` when `value` does not parse for the property.
pub fn parse_declaration(
    registry: &PropertyRegistry,
    name: &str,
    value: &str,
) -> Result<Longhands, ParseError> {
    let id = registry.id_for_name(&name.trim().to_ascii_lowercase());
    if id == PropertyId::Unknown {
        return Err(ParseError::UnknownProperty);
    }
    let text = value.trim();
    if text.is_empty() {
        return Err(ParseError::InvalidValue);
    }
    if id.is_shorthand() {
        return parse_shorthand(registry, id, text);
    }
    let mut out = Longhands::new();
    out.push(parse_value(registry, id, text)?);
    Ok(out)
}

/// Parse the value of a longhand property.
///
/// # Errors
/// Returns `ParseError::InvalidValue` when `text` is not valid for the property's kind.
pub fn parse_value(
    registry: &PropertyRegistry,
    id: PropertyId,
    text: &str,
) -> Result<StyleDeclaration, ParseError> {
    let kind = id.kind();
    if let Some(keyword) = StyleKeyword::from_name(text) {
        // Enumerations and transition targets have their own `auto` / `none`.
        let own_keyword = matches!(kind, ValueKind::Integer | ValueKind::TransitionTargets)
            && matches!(keyword, StyleKeyword::Auto | StyleKeyword::None);
        if !own_keyword {
            return Ok(StyleDeclaration::keyword(id, keyword));
        }
    }
    let plain = |data| Ok(StyleDeclaration::Value(StyleValue::new(id, data)));
    let managed = |data| Ok(StyleDeclaration::Managed(StyleValueManaged::new(id, data)));
    match kind {
        ValueKind::Length => plain(ValueData::Length(parse_length(text)?)),
        ValueKind::Number => plain(ValueData::Number(parse_number_or_px(text)?)),
        ValueKind::Integer => plain(ValueData::Integer(
            enum_int_from_name(id, text).ok_or(ParseError::InvalidValue)?,
        )),
        ValueKind::Color => plain(ValueData::Color(Rgba::parse(text)?)),
        ValueKind::Translate => plain(ValueData::Translate(parse_translate(text)?)),
        ValueKind::Rotate => plain(ValueData::Rotate(Rotate::degrees(parse_angle(text)?))),
        ValueKind::Scale => plain(ValueData::Scale(parse_scale(text)?)),
        ValueKind::TransformOrigin => {
            plain(ValueData::TransformOrigin(parse_transform_origin(text)?))
        }
        ValueKind::BackgroundSize => plain(ValueData::BackgroundSize(parse_background_size(text)?)),
        ValueKind::TextShadow => plain(ValueData::TextShadow(parse_text_shadow(text)?)),
        ValueKind::Cursor => managed(ManagedData::Cursor(parse_cursor(text)?)),
        ValueKind::Image => managed(ManagedData::Image(parse_url(text)?)),
        ValueKind::TransitionTargets => managed(ManagedData::TransitionTargets(
            split_list(text)
                .into_iter()
                .map(|item| parse_transition_target(registry, item))
                .collect::<Result<_, _>>()?,
        )),
        ValueKind::TimeList => managed(ManagedData::Times(
            split_list(text)
                .into_iter()
                .map(parse_time)
                .collect::<Result<_, _>>()?,
        )),
        ValueKind::EasingList => managed(ManagedData::Easings(
            split_list(text)
                .into_iter()
                .map(parse_easing)
                .collect::<Result<_, _>>()?,
        )),
        ValueKind::Shorthand | ValueKind::Unknown => Err(ParseError::InvalidValue),
    }
}

fn parse_shorthand(
    registry: &PropertyRegistry,
    id: PropertyId,
    text: &str,
) -> Result<Longhands, ParseError> {
    if let Some(keyword) = StyleKeyword::from_name(text) {
        return Ok(shorthand::expand_keyword(id, keyword));
    }
    match id {
        PropertyId::Flex => parse_flex(text),
        PropertyId::Transition => {
            let items = split_list(text)
                .into_iter()
                .map(|item| parse_transition_item(registry, item))
                .collect::<Result<SmallVec<[TransitionItem; 2]>, _>>()?;
            Ok(shorthand::expand_transition(&items))
        }
        _ => {
            let component_kind = id
                .longhands()
                .first()
                .map_or(ValueKind::Unknown, |longhand| longhand.kind());
            let components = split_components(text)
                .into_iter()
                .map(|component| match component_kind {
                    ValueKind::Length => parse_length(component).map(ValueData::Length),
                    ValueKind::Number => parse_number_or_px(component).map(ValueData::Number),
                    ValueKind::Color => Rgba::parse(component).map(ValueData::Color),
                    _ => Err(ParseError::InvalidValue),
                })
                .collect::<Result<SmallVec<[ValueData; 4]>, _>>()?;
            let longhands = shorthand::expand_edges(id, &components);
            if longhands.is_empty() {
                return Err(ParseError::InvalidValue);
            }
            Ok(longhands)
        }
    }
}

/// `flex: <grow> [<shrink>] [<basis>]` or `flex: <basis>`.
fn parse_flex(text: &str) -> Result<Longhands, ParseError> {
    let components = split_components(text);
    match components.as_slice() {
        [single] => parse_number(single).map_or_else(
            |_| parse_length(single).map(|basis| shorthand::expand_flex(1.0, 1.0, basis)),
            |grow| Ok(shorthand::expand_flex_number(grow)),
        ),
        [grow, second] => {
            let grow_value = parse_number(grow)?;
            parse_number(second).map_or_else(
                |_| {
                    parse_length(second)
                        .map(|basis| shorthand::expand_flex(grow_value, 1.0, basis))
                },
                |shrink| Ok(shorthand::expand_flex(grow_value, shrink, Length::percent(0.0))),
            )
        }
        [grow, shrink, basis] => Ok(shorthand::expand_flex(
            parse_number(grow)?,
            parse_number(shrink)?,
            parse_length(basis)?,
        )),
        _ => Err(ParseError::InvalidValue),
    }
}

/// One `transition` item: `<property> <duration> [<easing>] [<delay>]`, any order, the first
/// time is the duration and the second the delay.
fn parse_transition_item(
    registry: &PropertyRegistry,
    text: &str,
) -> Result<TransitionItem, ParseError> {
    let mut item = TransitionItem::default();
    let mut times_seen = 0u8;
    let mut target_seen = false;
    for component in split_components(text) {
        if let Ok(time) = parse_time(component) {
            match times_seen {
                0 => item.duration = time,
                1 => item.delay = time,
                _ => return Err(ParseError::InvalidValue),
            }
            times_seen += 1;
        } else if let Ok(easing) = parse_easing(component) {
            item.easing = easing;
        } else if !target_seen {
            item.target = parse_transition_target(registry, component)?;
            target_seen = true;
        } else {
            return Err(ParseError::InvalidValue);
        }
    }
    Ok(item)
}

/// Run `convert` on the only token of `text`.
fn single_token<T>(text: &str, convert: impl FnOnce(&Token) -> Option<T>) -> Result<T, ParseError> {
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    let value = parser
        .next()
        .ok()
        .and_then(convert)
        .ok_or(ParseError::InvalidValue)?;
    if parser.is_exhausted() {
        Ok(value)
    } else {
        Err(ParseError::InvalidValue)
    }
}

/// `<length>`: pixels, percentages, or a unitless number taken as pixels.
fn parse_length(text: &str) -> Result<Length, ParseError> {
    if text.eq_ignore_ascii_case("auto") {
        return Ok(Length::auto());
    }
    if text.eq_ignore_ascii_case("none") {
        return Ok(Length::none());
    }
    single_token(text, |token| match *token {
        Token::Dimension {
            value, ref unit, ..
        } if unit.eq_ignore_ascii_case("px") => Some(Length::px(value)),
        Token::Percentage { unit_value, .. } => Some(Length::percent(unit_value * 100.0)),
        Token::Number { value, .. } => Some(Length::px(value)),
        _ => None,
    })
}

fn parse_number(text: &str) -> Result<f32, ParseError> {
    single_token(text, |token| match *token {
        Token::Number { value, .. } => Some(value),
        _ => None,
    })
}

/// Numbers that may also be written with a `px` unit (border widths).
fn parse_number_or_px(text: &str) -> Result<f32, ParseError> {
    single_token(text, |token| match *token {
        Token::Number { value, .. } => Some(value),
        Token::Dimension {
            value, ref unit, ..
        } if unit.eq_ignore_ascii_case("px") => Some(value),
        _ => None,
    })
}

fn parse_angle(text: &str) -> Result<f32, ParseError> {
    single_token(text, |token| match *token {
        Token::Dimension {
            value, ref unit, ..
        } => angle_to_degrees(value, unit),
        Token::Number { value, .. } if value == 0.0 => Some(0.0),
        _ => None,
    })
}

/// `<time>`: `s` or `ms`; a bare `0` is accepted.
fn parse_time(text: &str) -> Result<TimeValue, ParseError> {
    single_token(text, |token| match *token {
        Token::Dimension {
            value, ref unit, ..
        } => {
            if unit.eq_ignore_ascii_case("ms") {
                Some(TimeValue::ms(value))
            } else if unit.eq_ignore_ascii_case("s") {
                Some(TimeValue::seconds(value))
            } else {
                None
            }
        }
        Token::Number { value, .. } if value == 0.0 => Some(TimeValue::ZERO),
        _ => None,
    })
}

fn parse_easing(text: &str) -> Result<EasingFunction, ParseError> {
    if let Some(mode) = EasingMode::from_name(text) {
        return Ok(EasingFunction::Mode(mode));
    }
    let arguments = function_arguments(text, "cubic-bezier").ok_or(ParseError::InvalidValue)?;
    let points = arguments
        .split(',')
        .map(|argument| parse_number(argument.trim()))
        .collect::<Result<SmallVec<[f32; 4]>, _>>()?;
    match *points.as_slice() {
        [x1, y1, x2, y2] if (0.0..=1.0).contains(&x1) && (0.0..=1.0).contains(&x2) => {
            Ok(EasingFunction::CubicBezier { x1, y1, x2, y2 })
        }
        _ => Err(ParseError::InvalidValue),
    }
}

/// `all`, `none`, or a property name. Names unknown to the registry keep their list slot but
/// never match.
fn parse_transition_target(
    registry: &PropertyRegistry,
    text: &str,
) -> Result<TransitionTarget, ParseError> {
    let name = single_token(text, |token| match *token {
        Token::Ident(ref ident) => Some(ident.to_ascii_lowercase()),
        _ => None,
    })?;
    Ok(match name.as_str() {
        "all" => TransitionTarget::All,
        "none" => TransitionTarget::None,
        _ => match registry.id_for_name(&name) {
            PropertyId::Unknown => {
                debug!("transition-property names unknown property {name:?}");
                TransitionTarget::None
            }
            id => TransitionTarget::Property(id),
        },
    })
}

fn parse_translate(text: &str) -> Result<Translate, ParseError> {
    let components = split_components(text);
    match components.as_slice() {
        [x] => Ok(Translate::new(parse_length(x)?, Length::ZERO, 0.0)),
        [x, y] => Ok(Translate::new(parse_length(x)?, parse_length(y)?, 0.0)),
        [x, y, z] => Ok(Translate::new(
            parse_length(x)?,
            parse_length(y)?,
            parse_number_or_px(z)?,
        )),
        _ => Err(ParseError::InvalidValue),
    }
}

fn parse_scale(text: &str) -> Result<Scale, ParseError> {
    let components = split_components(text);
    match components.as_slice() {
        [uniform] => {
            let factor = parse_scale_factor(uniform)?;
            Ok(Scale::new(factor, factor, 1.0))
        }
        [x, y] => Ok(Scale::new(parse_scale_factor(x)?, parse_scale_factor(y)?, 1.0)),
        [x, y, z] => Ok(Scale::new(
            parse_scale_factor(x)?,
            parse_scale_factor(y)?,
            parse_scale_factor(z)?,
        )),
        _ => Err(ParseError::InvalidValue),
    }
}

/// Scale factors accept numbers and percentages.
fn parse_scale_factor(text: &str) -> Result<f32, ParseError> {
    single_token(text, |token| match *token {
        Token::Number { value, .. } => Some(value),
        Token::Percentage { unit_value, .. } => Some(unit_value),
        _ => None,
    })
}

fn parse_origin_component(text: &str) -> Result<Length, ParseError> {
    match text.to_ascii_lowercase().as_str() {
        "left" | "top" => Ok(Length::percent(0.0)),
        "center" => Ok(Length::percent(50.0)),
        "right" | "bottom" => Ok(Length::percent(100.0)),
        _ => parse_length(text),
    }
}

fn parse_transform_origin(text: &str) -> Result<TransformOrigin, ParseError> {
    let components = split_components(text);
    let mut origin = TransformOrigin::default();
    match components.as_slice() {
        [single] => {
            let value = parse_origin_component(single)?;
            if single.eq_ignore_ascii_case("top") || single.eq_ignore_ascii_case("bottom") {
                origin.y = value;
            } else {
                origin.x = value;
            }
        }
        [x, y] => {
            origin.x = parse_origin_component(x)?;
            origin.y = parse_origin_component(y)?;
        }
        [x, y, z] => {
            origin.x = parse_origin_component(x)?;
            origin.y = parse_origin_component(y)?;
            origin.z = parse_number_or_px(z)?;
        }
        _ => return Err(ParseError::InvalidValue),
    }
    Ok(origin)
}

fn parse_background_size(text: &str) -> Result<BackgroundSize, ParseError> {
    if text.eq_ignore_ascii_case("cover") {
        return Ok(BackgroundSize::cover());
    }
    if text.eq_ignore_ascii_case("contain") {
        return Ok(BackgroundSize::contain());
    }
    let components = split_components(text);
    match components.as_slice() {
        [x] => Ok(BackgroundSize::lengths(parse_length(x)?, Length::auto())),
        [x, y] => Ok(BackgroundSize::lengths(parse_length(x)?, parse_length(y)?)),
        _ => Err(ParseError::InvalidValue),
    }
}

/// `<offset-x> <offset-y> [<blur>] [<color>]`; the color may also come first.
fn parse_text_shadow(text: &str) -> Result<TextShadow, ParseError> {
    let mut shadow = TextShadow {
        color: Rgba::BLACK,
        ..TextShadow::default()
    };
    let mut lengths = SmallVec::<[f32; 3]>::new();
    for component in split_components(text) {
        if let Ok(length) = parse_number_or_px(component) {
            lengths.push(length);
        } else {
            shadow.color = Rgba::parse(component)?;
        }
    }
    match *lengths.as_slice() {
        [offset_x, offset_y] => {
            shadow.offset_x = offset_x;
            shadow.offset_y = offset_y;
        }
        [offset_x, offset_y, blur_radius] => {
            shadow.offset_x = offset_x;
            shadow.offset_y = offset_y;
            shadow.blur_radius = blur_radius;
        }
        _ => return Err(ParseError::InvalidValue),
    }
    Ok(shadow)
}

/// `url(path) [<hotspot-x> <hotspot-y>]` or a built-in cursor name.
fn parse_cursor(text: &str) -> Result<Cursor, ParseError> {
    let components = split_components(text);
    match components.as_slice() {
        [name] => builtin_cursor_id(name).map_or_else(
            || parse_url(name).map(|texture| Cursor::texture(texture, 0.0, 0.0)),
            |cursor_id| Ok(Cursor::builtin(cursor_id)),
        ),
        [url, hotspot_x, hotspot_y] => Ok(Cursor::texture(
            parse_url(url)?,
            parse_number(hotspot_x)?,
            parse_number(hotspot_y)?,
        )),
        _ => Err(ParseError::InvalidValue),
    }
}

/// `url(path)`, `url("path")` or a quoted path.
fn parse_url(text: &str) -> Result<ResourceHandle, ParseError> {
    let path = function_arguments(text, "url").map_or_else(
        || text.to_owned(),
        |arguments| arguments.trim().to_owned(),
    );
    let unquoted = single_token(&path, |token| match *token {
        Token::QuotedString(ref quoted) => Some(quoted.to_string()),
        _ => None,
    })
    .unwrap_or(path);
    if unquoted.is_empty() {
        return Err(ParseError::InvalidValue);
    }
    Ok(ResourceHandle::from_path(&unquoted))
}

/// The text between `name(` and the closing parenthesis.
fn function_arguments<'text>(text: &'text str, name: &str) -> Option<&'text str> {
    let open = text.find('(')?;
    let (function, rest) = text.split_at(open);
    if !function.trim().eq_ignore_ascii_case(name) {
        return None;
    }
    rest.strip_prefix('(')?.trim_end().strip_suffix(')')
}

fn enum_int_from_name(id: PropertyId, text: &str) -> Option<i32> {
    match id {
        PropertyId::AlignContent | PropertyId::AlignItems | PropertyId::AlignSelf => {
            Align::from_name(text).map(Align::to_int)
        }
        PropertyId::JustifyContent => Justify::from_name(text).map(Justify::to_int),
        PropertyId::FlexDirection => FlexDirection::from_name(text).map(FlexDirection::to_int),
        PropertyId::FlexWrap => Wrap::from_name(text).map(Wrap::to_int),
        PropertyId::Display => Display::from_name(text).map(Display::to_int),
        PropertyId::Position => Position::from_name(text).map(Position::to_int),
        PropertyId::Overflow => Overflow::from_name(text).map(Overflow::to_int),
        PropertyId::Visibility => Visibility::from_name(text).map(Visibility::to_int),
        PropertyId::WhiteSpace => WhiteSpace::from_name(text).map(WhiteSpace::to_int),
        PropertyId::TextAlign => TextAlign::from_name(text).map(TextAlign::to_int),
        PropertyId::FontStyle => FontStyle::from_name(text).map(FontStyle::to_int),
        _ => None,
    }
}

/// Split on `separator` at parenthesis depth zero, dropping empty pieces.
fn split_top_level(text: &str, is_separator: impl Fn(char) -> bool) -> SmallVec<[&str; 4]> {
    let mut pieces = SmallVec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (index, character) in text.char_indices() {
        match character {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ if depth == 0 && is_separator(character) => {
                let piece = text[start..index].trim();
                if !piece.is_empty() {
                    pieces.push(piece);
                }
                start = index + character.len_utf8();
            }
            _ => {}
        }
    }
    let tail = text[start..].trim();
    if !tail.is_empty() {
        pieces.push(tail);
    }
    pieces
}

fn split_components(text: &str) -> SmallVec<[&str; 4]> {
    split_top_level(text, char::is_whitespace)
}

fn split_list(text: &str) -> SmallVec<[&str; 4]> {
    split_top_level(text, |character| character == ',')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_at_top_level_only() {
        assert_eq!(
            split_components("rgb(1, 2, 3) 4px  5px").as_slice(),
            &["rgb(1, 2, 3)", "4px", "5px"]
        );
        assert_eq!(
            split_list("opacity 1s cubic-bezier(0, 0, 1, 1), width 2s").as_slice(),
            &["opacity 1s cubic-bezier(0, 0, 1, 1)", "width 2s"]
        );
    }

    #[test]
    fn lengths_times_and_angles() {
        assert_eq!(parse_length("12px"), Ok(Length::px(12.0)));
        assert_eq!(parse_length("50%"), Ok(Length::percent(50.0)));
        assert_eq!(parse_length("3em"), Err(ParseError::InvalidValue));
        assert_eq!(parse_time("0.3s"), Ok(TimeValue::ms(300.0)));
        assert_eq!(parse_time("150ms"), Ok(TimeValue::ms(150.0)));
        assert_eq!(parse_angle("0.25turn"), Ok(90.0));
    }

    #[test]
    fn easing_functions() {
        assert_eq!(
            parse_easing("ease-in-out-back"),
            Ok(EasingFunction::Mode(EasingMode::EaseInOutBack))
        );
        assert_eq!(
            parse_easing("cubic-bezier(0.1, 0.7, 1.0, 0.1)"),
            Ok(EasingFunction::CubicBezier {
                x1: 0.1,
                y1: 0.7,
                x2: 1.0,
                y2: 0.1
            })
        );
        assert_eq!(
            parse_easing("cubic-bezier(2, 0, 1, 1)"),
            Err(ParseError::InvalidValue)
        );
    }

    #[test]
    fn urls_and_cursors() {
        assert_eq!(
            parse_url("url(\"icons/a.png\")").map(|handle| handle.path().to_owned()),
            Ok("icons/a.png".to_owned())
        );
        assert_eq!(parse_cursor("link"), Ok(Cursor::builtin(4)));
        let textured = parse_cursor("url(hand.png) 4 6");
        assert_eq!(textured.map(|cursor| cursor.hotspot_y), Ok(6.0));
    }

    #[test]
    fn enumerations_take_precedence_over_keywords() {
        let registry = PropertyRegistry::new();
        let display = parse_value(&registry, PropertyId::Display, "none");
        assert_eq!(
            display,
            Ok(StyleDeclaration::Value(StyleValue::new(
                PropertyId::Display,
                ValueData::Integer(Display::None.to_int())
            )))
        );
        let width = parse_value(&registry, PropertyId::Width, "auto");
        assert_eq!(
            width,
            Ok(StyleDeclaration::keyword(PropertyId::Width, StyleKeyword::Auto))
        );
    }
}
