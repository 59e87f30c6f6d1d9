//! Expansion of shorthand properties into their longhands.

use smallvec::SmallVec;

use crate::{
    EasingFunction, Length, ManagedData, PropertyId, StyleDeclaration, StyleKeyword, StyleValue,
    StyleValueManaged, TimeValue, TransitionTarget, ValueData,
};

/// Expanded longhand declarations of one shorthand.
pub type Longhands = SmallVec<[StyleDeclaration; 4]>;

/// Expand a box shorthand (`margin`, `padding`, `border-width`, `border-color`,
/// `border-radius`) from one to four components using the usual 1/2/3/4-value rule.
///
/// Returns an empty list when `shorthand` is not a box shorthand or the component count is
/// outside 1..=4.
pub fn expand_edges(shorthand: PropertyId, components: &[ValueData]) -> Longhands {
    let longhands = shorthand.longhands();
    if longhands.len() != 4 || shorthand == PropertyId::Transition {
        return Longhands::new();
    }
    let (top, right, bottom, left) = match *components {
        [all] => (all, all, all, all),
        [vertical, horizontal] => (vertical, horizontal, vertical, horizontal),
        [top, horizontal, bottom] => (top, horizontal, bottom, horizontal),
        [top, right, bottom, left] => (top, right, bottom, left),
        _ => return Longhands::new(),
    };
    longhands
        .iter()
        .zip([top, right, bottom, left])
        .map(|(id, data)| StyleDeclaration::Value(StyleValue::new(*id, data)))
        .collect()
}

/// Expand `flex: <grow> <shrink> <basis>`.
pub fn expand_flex(grow: f32, shrink: f32, basis: Length) -> Longhands {
    [
        StyleValue::new(PropertyId::FlexGrow, ValueData::Number(grow)),
        StyleValue::new(PropertyId::FlexShrink, ValueData::Number(shrink)),
        StyleValue::new(PropertyId::FlexBasis, ValueData::Length(basis)),
    ]
    .into_iter()
    .map(StyleDeclaration::Value)
    .collect()
}

/// Expand a single-number `flex` value: `flex: <n>` is `<n> 1 0%`.
pub fn expand_flex_number(grow: f32) -> Longhands {
    expand_flex(grow, 1.0, Length::percent(0.0))
}

/// Expand a keyword applied to a shorthand.
///
/// `flex: none` is `0 0 auto` and `flex: auto` is `1 1 auto`. Any other keyword is copied
/// onto every longhand, so `margin: initial` resets all four edges.
pub fn expand_keyword(shorthand: PropertyId, keyword: StyleKeyword) -> Longhands {
    if shorthand == PropertyId::Flex {
        match keyword {
            StyleKeyword::None => return expand_flex(0.0, 0.0, Length::auto()),
            StyleKeyword::Auto => return expand_flex(1.0, 1.0, Length::auto()),
            _ => {}
        }
    }
    shorthand
        .longhands()
        .iter()
        .map(|id| StyleDeclaration::keyword(*id, keyword))
        .collect()
}

/// One comma-separated item of the `transition` shorthand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionItem {
    pub target: TransitionTarget,
    pub duration: TimeValue,
    pub easing: EasingFunction,
    pub delay: TimeValue,
}

impl Default for TransitionItem {
    fn default() -> Self {
        Self {
            target: TransitionTarget::All,
            duration: TimeValue::ZERO,
            easing: EasingFunction::default(),
            delay: TimeValue::ZERO,
        }
    }
}

/// Expand the `transition` shorthand into its four list longhands.
pub fn expand_transition(items: &[TransitionItem]) -> Longhands {
    let targets = items.iter().map(|item| item.target).collect();
    let durations = items.iter().map(|item| item.duration).collect();
    let easings = items.iter().map(|item| item.easing).collect();
    let delays = items.iter().map(|item| item.delay).collect();
    [
        (PropertyId::TransitionProperty, ManagedData::TransitionTargets(targets)),
        (PropertyId::TransitionDuration, ManagedData::Times(durations)),
        (PropertyId::TransitionTimingFunction, ManagedData::Easings(easings)),
        (PropertyId::TransitionDelay, ManagedData::Times(delays)),
    ]
    .into_iter()
    .map(|(id, data)| StyleDeclaration::Managed(StyleValueManaged::new(id, data)))
    .collect()
}

/// Rewrite a declaration as longhands. Longhand declarations are returned unchanged; a
/// shorthand given a single value or a keyword is expanded.
pub fn expand_declaration(declaration: &StyleDeclaration) -> Longhands {
    let id = declaration.id();
    if !id.is_shorthand() {
        let mut single = Longhands::new();
        single.push(declaration.clone());
        return single;
    }
    match declaration {
        StyleDeclaration::Value(value) if value.keyword == StyleKeyword::Undefined => {
            match (id, value.data) {
                (PropertyId::Flex, ValueData::Number(grow)) => expand_flex_number(grow),
                (_, data) => expand_edges(id, &[data]),
            }
        }
        StyleDeclaration::Managed(value) if value.keyword == StyleKeyword::Undefined => {
            Longhands::new()
        }
        _ => expand_keyword(id, declaration.keyword_of()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn px(value: f32) -> ValueData {
        ValueData::Length(Length::px(value))
    }

    fn value_of(longhands: &Longhands, id: PropertyId) -> Option<ValueData> {
        longhands.iter().find_map(|declaration| match declaration {
            StyleDeclaration::Value(value) if value.id == id => Some(value.data),
            _ => None,
        })
    }

    #[test]
    fn edges_follow_one_to_four_rule() {
        let two = expand_edges(PropertyId::Margin, &[px(1.0), px(2.0)]);
        assert_eq!(value_of(&two, PropertyId::MarginTop), Some(px(1.0)));
        assert_eq!(value_of(&two, PropertyId::MarginRight), Some(px(2.0)));
        assert_eq!(value_of(&two, PropertyId::MarginBottom), Some(px(1.0)));
        assert_eq!(value_of(&two, PropertyId::MarginLeft), Some(px(2.0)));

        let three = expand_edges(PropertyId::Padding, &[px(1.0), px(2.0), px(3.0)]);
        assert_eq!(value_of(&three, PropertyId::PaddingLeft), Some(px(2.0)));
        assert_eq!(value_of(&three, PropertyId::PaddingBottom), Some(px(3.0)));

        assert!(expand_edges(PropertyId::Margin, &[]).is_empty());
        assert!(expand_edges(PropertyId::Width, &[px(1.0)]).is_empty());
    }

    #[test]
    fn flex_keywords() {
        let none = expand_keyword(PropertyId::Flex, StyleKeyword::None);
        assert_eq!(value_of(&none, PropertyId::FlexGrow), Some(ValueData::Number(0.0)));
        assert_eq!(value_of(&none, PropertyId::FlexBasis), Some(ValueData::Length(Length::auto())));
        let single = expand_flex_number(2.0);
        assert_eq!(value_of(&single, PropertyId::FlexShrink), Some(ValueData::Number(1.0)));
        assert_eq!(
            value_of(&single, PropertyId::FlexBasis),
            Some(ValueData::Length(Length::percent(0.0)))
        );
    }

    #[test]
    fn keyword_copies_to_every_longhand() {
        let reset = expand_keyword(PropertyId::BorderRadius, StyleKeyword::Initial);
        assert_eq!(reset.len(), 4);
        assert!(reset.iter().all(|decl| decl.keyword_of() == StyleKeyword::Initial));
    }

    #[test]
    fn declarations_expand_only_when_shorthand() {
        let width = StyleDeclaration::Value(StyleValue::new(PropertyId::Width, px(3.0)));
        assert_eq!(expand_declaration(&width).as_slice(), &[width]);
        let margin = StyleDeclaration::Value(StyleValue::new(PropertyId::Margin, px(3.0)));
        assert_eq!(expand_declaration(&margin).len(), 4);
        let flex = StyleDeclaration::Value(StyleValue::new(PropertyId::Flex, ValueData::Number(2.0)));
        assert_eq!(
            value_of(&expand_declaration(&flex), PropertyId::FlexGrow),
            Some(ValueData::Number(2.0))
        );
    }

    #[test]
    fn transition_expands_to_lists() {
        let items = [TransitionItem {
            target: TransitionTarget::Property(PropertyId::Opacity),
            duration: TimeValue::ms(300.0),
            ..TransitionItem::default()
        }];
        let longhands = expand_transition(&items);
        assert_eq!(longhands.len(), 4);
        assert!(longhands.iter().any(|decl| {
            decl == &StyleDeclaration::Managed(StyleValueManaged::new(
                PropertyId::TransitionDuration,
                ManagedData::Times(vec![TimeValue::ms(300.0)]),
            ))
        }));
    }
}
