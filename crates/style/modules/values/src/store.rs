//! Per-element storage of style value records.
//!
//! At most one record is kept per property id. Plain records sit in a small inline vector;
//! managed records (cursors, images, transition lists) live in a separate vector so that
//! releasing them drops their shared resources.

use smallvec::SmallVec;

use crate::{
    BackgroundSize, Cursor, EasingFunction, EnumValue, Length, ManagedData, PropertyId,
    ResourceHandle, Rgba, Rotate, Scale, Style, StyleDeclaration, StyleKeyword, StyleValue,
    StyleValueManaged, TextShadow, TimeValue, TransformOrigin, TransitionTarget, Translate,
    ValueData,
};

/// Keyed collection of style value records.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleValueCollection {
    values: SmallVec<[StyleValue; 8]>,
    managed: Vec<StyleValueManaged>,
}

impl StyleValueCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the record for `value.id`.
    ///
    /// A `Null` keyword removes the record. Returns `true` when the stored state changed.
    pub fn set(&mut self, value: StyleValue) -> bool {
        if value.id == PropertyId::Unknown {
            return false;
        }
        let position = self.values.iter().position(|entry| entry.id == value.id);
        if value.keyword == StyleKeyword::Null {
            return position.is_some_and(|index| {
                self.values.remove(index);
                true
            });
        }
        match position {
            Some(index) if self.values[index] == value => false,
            Some(index) => {
                self.values[index] = value;
                true
            }
            None => {
                self.values.push(value);
                true
            }
        }
    }

    /// Insert or replace the managed record for `value.id`; see [`Self::set`].
    pub fn set_managed(&mut self, value: StyleValueManaged) -> bool {
        if value.id == PropertyId::Unknown {
            return false;
        }
        let position = self.managed.iter().position(|entry| entry.id == value.id);
        if value.keyword == StyleKeyword::Null {
            return position.is_some_and(|index| {
                self.managed.remove(index);
                true
            });
        }
        match position {
            Some(index) if self.managed[index] == value => false,
            Some(index) => {
                self.managed[index] = value;
                true
            }
            None => {
                self.managed.push(value);
                true
            }
        }
    }

    /// Store a declaration in whichever vector matches its kind.
    pub fn set_declaration(&mut self, declaration: StyleDeclaration) -> bool {
        match declaration {
            StyleDeclaration::Value(value) => self.set(value),
            StyleDeclaration::Managed(value) => self.set_managed(value),
        }
    }

    pub fn try_get(&self, id: PropertyId) -> Option<&StyleValue> {
        self.values.iter().find(|entry| entry.id == id)
    }

    pub fn try_get_managed(&self, id: PropertyId) -> Option<&StyleValueManaged> {
        self.managed.iter().find(|entry| entry.id == id)
    }

    /// The keyword stored for `id`, or `Null` when there is no record.
    pub fn keyword(&self, id: PropertyId) -> StyleKeyword {
        self.try_get(id)
            .map(|value| value.keyword)
            .or_else(|| self.try_get_managed(id).map(|value| value.keyword))
            .unwrap_or(StyleKeyword::Null)
    }

    pub fn contains(&self, id: PropertyId) -> bool {
        self.try_get(id).is_some() || self.try_get_managed(id).is_some()
    }

    /// Remove the record for `id` from either vector. Returns `true` when one was removed.
    pub fn remove(&mut self, id: PropertyId) -> bool {
        if let Some(index) = self.values.iter().position(|entry| entry.id == id) {
            self.values.remove(index);
            return true;
        }
        if let Some(index) = self.managed.iter().position(|entry| entry.id == id) {
            self.managed.remove(index);
            return true;
        }
        false
    }

    pub fn clear(&mut self) {
        self.values.clear();
        self.managed.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.managed.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len() + self.managed.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StyleValue> {
        self.values.iter()
    }

    pub fn iter_managed(&self) -> impl Iterator<Item = &StyleValueManaged> {
        self.managed.iter()
    }

    /// Every record as a declaration, plain records first.
    pub fn declarations(&self) -> impl Iterator<Item = StyleDeclaration> + '_ {
        self.values
            .iter()
            .copied()
            .map(StyleDeclaration::Value)
            .chain(self.managed.iter().cloned().map(StyleDeclaration::Managed))
    }

    fn typed<T: Default>(&self, id: PropertyId, extract: impl Fn(ValueData) -> Option<T>) -> Style<T> {
        let Some(record) = self.try_get(id) else {
            return Style::null();
        };
        if record.keyword != StyleKeyword::Undefined {
            return Style::keyword(record.keyword);
        }
        extract(record.data).map_or_else(Style::null, Style::value)
    }

    fn typed_managed<T: Default>(
        &self,
        id: PropertyId,
        extract: impl Fn(&ManagedData) -> Option<T>,
    ) -> Style<T> {
        let Some(record) = self.try_get_managed(id) else {
            return Style::null();
        };
        if record.keyword != StyleKeyword::Undefined {
            return Style::keyword(record.keyword);
        }
        extract(&record.data).map_or_else(Style::null, Style::value)
    }

    /// Typed getters return `Null` when there is no record or the payload has another type.
    pub fn length(&self, id: PropertyId) -> Style<Length> {
        self.typed(id, |data| match data {
            ValueData::Length(length) => Some(length),
            _ => None,
        })
    }

    pub fn float(&self, id: PropertyId) -> Style<f32> {
        self.typed(id, |data| match data {
            ValueData::Number(number) => Some(number),
            _ => None,
        })
    }

    pub fn int(&self, id: PropertyId) -> Style<i32> {
        self.typed(id, |data| match data {
            ValueData::Integer(integer) => Some(integer),
            _ => None,
        })
    }

    pub fn color(&self, id: PropertyId) -> Style<Rgba> {
        self.typed(id, |data| match data {
            ValueData::Color(color) => Some(color),
            _ => None,
        })
    }

    /// Integer payload decoded into a keyword enumeration. Unknown integers read as `Null`.
    pub fn enum_value<T: EnumValue + Default>(&self, id: PropertyId) -> Style<T> {
        self.typed(id, |data| match data {
            ValueData::Integer(integer) => T::from_int(integer),
            _ => None,
        })
    }

    pub fn translate(&self, id: PropertyId) -> Style<Translate> {
        self.typed(id, |data| match data {
            ValueData::Translate(translate) => Some(translate),
            _ => None,
        })
    }

    pub fn rotate(&self, id: PropertyId) -> Style<Rotate> {
        self.typed(id, |data| match data {
            ValueData::Rotate(rotate) => Some(rotate),
            _ => None,
        })
    }

    pub fn scale(&self, id: PropertyId) -> Style<Scale> {
        self.typed(id, |data| match data {
            ValueData::Scale(scale) => Some(scale),
            _ => None,
        })
    }

    pub fn transform_origin(&self, id: PropertyId) -> Style<TransformOrigin> {
        self.typed(id, |data| match data {
            ValueData::TransformOrigin(origin) => Some(origin),
            _ => None,
        })
    }

    pub fn background_size(&self, id: PropertyId) -> Style<BackgroundSize> {
        self.typed(id, |data| match data {
            ValueData::BackgroundSize(size) => Some(size),
            _ => None,
        })
    }

    pub fn text_shadow(&self, id: PropertyId) -> Style<TextShadow> {
        self.typed(id, |data| match data {
            ValueData::TextShadow(shadow) => Some(shadow),
            _ => None,
        })
    }

    pub fn cursor(&self, id: PropertyId) -> Style<Cursor> {
        self.typed_managed(id, |data| match data {
            ManagedData::Cursor(cursor) => Some(cursor.clone()),
            _ => None,
        })
    }

    pub fn image(&self, id: PropertyId) -> Style<Option<ResourceHandle>> {
        self.typed_managed(id, |data| match data {
            ManagedData::Image(handle) => Some(Some(handle.clone())),
            _ => None,
        })
    }

    pub fn transition_targets(&self, id: PropertyId) -> Style<Vec<TransitionTarget>> {
        self.typed_managed(id, |data| match data {
            ManagedData::TransitionTargets(targets) => Some(targets.clone()),
            _ => None,
        })
    }

    pub fn times(&self, id: PropertyId) -> Style<Vec<TimeValue>> {
        self.typed_managed(id, |data| match data {
            ManagedData::Times(times) => Some(times.clone()),
            _ => None,
        })
    }

    pub fn easings(&self, id: PropertyId) -> Style<Vec<EasingFunction>> {
        self.typed_managed(id, |data| match data {
            ManagedData::Easings(easings) => Some(easings.clone()),
            _ => None,
        })
    }
}
