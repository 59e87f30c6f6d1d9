//! Keywords carried by every style value record.

/// Keyword attached to a style value.
///
/// `Undefined` is the only keyword under which the record's payload is meaningful.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StyleKeyword {
    /// A concrete value is present.
    #[default]
    Undefined,
    /// No value; the cascade falls through to rules or the initial style.
    Null,
    Auto,
    None,
    /// Reset to the property's initial value, ignoring the parent.
    Initial,
    /// Inherit for inherited properties, otherwise behave like `Initial`.
    Unset,
}

impl StyleKeyword {
    /// Global keywords are resolved away during the cascade.
    pub const fn is_global(self) -> bool {
        matches!(self, Self::Initial | Self::Unset)
    }

    /// Parse a keyword identifier. Only the keywords that can be authored are accepted.
    pub fn from_name(name: &str) -> Option<Self> {
        let trimmed = name.trim();
        if trimmed.eq_ignore_ascii_case("auto") {
            return Some(Self::Auto);
        }
        if trimmed.eq_ignore_ascii_case("none") {
            return Some(Self::None);
        }
        if trimmed.eq_ignore_ascii_case("initial") {
            return Some(Self::Initial);
        }
        if trimmed.eq_ignore_ascii_case("unset") {
            return Some(Self::Unset);
        }
        None
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Auto => "auto",
            Self::None => "none",
            Self::Initial => "initial",
            Self::Unset => "unset",
        }
    }
}
