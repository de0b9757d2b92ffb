//! Closed allow-lists for enumerated text columns.
//!
//! The database stores these values as plain text, so every write path parses
//! the incoming string into a variant before it reaches a repository. Create
//! and update handlers share the same parser.

use crate::error::CoreError;

/// Define an enum whose variants map one-to-one to fixed text values.
///
/// Generates `name()`, `from_name()`, `ALL` and `Display`.
macro_rules! define_choice_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($label:literal) {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $text)] $variant ),+
        }

        impl $name {
            /// Every accepted value, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Database / wire text value.
            pub fn name(self) -> &'static str {
                match self {
                    $( $name::$variant => $text ),+
                }
            }

            /// Parse the database / wire text value.
            pub fn from_name(value: &str) -> Result<Self, $crate::error::CoreError> {
                match value {
                    $( $text => Ok($name::$variant), )+
                    other => Err($crate::choice::invalid_choice($label, other, &[$($text),+])),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

pub(crate) use define_choice_enum;

/// Build the validation error for a value outside its allow-list.
pub(crate) fn invalid_choice(label: &str, value: &str, allowed: &[&str]) -> CoreError {
    CoreError::Validation(format!(
        "Invalid {label} '{value}'. Must be one of: {}",
        allowed.join(", ")
    ))
}

/// Parse an optional enumerated field, passing `None` through untouched.
///
/// A blank string is treated as absent (an unselected dropdown).
pub fn parse_optional<T>(
    value: Option<&str>,
    parse: impl Fn(&str) -> Result<T, CoreError>,
) -> Result<Option<T>, CoreError> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(parse)
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_yes(value: &str) -> Result<bool, CoreError> {
        match value {
            "yes" => Ok(true),
            other => Err(invalid_choice("answer", other, &["yes"])),
        }
    }

    #[test]
    fn blank_value_is_absent() {
        assert_eq!(parse_optional(Some("  "), parse_yes).unwrap(), None);
        assert_eq!(parse_optional(None, parse_yes).unwrap(), None);
    }

    #[test]
    fn present_value_must_parse() {
        assert_eq!(parse_optional(Some("yes"), parse_yes).unwrap(), Some(true));
        assert!(parse_optional(Some("no"), parse_yes).is_err());
    }
}
