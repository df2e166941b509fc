/// Serde utility functions for lenient upstream and tool-argument shapes
use serde::{Deserialize, Deserializer};
use std::fmt;

/// Deserialize a `null` value as `T::default()`.
///
/// Wiki.js returns `null` for empty text fields on older pages. Combine with
/// `#[serde(default)]` so a missing field also falls back to the default.
///
/// Usage:
/// ```ignore
/// #[derive(Deserialize)]
/// struct Example {
///     #[serde(default, deserialize_with = "crate::serde_utils::null_as_default")]
///     title: String,
/// }
/// ```
pub fn null_as_default<'de, T, D>(de: D) -> Result<T, D::Error>
where
    T: Default + Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(de).map(Option::unwrap_or_default)
}

/// Deserialize an id that may arrive as a JSON number or a string into a `String`.
///
/// Search results declare `id` as a string while listings return integers.
pub fn string_or_number<'de, D>(de: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct StringOrNumberVisitor;

    impl<'de> serde::de::Visitor<'de> for StringOrNumberVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or an integer")
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(v.to_string())
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(v.to_string())
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(v.to_string())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(String::new())
        }
    }

    de.deserialize_any(StringOrNumberVisitor)
}

struct PageIdVisitor;

impl<'de> serde::de::Visitor<'de> for PageIdVisitor {
    type Value = i64;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an integer page id or a numeric string")
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(v)
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        i64::try_from(v).map_err(|_| E::custom(format!("page id {v} is out of range")))
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        v.trim()
            .parse()
            .map_err(|_| E::custom(format!("invalid page id '{v}': expected a number")))
    }
}

/// Deserialize a page id given either as an integer or a numeric string.
pub fn page_id<'de, D>(de: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    de.deserialize_any(PageIdVisitor)
}

/// Optional variant of [`page_id`]. Use with `#[serde(default)]`.
pub fn optional_page_id<'de, D>(de: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Wrapped(#[serde(deserialize_with = "page_id")] i64);

    Option::<Wrapped>::deserialize(de).map(|w| w.map(|Wrapped(id)| id))
}
