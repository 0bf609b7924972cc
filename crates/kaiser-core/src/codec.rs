//! Helpers shared by the pipe-delimited persisted encodings.

/// Implements serde for a type through its `Display`/`FromStr` encoding, so
/// JSON documents carry exactly the canonical strings.
#[macro_export]
macro_rules! impl_encoded_serde {
    ($ty:ty) => {
        impl serde::Serialize for $ty {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

/// Parses an integer field, naming the encoding it came from on failure.
pub(crate) fn parse_int<T: core::str::FromStr>(
    what: &'static str,
    input: &str,
    field: &str,
) -> Result<T, crate::error::RuleError> {
    field
        .parse()
        .map_err(|_| {
            crate::error::RuleError::encoding(what, input, format!("{field:?} is not an integer"))
        })
}
