//! Serde glue for patch fields on nullable columns.
//!
//! A field typed `Option<Option<T>>` and annotated with
//!
//! ```ignore
//! #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
//! ```
//!
//! reads an absent key as `None` (leave unchanged), `null` as `Some(None)`
//! (set NULL) and a value as `Some(Some(v))`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub fn serialize<T, S>(value: &Option<Option<T>>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    match value {
        Some(inner) => inner.serialize(serializer),
        None => serializer.serialize_none(),
    }
}

pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
    struct Patch {
        #[serde(default, with = "crate::nullable", skip_serializing_if = "Option::is_none")]
        description: Option<Option<String>>,
    }

    #[test]
    fn absent_null_and_value_are_distinct() {
        let absent: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.description, None);

        let null: Patch = serde_json::from_str(r#"{"description":null}"#).unwrap();
        assert_eq!(null.description, Some(None));

        let set: Patch = serde_json::from_str(r#"{"description":"x"}"#).unwrap();
        assert_eq!(set.description, Some(Some("x".into())));
    }

    #[test]
    fn unchanged_is_omitted_and_clear_is_null() {
        assert_eq!(serde_json::to_string(&Patch::default()).unwrap(), "{}");
        let clear = Patch {
            description: Some(None),
        };
        assert_eq!(serde_json::to_string(&clear).unwrap(), r#"{"description":null}"#);
    }
}
