//! Query-string helpers.
//!
//! Filter structs flatten [`PaginationParams`](crate::PaginationParams), which
//! makes serde buffer every value as a string. These helpers parse those
//! strings and treat an empty value as absent.

use serde::{Deserialize, Deserializer};
use uuid::Uuid;

fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.trim().is_empty()))
}

pub fn deserialize_optional_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    non_empty(deserializer)?
        .map(|s| s.trim().parse::<i64>().map_err(serde::de::Error::custom))
        .transpose()
}

pub fn deserialize_optional_uuid<'de, D>(deserializer: D) -> Result<Option<Uuid>, D::Error>
where
    D: Deserializer<'de>,
{
    non_empty(deserializer)?
        .map(|s| Uuid::parse_str(s.trim()).map_err(serde::de::Error::custom))
        .transpose()
}

pub fn deserialize_optional_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    match non_empty(deserializer)? {
        None => Ok(None),
        Some(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Ok(Some(true)),
            "false" | "0" => Ok(Some(false)),
            other => Err(serde::de::Error::custom(format!(
                "expected a boolean, got '{other}'"
            ))),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Filters {
        #[serde(default, deserialize_with = "deserialize_optional_bool")]
        is_active: Option<bool>,
        #[serde(default, deserialize_with = "deserialize_optional_uuid")]
        company_id: Option<Uuid>,
    }

    #[test]
    fn test_parses_strings() {
        let id = Uuid::new_v4();
        let json = format!(r#"{{"is_active": "True", "company_id": "{id}"}}"#);
        let f: Filters = serde_json::from_str(&json).unwrap();
        assert_eq!(f.is_active, Some(true));
        assert_eq!(f.company_id, Some(id));
    }

    #[test]
    fn test_empty_values_are_none() {
        let f: Filters = serde_json::from_str(r#"{"is_active": "", "company_id": ""}"#).unwrap();
        assert_eq!(f.is_active, None);
        assert_eq!(f.company_id, None);

        let f: Filters = serde_json::from_str("{}").unwrap();
        assert_eq!(f.is_active, None);
    }

    #[test]
    fn test_rejects_garbage_bool() {
        assert!(serde_json::from_str::<Filters>(r#"{"is_active": "maybe"}"#).is_err());
    }
}
